mod cue;
mod device;
mod sink;

use anyhow::{Context, Result};
use cue::TerminalCue;
use device::SyntheticStick;
use motex_session::{SessionConfig, SessionRunner};
use motex_timing::MonotonicClock;
use sink::FsDataSink;
use std::cell::Cell;
use std::rc::Rc;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let config_path = args
        .next()
        .context("usage: motex <settings.json> [out_dir]")?;
    let out_dir = args.next().unwrap_or_else(|| "data".to_string());

    let raw = std::fs::read_to_string(&config_path)
        .with_context(|| format!("could not read settings file {config_path}"))?;
    let config = SessionConfig::from_json(&raw)?;

    println!("=== VISUOMOTOR ADAPTATION SESSION ===");
    println!("Settings: {config_path}");
    println!("Output directory: {out_dir}");
    println!(
        "Trials: {}, window {:.2} s at {:.0} Hz",
        config.num_trials,
        config.trial_duration_s,
        1.0 / config.sample_interval_s
    );
    for boundary in &config.phase_boundaries {
        println!(
            "  {:>4}..={:<4} {}",
            boundary.start, boundary.end, boundary.label
        );
    }

    let mut runner = SessionRunner::new(&config)?;

    // The dry-run collaborators share the cued angle so captured
    // traces actually move toward the target. A lab deployment swaps
    // these for the real display and joystick behind the same traits.
    let target = Rc::new(Cell::new(0.0));
    let mut presentation = TerminalCue::new(target.clone());
    let mut stick = SyntheticStick::new(target);
    let mut data_sink = FsDataSink::create(&out_dir)?;
    let clock = MonotonicClock::new();

    let report = runner.run(&mut presentation, &mut stick, &mut data_sink, &clock)?;

    println!("\nSession finished in state {:?}", report.state);
    let completed = report.summaries.iter().filter(|s| s.completed).count();
    println!(
        "Completed trials: {}/{} ({:.1}%)",
        completed,
        report.summaries.len(),
        100.0 * completed as f64 / report.summaries.len().max(1) as f64
    );
    let total_samples: usize = report.summaries.iter().map(|s| s.sample_count).sum();
    println!("Samples captured: {total_samples}");
    println!("Data written to {out_dir}");

    Ok(())
}

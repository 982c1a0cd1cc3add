use crate::config::SessionConfig;
use motex_core::{InputDevice, Presentation, PresentationError, SampleRecord, TrialPlanEntry, TrialSummary};
use motex_timing::Clock;
use std::time::Duration;

/// Runs one trial: cue the target, then poll the joystick at the
/// configured cadence until the wall-clock deadline.
pub struct TrialExecutor {
    trial_duration: Duration,
    sample_interval: Duration,
}

impl TrialExecutor {
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            trial_duration: config.trial_duration(),
            sample_interval: config.sample_interval(),
        }
    }

    /// Executes `entry` and returns the summary plus the captured
    /// sample buffer.
    ///
    /// A presentation failure is returned to the caller: without a
    /// visible cue there is no trial, and the session has to abort.
    /// A device read failure is absorbed here instead: sampling stops,
    /// the trial is marked incomplete, and whatever was captured is
    /// still handed back so it reaches the sink.
    pub fn run<P, D, C>(
        &self,
        entry: &TrialPlanEntry,
        presentation: &mut P,
        device: &mut D,
        clock: &C,
    ) -> Result<(TrialSummary, Vec<SampleRecord>), PresentationError>
    where
        P: Presentation,
        D: InputDevice,
        C: Clock,
    {
        presentation.present(entry.target_angle)?;

        let onset = clock.now();
        let mut samples = Vec::new();
        let mut completed = true;

        // Hard deadline on elapsed time, not sample count: scheduling
        // latency may cost or gain one sample per trial.
        loop {
            let elapsed = clock.now().saturating_sub(onset);
            if elapsed >= self.trial_duration {
                break;
            }
            match device.read() {
                Ok((x, y)) => samples.push(SampleRecord {
                    elapsed_s: elapsed.as_secs_f64(),
                    x,
                    y,
                }),
                Err(e) => {
                    eprintln!(
                        "trial {}: {} after {} samples, marking incomplete",
                        entry.trial_index,
                        e,
                        samples.len()
                    );
                    completed = false;
                    break;
                }
            }
            clock.sleep(self.sample_interval);
        }

        let summary = TrialSummary {
            trial_index: entry.trial_index,
            phase_label: entry.phase_label.clone(),
            target_angle: entry.target_angle,
            onset_s: onset.as_secs_f64(),
            sample_count: samples.len(),
            completed,
        };
        Ok((summary, samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::two_phase_config;
    use crate::fakes::{FailingCue, NullCue, ScriptedStick};
    use motex_timing::SimulatedClock;

    fn entry() -> TrialPlanEntry {
        TrialPlanEntry {
            trial_index: 0,
            phase_label: "baseline".into(),
            target_angle: 0.0,
        }
    }

    fn executor(trial_duration_s: f64, sample_interval_s: f64) -> TrialExecutor {
        let mut config = two_phase_config();
        config.trial_duration_s = trial_duration_s;
        config.sample_interval_s = sample_interval_s;
        TrialExecutor::from_config(&config)
    }

    #[test]
    fn window_spans_trial_duration() {
        let clock = SimulatedClock::new();
        let (summary, samples) = executor(1.0, 0.1)
            .run(&entry(), &mut NullCue, &mut ScriptedStick::healthy(), &clock)
            .unwrap();

        // 10 +/- 1 samples over a 1.0 s window at 0.1 s cadence, and
        // the recorded span within one interval of the full window.
        assert!((9..=11).contains(&summary.sample_count));
        let span = samples.last().unwrap().elapsed_s - samples.first().unwrap().elapsed_s;
        assert!((1.0 - span).abs() <= 0.1 + 1e-9);
        assert!(summary.completed);
    }

    #[test]
    fn samples_are_stamped_with_elapsed_time() {
        let clock = SimulatedClock::new();
        clock.advance(std::time::Duration::from_secs(5));
        let (summary, samples) = executor(0.5, 0.25)
            .run(&entry(), &mut NullCue, &mut ScriptedStick::healthy(), &clock)
            .unwrap();

        // Stamps are relative to window onset, not session start.
        assert_eq!(summary.onset_s, 5.0);
        assert_eq!(samples[0].elapsed_s, 0.0);
        for pair in samples.windows(2) {
            assert!(pair[1].elapsed_s > pair[0].elapsed_s);
        }
    }

    #[test]
    fn device_fault_degrades_trial_but_keeps_samples() {
        let clock = SimulatedClock::new();
        let (summary, samples) = executor(1.0, 0.1)
            .run(
                &entry(),
                &mut NullCue,
                &mut ScriptedStick::failing_after(3),
                &clock,
            )
            .unwrap();

        assert!(!summary.completed);
        assert_eq!(summary.sample_count, 3);
        assert_eq!(samples.len(), 3);
    }

    #[test]
    fn presentation_failure_is_surfaced() {
        let clock = SimulatedClock::new();
        let result = executor(1.0, 0.1).run(
            &entry(),
            &mut FailingCue,
            &mut ScriptedStick::healthy(),
            &clock,
        );
        assert!(result.is_err());
    }

    #[test]
    fn summary_echoes_planned_fields() {
        let clock = SimulatedClock::new();
        let planned = TrialPlanEntry {
            trial_index: 12,
            phase_label: "washout".into(),
            target_angle: -15.0,
        };
        let (summary, _) = executor(0.5, 0.25)
            .run(&planned, &mut NullCue, &mut ScriptedStick::healthy(), &clock)
            .unwrap();
        assert_eq!(summary.trial_index, 12);
        assert_eq!(summary.phase_label, "washout");
        assert_eq!(summary.target_angle, -15.0);
    }
}

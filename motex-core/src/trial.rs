use serde::{Deserialize, Serialize};

/// One planned trial: which phase is active and which angle to cue.
/// The full plan is produced up front and consumed in index order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialPlanEntry {
    pub trial_index: usize,
    pub phase_label: String,
    /// Degrees, drawn from the configured candidate set.
    pub target_angle: f64,
}

/// One timestamped joystick reading taken inside a trial's sampling
/// window. `x` and `y` are unscaled instantaneous axis values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Seconds since the trial's window opened.
    pub elapsed_s: f64,
    pub x: f64,
    pub y: f64,
}

/// One row per finished trial, echoing the planned fields so the
/// summary table joins against per-trial sample files downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialSummary {
    pub trial_index: usize,
    pub phase_label: String,
    pub target_angle: f64,
    /// Session clock time at which the sampling window opened, seconds.
    pub onset_s: f64,
    pub sample_count: usize,
    /// False when a device fault ended sampling early.
    pub completed: bool,
}

/// Session lifecycle. A session only leaves `Running` once: to
/// `Completed` at the end of the plan (or an operator stop), or to
/// `Aborted` on an unrecoverable collaborator failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    Running,
    Completed,
    Aborted,
}

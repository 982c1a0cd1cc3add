use serde::{Deserialize, Serialize};

/// How a phase picks the target angle for each of its trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AngleRule {
    /// Every trial in the phase presents the same angle.
    Fixed { angle: f64 },
    /// Trials walk the candidate list in order, wrapping. The cycle
    /// position is counted from the start of the phase, not the session.
    Cyclic,
    /// Uniform draw from the candidate list. With
    /// `no_immediate_repeat`, a draw matching the previous trial's
    /// angle is redrawn from the remaining candidates; a
    /// single-candidate list is allowed to repeat.
    Randomized {
        #[serde(default)]
        no_immediate_repeat: bool,
    },
}

/// One row of the phase boundary table: trial indices `start..=end`
/// belong to the phase `label` and draw angles under `rule`.
///
/// A valid table partitions `0..num_trials` with no gaps or overlaps;
/// `PhaseScheduler` checks this once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseBoundary {
    pub start: usize,
    /// Inclusive, matching the lab's settings files.
    pub end: usize,
    pub label: String,
    pub rule: AngleRule,
}

impl PhaseBoundary {
    pub fn contains(&self, trial_index: usize) -> bool {
        self.start <= trial_index && trial_index <= self.end
    }
}

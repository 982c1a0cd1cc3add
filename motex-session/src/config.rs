use motex_core::{AngleRule, ConfigError, PhaseBoundary};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Immutable session settings, read once at startup from the lab's
/// JSON settings document and passed by value into the components
/// that need it. There is no shared mutable settings object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub num_trials: usize,
    /// Ordered, and must partition `0..num_trials` exactly.
    pub phase_boundaries: Vec<PhaseBoundary>,
    /// Degrees. Cyclic and randomized rules draw from this list.
    pub candidate_angles: Vec<f64>,
    pub trial_duration_s: f64,
    pub sample_interval_s: f64,
    /// Fixed seed for reproducible target sequences; omit for a
    /// fresh sequence per run.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    pub fn trial_duration(&self) -> Duration {
        Duration::from_secs_f64(self.trial_duration_s)
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_secs_f64(self.sample_interval_s)
    }

    /// Checks every startup invariant. Run once before a session
    /// reaches `Running`; each error names the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        if self.candidate_angles.is_empty() {
            return Err(ConfigError::EmptyAngleSet);
        }
        // NaN fails every ordered comparison, so test for the valid
        // range rather than the invalid one; infinities would panic
        // later in Duration::from_secs_f64.
        if !(self.trial_duration_s.is_finite() && self.trial_duration_s > 0.0) {
            return Err(ConfigError::NonPositiveDuration {
                field: "trial_duration_s",
            });
        }
        if !(self.sample_interval_s.is_finite() && self.sample_interval_s > 0.0) {
            return Err(ConfigError::NonPositiveDuration {
                field: "sample_interval_s",
            });
        }
        if self.sample_interval_s > self.trial_duration_s {
            return Err(ConfigError::IntervalExceedsDuration);
        }
        self.validate_boundaries()
    }

    /// The boundary table must cover `0..num_trials` densely, in
    /// order, with inclusive ends. After this passes, phase lookup
    /// by trial index is total.
    fn validate_boundaries(&self) -> Result<(), ConfigError> {
        if self.phase_boundaries.is_empty() {
            return Err(ConfigError::EmptyBoundaryTable);
        }
        let mut next_uncovered = 0;
        for boundary in &self.phase_boundaries {
            if boundary.end < boundary.start {
                return Err(ConfigError::InvertedRange {
                    label: boundary.label.clone(),
                });
            }
            if boundary.start < next_uncovered {
                return Err(ConfigError::OverlappingRanges {
                    label: boundary.label.clone(),
                });
            }
            if boundary.start > next_uncovered {
                return Err(ConfigError::UncoveredTrial {
                    trial_index: next_uncovered,
                });
            }
            if boundary.end >= self.num_trials {
                return Err(ConfigError::RangePastEnd {
                    label: boundary.label.clone(),
                });
            }
            next_uncovered = boundary.end + 1;
        }
        if next_uncovered < self.num_trials {
            return Err(ConfigError::UncoveredTrial {
                trial_index: next_uncovered,
            });
        }
        Ok(())
    }
}

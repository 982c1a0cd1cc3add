use thiserror::Error;

/// Malformed or incomplete configuration. Always fatal at startup:
/// a session with a bad config never reaches `Running`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("num_trials must be positive")]
    NoTrials,
    #[error("candidate_angles must not be empty")]
    EmptyAngleSet,
    #[error("{field} must be positive")]
    NonPositiveDuration { field: &'static str },
    #[error("sample_interval_s exceeds trial_duration_s")]
    IntervalExceedsDuration,
    #[error("phase boundary table is empty")]
    EmptyBoundaryTable,
    #[error("phase '{label}' has end before start")]
    InvertedRange { label: String },
    #[error("trial index {trial_index} is not covered by any phase")]
    UncoveredTrial { trial_index: usize },
    #[error("phase '{label}' overlaps an earlier phase")]
    OverlappingRanges { label: String },
    #[error("phase '{label}' extends past the last trial")]
    RangePastEnd { label: String },
    #[error("settings document could not be parsed: {0}")]
    Malformed(String),
}

/// A single input-device poll failed. Recovered locally: the current
/// trial ends early and is marked incomplete; the session continues.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("input device read failed: {reason}")]
pub struct DeviceReadError {
    pub reason: String,
}

impl DeviceReadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// The presentation collaborator could not display the target cue.
/// Unrecoverable for the session: a participant cannot perform a
/// trial without a visible target.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("could not present target cue: {reason}")]
pub struct PresentationError {
    pub reason: String,
}

impl PresentationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A write to the data sink failed. Prior successful writes stand.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("data sink I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode record: {0}")]
    Encode(String),
}

/// Unrecoverable session failure surfaced by `SessionRunner::run`.
/// Trials persisted before the failure are not rolled back.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Presentation(#[from] PresentationError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error("session has already run; build a new runner for another session")]
    AlreadyStarted,
}

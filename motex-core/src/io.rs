use crate::error::{DeviceReadError, PersistenceError, PresentationError};
use crate::trial::{SampleRecord, TrialSummary};

/// Target cue display. The core only needs to put an angle on screen
/// and know whether that worked; rendering lives behind this seam.
pub trait Presentation {
    fn present(&mut self, angle_deg: f64) -> Result<(), PresentationError>;
}

/// Instantaneous joystick axis readout, unscaled.
pub trait InputDevice {
    fn read(&mut self) -> Result<(f64, f64), DeviceReadError>;
}

/// Durable storage for captured data. Each trial's samples are one
/// unit keyed by trial index; the summary table is rewritten whole so
/// a crash costs at most the in-flight trial's row.
pub trait DataSink {
    fn write_trial_samples(
        &mut self,
        trial_index: usize,
        samples: &[SampleRecord],
    ) -> Result<(), PersistenceError>;

    fn write_session_summary(&mut self, summaries: &[TrialSummary])
    -> Result<(), PersistenceError>;
}

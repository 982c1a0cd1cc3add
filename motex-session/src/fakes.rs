//! In-memory collaborator doubles shared by the session tests.

use motex_core::{
    DataSink, DeviceReadError, InputDevice, PersistenceError, Presentation, PresentationError,
    SampleRecord, TrialSummary,
};

/// Cue that always succeeds and shows nothing.
pub struct NullCue;

impl Presentation for NullCue {
    fn present(&mut self, _angle_deg: f64) -> Result<(), PresentationError> {
        Ok(())
    }
}

/// Cue that fails on every call, as a dead display would.
pub struct FailingCue;

impl Presentation for FailingCue {
    fn present(&mut self, _angle_deg: f64) -> Result<(), PresentationError> {
        Err(PresentationError::new("display unavailable"))
    }
}

/// Joystick double: healthy, or disconnecting after a fixed number of
/// successful reads.
pub struct ScriptedStick {
    reads: usize,
    fail_after: Option<usize>,
}

impl ScriptedStick {
    pub fn healthy() -> Self {
        Self {
            reads: 0,
            fail_after: None,
        }
    }

    pub fn failing_after(successful_reads: usize) -> Self {
        Self {
            reads: 0,
            fail_after: Some(successful_reads),
        }
    }
}

impl InputDevice for ScriptedStick {
    fn read(&mut self) -> Result<(f64, f64), DeviceReadError> {
        if self.fail_after.is_some_and(|n| self.reads >= n) {
            return Err(DeviceReadError::new("device disconnected"));
        }
        self.reads += 1;
        Ok((0.1 * self.reads as f64, -0.1 * self.reads as f64))
    }
}

/// Sink that keeps everything in memory and counts summary rewrites.
#[derive(Default)]
pub struct RecordingSink {
    pub trial_samples: Vec<(usize, Vec<SampleRecord>)>,
    pub summary: Vec<TrialSummary>,
    pub summary_writes: usize,
}

impl DataSink for RecordingSink {
    fn write_trial_samples(
        &mut self,
        trial_index: usize,
        samples: &[SampleRecord],
    ) -> Result<(), PersistenceError> {
        self.trial_samples.push((trial_index, samples.to_vec()));
        Ok(())
    }

    fn write_session_summary(
        &mut self,
        summaries: &[TrialSummary],
    ) -> Result<(), PersistenceError> {
        self.summary = summaries.to_vec();
        self.summary_writes += 1;
        Ok(())
    }
}

/// Sink whose writes fail once `allowed_trial_writes` is used up.
pub struct FlakySink {
    pub inner: RecordingSink,
    pub allowed_trial_writes: usize,
}

impl DataSink for FlakySink {
    fn write_trial_samples(
        &mut self,
        trial_index: usize,
        samples: &[SampleRecord],
    ) -> Result<(), PersistenceError> {
        if self.inner.trial_samples.len() >= self.allowed_trial_writes {
            return Err(PersistenceError::Encode("disk full".into()));
        }
        self.inner.write_trial_samples(trial_index, samples)
    }

    fn write_session_summary(
        &mut self,
        summaries: &[TrialSummary],
    ) -> Result<(), PersistenceError> {
        self.inner.write_session_summary(summaries)
    }
}

use motex_core::{DataSink, PersistenceError, SampleRecord, TrialSummary};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Filesystem sink: one JSON array of samples per trial, plus a CSV
/// summary table rewritten after every trial. Mirrors the lab's
/// per-trial capture files next to a single session table.
pub struct FsDataSink {
    dir: PathBuf,
}

impl FsDataSink {
    pub fn create(dir: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn samples_path(&self, trial_index: usize) -> PathBuf {
        self.dir.join(format!("samples_trial{trial_index:04}.json"))
    }

    fn summary_path(&self) -> PathBuf {
        self.dir.join("session_summary.csv")
    }
}

impl DataSink for FsDataSink {
    fn write_trial_samples(
        &mut self,
        trial_index: usize,
        samples: &[SampleRecord],
    ) -> Result<(), PersistenceError> {
        let file = File::create(self.samples_path(trial_index))?;
        serde_json::to_writer(BufWriter::new(file), samples)
            .map_err(|e| PersistenceError::Encode(e.to_string()))
    }

    fn write_session_summary(
        &mut self,
        summaries: &[TrialSummary],
    ) -> Result<(), PersistenceError> {
        let mut out = BufWriter::new(File::create(self.summary_path())?);
        writeln!(out, "trial,phase,target_angle,onset_s,sample_count,completed")?;
        for row in summaries {
            writeln!(
                out,
                "{},{},{},{},{},{}",
                row.trial_index,
                row.phase_label,
                row.target_angle,
                row.onset_s,
                row.sample_count,
                row.completed
            )?;
        }
        out.flush()?;
        Ok(())
    }
}

use crate::config::SessionConfig;
use crate::executor::TrialExecutor;
use crate::scheduler::PhaseScheduler;
use motex_core::{
    ConfigError, DataSink, InputDevice, Presentation, SessionError, SessionState, TrialPlanEntry,
    TrialSummary,
};
use motex_timing::Clock;

/// Operator decision consulted between trials. Mid-trial interruption
/// is not supported; a stop takes effect before the next trial starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Stop,
}

/// What a finished session hands back to the caller.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub state: SessionState,
    pub summaries: Vec<TrialSummary>,
}

/// Drives the trial loop: walks the plan in order, runs each trial,
/// persists its samples, and keeps the summary table current. Owns
/// the plan and the accumulating summaries; everything happens on the
/// single control thread.
pub struct SessionRunner {
    executor: TrialExecutor,
    plan: Vec<TrialPlanEntry>,
    summaries: Vec<TrialSummary>,
    state: SessionState,
}

impl SessionRunner {
    /// Builds the scheduler and the full trial plan up front, so a
    /// malformed configuration fails here and the session never
    /// reaches `Running`.
    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        let scheduler = PhaseScheduler::new(config)?;
        Ok(Self {
            executor: TrialExecutor::from_config(config),
            plan: scheduler.generate(),
            summaries: Vec::new(),
            state: SessionState::NotStarted,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn plan(&self) -> &[TrialPlanEntry] {
        &self.plan
    }

    /// Runs every planned trial to the end of the session.
    pub fn run<P, D, S, C>(
        &mut self,
        presentation: &mut P,
        device: &mut D,
        sink: &mut S,
        clock: &C,
    ) -> Result<SessionReport, SessionError>
    where
        P: Presentation,
        D: InputDevice,
        S: DataSink,
        C: Clock,
    {
        self.run_with_control(presentation, device, sink, clock, || {
            SessionControl::Continue
        })
    }

    /// Like `run`, but asks `control` before each trial whether to
    /// keep going. A stop ends the session cleanly in `Completed`
    /// with the trials captured so far.
    ///
    /// Persistence order per trial: samples first, then the whole
    /// summary table rewritten. A crash therefore loses at most the
    /// in-flight trial's summary row, never a prior trial's data.
    pub fn run_with_control<P, D, S, C>(
        &mut self,
        presentation: &mut P,
        device: &mut D,
        sink: &mut S,
        clock: &C,
        mut control: impl FnMut() -> SessionControl,
    ) -> Result<SessionReport, SessionError>
    where
        P: Presentation,
        D: InputDevice,
        S: DataSink,
        C: Clock,
    {
        // One session per runner: a second run would replay the plan
        // and append duplicate summary rows.
        if self.state != SessionState::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }
        self.state = SessionState::Running;

        for i in 0..self.plan.len() {
            if control() == SessionControl::Stop {
                println!("operator stop after {} trials", self.summaries.len());
                break;
            }

            let entry = self.plan[i].clone();
            let (summary, samples) =
                match self.executor.run(&entry, presentation, device, clock) {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        // No cue, no trial: abort without touching
                        // what earlier trials already persisted.
                        self.state = SessionState::Aborted;
                        return Err(SessionError::Presentation(e));
                    }
                };

            if let Err(e) = sink.write_trial_samples(entry.trial_index, &samples) {
                self.state = SessionState::Aborted;
                return Err(SessionError::Persistence(e));
            }
            self.summaries.push(summary);
            if let Err(e) = sink.write_session_summary(&self.summaries) {
                self.state = SessionState::Aborted;
                return Err(SessionError::Persistence(e));
            }
        }

        self.state = SessionState::Completed;
        sink.write_session_summary(&self.summaries)?;

        Ok(SessionReport {
            state: self.state,
            summaries: self.summaries.clone(),
        })
    }
}

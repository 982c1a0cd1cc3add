pub mod config;
pub mod executor;
#[cfg(test)]
pub(crate) mod fakes;
pub mod runner;
pub mod scheduler;

pub use config::SessionConfig;
pub use executor::TrialExecutor;
pub use runner::{SessionControl, SessionReport, SessionRunner};
pub use scheduler::PhaseScheduler;

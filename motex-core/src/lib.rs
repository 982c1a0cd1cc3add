pub mod error;
pub mod io;
pub mod phase;
pub mod trial;

pub use error::{ConfigError, DeviceReadError, PersistenceError, PresentationError, SessionError};
pub use io::{DataSink, InputDevice, Presentation};
pub use phase::{AngleRule, PhaseBoundary};
pub use trial::{SampleRecord, SessionState, TrialPlanEntry, TrialSummary};

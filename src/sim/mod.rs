pub mod config;
pub mod driver;
pub mod error;
pub mod kind;
pub mod process;

pub use config::{DEFAULT_MAX_PROCESSES, SimConfig};
pub use driver::{Sim, SimOutcome};
pub use error::SimError;
pub use kind::AlgorithmKind;
pub use process::{ProcessResult, ProcessSpec};

pub mod core;
pub mod input;
pub mod report;
pub mod scheduler;
pub mod sim;

pub use scheduler::Scheduler;
pub use sim::{AlgorithmKind, ProcessResult, ProcessSpec, Sim, SimConfig, SimError, SimOutcome};

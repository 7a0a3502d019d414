use std::fmt;

use crate::core::{Pid, Ticks};

/// Input rejected before a simulation starts. No state is built and no
/// partial results exist when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    InvalidProcessCount { count: usize, max: usize },
    InvalidBurstTime { pid: Pid, burst_time: Ticks },
    // Missing or zero quantum for Round Robin
    InvalidQuantum { quantum: Option<Ticks> },
    UnknownAlgorithmKind(String),
    // Latest arrival plus total burst does not fit in Ticks
    ClockOverflow,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidProcessCount { count, max } => {
                write!(f, "invalid process count {count}: expected 1..={max}")
            }
            Self::InvalidBurstTime { pid, burst_time } => {
                write!(f, "invalid burst time {burst_time} for P{pid}: must be positive")
            }
            Self::InvalidQuantum { quantum: Some(q) } => {
                write!(f, "invalid time quantum {q}: must be positive")
            }
            Self::InvalidQuantum { quantum: None } => {
                write!(f, "round robin requires a time quantum")
            }
            Self::UnknownAlgorithmKind(name) => write!(
                f,
                "unknown scheduling algorithm {name:?}: expected fcfs, sjf, priority or rr"
            ),
            Self::ClockOverflow => {
                write!(f, "arrival and burst times overflow the simulated clock")
            }
        }
    }
}

impl std::error::Error for SimError {}

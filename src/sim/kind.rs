use std::{fmt, str::FromStr};

use super::error::SimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 4] = [
        AlgorithmKind::Fcfs,
        AlgorithmKind::Sjf,
        AlgorithmKind::Priority,
        AlgorithmKind::RoundRobin,
    ];

    pub fn needs_quantum(self) -> bool {
        self == AlgorithmKind::RoundRobin
    }

    pub fn title(self) -> &'static str {
        match self {
            AlgorithmKind::Fcfs => "First Come First Serve (FCFS)",
            AlgorithmKind::Sjf => "Shortest Job First (SJF)",
            AlgorithmKind::Priority => "Priority Scheduling",
            AlgorithmKind::RoundRobin => "Round Robin Scheduling",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlgorithmKind::Fcfs => write!(f, "FCFS"),
            AlgorithmKind::Sjf => write!(f, "SJF"),
            AlgorithmKind::Priority => write!(f, "Priority"),
            AlgorithmKind::RoundRobin => write!(f, "RR"),
        }
    }
}

impl FromStr for AlgorithmKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(AlgorithmKind::Fcfs),
            "sjf" => Ok(AlgorithmKind::Sjf),
            "priority" | "prio" => Ok(AlgorithmKind::Priority),
            "rr" | "round-robin" | "roundrobin" => Ok(AlgorithmKind::RoundRobin),
            _ => Err(SimError::UnknownAlgorithmKind(s.to_owned())),
        }
    }
}

use std::fmt;

use crate::core::{Pid, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedEvent {
    Arrived {
        pid: Pid,
        at: Ticks,
    },
    Dispatched {
        pid: Pid,
        at: Ticks,
    },
    // Quantum expired with work left
    Preempted {
        pid: Pid,
        at: Ticks,
        remaining: Ticks,
    },
    Completed {
        pid: Pid,
        at: Ticks,
        waiting: Ticks,
    },
    // Nothing runnable until `until`
    CpuIdle {
        from: Ticks,
        until: Ticks,
    },
}

impl SchedEvent {
    pub fn at(&self) -> Ticks {
        match *self {
            Self::Arrived { at, .. }
            | Self::Dispatched { at, .. }
            | Self::Preempted { at, .. }
            | Self::Completed { at, .. } => at,
            Self::CpuIdle { from, .. } => from,
        }
    }
}

impl fmt::Display for SchedEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Arrived { pid, at } => write!(f, "t={at} P{pid} arrived"),
            Self::Dispatched { pid, at } => write!(f, "t={at} P{pid} dispatched"),
            Self::Preempted { pid, at, remaining } => {
                write!(f, "t={at} P{pid} preempted, {remaining} left")
            }
            Self::Completed { pid, at, waiting } => {
                write!(f, "t={at} P{pid} completed, waited {waiting}")
            }
            Self::CpuIdle { from, until } => write!(f, "t={from} cpu idle until {until}"),
        }
    }
}

/// Exact `(pid, start, end)` CPU slices recovered from an event trace. Unlike
/// timeline intervals these never include idle time.
pub fn slices(events: &[SchedEvent]) -> Vec<(Pid, Ticks, Ticks)> {
    let mut slices = Vec::new();
    let mut running: Option<(Pid, Ticks)> = None;

    for event in events {
        match *event {
            SchedEvent::Dispatched { pid, at } => {
                debug_assert!(running.is_none(), "P{pid} dispatched over a running process");
                running = Some((pid, at));
            }
            SchedEvent::Preempted { pid, at, .. } | SchedEvent::Completed { pid, at, .. } => {
                if let Some((current, start)) = running.take() {
                    debug_assert_eq!(current, pid, "slice ended for a process that was not running");
                    slices.push((pid, start, at));
                }
            }
            SchedEvent::Arrived { .. } | SchedEvent::CpuIdle { .. } => {}
        }
    }

    slices
}

use super::{Dispatch, Scheduler, Slice};
use crate::core::{Pid, ReadyQueue, SchedCtx};

/// First come, first served. Admission order is already `(arrival, pid)`,
/// so a plain FIFO gives the stable arrival sort.
pub struct FcfsScheduler {
    ready: ReadyQueue,
}

impl FcfsScheduler {
    pub fn new() -> Self {
        Self {
            ready: ReadyQueue::new_fifo(),
        }
    }
}

impl Default for FcfsScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn enqueue(&mut self, _ctx: &mut SchedCtx, pid: Pid) {
        debug_assert!(!self.ready.contains(pid), "pid {pid} enqueued twice");
        self.ready.push_fifo(pid);
    }

    fn dispatch(&mut self, _ctx: &mut SchedCtx) -> Dispatch {
        match self.ready.pop() {
            Some(pid) => Dispatch::Run {
                pid,
                slice: Slice::ToCompletion,
            },
            None => Dispatch::Idle,
        }
    }
}

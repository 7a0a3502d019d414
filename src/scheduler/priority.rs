use super::{Dispatch, Scheduler, Slice};
use crate::core::{Pid, ReadyQueue, SchedCtx};

/// Non-preemptive priority scheduling. Lower numbers are more urgent; equal
/// priorities go to the lower pid.
pub struct PriorityScheduler {
    ready: ReadyQueue,
}

impl PriorityScheduler {
    pub fn new() -> Self {
        Self {
            ready: ReadyQueue::new_priq(),
        }
    }
}

impl Default for PriorityScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for PriorityScheduler {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn enqueue(&mut self, ctx: &mut SchedCtx, pid: Pid) {
        debug_assert!(!self.ready.contains(pid), "pid {pid} enqueued twice");
        let priority = ctx.process(pid).priority;
        self.ready.push_ranked(pid, i128::from(priority));
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

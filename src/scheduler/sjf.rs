use super::{Dispatch, Scheduler, Slice};
use crate::core::{Pid, ReadyQueue, SchedCtx};

/// Non-preemptive shortest job first. Among arrived processes the smallest
/// burst runs to completion; equal bursts go to the lower pid.
pub struct SjfScheduler {
    ready: ReadyQueue,
}

impl SjfScheduler {
    pub fn new() -> Self {
        Self {
            ready: ReadyQueue::new_priq(),
        }
    }
}

impl Default for SjfScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SjfScheduler {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn enqueue(&mut self, ctx: &mut SchedCtx, pid: Pid) {
        debug_assert!(!self.ready.contains(pid), "pid {pid} enqueued twice");
        let burst = ctx.process(pid).burst_time;
        self.ready.push_ranked(pid, i128::from(burst));
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

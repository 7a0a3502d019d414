//! Round robin with a fixed quantum, in its pass-based form.
//!
//! Processes are visited in pid order, one full pass at a time. Every
//! process that has arrived and still has work gets one quantum (or its
//! remainder) when the pass reaches it. A process preempted mid-pass is next
//! considered on the following pass, in pid order. It does not go to the
//! back of a FIFO ready queue behind processes that arrived while it ran.
//! This differs from textbook round robin whenever a lower pid arrives
//! after a higher one has already been preempted; e.g. with P1 late and P2
//! running, P1 runs as soon as the next pass starts. Callers that compare
//! against a queue-based simulator should expect that difference.

use std::num::NonZeroU64;

use super::{Dispatch, Scheduler, Slice};
use crate::core::{Pid, SchedCtx};

pub struct RoundRobinScheduler {
    quantum: NonZeroU64,
    // Next pid the current pass examines
    cursor: Pid,
    ran_this_pass: bool,
}

impl RoundRobinScheduler {
    pub fn new(quantum: NonZeroU64) -> Self {
        Self {
            quantum,
            cursor: 1,
            ran_this_pass: false,
        }
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RoundRobin"
    }

    // Ready state lives in the ctx; passes scan it directly
    fn enqueue(&mut self, _ctx: &mut SchedCtx, _pid: Pid) {}

    fn dispatch(&mut self, ctx: &mut SchedCtx) -> Dispatch {
        let count = ctx.processes.len();
        loop {
            while self.cursor <= count {
                let pid = self.cursor;
                self.cursor += 1;
                if ctx.is_ready(pid) {
                    self.ran_this_pass = true;
                    return Dispatch::Run {
                        pid,
                        slice: Slice::Quantum(self.quantum.get()),
                    };
                }
            }

            // Pass over. A pass that ran nothing means the CPU idles before
            // the next one.
            self.cursor = 1;
            if !std::mem::take(&mut self.ran_this_pass) {
                return Dispatch::Idle;
            }
        }
    }
}

pub mod fcfs;
pub mod priority;
pub mod round_robin;
pub mod sjf;

use crate::core::state::{Pid, SchedCtx, Ticks};
pub use fcfs::FcfsScheduler;
pub use priority::PriorityScheduler;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    // Non-preemptive: run until the burst is used up
    ToCompletion,
    Quantum(Ticks),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Run { pid: Pid, slice: Slice },
    // Nothing runnable right now
    Idle,
}

/// A scheduling policy. The core admits each process exactly once, in
/// `(arrival_time, pid)` order, as soon as the clock reaches its arrival
/// time, and asks for a decision whenever the CPU is free.
pub trait Scheduler {
    fn name(&self) -> &'static str;

    // Process became eligible to run
    fn enqueue(&mut self, ctx: &mut SchedCtx, pid: Pid);

    fn dispatch(&mut self, ctx: &mut SchedCtx) -> Dispatch;

    // Slice ended with work left; the process is Ready again
    fn preempted(&mut self, _ctx: &mut SchedCtx, _pid: Pid) {}
}

use keyed_priority_queue::KeyedPriorityQueue;
use std::{collections::VecDeque, ops::RangeInclusive};

use super::{event::SchedEvent, timeline::Timeline};

// 1-based, assigned in input order
pub type Pid = usize;
pub type Ticks = u64;
pub type Priority = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Arriving,
    Ready,
    Running,
    Completed,
}

#[derive(Debug, Clone)]
pub struct ProcessRecord {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: Priority,
    pub state: ProcessState,
    pub remaining_time: Ticks,
    pub waiting_time: Option<Ticks>,
    pub turnaround_time: Option<Ticks>,
}

impl ProcessRecord {
    pub fn new(pid: Pid, arrival_time: Ticks, burst_time: Ticks, priority: Priority) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
            state: ProcessState::Arriving,
            remaining_time: burst_time,
            waiting_time: None,
            turnaround_time: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state == ProcessState::Completed
    }

    pub fn completion_time(&self) -> Option<Ticks> {
        self.turnaround_time.map(|t| self.arrival_time + t)
    }
}

/// Selection key for priority-ordered ready queues. Lower `key` wins, ties
/// go to the lower pid.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct Rank {
    pub key: i128,
    pub pid: Pid,
}

// KeyedPriorityQueue is a max-heap, so we need to flip-flop Rank's Ord
impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.pid.cmp(&self.pid))
    }
}

#[derive(Debug)]
pub enum ReadyQueue {
    Fifo { pids: VecDeque<Pid> },
    Priq { pids: KeyedPriorityQueue<Pid, Rank> },
}

impl ReadyQueue {
    pub fn new_fifo() -> Self {
        Self::Fifo {
            pids: VecDeque::new(),
        }
    }

    pub fn new_priq() -> Self {
        Self::Priq {
            pids: KeyedPriorityQueue::new(),
        }
    }

    fn push(&mut self, pid: Pid, key: Option<i128>) {
        match self {
            Self::Fifo { pids } => pids.push_back(pid),
            Self::Priq { pids } => {
                let key = key.expect("Attempted to push to a Priq with no rank");
                let prev = pids.push(pid, Rank { key, pid });
                debug_assert!(prev.is_none(), "pid {pid} queued twice");
            }
        }
    }

    pub fn push_fifo(&mut self, pid: Pid) {
        self.push(pid, None);
    }

    pub fn push_ranked(&mut self, pid: Pid, key: i128) {
        self.push(pid, Some(key));
    }

    pub fn pop(&mut self) -> Option<Pid> {
        match self {
            Self::Fifo { pids } => pids.pop_front(),
            Self::Priq { pids } => pids.pop().map(|(pid, _)| pid),
        }
    }

    pub fn contains(&self, pid: Pid) -> bool {
        match self {
            Self::Fifo { pids } => pids.contains(&pid),
            Self::Priq { pids } => pids.iter().any(|(p, _)| *p == pid),
        }
    }
}

/// Everything one algorithm run mutates: the working copy of the process
/// set, the simulated clock, the Gantt timeline and the event trace.
#[derive(Debug)]
pub struct SchedCtx {
    pub now: Ticks,
    pub processes: Vec<ProcessRecord>,
    pub timeline: Timeline,
    pub events: Vec<SchedEvent>,

    // Decrement upon completion
    unfinished: usize,
}

impl SchedCtx {
    pub fn new(processes: Vec<ProcessRecord>) -> Self {
        debug_assert!(
            processes.iter().enumerate().all(|(i, p)| p.pid == i + 1),
            "pids must be 1..=N in order"
        );
        let unfinished = processes.len();
        Self {
            now: 0,
            processes,
            timeline: Timeline::new(),
            events: Vec::new(),
            unfinished,
        }
    }

    pub fn process(&self, pid: Pid) -> &ProcessRecord {
        &self.processes[pid - 1]
    }

    pub fn process_mut(&mut self, pid: Pid) -> &mut ProcessRecord {
        &mut self.processes[pid - 1]
    }

    pub fn pids(&self) -> RangeInclusive<Pid> {
        1..=self.processes.len()
    }

    pub fn unfinished(&self) -> usize {
        self.unfinished
    }

    pub fn is_ready(&self, pid: Pid) -> bool {
        self.process(pid).state == ProcessState::Ready
    }

    fn record(&mut self, event: SchedEvent) {
        log::trace!("{event}");
        self.events.push(event);
    }

    pub fn idle_until(&mut self, until: Ticks) {
        debug_assert!(until > self.now, "idle period must move the clock forward");
        let from = self.now;
        self.now = until;
        self.record(SchedEvent::CpuIdle { from, until });
    }

    pub fn mark_ready(&mut self, pid: Pid) {
        let at = self.now;
        let process = self.process_mut(pid);
        debug_assert!(
            process.arrival_time <= at,
            "pid {pid} admitted before its arrival"
        );
        debug_assert_eq!(
            process.state,
            ProcessState::Arriving,
            "pid {pid} admitted twice"
        );
        process.state = ProcessState::Ready;
        self.record(SchedEvent::Arrived { pid, at });
    }

    pub fn set_running(&mut self, pid: Pid) {
        let at = self.now;
        let process = self.process_mut(pid);
        debug_assert_eq!(
            process.state,
            ProcessState::Ready,
            "pid {pid} must be Ready before it runs"
        );
        process.state = ProcessState::Running;
        self.timeline.push(pid, at);
        self.record(SchedEvent::Dispatched { pid, at });
    }

    // Run the current process for `len` ticks
    pub fn consume(&mut self, pid: Pid, len: Ticks) {
        let process = self.process_mut(pid);
        debug_assert_eq!(process.state, ProcessState::Running);
        debug_assert!(len > 0 && len <= process.remaining_time);
        process.remaining_time -= len;
        self.now += len;
        self.timeline.charge(pid, len);
    }

    pub fn preempt(&mut self, pid: Pid) {
        let at = self.now;
        let process = self.process_mut(pid);
        debug_assert!(process.remaining_time > 0, "pid {pid} has nothing left to run");
        process.state = ProcessState::Ready;
        let remaining = process.remaining_time;
        self.record(SchedEvent::Preempted { pid, at, remaining });
    }

    pub fn mark_completed(&mut self, pid: Pid) {
        let at = self.now;
        let process = self.process_mut(pid);
        debug_assert_eq!(process.state, ProcessState::Running);
        debug_assert_eq!(process.remaining_time, 0);
        debug_assert!(
            process.waiting_time.is_none(),
            "pid {pid} completed twice"
        );

        let waiting = at - process.arrival_time - process.burst_time;
        process.state = ProcessState::Completed;
        process.waiting_time = Some(waiting);
        process.turnaround_time = Some(waiting + process.burst_time);
        self.unfinished -= 1;
        self.record(SchedEvent::Completed { pid, at, waiting });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(specs: &[(Ticks, Ticks, Priority)]) -> SchedCtx {
        SchedCtx::new(
            specs
                .iter()
                .enumerate()
                .map(|(i, &(at, bt, pri))| ProcessRecord::new(i + 1, at, bt, pri))
                .collect(),
        )
    }

    #[test]
    fn test_priq_pops_lowest_key_then_lowest_pid() {
        let mut queue = ReadyQueue::new_priq();
        queue.push_ranked(4, 4);
        queue.push_ranked(2, 4);
        queue.push_ranked(3, 1);

        assert!(queue.contains(2));
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(4));
        assert_eq!(queue.pop(), None);
        assert!(!queue.contains(2));
    }

    #[test]
    fn test_priq_handles_negative_keys() {
        let mut queue = ReadyQueue::new_priq();
        queue.push_ranked(1, 0);
        queue.push_ranked(2, -3);
        assert_eq!(queue.pop(), Some(2));
    }

    #[test]
    fn test_fifo_keeps_insertion_order() {
        let mut queue = ReadyQueue::new_fifo();
        queue.push_fifo(3);
        queue.push_fifo(1);
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), Some(1));
    }

    #[test]
    fn test_completion_sets_accounting_once() {
        let mut ctx = ctx(&[(1, 3, 0)]);
        ctx.idle_until(1);
        ctx.mark_ready(1);
        ctx.set_running(1);
        ctx.consume(1, 3);
        ctx.mark_completed(1);

        let p = ctx.process(1);
        assert!(p.is_completed());
        assert_eq!(p.waiting_time, Some(0));
        assert_eq!(p.turnaround_time, Some(3));
        assert_eq!(p.completion_time(), Some(4));
        assert_eq!(ctx.unfinished(), 0);
        assert_eq!(ctx.timeline.segments().len(), 1);
    }

    #[test]
    fn test_preempt_returns_process_to_ready() {
        let mut ctx = ctx(&[(0, 5, 0)]);
        ctx.mark_ready(1);
        ctx.set_running(1);
        ctx.consume(1, 2);
        ctx.preempt(1);

        assert!(ctx.is_ready(1));
        assert_eq!(ctx.process(1).remaining_time, 3);
        assert_eq!(ctx.now, 2);
        assert_eq!(ctx.unfinished(), 1);
    }
}

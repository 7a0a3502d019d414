use rustc_hash::FxHashSet;

use super::state::{ProcessState, SchedCtx};

#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    // Called between scheduling decisions
    pub fn observe(&mut self, ctx: &SchedCtx) {
        self.step += 1;

        let mut unfinished = 0;
        for process in &ctx.processes {
            let pid = process.pid;
            debug_assert_ne!(
                process.state,
                ProcessState::Running,
                "P{pid} still Running between decisions"
            );

            if process.state == ProcessState::Completed {
                let waiting = process.waiting_time;
                debug_assert!(waiting.is_some(), "Completed P{pid} has no waiting time");
                debug_assert_eq!(
                    process.turnaround_time,
                    waiting.map(|w| w + process.burst_time),
                    "P{pid} turnaround must equal waiting + burst"
                );
                debug_assert_eq!(process.remaining_time, 0, "Completed P{pid} has work left");
                debug_assert!(
                    process.completion_time().is_some_and(|c| c <= ctx.now),
                    "P{pid} completed in the future"
                );
            } else {
                unfinished += 1;
                debug_assert!(
                    process.waiting_time.is_none() && process.turnaround_time.is_none(),
                    "Unfinished P{pid} already has results"
                );
                debug_assert!(process.remaining_time > 0, "Unfinished P{pid} has no work left");
            }
        }

        debug_assert_eq!(unfinished, ctx.unfinished(), "unfinished count drifted");
    }

    // Called once the run is over and the timeline is closed
    pub fn finish(&self, ctx: &SchedCtx) {
        let mut seen = FxHashSet::default();
        for segment in ctx.timeline.segments() {
            seen.insert(segment.pid);
        }

        let mut last_completion = 0;
        for process in &ctx.processes {
            let pid = process.pid;
            debug_assert!(process.is_completed(), "P{pid} never completed");
            debug_assert!(seen.contains(&pid), "P{pid} missing from the timeline");
            debug_assert_eq!(
                ctx.timeline.cpu_time(pid),
                process.burst_time,
                "P{pid} CPU time must equal its burst"
            );
            if let Some(completion) = process.completion_time() {
                last_completion = last_completion.max(completion);
            }
        }

        debug_assert_eq!(seen.len(), ctx.processes.len(), "timeline names unknown pids");
        debug_assert_eq!(
            ctx.timeline.end_time(),
            Some(last_completion),
            "timeline end must match the last completion"
        );
        debug_assert!(
            ctx.timeline
                .segments()
                .windows(2)
                .all(|pair| pair[0].start <= pair[1].start),
            "timeline segments out of order"
        );
    }
}

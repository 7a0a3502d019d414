use super::{
    observer::Observer,
    state::{Pid, SchedCtx, Ticks},
};
use crate::scheduler::{Dispatch, Scheduler, Slice};

pub struct SchedCore<S: Scheduler> {
    pub ctx: SchedCtx,
    pub scheduler: S,
    observer: Observer,
    // Pids sorted by (arrival_time, pid); everything before the cursor has been admitted
    arrivals: Vec<Pid>,
    arrival_cursor: usize,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(ctx: SchedCtx, scheduler: S) -> Self {
        let mut arrivals: Vec<Pid> = ctx.pids().collect();
        // Stable, so equal arrivals keep pid order
        arrivals.sort_by_key(|&pid| ctx.process(pid).arrival_time);
        Self {
            ctx,
            scheduler,
            observer: Observer::new(),
            arrivals,
            arrival_cursor: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.ctx.unfinished() == 0
    }

    // Make one scheduling decision. Return the pid that completed, if any.
    pub fn step(&mut self) -> Option<Pid> {
        self.admit_arrivals();

        let completed = match self.scheduler.dispatch(&mut self.ctx) {
            Dispatch::Run { pid, slice } => self.run_slice(pid, slice),
            Dispatch::Idle => {
                // Eligibility only changes on arrival, so a run of idle ticks
                // is the same as one jump to the next arrival
                let until = self
                    .next_arrival()
                    .expect("Scheduler idled with unfinished work and no pending arrivals");
                self.ctx.idle_until(until);
                None
            }
        };

        self.observer.observe(&self.ctx);
        completed
    }

    pub fn run(mut self) -> SchedCtx {
        log::debug!(
            "{}: scheduling {} processes",
            self.scheduler.name(),
            self.ctx.processes.len()
        );

        while !self.is_done() {
            self.step();
        }

        let end_time = self.ctx.now;
        self.ctx.timeline.close(end_time);
        self.observer.finish(&self.ctx);

        log::debug!(
            "{}: finished at t={} after {} decisions, {} segments",
            self.scheduler.name(),
            end_time,
            self.observer.steps(),
            self.ctx.timeline.len()
        );
        self.ctx
    }

    fn admit_arrivals(&mut self) {
        let now = self.ctx.now;
        while let Some(&pid) = self.arrivals.get(self.arrival_cursor) {
            // Contiguous, since arrivals are sorted
            if self.ctx.process(pid).arrival_time > now {
                break;
            }
            self.ctx.mark_ready(pid);
            self.scheduler.enqueue(&mut self.ctx, pid);
            self.arrival_cursor += 1;
        }
    }

    fn next_arrival(&self) -> Option<Ticks> {
        self.arrivals
            .get(self.arrival_cursor)
            .map(|&pid| self.ctx.process(pid).arrival_time)
    }

    fn run_slice(&mut self, pid: Pid, slice: Slice) -> Option<Pid> {
        self.ctx.set_running(pid);

        let remaining = self.ctx.process(pid).remaining_time;
        let len = match slice {
            Slice::ToCompletion => remaining,
            Slice::Quantum(quantum) => quantum.min(remaining),
        };
        self.ctx.consume(pid, len);

        if self.ctx.process(pid).remaining_time == 0 {
            self.ctx.mark_completed(pid);
            return Some(pid);
        }

        self.ctx.preempt(pid);
        self.scheduler.preempted(&mut self.ctx, pid);
        None
    }
}

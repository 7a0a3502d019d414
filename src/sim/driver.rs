use std::num::NonZeroU64;

use average::{Estimate, Mean};

use super::{
    config::SimConfig,
    error::SimError,
    kind::AlgorithmKind,
    process::{ProcessResult, ProcessSpec},
};
use crate::{
    core::{
        driver::SchedCore,
        event::{self, SchedEvent},
        state::{Pid, ProcessRecord, SchedCtx, Ticks},
        timeline::Timeline,
    },
    scheduler::{
        FcfsScheduler, PriorityScheduler, RoundRobinScheduler, Scheduler, SjfScheduler,
    },
};

/// Result of one algorithm run: per-process results in pid order, the Gantt
/// timeline and the event trace that produced it.
#[derive(Debug, Clone)]
pub struct SimOutcome {
    pub kind: AlgorithmKind,
    pub processes: Vec<ProcessResult>,
    pub timeline: Timeline,
    pub events: Vec<SchedEvent>,
}

impl SimOutcome {
    pub fn average_waiting_time(&self) -> f64 {
        avg(self.processes.iter().map(|p| p.waiting_time as f64))
    }

    pub fn average_turnaround_time(&self) -> f64 {
        avg(self.processes.iter().map(|p| p.turnaround_time as f64))
    }

    pub fn end_time(&self) -> Ticks {
        self.timeline.end_time().unwrap_or(0)
    }

    // Share of the run the CPU spent on some process
    pub fn cpu_utilization(&self) -> f64 {
        let end_time = self.end_time();
        if end_time == 0 {
            return 0.0;
        }
        let busy: Ticks = self.processes.iter().map(|p| p.burst_time).sum();
        busy as f64 / end_time as f64
    }

    pub fn process(&self, pid: Pid) -> Option<&ProcessResult> {
        self.processes.get(pid.checked_sub(1)?)
    }

    /// Exact CPU slices `(pid, start, end)`, idle time excluded.
    pub fn slices(&self) -> Vec<(Pid, Ticks, Ticks)> {
        event::slices(&self.events)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Sim {
    config: SimConfig,
}

impl Sim {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// Run one algorithm on a fresh working copy of `specs`. `quantum` is
    /// required for Round Robin and ignored by everything else.
    pub fn run(
        &self,
        kind: AlgorithmKind,
        specs: &[ProcessSpec],
        quantum: Option<Ticks>,
    ) -> Result<SimOutcome, SimError> {
        self.validate(specs)?;

        let ctx = match kind {
            AlgorithmKind::Fcfs => drive(specs, FcfsScheduler::new()),
            AlgorithmKind::Sjf => drive(specs, SjfScheduler::new()),
            AlgorithmKind::Priority => drive(specs, PriorityScheduler::new()),
            AlgorithmKind::RoundRobin => {
                let quantum = quantum
                    .and_then(NonZeroU64::new)
                    .ok_or(SimError::InvalidQuantum { quantum })?;
                drive(specs, RoundRobinScheduler::new(quantum))
            }
        };

        Ok(SimOutcome {
            kind,
            processes: ctx.processes.iter().map(ProcessResult::from_record).collect(),
            timeline: ctx.timeline,
            events: ctx.events,
        })
    }

    /// Run every algorithm on the same input, each on its own copy. Round
    /// Robin is skipped when no quantum is given.
    pub fn run_all(
        &self,
        specs: &[ProcessSpec],
        quantum: Option<Ticks>,
    ) -> Result<Vec<SimOutcome>, SimError> {
        AlgorithmKind::ALL
            .into_iter()
            .filter(|kind| !kind.needs_quantum() || quantum.is_some())
            .map(|kind| self.run(kind, specs, quantum))
            .collect()
    }

    fn validate(&self, specs: &[ProcessSpec]) -> Result<(), SimError> {
        let max = self.config.max_processes;
        if specs.is_empty() || specs.len() > max {
            return Err(SimError::InvalidProcessCount {
                count: specs.len(),
                max,
            });
        }

        if let Some((i, spec)) = specs.iter().enumerate().find(|(_, s)| s.burst_time == 0) {
            return Err(SimError::InvalidBurstTime {
                pid: i + 1,
                burst_time: spec.burst_time,
            });
        }

        // Every run finishes by the latest arrival plus the total burst
        let latest_arrival = specs.iter().map(|s| s.arrival_time).max().unwrap_or(0);
        specs
            .iter()
            .try_fold(latest_arrival, |end, s| end.checked_add(s.burst_time))
            .ok_or(SimError::ClockOverflow)?;

        Ok(())
    }
}

fn drive<S: Scheduler>(specs: &[ProcessSpec], scheduler: S) -> SchedCtx {
    let processes: Vec<ProcessRecord> = specs
        .iter()
        .enumerate()
        .map(|(i, spec)| spec.to_record(i + 1))
        .collect();
    SchedCore::new(SchedCtx::new(processes), scheduler).run()
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(raw: &[(Ticks, Ticks)]) -> Vec<ProcessSpec> {
        raw.iter()
            .map(|&(at, bt)| ProcessSpec::new(at, bt, 0))
            .collect()
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = Sim::default().run(AlgorithmKind::Fcfs, &[], None).unwrap_err();
        assert_eq!(err, SimError::InvalidProcessCount { count: 0, max: 10 });
    }

    #[test]
    fn test_process_limit_comes_from_config() {
        let input = specs(&[(0, 1); 11]);
        let err = Sim::default()
            .run(AlgorithmKind::Sjf, &input, None)
            .unwrap_err();
        assert_eq!(err, SimError::InvalidProcessCount { count: 11, max: 10 });

        let sim = Sim::new(SimConfig::default().with_max_processes(11));
        assert!(sim.run(AlgorithmKind::Sjf, &input, None).is_ok());
    }

    #[test]
    fn test_zero_burst_is_rejected_with_pid() {
        let err = Sim::default()
            .run(AlgorithmKind::Priority, &specs(&[(0, 3), (1, 0)]), None)
            .unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidBurstTime {
                pid: 2,
                burst_time: 0
            }
        );
    }

    #[test]
    fn test_round_robin_quantum_validation() {
        let sim = Sim::default();
        let input = specs(&[(0, 3)]);
        assert_eq!(
            sim.run(AlgorithmKind::RoundRobin, &input, Some(0)).unwrap_err(),
            SimError::InvalidQuantum { quantum: Some(0) }
        );
        assert_eq!(
            sim.run(AlgorithmKind::RoundRobin, &input, None).unwrap_err(),
            SimError::InvalidQuantum { quantum: None }
        );
    }

    #[test]
    fn test_clock_overflow_is_rejected_before_running() {
        let sim = Sim::default();
        let late = specs(&[(u64::MAX - 1, 5)]);
        for kind in AlgorithmKind::ALL {
            assert_eq!(
                sim.run(kind, &late, Some(2)).unwrap_err(),
                SimError::ClockOverflow
            );
        }

        let long = specs(&[(0, u64::MAX - 1), (1, 3)]);
        assert_eq!(
            sim.run(AlgorithmKind::RoundRobin, &long, Some(2)).unwrap_err(),
            SimError::ClockOverflow
        );
    }

    #[test]
    fn test_run_ending_exactly_at_clock_limit_is_accepted() {
        let outcome = Sim::default()
            .run(AlgorithmKind::Fcfs, &specs(&[(u64::MAX - 5, 5)]), None)
            .unwrap();
        assert_eq!(outcome.end_time(), u64::MAX);
        assert_eq!(outcome.processes[0].waiting_time, 0);
        assert_eq!(outcome.processes[0].turnaround_time, 5);
    }

    #[test]
    fn test_quantum_is_ignored_outside_round_robin() {
        let outcome = Sim::default()
            .run(AlgorithmKind::Fcfs, &specs(&[(0, 3)]), Some(0))
            .unwrap();
        assert_eq!(outcome.processes[0].turnaround_time, 3);
    }

    #[test]
    fn test_outcome_statistics() {
        let outcome = Sim::default()
            .run(AlgorithmKind::Fcfs, &specs(&[(0, 5), (1, 3), (2, 8)]), None)
            .unwrap();

        assert!((outcome.average_waiting_time() - 10.0 / 3.0).abs() < 1e-9);
        assert!((outcome.average_turnaround_time() - 26.0 / 3.0).abs() < 1e-9);
        assert_eq!(outcome.end_time(), 16);
        assert!((outcome.cpu_utilization() - 1.0).abs() < 1e-9);
        assert_eq!(outcome.process(2).map(|p| p.completion_time()), Some(8));
        assert_eq!(outcome.process(0), None);
    }

    #[test]
    fn test_idle_time_lowers_utilization() {
        let outcome = Sim::default()
            .run(AlgorithmKind::Fcfs, &specs(&[(2, 2)]), None)
            .unwrap();
        assert_eq!(outcome.end_time(), 4);
        assert!((outcome.cpu_utilization() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_run_all_skips_round_robin_without_quantum() {
        let input = specs(&[(0, 2), (0, 1)]);
        let sim = Sim::default();

        let kinds: Vec<_> = sim
            .run_all(&input, None)
            .unwrap()
            .iter()
            .map(|o| o.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![AlgorithmKind::Fcfs, AlgorithmKind::Sjf, AlgorithmKind::Priority]
        );
        assert_eq!(sim.run_all(&input, Some(1)).unwrap().len(), 4);
    }
}

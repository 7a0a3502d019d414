//! Plain-text rendering of simulation outcomes.

use std::fmt;

use crate::{core::Timeline, sim::SimOutcome};

const RULE: &str = "------------------------------------------------";

pub struct ResultsTable<'a>(pub &'a SimOutcome);

impl fmt::Display for ResultsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let outcome = self.0;
        writeln!(f, "PID\tAT\tBT\tPRI\tWT\tTAT")?;
        writeln!(f, "{RULE}")?;
        for p in &outcome.processes {
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{}\t{}",
                p.pid, p.arrival_time, p.burst_time, p.priority, p.waiting_time, p.turnaround_time
            )?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "Average Waiting Time: {:.2}", outcome.average_waiting_time())?;
        writeln!(
            f,
            "Average Turnaround Time: {:.2}",
            outcome.average_turnaround_time()
        )
    }
}

/// Gantt chart of a closed timeline.
pub struct GanttChart<'a>(pub &'a Timeline);

impl fmt::Display for GanttChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let timeline = self.0;
        writeln!(f, "Gantt Chart:")?;
        for (pid, _, _) in timeline.intervals() {
            write!(f, " | P{pid} ")?;
        }
        writeln!(f, "|")?;
        for (_, start, _) in timeline.intervals() {
            write!(f, "{start}\t")?;
        }
        match timeline.end_time() {
            Some(end) => writeln!(f, "{end}"),
            None => writeln!(f),
        }
    }
}

/// Full report for one run: heading, results table and Gantt chart.
pub struct Report<'a>(pub &'a SimOutcome);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "--- {} ---", self.0.kind.title())?;
        writeln!(f, "{}", ResultsTable(self.0))?;
        write!(f, "{}", GanttChart(&self.0.timeline))
    }
}

/// One line per algorithm, for runs over the same input.
pub struct Comparison<'a>(pub &'a [SimOutcome]);

impl fmt::Display for Comparison<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "ALG\tAVG WT\tAVG TAT\tEND\tCPU%")?;
        writeln!(f, "{RULE}")?;
        for outcome in self.0 {
            writeln!(
                f,
                "{}\t{:.2}\t{:.2}\t{}\t{:.1}",
                outcome.kind,
                outcome.average_waiting_time(),
                outcome.average_turnaround_time(),
                outcome.end_time(),
                outcome.cpu_utilization() * 100.0
            )?;
        }
        Ok(())
    }
}

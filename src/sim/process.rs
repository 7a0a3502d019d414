use crate::core::{Pid, Priority, ProcessRecord, Ticks};

/// Caller-supplied description of one process. Never mutated by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSpec {
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: Priority,
}

impl ProcessSpec {
    pub fn new(arrival_time: Ticks, burst_time: Ticks, priority: Priority) -> Self {
        Self {
            arrival_time,
            burst_time,
            priority,
        }
    }

    pub(crate) fn to_record(self, pid: Pid) -> ProcessRecord {
        ProcessRecord::new(pid, self.arrival_time, self.burst_time, self.priority)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessResult {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: Priority,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
}

impl ProcessResult {
    pub fn completion_time(&self) -> Ticks {
        self.arrival_time + self.turnaround_time
    }

    pub(crate) fn from_record(record: &ProcessRecord) -> Self {
        // The core only hands back a ctx once every process has completed
        let waiting_time = record
            .waiting_time
            .expect("Completed run returned a process without results");
        Self {
            pid: record.pid,
            arrival_time: record.arrival_time,
            burst_time: record.burst_time,
            priority: record.priority,
            waiting_time,
            turnaround_time: waiting_time + record.burst_time,
        }
    }
}

use rustc_hash::FxHashMap;

use super::state::{Pid, Ticks};

/// One entry of the Gantt chart: `pid` held the CPU from `start` until the
/// next segment's start, or until the timeline's end time for the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub pid: Pid,
    pub start: Ticks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    segments: Vec<Segment>,
    end_time: Option<Ticks>,
    // Ticks actually spent on the CPU; segments alone can't tell idle gaps apart
    cpu_time: FxHashMap<Pid, Ticks>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pid: Pid, start: Ticks) {
        debug_assert!(self.end_time.is_none(), "push onto a closed timeline");
        debug_assert!(
            self.segments.last().is_none_or(|last| last.start <= start),
            "segment for pid {pid} at {start} is out of order"
        );
        self.segments.push(Segment { pid, start });
    }

    // Credit `len` ticks of CPU to `pid`, the process of the current segment
    pub fn charge(&mut self, pid: Pid, len: Ticks) {
        debug_assert_eq!(
            self.segments.last().map(|last| last.pid),
            Some(pid),
            "P{pid} charged outside its own segment"
        );
        *self.cpu_time.entry(pid).or_insert(0) += len;
    }

    pub fn close(&mut self, end_time: Ticks) {
        debug_assert!(
            self.segments.last().is_none_or(|last| last.start <= end_time),
            "end time {end_time} precedes the last segment"
        );
        self.end_time = Some(end_time);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn end_time(&self) -> Option<Ticks> {
        self.end_time
    }

    /// Total CPU time `pid` received across all of its segments.
    pub fn cpu_time(&self, pid: Pid) -> Ticks {
        self.cpu_time.get(&pid).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Closed `(pid, start, end)` intervals in chronological order. An idle
    /// gap is folded into the interval before it, the way the chart reads.
    pub fn intervals(&self) -> impl Iterator<Item = (Pid, Ticks, Ticks)> + '_ {
        let end_time = self.end_time;
        self.segments
            .iter()
            .enumerate()
            .filter_map(move |(i, seg)| {
                let end = match self.segments.get(i + 1) {
                    Some(next) => next.start,
                    None => end_time?,
                };
                Some((seg.pid, seg.start, end))
            })
    }
}

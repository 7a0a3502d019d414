pub mod driver;
pub mod event;
pub mod observer;
pub mod state;
pub mod timeline;

pub use driver::SchedCore;
pub use event::SchedEvent;
pub use state::{Pid, Priority, ProcessRecord, ProcessState, Rank, ReadyQueue, SchedCtx, Ticks};
pub use timeline::{Segment, Timeline};

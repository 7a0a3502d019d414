pub const DEFAULT_MAX_PROCESSES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Largest process set a run accepts
    pub max_processes: usize,
}

impl SimConfig {
    pub fn with_max_processes(mut self, max_processes: usize) -> Self {
        self.max_processes = max_processes;
        self
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_processes: DEFAULT_MAX_PROCESSES,
        }
    }
}

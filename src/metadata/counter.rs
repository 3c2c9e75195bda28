use std::collections::HashMap;

/// Per-name occurrence counters, owned by one scene.
#[derive(Clone, Debug, Default)]
pub struct NameCounterRegistry {
    counts: HashMap<String, u32>,
}

impl NameCounterRegistry {
    /// Registry with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump and return the occurrence number for `name` (first call returns 1).
    pub fn next(&mut self, name: &str) -> u32 {
        let n = self.counts.entry(name.to_string()).or_insert(0);
        *n += 1;
        *n
    }

    /// How many times `name` has been counted so far.
    pub fn current(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Forget every counter.
    pub fn reset(&mut self) {
        self.counts.clear();
    }
}

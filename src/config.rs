/// The default number of levels a skip list may grow to. With `p = 0.5` this
/// comfortably covers lists of ~65k keys before the top level saturates.
pub const DEFAULT_MAX_LEVEL: usize = 16;

/// The chance that a skip list node is promoted to the next level.
pub const DEFAULT_LEVEL_PROBABILITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipListConfig {
    /// The maximum node height. Must be at least 1.
    pub max_level: usize,
    /// Promotion probability, in `(0, 1)`.
    pub p: f64,
    /// Fixed seed for the level generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SkipListConfig {
    fn default() -> Self {
        SkipListConfig {
            max_level: DEFAULT_MAX_LEVEL,
            p: DEFAULT_LEVEL_PROBABILITY,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityQueueConfig {
    /// Upper bound on the number of queued elements. `None` is unbounded.
    pub max_len: Option<usize>,
}

/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Maximum nesting of cascaded reactions below a single queued event.
    /// Exceeding it aborts the cast instead of resolving forever.
    pub max_cascade_depth: usize,
}

impl EngineConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_CASCADE_DEPTH: usize = 64;

    pub fn new() -> Self {
        Self {
            max_cascade_depth: Self::DEFAULT_MAX_CASCADE_DEPTH,
        }
    }

    pub fn with_max_cascade_depth(max_cascade_depth: usize) -> Self {
        Self { max_cascade_depth }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

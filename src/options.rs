use serde::Deserialize;

/// Nesting limit applied when none is configured explicitly.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Long-lived, immutable parser configuration, passed explicitly into each parse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Maximum number of nested objects/arrays. `None` disables the guard.
    pub max_depth: Option<usize>,
    /// Name attached to the source in diagnostics.
    pub source_name: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            source_name: "input.json".to_string(),
        }
    }
}

impl ParserOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }
}

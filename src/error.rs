/// A single line that the grammar could not turn into a token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct GrammarError {
    pub reason: String,
}

impl GrammarError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Every way a script-to-grid transform can fail. Both variants are
/// terminal: no partial grid is handed back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    /// First line the grammar rejected (1-based among non-blank lines).
    #[error("Line {line}: {reason}")]
    Grammar { line: usize, reason: String },

    /// The tokens did not fit in the grid.
    #[error("{reason}")]
    Overflow { reason: String },
}

impl ScriptError {
    pub fn overflow(rows: usize) -> Self {
        ScriptError::Overflow {
            reason: format!("Code exceeds grid size ({rows} rows maximum)"),
        }
    }
}

/// Rejected grid dimensions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridSizeError {
    #[error("grid must have at least one row and column")]
    Empty,

    #[error("grid of {rows}x{cols} cells exceeds the {max} cell limit")]
    TooLarge { rows: usize, cols: usize, max: usize },
}

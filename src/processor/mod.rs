//! The functional core: script text ⇄ tile grid.
//!
//! Nothing in here touches the filesystem; `parser` and `writer` do.
pub mod display;
pub mod grammar;
pub mod placement;
pub mod synth;
pub mod vocab;

pub use placement::place_script;
pub use synth::{ThreadScripts, synthesize};
pub use vocab::{Token, TokenKind};

use crate::error::ScriptError;
use crate::model::{Grid, GridConfig};

/// Script → grid. A failed encode leaves no grid behind.
pub fn encode(script: &str, config: GridConfig) -> Result<Grid, ScriptError> {
    place_script(script, config)
}

/// Grid → per-thread scripts. Cannot fail.
pub fn decode(grid: &Grid) -> ThreadScripts {
    synthesize(grid)
}

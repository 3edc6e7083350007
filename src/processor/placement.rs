//! Lays a whole script into the grid.
//!
//! Two strategies exist. Dense packing fills cells row-major. Thread rows
//! additionally start every thread marker on a fresh row, which can cost
//! extra rows, so it is first dry-run and only used when it fits.

use crate::error::ScriptError;
use crate::model::{Grid, GridConfig};

use super::grammar::parse_line;
use super::vocab::{Token, TokenKind};

/// Output of the grammar stage for one non-blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine {
    pub token: Token,
    pub is_thread_marker: bool,
    pub line_number: usize,
}

impl ParsedLine {
    pub fn new(token: Token, line_number: usize) -> Self {
        Self {
            token,
            is_thread_marker: token.kind.is_thread_marker(),
            line_number,
        }
    }
}

/// Number a bare token sequence as if each token were one script line.
pub fn lines_from_tokens(tokens: &[Token]) -> Vec<ParsedLine> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| ParsedLine::new(*token, i + 1))
        .collect()
}

/// Shown for an empty script instead of an empty board.
pub const DEMO_PROGRAM: [Token; 4] = [
    Token::plain(TokenKind::Thread1),
    Token {
        kind: TokenKind::Loop,
        param: 3,
    },
    Token::plain(TokenKind::Play),
    Token::plain(TokenKind::EndLoop),
];

/// The canonical demonstration grid: [`DEMO_PROGRAM`] packed densely from
/// the top-left, wrapping on narrow grids.
pub fn demo_grid(config: GridConfig) -> Result<Grid, ScriptError> {
    let mut grid = Grid::empty(config);
    lay_out(&lines_from_tokens(&DEMO_PROGRAM), config, false, |row, col, token| {
        grid.set(row, col, Some(token));
    })?;
    Ok(grid)
}

/// Lowercase, trim and grammar every non-blank line; stops at the first
/// line the grammar rejects.
pub fn parse_script(script: &str) -> Result<Vec<ParsedLine>, ScriptError> {
    let lowered = script.to_lowercase();
    lowered
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| {
            let line_number = i + 1;
            parse_line(line)
                .map(|token| ParsedLine::new(token, line_number))
                .map_err(|e| ScriptError::Grammar {
                    line: line_number,
                    reason: e.reason,
                })
        })
        .collect()
}

/// Script text → grid. All-or-nothing.
pub fn place_script(script: &str, config: GridConfig) -> Result<Grid, ScriptError> {
    if script.trim().is_empty() {
        log::debug!("empty script, using demonstration grid");
        return demo_grid(config);
    }

    let lines = parse_script(script)?;
    place_lines(&lines, config)
}

/// Token sequence → grid, choosing the layout strategy first.
pub fn place_tokens(tokens: &[Token], config: GridConfig) -> Result<Grid, ScriptError> {
    place_lines(&lines_from_tokens(tokens), config)
}

pub fn place_lines(lines: &[ParsedLine], config: GridConfig) -> Result<Grid, ScriptError> {
    let thread_rows = use_thread_rows(lines, config);
    log::debug!(
        "placing {} tokens into {}x{} grid, thread rows: {}",
        lines.len(),
        config.rows(),
        config.cols(),
        thread_rows
    );

    let mut grid = Grid::empty(config);
    lay_out(lines, config, thread_rows, |row, col, token| {
        grid.set(row, col, Some(token));
    })?;
    Ok(grid)
}

/// Whether the stricter thread-row layout is both wanted and fits.
pub fn use_thread_rows(lines: &[ParsedLine], config: GridConfig) -> bool {
    let has_markers = lines.iter().any(|l| l.is_thread_marker);
    if !has_markers || lines.len() > config.capacity() {
        return false;
    }
    match lay_out(lines, config, true, |_, _, _| {}) {
        Ok(rows) => {
            log::debug!("thread-row dry run fits in {rows} rows");
            true
        }
        Err(_) => {
            log::debug!("thread-row dry run overflows, falling back to dense packing");
            false
        }
    }
}

/// The one cursor walk behind both the dry run and real placement.
/// `place` receives every cell written; returns the number of rows touched.
pub fn lay_out<F>(
    lines: &[ParsedLine],
    config: GridConfig,
    thread_rows: bool,
    mut place: F,
) -> Result<usize, ScriptError>
where
    F: FnMut(usize, usize, Token),
{
    let rows = config.rows();
    let mut row = 0usize;
    let mut col = 0usize;

    for line in lines {
        if thread_rows && line.is_thread_marker && col != 0 {
            row += 1;
            col = 0;
            log::trace!("line {}: thread marker starts row {}", line.line_number, row);
        }
        if row >= rows {
            return Err(ScriptError::overflow(rows));
        }
        if col >= config.cols() {
            row += 1;
            col = 0;
            if row >= rows {
                return Err(ScriptError::overflow(rows));
            }
        }

        place(row, col, line.token);
        col += 1;
    }

    Ok(if lines.is_empty() { 0 } else { row + 1 })
}

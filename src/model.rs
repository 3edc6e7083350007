// numeric constants that describe the tile grid
pub const DEFAULT_ROWS: usize = 7;
pub const COMPACT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 5;
pub const MAX_CELLS: usize = 4096;

use crate::error::GridSizeError;
use crate::processor::vocab::Token;
use serde::{Deserialize, Serialize};

/// Grid dimensions. Always passed in; the algorithms never assume a size.
///
/// The editor ships a 7×5 board, a sibling tool uses 6×5; both are valid.
/// Any other size goes through [`GridConfig::new`], so a config in hand is
/// never empty and its cell count never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    rows: usize,
    cols: usize,
}

impl GridConfig {
    pub const STANDARD: GridConfig = GridConfig {
        rows: DEFAULT_ROWS,
        cols: DEFAULT_COLS,
    };
    pub const COMPACT: GridConfig = GridConfig {
        rows: COMPACT_ROWS,
        cols: DEFAULT_COLS,
    };

    pub fn new(rows: usize, cols: usize) -> Result<Self, GridSizeError> {
        if rows == 0 || cols == 0 {
            return Err(GridSizeError::Empty);
        }
        match rows.checked_mul(cols) {
            Some(cells) if cells <= MAX_CELLS => Ok(Self { rows, cols }),
            _ => Err(GridSizeError::TooLarge {
                rows,
                cols,
                max: MAX_CELLS,
            }),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Fixed-size matrix of optional tokens, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    config: GridConfig,
    cells: Vec<Option<Token>>,
}

impl Grid {
    pub fn empty(config: GridConfig) -> Self {
        Self {
            config,
            cells: vec![None; config.capacity()],
        }
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn cols(&self) -> usize {
        self.config.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.config.rows && col < self.config.cols).then(|| row * self.config.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Token> {
        self.index(row, col).and_then(|i| self.cells[i])
    }

    /// Write a cell. Out-of-range coordinates and tokens whose param is
    /// outside their kind's range are ignored; the return value says
    /// whether the cell was written.
    pub fn set(&mut self, row: usize, col: usize, token: Option<Token>) -> bool {
        if token.is_some_and(|t| !t.is_valid()) {
            return false;
        }
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = token;
                true
            }
            None => false,
        }
    }

    /// One row as a slice, row 0 first; `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[Option<Token>]> {
        let start = self.index(row, 0)?;
        Some(&self.cells[start..start + self.config.cols])
    }

    /// Occupied cells in row-major order with their coordinates.
    pub fn tokens(&self) -> impl Iterator<Item = (usize, usize, Token)> + '_ {
        let cols = self.config.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|t| (i / cols, i % cols, t)))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

/// JSON exchange form of a grid, 1-to-1 with the editor's file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridFile {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Vec<Option<Token>>>,
}

impl From<&Grid> for GridFile {
    fn from(grid: &Grid) -> Self {
        GridFile {
            rows: grid.rows(),
            cols: grid.cols(),
            cells: (0..grid.rows())
                .filter_map(|r| grid.row(r).map(<[_]>::to_vec))
                .collect(),
        }
    }
}

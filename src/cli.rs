use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::error::GridSizeError;
use crate::model::{COMPACT_ROWS, DEFAULT_COLS, DEFAULT_ROWS, GridConfig};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lay a script out on the tile grid and write the grid JSON
    Encode {
        /// Input script (.txt)
        input: PathBuf,
        /// Output grid file (.json)
        output: PathBuf,
        #[command(flatten)]
        grid: GridArgs,
    },
    /// Turn a grid JSON back into script text
    Decode {
        /// Input grid file (.json)
        input: PathBuf,
        /// Output directory
        output: PathBuf,
    },
    /// Print the grid as a table of tile labels
    Labels {
        /// Input grid file (.json)
        input: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct GridArgs {
    /// Grid rows
    #[arg(long, default_value_t = DEFAULT_ROWS, conflicts_with = "compact")]
    pub rows: usize,
    /// Grid columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,
    /// Use the 6-row board
    #[arg(long)]
    pub compact: bool,
}

impl GridArgs {
    pub fn config(&self) -> Result<GridConfig, GridSizeError> {
        let rows = if self.compact { COMPACT_ROWS } else { self.rows };
        GridConfig::new(rows, self.cols)
    }
}

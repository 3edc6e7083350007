//! Emit a grid in the editor's JSON exchange form.

use crate::model::{Grid, GridFile};
use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn to_json(grid: &Grid) -> Result<String> {
    Ok(serde_json::to_string_pretty(&GridFile::from(grid))?)
}

pub fn emit(grid: &Grid, path: &Path) -> Result<()> {
    fs::write(path, to_json(grid)?)?;
    Ok(())
}

use anyhow::{Result, anyhow};

use crate::model::{Grid, GridConfig, GridFile};

/// Parse the editor's grid JSON into a `Grid`.
///
/// The file must carry `rows`, `cols` and a `cells` matrix of exactly that
/// shape; every cell is `null` or `{"kind": ..., "param": ...}` with the
/// param inside its kind's range.
pub fn load_grid(json: &str) -> Result<Grid> {
    log::debug!("grid file loaded, size: {} bytes", json.len());
    let file: GridFile =
        serde_json::from_str(json).map_err(|e| anyhow!("Failed to parse grid JSON: {}", e))?;
    grid_from_file(&file)
}

pub fn grid_from_file(file: &GridFile) -> Result<Grid> {
    if file.cells.len() != file.rows {
        return Err(anyhow!(
            "`cells` has {} rows, header says {}",
            file.cells.len(),
            file.rows
        ));
    }
    // shape first, so the header alone never decides how much to allocate
    for (r, row) in file.cells.iter().enumerate() {
        if row.len() != file.cols {
            return Err(anyhow!(
                "row {} has {} cells, header says {}",
                r,
                row.len(),
                file.cols
            ));
        }
    }

    let config = GridConfig::new(file.rows, file.cols)?;
    let mut grid = Grid::empty(config);

    for (r, row) in file.cells.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if let Some(token) = cell {
                if !token.is_valid() {
                    return Err(anyhow!(
                        "cell ({}, {}) has param {} out of range for {:?}",
                        r,
                        c,
                        token.param,
                        token.kind
                    ));
                }
            }
            grid.set(r, c, *cell);
        }
    }

    Ok(grid)
}

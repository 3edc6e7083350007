//! Short human-readable tile labels.

use crate::model::Grid;

use super::vocab::Token;

/// Label for an empty cell in [`label_rows`].
pub const EMPTY_LABEL: &str = ".";

/// `"Play 2"`, `"End Loop"`, `"If X < 5"` ...
pub fn label(token: &Token) -> String {
    let name = token.kind.entry().display_name;
    match token.surface() {
        Some(value) => format!("{name} {value}"),
        None => name.to_string(),
    }
}

pub fn label_rows(grid: &Grid) -> Vec<Vec<String>> {
    (0..grid.rows())
        .map(|r| {
            grid.row(r)
                .unwrap_or_default()
                .iter()
                .map(|cell| cell.as_ref().map_or_else(|| EMPTY_LABEL.to_string(), label))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GridConfig;
    use crate::processor::vocab::TokenKind;

    #[test]
    fn test_labels() {
        assert_eq!(label(&Token { kind: TokenKind::Play, param: 1 }), "Play 2");
        assert_eq!(label(&Token { kind: TokenKind::If, param: 4 }), "If X < 5");
        assert_eq!(label(&Token::plain(TokenKind::EndLoop)), "End Loop");
        assert_eq!(label(&Token::plain(TokenKind::Random)), "X = Random");
    }

    #[test]
    fn test_label_rows() {
        let mut grid = Grid::empty(GridConfig::COMPACT);
        grid.set(1, 2, Some(Token::plain(TokenKind::Else)));
        let rows = label_rows(&grid);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[1], vec![".", ".", "Else", ".", "."]);
    }
}

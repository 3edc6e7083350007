//! Grid → per-thread command text.

use crate::model::Grid;

use super::vocab::{Token, Word};

pub const THREAD_COUNT: usize = 3;

/// Command lines of the three thread lanes, in grid order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadScripts {
    pub threads: [Vec<String>; THREAD_COUNT],
}

impl ThreadScripts {
    /// One lane's commands joined by newlines.
    ///
    /// # Panics
    ///
    /// Panics if `thread >= THREAD_COUNT`.
    pub fn text(&self, thread: usize) -> String {
        self.threads[thread].join("\n")
    }

    /// All lanes back to back (thread 1, 2, 3) as a single script.
    pub fn flatten(&self) -> String {
        self.threads
            .iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.threads.iter().all(Vec::is_empty)
    }
}

/// Canonical text of one token; re-parsing it yields the same token.
///
/// Grids only ever hold in-range tokens (`Grid::set` refuses the rest), so
/// an out-of-range param here is a caller bug.
pub fn render(token: &Token) -> String {
    debug_assert!(token.is_valid(), "param out of range: {token:?}");
    token
        .kind
        .entry()
        .canonical
        .iter()
        .map(|word| match word {
            Word::Lit(s) => *s,
            Word::Value => token.surface().unwrap_or("1"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Walk the grid row-major and split commands by thread. A marker is
/// filed under the thread it switches to.
pub fn synthesize(grid: &Grid) -> ThreadScripts {
    let mut out = ThreadScripts::default();
    let mut current = 0usize;

    for (_, _, token) in grid.tokens() {
        if let Some(thread) = token.kind.thread_index() {
            current = thread;
        }
        out.threads[current].push(render(&token));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GridConfig;
    use crate::processor::grammar::parse_line;
    use crate::processor::vocab::{MAX_PARAM, TokenKind};

    #[test]
    fn test_render_templates() {
        let test_cases = vec![
            (Token { kind: TokenKind::Play, param: 1 }, "play 2"),
            (Token { kind: TokenKind::Loop, param: 2 }, "loop 3 times"),
            (Token { kind: TokenKind::Delay, param: 7 }, "delay 8"),
            (Token { kind: TokenKind::Variable, param: 0 }, "x = 1"),
            (Token { kind: TokenKind::If, param: 4 }, "if x < 5"),
            (Token::plain(TokenKind::Add), "x = x + 1"),
            (Token::plain(TokenKind::FunctionCall), "call function"),
            (Token::plain(TokenKind::Thread3), "thread 3"),
        ];
        for (token, expected) in test_cases {
            assert_eq!(render(&token), expected);
        }
    }

    #[test]
    fn test_every_token_survives_reparse() {
        for kind in TokenKind::ALL {
            for param in 0..=kind.max_param() {
                let token = Token::new(kind, param).unwrap();
                assert_eq!(parse_line(&render(&token)), Ok(token), "{token:?}");
            }
        }
        assert_eq!(TokenKind::Loop.max_param(), MAX_PARAM);
    }

    #[test]
    fn test_marker_joins_the_thread_it_opens() {
        let mut grid = Grid::empty(GridConfig::default());
        grid.set(0, 0, Some(Token::plain(TokenKind::PlayX)));
        grid.set(0, 1, Some(Token::plain(TokenKind::Thread2)));
        grid.set(0, 2, Some(Token { kind: TokenKind::Play, param: 0 }));
        grid.set(2, 3, Some(Token::plain(TokenKind::Thread1)));
        grid.set(3, 0, Some(Token::plain(TokenKind::Else)));

        let scripts = synthesize(&grid);
        assert_eq!(scripts.threads[0], vec!["play x", "thread 1", "else"]);
        assert_eq!(scripts.threads[1], vec!["thread 2", "play 1"]);
        assert!(scripts.threads[2].is_empty());
        assert_eq!(
            scripts.flatten(),
            "play x\nthread 1\nelse\nthread 2\nplay 1"
        );
    }

    #[test]
    fn test_hand_built_bad_token_never_reaches_text() {
        let mut grid = Grid::empty(GridConfig::default());
        let bad = Token { kind: TokenKind::Play, param: 9 };
        assert!(!grid.set(0, 0, Some(bad)));
        grid.set(0, 1, Some(Token { kind: TokenKind::Play, param: 7 }));
        assert_eq!(synthesize(&grid).text(0), "play 8");
    }

    #[test]
    #[should_panic(expected = "param out of range")]
    #[cfg(debug_assertions)]
    fn test_render_rejects_out_of_range_param() {
        render(&Token { kind: TokenKind::Play, param: 9 });
    }

    #[test]
    fn test_empty_grid() {
        let scripts = synthesize(&Grid::empty(GridConfig::COMPACT));
        assert!(scripts.is_empty());
        assert_eq!(scripts.flatten(), "");
        assert_eq!(scripts.text(1), "");
    }
}

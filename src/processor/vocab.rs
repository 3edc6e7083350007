//! The closed command vocabulary shared by the grammar, the placement
//! engine, the synthesizer and the label formatter.
//!
//! Every `TokenKind` owns exactly one `VocabEntry` in [`VOCABULARY`]; the
//! table order matches the enum discriminants so lookup is an index.

use serde::{Deserialize, Serialize};

/// Highest rotation index for parameterized kinds (surface values 1‥8).
pub const MAX_PARAM: u8 = 7;

/// Surface strings for rotation indices 0‥7.
pub const SURFACE_VALUES: [&str; 8] = ["1", "2", "3", "4", "5", "6", "7", "8"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Add,
    Subtract,
    Delay,
    Else,
    EndFunction,
    EndIf,
    EndLoop,
    Function,
    FunctionCall,
    If,
    Loop,
    Play,
    PlayX,
    Random,
    Thread1,
    Thread2,
    Thread3,
    Variable,
}

/// One word of a command's canonical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    Lit(&'static str),
    /// Replaced by the surface value of the token's param.
    Value,
}

#[derive(Debug)]
pub struct VocabEntry {
    pub kind: TokenKind,
    pub display_name: &'static str,
    pub canonical: &'static [Word],
    pub parameterized: bool,
}

use Word::{Lit, Value};

const fn plain(
    kind: TokenKind,
    display_name: &'static str,
    canonical: &'static [Word],
) -> VocabEntry {
    VocabEntry {
        kind,
        display_name,
        canonical,
        parameterized: false,
    }
}

const fn param(
    kind: TokenKind,
    display_name: &'static str,
    canonical: &'static [Word],
) -> VocabEntry {
    VocabEntry {
        kind,
        display_name,
        canonical,
        parameterized: true,
    }
}

pub static VOCABULARY: [VocabEntry; 18] = [
    plain(TokenKind::Add, "X + 1", &[Lit("x"), Lit("="), Lit("x"), Lit("+"), Lit("1")]),
    plain(TokenKind::Subtract, "X - 1", &[Lit("x"), Lit("="), Lit("x"), Lit("-"), Lit("1")]),
    param(TokenKind::Delay, "Delay", &[Lit("delay"), Value]),
    plain(TokenKind::Else, "Else", &[Lit("else")]),
    plain(TokenKind::EndFunction, "End Function", &[Lit("end"), Lit("function")]),
    plain(TokenKind::EndIf, "End If", &[Lit("end"), Lit("if")]),
    plain(TokenKind::EndLoop, "End Loop", &[Lit("end"), Lit("loop")]),
    plain(TokenKind::Function, "Function", &[Lit("function")]),
    plain(TokenKind::FunctionCall, "Call Function", &[Lit("call"), Lit("function")]),
    param(TokenKind::If, "If X <", &[Lit("if"), Lit("x"), Lit("<"), Value]),
    param(TokenKind::Loop, "Loop", &[Lit("loop"), Value, Lit("times")]),
    param(TokenKind::Play, "Play", &[Lit("play"), Value]),
    plain(TokenKind::PlayX, "Play X", &[Lit("play"), Lit("x")]),
    plain(TokenKind::Random, "X = Random", &[Lit("x"), Lit("="), Lit("random")]),
    plain(TokenKind::Thread1, "Thread 1", &[Lit("thread"), Lit("1")]),
    plain(TokenKind::Thread2, "Thread 2", &[Lit("thread"), Lit("2")]),
    plain(TokenKind::Thread3, "Thread 3", &[Lit("thread"), Lit("3")]),
    param(TokenKind::Variable, "X =", &[Lit("x"), Lit("="), Value]),
];

impl TokenKind {
    pub const ALL: [TokenKind; 18] = [
        TokenKind::Add,
        TokenKind::Subtract,
        TokenKind::Delay,
        TokenKind::Else,
        TokenKind::EndFunction,
        TokenKind::EndIf,
        TokenKind::EndLoop,
        TokenKind::Function,
        TokenKind::FunctionCall,
        TokenKind::If,
        TokenKind::Loop,
        TokenKind::Play,
        TokenKind::PlayX,
        TokenKind::Random,
        TokenKind::Thread1,
        TokenKind::Thread2,
        TokenKind::Thread3,
        TokenKind::Variable,
    ];

    pub fn entry(self) -> &'static VocabEntry {
        &VOCABULARY[self as usize]
    }

    pub fn is_parameterized(self) -> bool {
        self.entry().parameterized
    }

    pub fn max_param(self) -> u8 {
        if self.is_parameterized() { MAX_PARAM } else { 0 }
    }

    /// Thread lane (0, 1, 2) this marker switches into, `None` for
    /// ordinary commands.
    pub fn thread_index(self) -> Option<usize> {
        match self {
            TokenKind::Thread1 => Some(0),
            TokenKind::Thread2 => Some(1),
            TokenKind::Thread3 => Some(2),
            _ => None,
        }
    }

    pub fn is_thread_marker(self) -> bool {
        self.thread_index().is_some()
    }
}

/// A grid tile: a command kind plus its rotation index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub param: u8,
}

impl Token {
    /// Checked constructor; `None` when `param` exceeds the kind's range.
    pub fn new(kind: TokenKind, param: u8) -> Option<Self> {
        (param <= kind.max_param()).then_some(Self { kind, param })
    }

    /// Token for a kind without a parameter (or rotation 0).
    pub const fn plain(kind: TokenKind) -> Self {
        Self { kind, param: 0 }
    }

    pub fn is_valid(&self) -> bool {
        self.param <= self.kind.max_param()
    }

    /// Surface value of the param, e.g. `"3"` for rotation 2.
    pub fn surface(&self) -> Option<&'static str> {
        if self.kind.is_parameterized() {
            SURFACE_VALUES.get(self.param as usize).copied()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_discriminants() {
        for kind in TokenKind::ALL {
            assert_eq!(kind.entry().kind, kind);
        }
    }

    #[test]
    fn test_exactly_five_parameterized_kinds() {
        let params: Vec<_> = TokenKind::ALL
            .into_iter()
            .filter(|k| k.is_parameterized())
            .collect();
        assert_eq!(
            params,
            vec![
                TokenKind::Delay,
                TokenKind::If,
                TokenKind::Loop,
                TokenKind::Play,
                TokenKind::Variable
            ]
        );
    }

    #[test]
    fn test_checked_constructor_enforces_range() {
        assert!(Token::new(TokenKind::Play, 7).is_some());
        assert!(Token::new(TokenKind::Play, 8).is_none());
        assert!(Token::new(TokenKind::Else, 0).is_some());
        assert!(Token::new(TokenKind::Else, 1).is_none());
    }

    #[test]
    fn test_serde_uses_lowercase_kind_names() {
        let tok = Token::new(TokenKind::FunctionCall, 0).unwrap();
        let json = serde_json::to_string(&tok).unwrap();
        assert_eq!(json, r#"{"kind":"functioncall","param":0}"#);
        let back: Token = serde_json::from_str(r#"{"kind":"playx","param":0}"#).unwrap();
        assert_eq!(back, Token::plain(TokenKind::PlayX));
    }
}

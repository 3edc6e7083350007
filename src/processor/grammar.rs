//! Line grammar: one lowercased, trimmed script line → one `Token`.
//
//  Grammar (informal, words are whitespace separated):
//
//      line    ::= "thread" ("1" | "2" | "3")
//                | "loop" NUM
//                | "end" ("loop" | "if" | "function")
//                | "play" (NUM | "x")
//                | "delay" NUM
//                | "x" "=" ("random" | "x" ("+" | "-") "1" | NUM)
//                | "if" "x" "<" NUM
//                | "else" | "function" | "call" "function"
//      NUM     ::= 1‥8
//
//  Words after the ones a rule needs are ignored, so `loop 3 times`
//  and `loop 3` are the same command.

use std::str::SplitWhitespace;

use crate::error::GrammarError;

use super::vocab::{MAX_PARAM, Token, TokenKind};

/// Parse one line. The caller lowercases and trims.
pub fn parse_line(line: &str) -> Result<Token, GrammarError> {
    LineParser::new(line).parse()
}

struct LineParser<'a> {
    line: &'a str,
    words: SplitWhitespace<'a>,
}

impl<'a> LineParser<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            line,
            words: line.split_whitespace(),
        }
    }

    fn next_word(&mut self) -> Option<&'a str> {
        self.words.next()
    }

    fn parse(&mut self) -> Result<Token, GrammarError> {
        let keyword = match self.next_word() {
            Some(word) => word,
            None => return Err(self.unknown()),
        };

        match keyword {
            "thread" => self.parse_thread(),
            "loop" => self.parse_numbered(TokenKind::Loop, "Loop number"),
            "end" => self.parse_end(),
            "play" => self.parse_play(),
            "delay" => self.parse_numbered(TokenKind::Delay, "Delay number"),
            "x" => self.parse_assignment(),
            "if" => self.parse_if(),
            "else" => Ok(Token::plain(TokenKind::Else)),
            "function" => Ok(Token::plain(TokenKind::Function)),
            "call" => self.parse_call(),
            _ => Err(self.unknown()),
        }
    }

    fn unknown(&self) -> GrammarError {
        GrammarError::new(format!("Unknown command: {}", self.line))
    }

    fn parse_thread(&mut self) -> Result<Token, GrammarError> {
        let kind = match self.next_word() {
            Some("1") => TokenKind::Thread1,
            Some("2") => TokenKind::Thread2,
            Some("3") => TokenKind::Thread3,
            _ => return Err(GrammarError::new("Thread number must be 1, 2, or 3")),
        };
        Ok(Token::plain(kind))
    }

    /// `<keyword> <n>` with `n` in 1‥8, stored as rotation `n - 1`.
    fn parse_numbered(&mut self, kind: TokenKind, what: &str) -> Result<Token, GrammarError> {
        let param = self.parse_param(what)?;
        Ok(Token { kind, param })
    }

    fn parse_param(&mut self, what: &str) -> Result<u8, GrammarError> {
        let out_of_range = || GrammarError::new(format!("{what} must be between 1 and 8"));
        let word = self.next_word().ok_or_else(out_of_range)?;
        let n: u32 = word.parse().map_err(|_| out_of_range())?;
        if n == 0 || n > u32::from(MAX_PARAM) + 1 {
            return Err(out_of_range());
        }
        Ok((n - 1) as u8)
    }

    fn parse_end(&mut self) -> Result<Token, GrammarError> {
        let kind = match self.next_word() {
            Some("loop") => TokenKind::EndLoop,
            Some("if") => TokenKind::EndIf,
            Some("function") => TokenKind::EndFunction,
            _ => {
                return Err(GrammarError::new(
                    "End must be followed by loop, if, or function",
                ));
            }
        };
        Ok(Token::plain(kind))
    }

    fn parse_play(&mut self) -> Result<Token, GrammarError> {
        let mut rest = self.words.clone();
        if rest.next() == Some("x") {
            return Ok(Token::plain(TokenKind::PlayX));
        }
        self.parse_numbered(TokenKind::Play, "Play number")
    }

    fn parse_assignment(&mut self) -> Result<Token, GrammarError> {
        if self.next_word() != Some("=") {
            return Err(GrammarError::new("Expected '=' after x"));
        }

        match self.words.clone().next() {
            Some("random") => Ok(Token::plain(TokenKind::Random)),
            Some("x") => {
                self.next_word();
                let kind = match self.next_word() {
                    Some("+") => TokenKind::Add,
                    Some("-") => TokenKind::Subtract,
                    _ => return Err(GrammarError::new("Only x = x + 1 and x = x - 1 are supported")),
                };
                if self.next_word() != Some("1") {
                    return Err(GrammarError::new("Only x = x + 1 and x = x - 1 are supported"));
                }
                Ok(Token::plain(kind))
            }
            _ => self.parse_numbered(TokenKind::Variable, "Variable value"),
        }
    }

    fn parse_if(&mut self) -> Result<Token, GrammarError> {
        if self.next_word() != Some("x") || self.next_word() != Some("<") {
            return Err(GrammarError::new("Condition must have the form: if x < <n>"));
        }
        self.parse_numbered(TokenKind::If, "Condition number")
    }

    fn parse_call(&mut self) -> Result<Token, GrammarError> {
        match self.next_word() {
            Some("function") => Ok(Token::plain(TokenKind::FunctionCall)),
            _ => Err(GrammarError::new("Call must be followed by function")),
        }
    }
}

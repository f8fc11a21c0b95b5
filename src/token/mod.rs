//! # Token Model
//!
//! Shotel source text is tokenized by an external scanner which prints one
//! record per line, either `KIND` or `KIND(payload)`:
//!
//! ```text
//! FN
//! UID(Add)
//! LID(a)
//! LID(b)
//! OCURLY
//! LID(a)
//! PLUS
//! LID(b)
//! CCURLY
//! ```
//!
//! This module turns those records into [`Token`] values for the parser.
//! Only `INT`, `LITERAL`, `LID` and `UID` carry a payload; `INT` payloads are
//! decoded as integers, the others are kept as raw text.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Plus,
    Minus,
    Divide,
    Times,
    Modulo,
    LShift,
    RShift,
    And,
    Or,
    Xor,
    Not,
    Int,
    Fn,
    Type,
    Case,
    Pattern,
    OCurly,
    CCurly,
    OPar,
    CPar,
    Comma,
    Arrow,
    Assign,
    Equal,
    NEqual,
    Lid,
    Uid,
    Literal,
}

impl TokenKind {
    pub const ALL: [TokenKind; 28] = [
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Divide,
        TokenKind::Times,
        TokenKind::Modulo,
        TokenKind::LShift,
        TokenKind::RShift,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Xor,
        TokenKind::Not,
        TokenKind::Int,
        TokenKind::Fn,
        TokenKind::Type,
        TokenKind::Case,
        TokenKind::Pattern,
        TokenKind::OCurly,
        TokenKind::CCurly,
        TokenKind::OPar,
        TokenKind::CPar,
        TokenKind::Comma,
        TokenKind::Arrow,
        TokenKind::Assign,
        TokenKind::Equal,
        TokenKind::NEqual,
        TokenKind::Lid,
        TokenKind::Uid,
        TokenKind::Literal,
    ];

    /// The spelling used in token records.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Times => "TIMES",
            TokenKind::Modulo => "MODULO",
            TokenKind::LShift => "LSHIFT",
            TokenKind::RShift => "RSHIFT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Xor => "XOR",
            TokenKind::Not => "NOT",
            TokenKind::Int => "INT",
            TokenKind::Fn => "FN",
            TokenKind::Type => "TYPE",
            TokenKind::Case => "CASE",
            TokenKind::Pattern => "PATTERN",
            TokenKind::OCurly => "OCURLY",
            TokenKind::CCurly => "CCURLY",
            TokenKind::OPar => "OPAR",
            TokenKind::CPar => "CPAR",
            TokenKind::Comma => "COMMA",
            TokenKind::Arrow => "ARROW",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equal => "EQUAL",
            TokenKind::NEqual => "NEQUAL",
            TokenKind::Lid => "LID",
            TokenKind::Uid => "UID",
            TokenKind::Literal => "LITERAL",
        }
    }

    pub fn carries_payload(&self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Literal | TokenKind::Lid | TokenKind::Uid
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenKind {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| TokenError::UnknownKind {
                kind: s.to_string(),
                position: 0,
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Int(i128),
    Text(String),
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Int(value) => write!(f, "{value}"),
            Payload::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub payload: Option<Payload>,
    /// Index of the record this token was decoded from.
    pub position: usize,
}

/// Errors raised while decoding token records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("record {position}: unknown token kind '{kind}'")]
    UnknownKind { kind: String, position: usize },

    #[error("record {position}: '{record}' is missing its closing ')'")]
    Unterminated { record: String, position: usize },

    #[error("record {position}: {kind} requires a payload")]
    MissingPayload { kind: TokenKind, position: usize },

    #[error("record {position}: {kind} does not take a payload")]
    UnexpectedPayload { kind: TokenKind, position: usize },

    #[error("record {position}: '{payload}' is not a valid integer")]
    InvalidInteger { payload: String, position: usize },
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Token {
            kind,
            payload: None,
            position: 0,
        }
    }

    pub fn int(value: i128) -> Self {
        Token {
            kind: TokenKind::Int,
            payload: Some(Payload::Int(value)),
            position: 0,
        }
    }

    pub fn text(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            payload: Some(Payload::Text(text.into())),
            position: 0,
        }
    }

    pub fn at(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Decode a single `KIND` or `KIND(payload)` record.
    pub fn decode(record: &str, position: usize) -> Result<Token, TokenError> {
        let record = record.trim();

        let Some(paren) = record.find('(') else {
            let kind = parse_kind(record, position)?;
            if kind.carries_payload() {
                return Err(TokenError::MissingPayload { kind, position });
            }
            return Ok(Token::new(kind).at(position));
        };

        let kind = parse_kind(&record[..paren], position)?;
        let Some(raw) = record[paren + 1..].strip_suffix(')') else {
            return Err(TokenError::Unterminated {
                record: record.to_string(),
                position,
            });
        };

        let payload = match kind {
            TokenKind::Int => Payload::Int(raw.trim().parse().map_err(|_| {
                TokenError::InvalidInteger {
                    payload: raw.to_string(),
                    position,
                }
            })?),
            kind if kind.carries_payload() => Payload::Text(raw.to_string()),
            kind => return Err(TokenError::UnexpectedPayload { kind, position }),
        };

        Ok(Token {
            kind,
            payload: Some(payload),
            position,
        })
    }

    /// The payload as text, if this token carries a textual payload.
    pub fn text_value(&self) -> Option<&str> {
        match &self.payload {
            Some(Payload::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn int_value(&self) -> Option<i128> {
        match &self.payload {
            Some(Payload::Int(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match &self.payload {
            Some(payload) => format!("{}({})", self.kind, payload),
            None => self.kind.to_string(),
        }
    }
}

fn parse_kind(text: &str, position: usize) -> Result<TokenKind, TokenError> {
    text.trim()
        .parse::<TokenKind>()
        .map_err(|_| TokenError::UnknownKind {
            kind: text.trim().to_string(),
            position,
        })
}

/// Decode a newline-delimited stream of token records, skipping blank lines.
pub fn decode_records(text: &str) -> Result<Vec<Token>, TokenError> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(position, line)| Token::decode(line, position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_kind() {
        let token = Token::decode("OCURLY", 3).unwrap();
        assert_eq!(token.kind, TokenKind::OCurly);
        assert_eq!(token.payload, None);
        assert_eq!(token.position, 3);
    }

    #[test]
    fn test_decode_integer_payload() {
        let token = Token::decode("INT(42)", 0).unwrap();
        assert_eq!(token.payload, Some(Payload::Int(42)));
    }

    #[test]
    fn test_decode_text_payload_keeps_raw_text() {
        let token = Token::decode("LITERAL(\"a (b) c\")", 0).unwrap();
        assert_eq!(token.kind, TokenKind::Literal);
        assert_eq!(token.text_value(), Some("\"a (b) c\""));
    }

    #[test]
    fn test_decode_trims_carriage_return() {
        let token = Token::decode("UID(Bool)\r", 0).unwrap();
        assert_eq!(token.text_value(), Some("Bool"));
    }

    #[test]
    fn test_decode_unknown_kind() {
        let err = Token::decode("OF", 7).unwrap_err();
        assert_eq!(
            err,
            TokenError::UnknownKind {
                kind: "OF".to_string(),
                position: 7
            }
        );
    }

    #[test]
    fn test_decode_missing_payload() {
        assert!(matches!(
            Token::decode("LID", 0),
            Err(TokenError::MissingPayload {
                kind: TokenKind::Lid,
                ..
            })
        ));
    }

    #[test]
    fn test_decode_unexpected_payload() {
        assert!(matches!(
            Token::decode("PLUS(1)", 0),
            Err(TokenError::UnexpectedPayload { .. })
        ));
    }

    #[test]
    fn test_decode_bad_integer() {
        assert!(matches!(
            Token::decode("INT(x1)", 0),
            Err(TokenError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn test_decode_unterminated() {
        assert!(matches!(
            Token::decode("UID(Foo", 0),
            Err(TokenError::Unterminated { .. })
        ));
    }

    #[test]
    fn test_every_kind_round_trips_through_its_name() {
        for kind in TokenKind::ALL {
            assert_eq!(kind.name().parse::<TokenKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_decode_records_skips_blank_lines() {
        let tokens = decode_records("FN\n\nUID(Test)\nOCURLY\nINT(12)\nCCURLY\n").unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[4].kind, TokenKind::CCurly);
    }

    #[test]
    fn test_describe() {
        assert_eq!(Token::text(TokenKind::Lid, "x").describe(), "LID(x)");
        assert_eq!(Token::new(TokenKind::Comma).describe(), "COMMA");
    }
}

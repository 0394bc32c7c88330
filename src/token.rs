// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Tokens of the regular expression grammar.
//!
//! `tokenize` classifies each character of a raw regular expression and
//! `augment` makes the implicit concatenations explicit and appends the end
//! marker.

use std::fmt::{self, Display};

use error::{Error, Malformation, Result};
use location::Location;

/// The character that represents the end marker.
///
/// It is reserved and may not appear in a raw regular expression.
pub const END_MARKER: char = '#';

/// The character that represents an explicit concatenation.
pub const CONCAT: char = '.';

/// The closed set of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An ASCII letter.
    Letter,
    /// `(`
    Open,
    /// `)`
    Close,
    /// `*`
    Star,
    /// `|`
    Or,
    /// An explicit concatenation inserted by `augment`.
    Concat,
    /// The end marker appended by `augment`.
    End,
}

impl TokenKind {
    /// The binding strength of an operator (higher binds tighter).
    ///
    /// Returns `None` for the kinds that are not operators.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            TokenKind::Star => Some(3),
            TokenKind::Concat => Some(2),
            TokenKind::Or => Some(1),
            _ => None,
        }
    }

    // A token of this kind may be the left side of an implicit concatenation.
    fn ends_operand(&self) -> bool {
        match self {
            TokenKind::Letter | TokenKind::Star | TokenKind::Close => true,
            _ => false,
        }
    }

    // A token of this kind may be the right side of an implicit concatenation.
    fn starts_operand(&self) -> bool {
        match self {
            TokenKind::Letter | TokenKind::Open => true,
            _ => false,
        }
    }
}

/// A classified character of a regular expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    value: char,
    location: Location,
}

impl Token {
    /// Create a new `Token`.
    pub fn new(kind: TokenKind, value: char, location: Location) -> Token {
        Token {
            kind,
            value,
            location,
        }
    }

    /// Create an explicit concatenation token.
    pub fn concat(location: Location) -> Token {
        Token::new(TokenKind::Concat, CONCAT, location)
    }

    /// Create an end marker token.
    pub fn end(location: Location) -> Token {
        Token::new(TokenKind::End, END_MARKER, location)
    }

    /// Gets the kind of the `Token`.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Gets the character of the `Token`.
    ///
    /// Letters carry the letter itself, the other kinds carry a fixed
    /// representative symbol.
    pub fn value(&self) -> char {
        self.value
    }

    /// Gets the `Location` of the `Token` in the raw regular expression.
    pub fn location(&self) -> Location {
        self.location
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Classify each character of `expression`.
///
/// When `fold_case` is set letters are lower cased so that `A` and `a` are
/// the same symbol.
pub fn tokenize(expression: &str, fold_case: bool) -> Result<Vec<Token>> {
    expression
        .char_indices()
        .map(|(offset, c)| classify(c, Location::new(offset), fold_case))
        .collect()
}

fn classify(c: char, location: Location, fold_case: bool) -> Result<Token> {
    let kind = match c {
        '(' => TokenKind::Open,
        ')' => TokenKind::Close,
        '*' => TokenKind::Star,
        '|' => TokenKind::Or,
        END_MARKER => {
            return Err(Error::malformed(
                location,
                Malformation::ReservedCharacter(c),
            ))
        }
        c if c.is_ascii_alphabetic() => {
            let value = if fold_case { c.to_ascii_lowercase() } else { c };
            return Ok(Token::new(TokenKind::Letter, value, location));
        }
        _ => {
            return Err(Error::malformed(
                location,
                Malformation::InvalidCharacter(c),
            ))
        }
    };

    Ok(Token::new(kind, c, location))
}

/// Insert the implicit concatenations and append the end marker.
///
/// A concatenation is inserted between every adjacent pair where the first
/// is a letter, `*` or `)` and the second is a letter or `(`. No token is
/// removed or reordered.
pub fn augment(tokens: Vec<Token>) -> Vec<Token> {
    let end = tokens
        .last()
        .map_or(Location::default(), |last| last.location() + last.value().len_utf8());

    let mut augmented = Vec::with_capacity(tokens.len() * 2 + 1);
    let mut previous: Option<TokenKind> = None;
    for token in tokens {
        if let Some(kind) = previous {
            if kind.ends_operand() && token.kind().starts_operand() {
                augmented.push(Token::concat(token.location()));
            }
        }
        previous = Some(token.kind());
        augmented.push(token);
    }
    augmented.push(Token::end(end));

    augmented
}

/// Render a token sequence as the characters of its tokens.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(Token::value).collect()
}

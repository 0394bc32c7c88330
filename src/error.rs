// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::fmt::{self, Display};
use std::result;

use location::Location;

/// The error type for building a `Dfa` from a regular expression.
#[derive(Debug, Fail, PartialEq, Eq, Clone)]
pub enum Error {
    /// The regular expression contains a character outside of the supported
    /// alphabet or does not form a valid expression.
    #[fail(display = "Malformed regular expression at {}: {}.", location, reason)]
    MalformedExpression {
        /// Where in the regular expression the problem was detected.
        location: Location,
        /// What was wrong with the regular expression.
        reason: Malformation,
    },

    /// The regular expression has a `(` without a matching `)` or a `)`
    /// without a matching `(`.
    #[fail(display = "Unbalanced parentheses in regular expression at {}.", location)]
    UnbalancedParentheses {
        /// The location of the unmatched parenthesis.
        location: Location,
    },

    /// The dfa would need more states than the configured limit.
    #[fail(display = "The dfa requires more than {} states.", _0)]
    StateLimitExceeded(usize),
}

impl Error {
    pub(crate) fn malformed(location: Location, reason: Malformation) -> Error {
        Error::MalformedExpression { location, reason }
    }

    pub(crate) fn unbalanced(location: Location) -> Error {
        Error::UnbalancedParentheses { location }
    }
}

/// The specific problem with a malformed regular expression.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Malformation {
    /// A character that is not a letter, `(`, `)`, `*` or `|`.
    InvalidCharacter(char),

    /// The end marker character, which is reserved for internal use.
    ReservedCharacter(char),

    /// A group with nothing inside of it.
    EmptyGroup,

    /// An operator that is missing one of its operands.
    MissingOperand(char),

    /// A token that may not appear in a postfix sequence.
    UnexpectedToken(char),

    /// The postfix sequence does not reduce to a single expression. The value
    /// is the number of expressions that remain.
    DanglingOperands(usize),

    /// The postfix sequence has no end marker.
    MissingEndMarker,

    /// The postfix sequence has more than one end marker.
    DuplicateEndMarker,
}

impl Display for Malformation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Malformation::*;

        match self {
            InvalidCharacter(c) => write!(f, "invalid character '{}'", c),
            ReservedCharacter(c) => write!(f, "reserved character '{}'", c),
            EmptyGroup => write!(f, "empty group"),
            MissingOperand(op) => write!(f, "operator '{}' is missing an operand", op),
            UnexpectedToken(c) => write!(f, "unexpected '{}' in postfix sequence", c),
            DanglingOperands(count) => write!(f, "{} expressions without an operator", count),
            MissingEndMarker => write!(f, "missing end marker"),
            DuplicateEndMarker => write!(f, "more than one end marker"),
        }
    }
}

/// A specialized Result type for dfa construction.
pub type Result<T> = result::Result<T, Error>;

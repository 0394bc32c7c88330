// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! A library for creating a deterministic finite automaton directly from a
//! regular expression.
//!
//! This library implements the "followpos" construction described in Aho,
//! Sethi and Ullman, _Compilers: Principles, Techniques, and Tools_, section
//! 3.9. No nondeterministic automaton is built along the way. The supported
//! regular expressions are made up of ASCII letters, alternation (`|`), kleene
//! star (`*`) and parentheses, with concatenation written by juxtaposition.
//!
//! The construction is a pipeline where each stage consumes the finished
//! output of the one before it:
//!
//! 1. `token::tokenize` classifies the characters of the expression.
//! 2. `token::augment` inserts the implicit concatenations and appends the end
//!    marker.
//! 3. `Postfix::from_tokens` converts to reverse-Polish order.
//! 4. `Attributes::evaluate` computes nullable, firstpos and lastpos and
//!    numbers the positions.
//! 5. `FollowPos::compute` computes the followpos table.
//! 6. `Dfa::build` discovers the states and transitions.
//!
//! `build_dfa` runs the whole pipeline; `Context` runs it with options.

#![deny(missing_docs)]

#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod attributes;
pub mod dfa;
pub mod followpos;
pub mod position;
pub mod postfix;
pub mod token;

mod context;
mod error;
mod location;

pub use attributes::Attributes;
pub use context::Context;
pub use dfa::{Dfa, StateKey};
pub use error::{Error, Malformation, Result};
pub use followpos::FollowPos;
pub use location::Location;
pub use position::{Position, PositionSet};
pub use postfix::Postfix;

/// Build the `Dfa` for `expression` with the default `Context`.
pub fn build_dfa(expression: &str) -> Result<Dfa> {
    Context::new().from_regex(expression)
}

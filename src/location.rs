// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::fmt::{self, Display};
use std::ops;

/// The byte offset of a token within the raw regular expression.
///
/// Tokens inserted by the augmenter do not appear in the raw expression. An
/// inserted concatenation takes the `Location` of the token that follows it
/// and the end marker takes the length of the expression.
///
/// # Panics
///
/// Adding a usize to a `Location` will panic if the resulting `Location` value is greater than
/// `usize::max_value()`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, PartialOrd, Ord)]
pub struct Location(usize);

impl Location {
    /// Create a new `Location` for a given byte offset.
    pub fn new(offset: usize) -> Location {
        Location(offset)
    }

    /// Gets the byte offset of the `Location`.
    pub fn offset(&self) -> usize {
        self.0
    }
}

impl ops::Add<usize> for Location {
    type Output = Location;

    fn add(self, rhs: usize) -> Location {
        Location(self.0 + rhs)
    }
}

impl From<usize> for Location {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "offset {}", self.0)
    }
}

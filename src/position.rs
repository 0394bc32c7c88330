// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Positions of the leaves of a regular expression and sets of them.

use std::fmt::{self, Display};
use std::iter::FromIterator;
use std::slice;

use itertools::Itertools;

/// A single occurrence of a letter or of the end marker in a regular
/// expression.
///
/// Positions are numbered from 1 in the order that the leaves appear in the
/// postfix sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    /// Create a new `Position`.
    ///
    /// # Panics
    /// Panics if `number` is 0.
    pub fn new(number: usize) -> Position {
        assert!(number > 0, "positions are numbered from 1");
        Position(number)
    }

    /// The number of the `Position`.
    pub fn number(&self) -> usize {
        self.0
    }

    pub(crate) fn index(&self) -> usize {
        self.0 - 1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A set of `Position`'s.
///
/// The set is kept as a sorted vector without duplicates so two sets with the
/// same members are equal, hash the same and order the same no matter how
/// they were built. This makes a `PositionSet` usable directly as the key of
/// a dfa state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PositionSet {
    positions: Vec<Position>,
}

impl PositionSet {
    /// Create an empty `PositionSet`.
    pub fn new() -> PositionSet {
        PositionSet {
            positions: Vec::new(),
        }
    }

    /// Create a `PositionSet` with one member.
    pub fn singleton(position: Position) -> PositionSet {
        PositionSet {
            positions: vec![position],
        }
    }

    /// The number of members.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check if `position` is a member.
    pub fn contains(&self, position: Position) -> bool {
        self.positions.binary_search(&position).is_ok()
    }

    /// Iterate over the members in increasing order.
    pub fn iter(&self) -> slice::Iter<Position> {
        self.positions.iter()
    }

    /// Create a new set with the members of both `self` and `other`.
    pub fn union(&self, other: &PositionSet) -> PositionSet {
        PositionSet {
            positions: self.positions
                .iter()
                .merge(other.positions.iter())
                .dedup()
                .cloned()
                .collect(),
        }
    }

    /// Add the members of `other` to `self`.
    pub fn union_with(&mut self, other: &PositionSet) {
        if other.positions.iter().all(|p| self.contains(*p)) {
            return;
        }
        *self = self.union(other);
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Position>,
    {
        let mut positions: Vec<_> = iter.into_iter().collect();
        positions.sort();
        positions.dedup();
        PositionSet { positions }
    }
}

impl<'a> IntoIterator for &'a PositionSet {
    type Item = &'a Position;
    type IntoIter = slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

impl Display for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.positions.iter().join(","))
    }
}

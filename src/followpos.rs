// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! The followpos table.

use attributes::{Attributes, Node};
use position::{Position, PositionSet};

/// The table of positions that can immediately follow each position.
///
/// Only concatenation and star nodes contribute. Every update is a union into
/// the entry for a position so entries only grow, and a single pass over the
/// nodes in any order reaches the final table.
#[derive(Debug, Clone)]
pub struct FollowPos {
    table: Vec<PositionSet>,
}

impl FollowPos {
    /// Compute the followpos table from completed attributes.
    pub fn compute(attrs: &Attributes) -> FollowPos {
        let mut table = vec![PositionSet::new(); attrs.position_count()];

        for (index, node) in attrs.nodes().enumerate() {
            match node {
                Node::Concat(left, right) => {
                    for p in attrs.lastpos(left) {
                        table[p.index()].union_with(attrs.firstpos(right));
                    }
                }
                Node::Star(_) => {
                    for p in attrs.lastpos(index) {
                        table[p.index()].union_with(attrs.firstpos(index));
                    }
                }
                Node::Leaf(_) | Node::Or(..) => {}
            }
        }

        FollowPos { table }
    }

    /// The positions that can follow `position`.
    ///
    /// # Panics
    /// Panics if `position` was not assigned by the `Attributes` this table
    /// was computed from.
    pub fn get(&self, position: Position) -> &PositionSet {
        &self.table[position.index()]
    }

    /// The number of positions in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }
}

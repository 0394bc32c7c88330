// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Defines the `Dfa` and the construction of a `Dfa` from the followpos table.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use attributes::Attributes;
use error::{Error, Result};
use followpos::FollowPos;
use position::{Position, PositionSet};

/// The key of a dfa state: the positions the automaton could be at.
pub type StateKey = PositionSet;

/// A deterministic finite automaton built directly from a regular expression.
///
/// The states are keyed by sets of positions. A state is accepting if and only
/// if it contains the position of the end marker. The dfa is not minimized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    start: StateKey,
    states: BTreeSet<StateKey>,
    accepting: BTreeSet<StateKey>,
    transitions: BTreeMap<StateKey, BTreeMap<char, StateKey>>,
    end: Position,
    fold_case: bool,
}

impl Dfa {
    /// Build the dfa for the expression described by `attrs` and `follow`.
    ///
    /// The start state is firstpos of the root. Unmarked states are taken
    /// from a worklist; for each symbol the union of followpos over the
    /// positions of that symbol is the target state. Each state is processed
    /// once. `state_limit` bounds the number of states.
    pub fn build(
        attrs: &Attributes,
        follow: &FollowPos,
        state_limit: Option<usize>,
    ) -> Result<Dfa> {
        let mut builder = Builder {
            end: attrs.end(),
            state_limit,
            states: BTreeSet::new(),
            accepting: BTreeSet::new(),
            unmarked: VecDeque::new(),
        };
        let start = attrs.firstpos(attrs.root()).clone();
        builder.discover(&start)?;

        let mut transitions: BTreeMap<StateKey, BTreeMap<char, StateKey>> = BTreeMap::new();
        while let Some(state) = builder.unmarked.pop_front() {
            for (symbol, target) in moves(&state, attrs, follow) {
                if target.is_empty() {
                    continue;
                }
                builder.discover(&target)?;
                trace!("{} --{}--> {}", state, symbol, target);
                transitions
                    .entry(state.clone())
                    .or_insert_with(BTreeMap::new)
                    .insert(symbol, target);
            }
        }

        debug!(
            "dfa has {} states ({} accepting) and {} transitions",
            builder.states.len(),
            builder.accepting.len(),
            transitions.values().map(BTreeMap::len).sum::<usize>()
        );

        Ok(Dfa {
            start,
            states: builder.states,
            accepting: builder.accepting,
            transitions,
            end: attrs.end(),
            fold_case: false,
        })
    }

    pub(crate) fn set_fold_case(&mut self, fold_case: bool) {
        self.fold_case = fold_case;
    }

    /// The start state.
    pub fn start(&self) -> &StateKey {
        &self.start
    }

    /// Iterate over the states in the order of their keys.
    pub fn states<'a>(&'a self) -> impl Iterator<Item = &'a StateKey> + 'a {
        self.states.iter()
    }

    /// Iterate over the accepting states in the order of their keys.
    pub fn accepting_states<'a>(&'a self) -> impl Iterator<Item = &'a StateKey> + 'a {
        self.accepting.iter()
    }

    /// Check if `state` is an accepting state of this dfa.
    pub fn is_accepting(&self, state: &StateKey) -> bool {
        self.accepting.contains(state)
    }

    /// The target of the transition from `state` on `symbol`, if there is one.
    pub fn transition(&self, state: &StateKey, symbol: char) -> Option<&StateKey> {
        self.transitions
            .get(state)
            .and_then(|row| row.get(&symbol))
    }

    /// Iterate over the transitions as `(from, symbol, to)`.
    pub fn transitions<'a>(
        &'a self,
    ) -> impl Iterator<Item = (&'a StateKey, char, &'a StateKey)> + 'a {
        self.transitions
            .iter()
            .flat_map(|(from, row)| row.iter().map(move |(&symbol, to)| (from, symbol, to)))
    }

    /// The symbols that label at least one transition.
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.transitions
            .values()
            .flat_map(|row| row.keys().cloned())
            .collect()
    }

    /// The position of the end marker.
    pub fn end_position(&self) -> Position {
        self.end
    }

    /// Run the dfa over `input` and report if it ends in an accepting state.
    pub fn accepts(&self, input: &str) -> bool {
        let mut state = &self.start;
        for c in input.chars() {
            let symbol = if self.fold_case {
                c.to_ascii_lowercase()
            } else {
                c
            };
            match self.transition(state, symbol) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_accepting(state)
    }
}

struct Builder {
    end: Position,
    state_limit: Option<usize>,
    states: BTreeSet<StateKey>,
    accepting: BTreeSet<StateKey>,
    unmarked: VecDeque<StateKey>,
}

impl Builder {
    // Record `state` if its key has not been seen; a key seen before is a no-op.
    fn discover(&mut self, state: &StateKey) -> Result<()> {
        if self.states.contains(state) {
            return Ok(());
        }
        if let Some(limit) = self.state_limit {
            if self.states.len() >= limit {
                return Err(Error::StateLimitExceeded(limit));
            }
        }

        trace!("new state {}", state);
        if state.contains(self.end) {
            self.accepting.insert(state.clone());
        }
        self.states.insert(state.clone());
        self.unmarked.push_back(state.clone());
        Ok(())
    }
}

// Partition the positions of `state` by symbol and union the followpos of
// each partition. The end marker has no symbol and never moves.
fn moves(state: &StateKey, attrs: &Attributes, follow: &FollowPos) -> BTreeMap<char, PositionSet> {
    let mut moves = BTreeMap::new();
    for &p in state {
        if let Some(symbol) = attrs.symbol(p) {
            moves
                .entry(symbol)
                .or_insert_with(PositionSet::new)
                .union_with(follow.get(p));
        }
    }
    moves
}

// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

// These properties compare the dfa's built by followpos with the regex crate
// and check the structure of the dfa's against the attribute tables.

extern crate followpos;
#[macro_use]
extern crate proptest;
extern crate regex;

use std::collections::BTreeSet;

use followpos::token::{augment, tokenize};
use followpos::{build_dfa, Attributes, Postfix};
use proptest::prelude::*;
use regex::Regex;

// Expressions over {a, b, c}. Alternations are always grouped and stars are
// always applied to a group so the text is also valid for the regex crate.
fn expression() -> BoxedStrategy<String> {
    let leaf = prop_oneof![Just("a"), Just("b"), Just("c")].prop_map(String::from);

    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| format!("{}{}", l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| format!("({}|{})", l, r)),
            inner.prop_map(|e| format!("({})*", e)),
        ]
    }).boxed()
}

fn attributes(expression: &str) -> Attributes {
    let tokens = augment(tokenize(expression, false).expect("Unexpected tokenize error"));
    let postfix = Postfix::from_tokens(&tokens).expect("Unexpected postfix error");
    Attributes::evaluate(&postfix).expect("Unexpected evaluate error")
}

proptest! {
    #[test]
    fn prop_dfa_accepts_same_strings_as_regex(
        expr in expression(),
        inputs in prop::collection::vec("[abc]{0,6}", 1..16),
    ) {
        let dfa = build_dfa(&expr).expect("Unexpected error building dfa");
        let regex = Regex::new(&format!("^(?:{})$", expr)).expect("Unexpected regex error");

        for input in &inputs {
            prop_assert_eq!(dfa.accepts(input), regex.is_match(input), "input {:?}", input);
        }
    }

    #[test]
    fn prop_start_state_is_firstpos_of_root(expr in expression()) {
        let dfa = build_dfa(&expr).expect("Unexpected error building dfa");
        let attrs = attributes(&expr);

        prop_assert_eq!(dfa.start(), attrs.firstpos(attrs.root()));
    }

    #[test]
    fn prop_accepting_iff_state_contains_end(expr in expression()) {
        let dfa = build_dfa(&expr).expect("Unexpected error building dfa");

        for state in dfa.states() {
            prop_assert_eq!(dfa.is_accepting(state), state.contains(dfa.end_position()));
        }
    }

    #[test]
    fn prop_transitions_stay_within_states(expr in expression()) {
        let dfa = build_dfa(&expr).expect("Unexpected error building dfa");
        let states: BTreeSet<_> = dfa.states().collect();

        for (from, _, to) in dfa.transitions() {
            prop_assert!(states.contains(from));
            prop_assert!(states.contains(to));
            prop_assert!(!to.is_empty());
        }
    }

    #[test]
    fn prop_every_letter_position_has_one_symbol(expr in expression()) {
        let attrs = attributes(&expr);
        let letters = expr.chars().filter(|c| c.is_ascii_alphabetic()).count();

        prop_assert_eq!(attrs.position_count(), letters + 1);
        prop_assert_eq!(attrs.symbol(attrs.end()), None);
        prop_assert_eq!(attrs.end().number(), attrs.position_count());
    }

    #[test]
    fn prop_building_twice_gives_equal_dfa(expr in expression()) {
        let first = build_dfa(&expr).expect("Unexpected error building dfa");
        let second = build_dfa(&expr).expect("Unexpected error building dfa");

        prop_assert_eq!(first, second);
    }
}

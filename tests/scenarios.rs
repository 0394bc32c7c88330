// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

#[macro_use]
extern crate assert_matches;
extern crate env_logger;
extern crate followpos;

use followpos::{build_dfa, Dfa, Error, Malformation, Position, PositionSet};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn dfa(expression: &str) -> Dfa {
    init_logger();
    build_dfa(expression).expect("Unexpected error building dfa")
}

fn set(numbers: &[usize]) -> PositionSet {
    numbers.iter().map(|&n| Position::new(n)).collect()
}

#[test]
fn single_letter_dfa_has_two_states() {
    let sut = dfa("a");

    assert_eq!(sut.states().count(), 2);
    assert_eq!(sut.alphabet().into_iter().collect::<Vec<_>>(), vec!['a']);
    assert!(sut.accepts("a"));
    assert!(!sut.accepts(""));
    assert!(!sut.accepts("aa"));
}

#[test]
fn alternation_dfa_accepts_either_letter() {
    let sut = dfa("a|b");

    assert!(sut.accepts("a"));
    assert!(sut.accepts("b"));
    assert!(!sut.accepts(""));
    assert!(!sut.accepts("ab"));
}

#[test]
fn star_dfa_is_single_accepting_state_with_self_loop() {
    let sut = dfa("a*");

    assert_eq!(sut.states().count(), 1);
    assert!(sut.is_accepting(sut.start()));
    assert_eq!(sut.transition(sut.start(), 'a'), Some(sut.start()));
    assert!(sut.accepts(""));
    assert!(sut.accepts("a"));
    assert!(sut.accepts("aaaa"));
}

#[test]
fn textbook_dfa_has_expected_states() {
    let sut = dfa("(a|b)*abb");

    let states: Vec<_> = sut.states().cloned().collect();
    let accepting: Vec<_> = sut.accepting_states().cloned().collect();

    assert_eq!(
        states,
        vec![
            set(&[1, 2, 3]),
            set(&[1, 2, 3, 4]),
            set(&[1, 2, 3, 5]),
            set(&[1, 2, 3, 6]),
        ]
    );
    assert_eq!(accepting, vec![set(&[1, 2, 3, 6])]);
    assert_eq!(sut.start(), &set(&[1, 2, 3]));
}

#[test]
fn textbook_dfa_accepts_strings_ending_in_abb() {
    let sut = dfa("(a|b)*abb");

    for input in &["abb", "aabb", "babb", "abbabb", "bbbabb"] {
        assert!(sut.accepts(input), "expected {} to be accepted", input);
    }
    for input in &["", "ab", "abbb", "abba", "bb"] {
        assert!(!sut.accepts(input), "expected {} to be rejected", input);
    }
}

#[test]
fn state_keys_display_as_position_lists() {
    let sut = dfa("(a|b)*abb");

    let result: Vec<_> = sut.states().map(|state| state.to_string()).collect();

    assert_eq!(result, vec!["{1,2,3}", "{1,2,3,4}", "{1,2,3,5}", "{1,2,3,6}"]);
}

#[test]
fn unclosed_group_is_unbalanced() {
    let result = build_dfa("(a|b");

    assert_matches!(result, Err(Error::UnbalancedParentheses { .. }));
}

#[test]
fn invalid_character_is_malformed() {
    let result = build_dfa("a$b");

    assert_matches!(
        result,
        Err(Error::MalformedExpression {
            reason: Malformation::InvalidCharacter('$'),
            ..
        })
    );
}

#[test]
fn dangling_operator_is_malformed() {
    for expression in &["a|", "|a", "*", "a||b", "(|)"] {
        let result = build_dfa(expression);

        assert_matches!(result, Err(Error::MalformedExpression { .. }));
    }
}

#[test]
fn empty_expression_accepts_only_empty_string() {
    let sut = dfa("");

    assert_eq!(sut.states().count(), 1);
    assert!(sut.accepts(""));
    assert!(!sut.accepts("a"));
}

#[test]
fn nested_groups_build_expected_language() {
    let sut = dfa("(a(b|c))*d");

    assert!(sut.accepts("d"));
    assert!(sut.accepts("abd"));
    assert!(sut.accepts("abacd"));
    assert!(!sut.accepts("ad"));
    assert!(!sut.accepts("abc"));
}

#[test]
fn repeated_letters_get_distinct_positions() {
    init_logger();
    let postfix = followpos::Postfix::from_tokens(&followpos::token::augment(
        followpos::token::tokenize("aa", false).unwrap(),
    )).unwrap();

    let sut = followpos::Attributes::evaluate(&postfix).unwrap();

    assert_eq!(sut.position_count(), 3);
    assert_eq!(sut.symbol(Position::new(1)), Some('a'));
    assert_eq!(sut.symbol(Position::new(2)), Some('a'));
}

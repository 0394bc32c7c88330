// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use attributes::Attributes;
use dfa::Dfa;
use error::Result;
use followpos::FollowPos;
use postfix::Postfix;
use token;

/// The context for generating a deterministic finite automaton from a
/// regular expression.
///
/// The context holds the options for the construction. The default context
/// is case sensitive and has no limit on the number of states.
#[derive(Debug, Clone, Default)]
pub struct Context {
    fold_case: bool,
    state_limit: Option<usize>,
}

impl Context {
    /// Create a new `Context` with the default options.
    pub fn new() -> Context {
        Context::default()
    }

    /// Treat upper and lower case letters as the same symbol.
    pub fn with_fold_case(mut self, fold_case: bool) -> Context {
        self.fold_case = fold_case;
        self
    }

    /// Fail with `Error::StateLimitExceeded` rather than build a dfa with
    /// more than `limit` states.
    pub fn with_state_limit(mut self, limit: usize) -> Context {
        self.state_limit = Some(limit);
        self
    }

    /// Generate a `Dfa` from the regular expression given by `regex`.
    pub fn from_regex(&self, regex: &str) -> Result<Dfa> {
        let tokens = token::augment(token::tokenize(regex, self.fold_case)?);
        let postfix = Postfix::from_tokens(&tokens)?;
        debug!("regex \"{}\" has postfix form {}", regex, postfix);

        let attrs = Attributes::evaluate(&postfix)?;
        debug!("regex \"{}\" has {} positions", regex, attrs.position_count());

        let follow = FollowPos::compute(&attrs);
        let mut dfa = Dfa::build(&attrs, &follow, self.state_limit)?;
        dfa.set_fold_case(self.fold_case);

        Ok(dfa)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use error::Error;

    #[test]
    fn context_default_is_case_sensitive() {
        let sut = Context::new();

        let dfa = sut.from_regex("Ab").expect("Unexpected error building dfa");

        assert!(dfa.accepts("Ab"));
        assert!(!dfa.accepts("ab"));
        assert_eq!(dfa.alphabet().into_iter().collect::<String>(), "Ab");
    }

    #[test]
    fn context_with_fold_case_merges_letter_cases() {
        let sut = Context::new().with_fold_case(true);

        let dfa = sut.from_regex("Ab|c").expect("Unexpected error building dfa");

        assert!(dfa.accepts("ab"));
        assert!(dfa.accepts("AB"));
        assert!(dfa.accepts("C"));
        assert_eq!(dfa.alphabet().into_iter().collect::<String>(), "abc");
    }

    #[test]
    fn context_with_state_limit_rejects_large_dfa() {
        let sut = Context::new().with_state_limit(1);

        let result = sut.from_regex("ab");

        assert_matches!(result, Err(Error::StateLimitExceeded(1)));
    }

    #[test]
    fn context_propagates_parse_errors() {
        let sut = Context::new();

        assert_matches!(sut.from_regex("(a"), Err(Error::UnbalancedParentheses { .. }));
        assert_matches!(sut.from_regex("a$"), Err(Error::MalformedExpression { .. }));
    }
}

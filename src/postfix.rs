// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Conversion of an augmented token sequence into reverse-Polish order.

use std::fmt::{self, Display};
use std::ops::Index;
use std::slice;

use error::{Error, Malformation, Result};
use token::{Token, TokenKind};

/// A regular expression in postfix (reverse-Polish) order.
///
/// Each index of the sequence stands for a node of the syntax tree. An
/// operator follows the completed subexpressions that are its operands and
/// the last token is the root of the whole expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    /// Convert an augmented token sequence (see `token::augment`) into
    /// postfix order.
    ///
    /// The converter is a shunting-yard with the precedence `*` > concat > `|`.
    /// Letters and `*` go directly to the output; `*` always applies to the
    /// subexpression that was just completed. The end marker closes the
    /// whole expression: every pending operator is emitted and the end marker
    /// is concatenated onto everything before it.
    pub fn from_tokens(tokens: &[Token]) -> Result<Postfix> {
        let mut output = Vec::with_capacity(tokens.len() + 1);
        let mut stack: Vec<Token> = Vec::new();
        let mut previous: Option<TokenKind> = None;

        for &token in tokens {
            match token.kind() {
                TokenKind::Letter | TokenKind::Star => output.push(token),
                TokenKind::Open => stack.push(token),
                TokenKind::Close => {
                    if previous == Some(TokenKind::Open) {
                        return Err(Error::malformed(
                            token.location(),
                            Malformation::EmptyGroup,
                        ));
                    }
                    close_group(token, &mut stack, &mut output)?;
                }
                TokenKind::Or | TokenKind::Concat => {
                    pop_operators(token, &mut stack, &mut output);
                    stack.push(token);
                }
                TokenKind::End => {
                    flush(&mut stack, &mut output)?;
                    let closes_expression = !output.is_empty();
                    output.push(token);
                    if closes_expression {
                        output.push(Token::concat(token.location()));
                    }
                }
            }
            previous = Some(token.kind());
        }
        flush(&mut stack, &mut output)?;

        Ok(Postfix { tokens: output })
    }

    /// The number of tokens (nodes) in the sequence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the tokens in postfix order.
    pub fn iter(&self) -> slice::Iter<Token> {
        self.tokens.iter()
    }
}

// Pop every operator that binds at least as tightly as `token`, stopping at
// the boundary of the enclosing group.
fn pop_operators(token: Token, stack: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(&top) = stack.last() {
        match (top.kind().precedence(), token.kind().precedence()) {
            (Some(top_prec), Some(prec)) if top_prec >= prec => {
                output.push(top);
                stack.pop();
            }
            _ => break,
        }
    }
}

fn close_group(close: Token, stack: &mut Vec<Token>, output: &mut Vec<Token>) -> Result<()> {
    loop {
        match stack.pop() {
            Some(ref top) if top.kind() == TokenKind::Open => return Ok(()),
            Some(top) => output.push(top),
            None => return Err(Error::unbalanced(close.location())),
        }
    }
}

fn flush(stack: &mut Vec<Token>, output: &mut Vec<Token>) -> Result<()> {
    while let Some(top) = stack.pop() {
        if top.kind() == TokenKind::Open {
            return Err(Error::unbalanced(top.location()));
        }
        output.push(top);
    }
    Ok(())
}

impl Index<usize> for Postfix {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

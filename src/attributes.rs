// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! The nullable, firstpos and lastpos attributes of every subexpression.

use error::{Error, Malformation, Result};
use position::{Position, PositionSet};
use postfix::Postfix;
use token::{Token, TokenKind};

/// The shape of the syntax tree node at an index of a postfix sequence.
///
/// Operands are given as the index of the node that is the root of the
/// operand's subexpression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// A letter or the end marker with its `Position`.
    Leaf(Position),
    /// Kleene star over the subexpression at the index.
    Star(usize),
    /// Alternation of two subexpressions.
    Or(usize, usize),
    /// Concatenation of two subexpressions.
    Concat(usize, usize),
}

/// The attributes of every node of a postfix sequence.
///
/// The attribute tables are parallel arrays indexed by the index of a node
/// in the postfix sequence. Each `Position` is also mapped to the symbol of
/// the letter it was assigned to.
#[derive(Debug, Clone)]
pub struct Attributes {
    nodes: Vec<Node>,
    nullable: Vec<bool>,
    firstpos: Vec<PositionSet>,
    lastpos: Vec<PositionSet>,
    symbols: Vec<Option<char>>,
    end: Position,
    root: usize,
}

impl Attributes {
    /// Compute the attributes in a single forward pass over `postfix`.
    ///
    /// Leaves get the next unused `Position`. Every set that is stored is
    /// its own copy; nothing is shared between indices.
    pub fn evaluate(postfix: &Postfix) -> Result<Attributes> {
        let mut attrs = Attributes {
            nodes: Vec::with_capacity(postfix.len()),
            nullable: Vec::with_capacity(postfix.len()),
            firstpos: Vec::with_capacity(postfix.len()),
            lastpos: Vec::with_capacity(postfix.len()),
            symbols: Vec::new(),
            end: Position::new(1),
            root: 0,
        };
        let mut end = None;
        let mut operands: Vec<usize> = Vec::new();

        for (index, &token) in postfix.iter().enumerate() {
            let node = match token.kind() {
                TokenKind::Letter => Node::Leaf(attrs.leaf(Some(token.value()))),
                TokenKind::End => {
                    let position = attrs.leaf(None);
                    if end.is_some() {
                        return Err(Error::malformed(
                            token.location(),
                            Malformation::DuplicateEndMarker,
                        ));
                    }
                    end = Some(position);
                    Node::Leaf(position)
                }
                TokenKind::Star => {
                    let inner = pop_operand(&mut operands, token)?;
                    attrs.star(inner)
                }
                TokenKind::Or => {
                    let (left, right) = pop_operands(&mut operands, token)?;
                    attrs.or(left, right)
                }
                TokenKind::Concat => {
                    let (left, right) = pop_operands(&mut operands, token)?;
                    attrs.concat(left, right)
                }
                TokenKind::Open | TokenKind::Close => {
                    return Err(Error::malformed(
                        token.location(),
                        Malformation::UnexpectedToken(token.value()),
                    ))
                }
            };
            attrs.nodes.push(node);
            operands.push(index);
        }

        let last = postfix.iter().last().map(Token::location).unwrap_or_default();
        match operands.len() {
            1 => attrs.root = operands[0],
            count => {
                return Err(Error::malformed(last, Malformation::DanglingOperands(count)))
            }
        }
        attrs.end = end.ok_or_else(|| Error::malformed(last, Malformation::MissingEndMarker))?;

        Ok(attrs)
    }

    fn leaf(&mut self, symbol: Option<char>) -> Position {
        self.symbols.push(symbol);
        let position = Position::new(self.symbols.len());

        self.push(
            false,
            PositionSet::singleton(position),
            PositionSet::singleton(position),
        );
        position
    }

    fn star(&mut self, inner: usize) -> Node {
        let firstpos = self.firstpos[inner].clone();
        let lastpos = self.lastpos[inner].clone();

        self.push(true, firstpos, lastpos);
        Node::Star(inner)
    }

    fn or(&mut self, left: usize, right: usize) -> Node {
        let nullable = self.nullable[left] || self.nullable[right];
        let firstpos = self.firstpos[left].union(&self.firstpos[right]);
        let lastpos = self.lastpos[left].union(&self.lastpos[right]);

        self.push(nullable, firstpos, lastpos);
        Node::Or(left, right)
    }

    fn concat(&mut self, left: usize, right: usize) -> Node {
        let nullable = self.nullable[left] && self.nullable[right];
        let firstpos = if self.nullable[left] {
            self.firstpos[left].union(&self.firstpos[right])
        } else {
            self.firstpos[left].clone()
        };
        let lastpos = if self.nullable[right] {
            self.lastpos[left].union(&self.lastpos[right])
        } else {
            self.lastpos[right].clone()
        };

        self.push(nullable, firstpos, lastpos);
        Node::Concat(left, right)
    }

    fn push(&mut self, nullable: bool, firstpos: PositionSet, lastpos: PositionSet) {
        self.nullable.push(nullable);
        self.firstpos.push(firstpos);
        self.lastpos.push(lastpos);
    }

    /// The number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The node at `index`.
    pub fn node(&self, index: usize) -> Node {
        self.nodes[index]
    }

    /// Iterate over the nodes in postfix order.
    pub fn nodes<'a>(&'a self) -> impl Iterator<Item = Node> + 'a {
        self.nodes.iter().cloned()
    }

    /// Whether the subexpression rooted at `index` matches the empty string.
    pub fn nullable(&self, index: usize) -> bool {
        self.nullable[index]
    }

    /// The positions that can match the first symbol of the subexpression
    /// rooted at `index`.
    pub fn firstpos(&self, index: usize) -> &PositionSet {
        &self.firstpos[index]
    }

    /// The positions that can match the last symbol of the subexpression
    /// rooted at `index`.
    pub fn lastpos(&self, index: usize) -> &PositionSet {
        &self.lastpos[index]
    }

    /// The index of the root of the whole expression.
    pub fn root(&self) -> usize {
        self.root
    }

    /// The `Position` of the end marker.
    pub fn end(&self) -> Position {
        self.end
    }

    /// The number of positions that were assigned.
    pub fn position_count(&self) -> usize {
        self.symbols.len()
    }

    /// The symbol of the letter at `position`.
    ///
    /// Returns `None` for the end marker (or for a position that was never
    /// assigned).
    pub fn symbol(&self, position: Position) -> Option<char> {
        self.symbols.get(position.index()).and_then(|symbol| *symbol)
    }
}

fn pop_operand(operands: &mut Vec<usize>, operator: Token) -> Result<usize> {
    operands.pop().ok_or_else(|| {
        Error::malformed(
            operator.location(),
            Malformation::MissingOperand(operator.value()),
        )
    })
}

fn pop_operands(operands: &mut Vec<usize>, operator: Token) -> Result<(usize, usize)> {
    let right = pop_operand(operands, operator)?;
    let left = pop_operand(operands, operator)?;
    Ok((left, right))
}

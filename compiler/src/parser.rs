use parcel::parsers::character::{alphabetic, expect_character};
use parcel::prelude::v1::*;
use thiserror::Error;

use super::ast;

/// Signals that a validated expression couldn't be classified into any
/// construction rule. This is never a user error: it means the validator
/// accepted a shape the parser doesn't cover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("internal construction error at offset {offset}: {reason}")]
pub struct InternalConstructionError {
    offset: usize,
    reason: String,
}

impl InternalConstructionError {
    pub fn new(offset: usize, reason: impl Into<String>) -> Self {
        Self {
            offset,
            reason: reason.into(),
        }
    }

    /// The character offset at which classification failed.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Parses an enumerated expression into its ast. The input is expected to
/// have been validated, any unconsumed input is reported as an
/// [InternalConstructionError].
///
/// # Example
///
/// ```
/// use nfa_compiler::ast::Expression;
/// use nfa_compiler::parse;
///
/// let input = "a+b".chars().enumerate().collect::<Vec<_>>();
///
/// assert_eq!(
///     Ok(Expression::union(Expression::Symbol('a'), Expression::Symbol('b'))),
///     parse(&input)
/// );
/// ```
pub fn parse(input: &[(usize, char)]) -> Result<ast::Expression, InternalConstructionError> {
    let res = union().parse(input).map_err(|err| {
        InternalConstructionError::new(0, format!("unspecified parse error occured: {}", err))
    })?;

    match res {
        MatchStatus::Match {
            remainder, inner, ..
        } => match remainder.first() {
            None => Ok(inner),
            Some(&(offset, c)) => Err(InternalConstructionError::new(
                offset,
                format!("unable to classify range starting at {:?}", c),
            )),
        },
        MatchStatus::NoMatch(remainder) => {
            let offset = remainder.first().map(|&(offset, _)| offset).unwrap_or(0);

            Err(InternalConstructionError::new(
                offset,
                "expression matches no construction rule",
            ))
        }
    }
}

// Union

/// The lowest precedence operator, splitting on the first `+` outside of a
/// group.
fn union<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], ast::Expression> {
    move |input: &'a [(usize, char)]| {
        parcel::join(
            concatenation(),
            parcel::optional(parcel::right(parcel::join(
                expect_character('+'),
                union(),
            ))),
        )
        .map(|(lhs, rhs)| match rhs {
            Some(rhs) => ast::Expression::union(lhs, rhs),
            None => lhs,
        })
        .parse(input)
    }
}

// Concatenation

fn concatenation<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], ast::Expression> {
    move |input: &'a [(usize, char)]| {
        parcel::join(
            operand(),
            parcel::optional(parcel::right(parcel::join(
                expect_character('.'),
                concatenation(),
            ))),
        )
        .map(|(lhs, rhs)| match rhs {
            Some(rhs) => ast::Expression::concatenation(lhs, rhs),
            None => lhs,
        })
        .parse(input)
    }
}

/// An operand may be an empty range, as in `(a+)`.
fn operand<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], ast::Expression> {
    parcel::optional(postfix()).map(|operand| operand.unwrap_or(ast::Expression::Empty))
}

// Star

fn postfix<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], ast::Expression> {
    parcel::join(atom(), parcel::optional(expect_character('*'))).map(|(atom, star)| match star {
        Some(_) => ast::Expression::star(atom),
        None => atom,
    })
}

// Atoms

fn atom<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], ast::Expression> {
    move |input: &'a [(usize, char)]| parcel::or(symbol(), || group()).parse(input)
}

fn group<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], ast::Expression> {
    parcel::right(parcel::join(
        expect_character('('),
        parcel::left(parcel::join(union(), expect_character(')'))),
    ))
    .map(ast::Expression::group)
}

// Terminals

fn symbol<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], ast::Expression> {
    alphabetic()
        .predicate(|c| c.is_ascii_lowercase())
        .map(ast::Expression::Symbol)
}

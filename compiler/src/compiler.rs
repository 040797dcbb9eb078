//! Provides methods and types to facilitate the compilation of a parsed
//! expression ast into an epsilon-NFA via Thompson's construction.
//!
//! # Example
//!
//! ```
//! use nfa_compiler::ast::Expression;
//! use nfa_compiler::compile;
//! use nfa_runtime::*;
//!
//! // approximate to `a`
//! let automaton = compile(&Expression::Symbol('a')).unwrap();
//!
//! assert_eq!(
//!     &[
//!         Transition::new(StateId::from(0), StateId::from(1), Symbol::Char('a')),
//!         Transition::epsilon(StateId::from(2), StateId::from(0)),
//!         Transition::epsilon(StateId::from(1), StateId::from(3)),
//!     ],
//!     automaton.transitions()
//! );
//! assert_eq!(Some(StateId::from(2)), automaton.initial_state().map(State::id));
//! ```

use log::{debug, error};
use nfa_runtime::{Automaton, State, StateId, Symbol, Transition};
use thiserror::Error;

use super::ast;
use super::parser::{parse, InternalConstructionError};
use super::validator::{validate, SyntaxError};

/// Any failure to turn an expression string into an automaton.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    InternalConstruction(#[from] InternalConstructionError),
}

/// A sub-automaton, enterable at `start` and accepting at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fragment {
    start: StateId,
    end: StateId,
}

impl Fragment {
    fn new(start: StateId, end: StateId) -> Self {
        Self { start, end }
    }
}

/// Owns the states and transitions of a single compilation. States are
/// referenced by their index into the arena.
#[derive(Debug, Default)]
struct Arena {
    state_cnt: usize,
    transitions: Vec<Transition>,
}

impl Arena {
    fn new_state(&mut self) -> StateId {
        let id = StateId::from(self.state_cnt);
        self.state_cnt += 1;
        id
    }

    fn transition(&mut self, from: StateId, to: StateId, symbol: Symbol) {
        self.transitions.push(Transition::new(from, to, symbol))
    }

    fn epsilon(&mut self, from: StateId, to: StateId) {
        self.transition(from, to, Symbol::Epsilon)
    }

    /// Finalizes the arena into an automaton with the provided entry and
    /// accepting states.
    fn into_automaton(
        self,
        initial: StateId,
        r#final: StateId,
    ) -> Result<Automaton, InternalConstructionError> {
        let states = (0..self.state_cnt)
            .map(StateId::from)
            .map(|id| match id {
                id if id == initial => State::new(id).as_initial(),
                id if id == r#final => State::new(id).as_final(),
                id => State::new(id),
            })
            .collect();

        Automaton::try_new(states, self.transitions).ok_or_else(|| {
            InternalConstructionError::new(0, "constructed automaton violates its invariants")
        })
    }
}

/// Accepts a parsed ast and compiles it into an automaton with a single
/// initial and single final state wrapping the expression's fragment.
///
/// State ids follow creation order: each operand is constructed before the
/// states an operator synthesizes around it, and the wrapping initial and
/// final states are created last.
pub fn compile(expr: &ast::Expression) -> Result<Automaton, InternalConstructionError> {
    let mut arena = Arena::default();

    let fragment = fragment(&mut arena, expr);
    let initial = arena.new_state();
    let r#final = arena.new_state();
    arena.epsilon(initial, fragment.start);
    arena.epsilon(fragment.end, r#final);

    arena.into_automaton(initial, r#final)
}

fn fragment(arena: &mut Arena, expr: &ast::Expression) -> Fragment {
    match expr {
        ast::Expression::Empty => {
            let start = arena.new_state();
            let end = arena.new_state();
            arena.epsilon(start, end);

            Fragment::new(start, end)
        }
        ast::Expression::Symbol(c) => {
            let start = arena.new_state();
            let end = arena.new_state();
            arena.transition(start, end, Symbol::Char(*c));

            Fragment::new(start, end)
        }
        ast::Expression::Union(lhs, rhs) => {
            let lhs = fragment(arena, lhs);
            let rhs = fragment(arena, rhs);
            let start = arena.new_state();
            let end = arena.new_state();

            arena.epsilon(start, lhs.start);
            arena.epsilon(start, rhs.start);
            arena.epsilon(lhs.end, end);
            arena.epsilon(rhs.end, end);

            Fragment::new(start, end)
        }
        ast::Expression::Concatenation(lhs, rhs) => {
            let lhs = fragment(arena, lhs);
            let rhs = fragment(arena, rhs);
            arena.epsilon(lhs.end, rhs.start);

            Fragment::new(lhs.start, rhs.end)
        }
        ast::Expression::Star(inner) => {
            let inner = fragment(arena, inner);
            let start = arena.new_state();
            let end = arena.new_state();

            // enter the loop
            arena.epsilon(start, inner.start);
            // skip, zero repetitions
            arena.epsilon(start, end);
            // repeat
            arena.epsilon(inner.end, inner.start);
            // exit after one or more repetitions
            arena.epsilon(inner.end, end);

            Fragment::new(start, end)
        }
        ast::Expression::Group(inner) => fragment(arena, inner),
    }
}

/// Builds an automaton from an expression that has already passed
/// validation.
///
/// The empty expression is represented by exactly an initial and a final
/// state joined by a single epsilon transition.
pub fn build(regex: &str) -> Result<Automaton, InternalConstructionError> {
    if regex.is_empty() {
        let mut arena = Arena::default();
        let initial = arena.new_state();
        let r#final = arena.new_state();
        arena.epsilon(initial, r#final);

        return arena.into_automaton(initial, r#final);
    }

    let input = regex.chars().enumerate().collect::<Vec<(usize, char)>>();
    let expr = parse(&input)?;
    let automaton = compile(&expr)?;

    debug!(
        "constructed automaton for {:?}: {} states, {} transitions",
        regex,
        automaton.states().len(),
        automaton.transitions().len()
    );
    Ok(automaton)
}

/// Validates then builds an automaton from an expression. No state is
/// constructed for an invalid expression.
///
/// # Example
///
/// ```
/// use nfa_compiler::{compile_str, ConvertError, SyntaxError};
///
/// let automaton = compile_str("(a+b).c").unwrap();
/// assert!(automaton.accepts("ac"));
/// assert!(!automaton.accepts("ab"));
///
/// assert_eq!(
///     Err(ConvertError::Syntax(SyntaxError::UnbalancedParentheses { position: 4 })),
///     compile_str("(a+b")
/// );
/// ```
pub fn compile_str(regex: &str) -> Result<Automaton, ConvertError> {
    validate(regex).map_err(|err| {
        debug!("rejected {:?}: {}", regex, err);
        err
    })?;

    build(regex).map_err(|err| {
        error!("validated expression {:?} failed to build: {}", regex, err);
        ConvertError::from(err)
    })
}

//! Provides the epsilon-NFA representation produced by the `nfa-compiler`
//! crate along with simulation of the language it recognizes.
//!
//! # Example
//!
//! ```rust
//! use nfa_runtime::*;
//!
//! // An automaton accepting exactly the string `a`.
//! let automaton = Automaton::try_new(
//!     vec![
//!         State::new(StateId::from(0)).as_initial(),
//!         State::new(StateId::from(1)).as_final(),
//!     ],
//!     vec![Transition::new(
//!         StateId::from(0),
//!         StateId::from(1),
//!         Symbol::Char('a'),
//!     )],
//! )
//! .expect("automaton violates its invariants");
//!
//! assert!(automaton.accepts("a"));
//! assert!(!automaton.accepts(""));
//! assert!(!automaton.accepts("aa"));
//! ```

pub mod dot;
pub mod matcher;
mod sparse_set;

use std::fmt::Display;

use matcher::{PatternEvaluatorMut, Simulation};

/// The marker rendered in place of an epsilon transition's symbol.
pub const EPSILON: char = 'ε';

/// An index into an automaton's states. Ids are assigned in creation order,
/// starting at 0, and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(usize);

impl StateId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl From<usize> for StateId {
    fn from(idx: usize) -> Self {
        Self(idx)
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// A 2-D coordinate assigned to a state for display.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the euclidean distance between two positions.
    pub fn distance(&self, other: &Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A node of the automaton.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    id: StateId,
    is_initial: bool,
    is_final: bool,
    position: Option<Position>,
}

impl State {
    /// Instantiates a new, non-accepting and non-initial, state without a
    /// position.
    #[must_use]
    pub const fn new(id: StateId) -> Self {
        Self {
            id,
            is_initial: false,
            is_final: false,
            position: None,
        }
    }

    /// Marks the state as the automaton's entry point.
    pub fn as_initial(mut self) -> Self {
        self.is_initial = true;
        self
    }

    /// Marks the state as accepting.
    pub fn as_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.set_position_mut(position);
        self
    }

    pub fn set_position_mut(&mut self, position: Position) {
        self.position = Some(position);
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn is_initial(&self) -> bool {
        self.is_initial
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Initial and final states are pinned in place during layout.
    pub fn is_anchor(&self) -> bool {
        self.is_initial || self.is_final
    }

    /// Returns the state's position, `None` until a layout has been applied.
    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

/// The label of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Traversable without consuming input.
    Epsilon,
    Char(char),
}

impl Symbol {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Epsilon => write!(f, "{}", EPSILON),
            Symbol::Char(c) => write!(f, "{}", c),
        }
    }
}

/// A directed, labeled edge between two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: StateId,
    pub to: StateId,
    pub symbol: Symbol,
}

impl Transition {
    pub const fn new(from: StateId, to: StateId, symbol: Symbol) -> Self {
        Self { from, to, symbol }
    }

    pub const fn epsilon(from: StateId, to: StateId) -> Self {
        Self::new(from, to, Symbol::Epsilon)
    }
}

impl Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} --{}--> {}", self.from, self.symbol, self.to)
    }
}

/// A collection of states and the transitions between them.
///
/// A default automaton is empty, having no states at all, and represents the
/// cleared display. Any non-empty automaton is constructed through
/// [Automaton::try_new], which upholds the following:
///
/// - state ids are contiguous, starting at 0, and match their index.
/// - exactly one state is initial.
/// - at least one state is final.
/// - every transition refers to an existing state.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Automaton {
    states: Vec<State>,
    transitions: Vec<Transition>,
}

impl Automaton {
    /// Instantiates an automaton, returning `None` if the provided states and
    /// transitions violate any of the automaton's invariants.
    pub fn try_new(states: Vec<State>, transitions: Vec<Transition>) -> Option<Self> {
        let ids_are_contiguous = states
            .iter()
            .enumerate()
            .all(|(idx, state)| state.id.as_usize() == idx);
        let has_single_initial_state = states.iter().filter(|state| state.is_initial).count() == 1;
        let has_final_state = states.iter().any(|state| state.is_final);
        let transitions_are_bound = transitions.iter().all(|transition| {
            transition.from.as_usize() < states.len() && transition.to.as_usize() < states.len()
        });

        if ids_are_contiguous && has_single_initial_state && has_final_state && transitions_are_bound
        {
            Some(Self {
                states,
                transitions,
            })
        } else {
            None
        }
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Mutably borrows the states. The slice can't be resized, preserving
    /// every invariant but a state's position.
    pub fn states_mut(&mut self) -> &mut [State] {
        &mut self.states
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Borrows a state by its id if it exists in the automaton.
    pub fn get(&self, id: StateId) -> Option<&State> {
        self.states.get(id.as_usize())
    }

    /// Returns the initial state, `None` only for an empty automaton.
    pub fn initial_state(&self) -> Option<&State> {
        self.states.iter().find(|state| state.is_initial)
    }

    pub fn final_states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.iter().filter(|state| state.is_final)
    }

    /// Returns all transitions leaving the provided state.
    pub fn outgoing(&self, id: StateId) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions
            .iter()
            .filter(move |transition| transition.from == id)
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Simulates the automaton against an input, returning `true` if the
    /// input is a member of the recognized language.
    pub fn accepts(&self, input: &str) -> bool {
        Simulation::new(self).initial_state().matches(input.chars())
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for state in self.states.iter() {
            let marker = match (state.is_initial, state.is_final) {
                (true, true) => "->*",
                (true, false) => "-> ",
                (false, true) => "  *",
                (false, false) => "   ",
            };
            writeln!(f, "{} {}", marker, state.id)?
        }

        for transition in self.transitions.iter() {
            writeln!(f, "{}", transition)?
        }

        Ok(())
    }
}

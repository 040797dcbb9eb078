use crate::sparse_set::SparseSet;
use crate::{Automaton, StateId, Symbol};

pub trait PatternEvaluatorMut: Sized {
    /// The input interable type to be compared.
    type Item;

    fn initial_state(mut self) -> Self {
        self.initial_state_mut();
        self
    }

    /// Defines the evaluator as being in the initial state. Without resetting
    /// contextual state.
    fn initial_state_mut(&mut self);

    /// Returns a boolean signifying if the match is in a final state.
    fn is_in_accept_state(&self) -> bool;

    /// Attempts to advance to the next state, returning an [Option] signifying
    /// the success of that advance.
    fn advance_mut<'a>(&mut self, next: &'a Self::Item) -> Option<&'a Self::Item>;

    fn matches<I>(&mut self, iter: I) -> bool
    where
        I: Iterator<Item = Self::Item>,
    {
        iter.fold(self.is_in_accept_state(), |_, item| {
            self.advance_mut(&item);

            self.is_in_accept_state()
        })
    }
}

/// Tracks the set of active states of an automaton as input is consumed.
///
/// # Examples
///
/// ```
/// use nfa_runtime::*;
/// use nfa_runtime::matcher::*;
///
/// let automaton = Automaton::try_new(
///     vec![
///         State::new(StateId::from(0)).as_initial(),
///         State::new(StateId::from(1)).as_final(),
///     ],
///     vec![Transition::new(StateId::from(0), StateId::from(1), Symbol::Char('a'))],
/// )
/// .unwrap();
///
/// let mut simulation = Simulation::new(&automaton).initial_state();
///
/// // Advances one character that matches the expected literal.
/// assert_eq!(Some(&'a'), simulation.advance_mut(&'a'));
/// assert!(simulation.is_in_accept_state());
///
/// // Fails to match 'b'.
/// simulation.initial_state_mut();
/// assert!(simulation.advance_mut(&'b').is_none());
/// assert!(!simulation.is_in_accept_state());
/// ```
pub struct Simulation<'a> {
    automaton: &'a Automaton,
    /// Outgoing edges indexed by source state.
    adjacency: Vec<Vec<(Symbol, StateId)>>,
    current: SparseSet,
    next: SparseSet,
    stack: Vec<StateId>,
}

impl<'a> Simulation<'a> {
    #[must_use]
    pub fn new(automaton: &'a Automaton) -> Self {
        let state_cnt = automaton.states().len();
        let adjacency = automaton.transitions().iter().fold(
            vec![vec![]; state_cnt],
            |mut adjacency: Vec<Vec<(Symbol, StateId)>>, transition| {
                adjacency[transition.from.as_usize()].push((transition.symbol, transition.to));
                adjacency
            },
        );

        Self {
            automaton,
            adjacency,
            current: SparseSet::new(state_cnt),
            next: SparseSet::new(state_cnt),
            stack: vec![],
        }
    }

    /// Returns the ids of all currently active states.
    pub fn active_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.current.iter().map(StateId::from)
    }
}

/// Inserts `start` and every state reachable from it over epsilon
/// transitions into `set`.
fn epsilon_closure(
    adjacency: &[Vec<(Symbol, StateId)>],
    set: &mut SparseSet,
    stack: &mut Vec<StateId>,
    start: StateId,
) {
    stack.push(start);

    while let Some(state) = stack.pop() {
        if !set.insert(state.as_usize()) {
            continue;
        }

        let epsilon_targets = adjacency[state.as_usize()]
            .iter()
            .filter(|(symbol, _)| symbol.is_epsilon())
            .map(|&(_, to)| to);
        stack.extend(epsilon_targets);
    }
}

impl<'a> PatternEvaluatorMut for Simulation<'a> {
    type Item = char;

    fn initial_state_mut(&mut self) {
        self.current.clear();

        if let Some(initial) = self.automaton.initial_state() {
            epsilon_closure(
                &self.adjacency,
                &mut self.current,
                &mut self.stack,
                initial.id(),
            );
        }
    }

    fn is_in_accept_state(&self) -> bool {
        self.current.iter().any(|idx| {
            self.automaton
                .get(StateId::from(idx))
                .map(|state| state.is_final())
                .unwrap_or(false)
        })
    }

    fn advance_mut<'b>(&mut self, next: &'b Self::Item) -> Option<&'b Self::Item> {
        let Self {
            adjacency,
            current,
            next: next_states,
            stack,
            ..
        } = self;
        let adjacency: &[Vec<(Symbol, StateId)>] = adjacency;

        next_states.clear();
        for idx in current.iter() {
            for &(symbol, to) in adjacency[idx].iter() {
                if symbol == Symbol::Char(*next) {
                    epsilon_closure(adjacency, next_states, stack, to);
                }
            }
        }

        std::mem::swap(current, next_states);
        (!self.current.is_empty()).then_some(next)
    }
}

//! Provides Graphviz DOT rendering of an automaton.

use std::fmt::Write;

use super::Automaton;

impl Automaton {
    /// Renders the automaton in the Graphviz DOT format. States with a
    /// position are pinned to it.
    ///
    /// # Example
    ///
    /// ```
    /// use nfa_runtime::*;
    ///
    /// let automaton = Automaton::try_new(
    ///     vec![
    ///         State::new(StateId::from(0)).as_initial(),
    ///         State::new(StateId::from(1)).as_final(),
    ///     ],
    ///     vec![Transition::epsilon(StateId::from(0), StateId::from(1))],
    /// )
    /// .unwrap();
    ///
    /// assert!(automaton.to_dot().contains("q0 -> q1 [label=\"ε\"];"));
    /// ```
    pub fn to_dot(&self) -> String {
        let mut out = String::new();

        // writing into a String is infallible.
        let _ = self.write_dot(&mut out);
        out
    }

    fn write_dot<W: Write>(&self, out: &mut W) -> std::fmt::Result {
        writeln!(out, "digraph nfa {{")?;
        writeln!(out, "    rankdir=LR;")?;
        writeln!(out, "    node [shape=circle];")?;

        if let Some(initial) = self.initial_state() {
            writeln!(out, "    start [shape=point, style=invis];")?;
            writeln!(out, "    start -> {};", initial.id())?;
        }

        for state in self.states() {
            let shape = if state.is_final() {
                "doublecircle"
            } else {
                "circle"
            };

            match state.position() {
                Some(position) => writeln!(
                    out,
                    "    {} [shape={}, pos=\"{:.1},{:.1}!\"];",
                    state.id(),
                    shape,
                    position.x,
                    // graphviz grows y upwards.
                    -position.y
                )?,
                None => writeln!(out, "    {} [shape={}];", state.id(), shape)?,
            }
        }

        for transition in self.transitions() {
            writeln!(
                out,
                "    {} -> {} [label=\"{}\"];",
                transition.from, transition.to, transition.symbol
            )?;
        }

        writeln!(out, "}}")
    }
}

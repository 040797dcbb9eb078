//! Provides the commands exposed to a rendering application.
//!
//! A [Converter] publishes immutable [Snapshot]s. A conversion is built
//! into a fresh snapshot that only replaces the published one once the whole
//! pipeline has succeeded, so a rejected expression never disturbs what is
//! currently displayed.

use std::sync::Arc;

use log::debug;
use nfa_runtime::Automaton;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::compiler::{compile_str, ConvertError};
use super::layout::{layout, Canvas, LayoutConfig};

/// A renderer-facing view of a state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateView {
    pub id: String,
    pub is_initial: bool,
    pub is_final: bool,
    pub x: f64,
    pub y: f64,
}

/// A renderer-facing view of a transition. Epsilon transitions carry the
/// `ε` symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionView {
    pub from: String,
    pub to: String,
    pub symbol: String,
}

/// An immutable, positioned automaton as handed to the renderer.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    states: Vec<StateView>,
    transitions: Vec<TransitionView>,
}

impl Snapshot {
    /// The cleared display, holding neither states nor transitions.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Captures an automaton. States that haven't been laid out are placed at
    /// the origin.
    pub fn from_automaton(automaton: &Automaton) -> Self {
        let states = automaton
            .states()
            .iter()
            .map(|state| {
                let position = state.position().unwrap_or_default();

                StateView {
                    id: state.id().to_string(),
                    is_initial: state.is_initial(),
                    is_final: state.is_final(),
                    x: position.x,
                    y: position.y,
                }
            })
            .collect();

        let transitions = automaton
            .transitions()
            .iter()
            .map(|transition| TransitionView {
                from: transition.from.to_string(),
                to: transition.to.to_string(),
                symbol: transition.symbol.to_string(),
            })
            .collect();

        Self {
            states,
            transitions,
        }
    }

    pub fn states(&self) -> &[StateView] {
        &self.states
    }

    pub fn transitions(&self) -> &[TransitionView] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Runs the validate, build and layout pipeline and publishes its result.
///
/// # Example
///
/// ```
/// use nfa_compiler::{Canvas, Converter};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut converter = Converter::with_rng(Canvas::default(), StdRng::seed_from_u64(0));
///
/// let snapshot = converter.convert("a.b").unwrap();
/// assert_eq!(6, snapshot.states().len());
///
/// // a rejected expression leaves the published snapshot in place.
/// assert!(converter.convert("a++b").is_err());
/// assert_eq!(snapshot, converter.snapshot());
///
/// assert!(converter.reset().is_empty());
/// ```
#[derive(Debug)]
pub struct Converter<R = StdRng> {
    canvas: Canvas,
    config: LayoutConfig,
    rng: R,
    current: Arc<Snapshot>,
}

impl Converter<StdRng> {
    /// Instantiates a converter seeded from system entropy.
    pub fn new(canvas: Canvas) -> Self {
        Self::with_rng(canvas, StdRng::from_entropy())
    }
}

impl<R: Rng> Converter<R> {
    /// Instantiates a converter drawing layout jitter from the provided
    /// random source.
    pub fn with_rng(canvas: Canvas, rng: R) -> Self {
        Self {
            canvas,
            config: LayoutConfig::default(),
            rng,
            current: Arc::new(Snapshot::empty()),
        }
    }

    pub fn with_layout_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Returns the currently published snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    /// Converts an expression into a positioned automaton, publishing it on
    /// success. On failure the previously published snapshot is retained.
    pub fn convert(&mut self, regex: &str) -> Result<Arc<Snapshot>, ConvertError> {
        let mut automaton = compile_str(regex)?;
        layout(
            automaton.states_mut(),
            self.canvas,
            &self.config,
            &mut self.rng,
        );

        let snapshot = Arc::new(Snapshot::from_automaton(&automaton));
        self.current = Arc::clone(&snapshot);
        debug!(
            "published {:?}: {} states, {} transitions",
            regex,
            snapshot.states().len(),
            snapshot.transitions().len()
        );

        Ok(snapshot)
    }

    /// Clears the published snapshot to the empty automaton.
    pub fn reset(&mut self) -> Arc<Snapshot> {
        self.current = Arc::new(Snapshot::empty());
        self.snapshot()
    }
}

//! Assigns display coordinates to the states of an automaton.
//!
//! Placement runs in three steps. The initial state is pinned to the left
//! margin and the final states to the right margin, with every other state
//! seeded onto a jittered grid between them. Pairs of states closer than the
//! minimum distance are then pushed apart for a fixed number of iterations,
//! and finally every coordinate is clamped into the padded canvas.
//!
//! Layout is purely cosmetic and has no bearing on the recognized language.

use log::trace;
use nfa_runtime::{Position, State};
use rand::Rng;

/// The angle, in radians, used to fan out coincident states.
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// The drawable area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(800.0, 500.0)
    }
}

/// Tunables for the layout engine.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal offset of the initial and final states from the canvas edge.
    pub margin: f64,
    /// Minimum offset of any state from the canvas edge after clamping.
    pub padding: f64,
    pub min_distance: f64,
    pub iterations: usize,
    /// Maximum offset, in either axis, applied to a grid cell.
    pub jitter: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: 80.0,
            padding: 30.0,
            min_distance: 60.0,
            iterations: 50,
            jitter: 10.0,
        }
    }
}

impl LayoutConfig {
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }
}

/// Positions every state on the canvas. The random source only drives the
/// grid jitter, so a seeded source yields a reproducible layout.
///
/// # Example
///
/// ```
/// use nfa_compiler::{compile_str, layout, Canvas, LayoutConfig};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut automaton = compile_str("a+b").unwrap();
/// let mut rng = StdRng::seed_from_u64(0);
///
/// layout(
///     automaton.states_mut(),
///     Canvas::default(),
///     &LayoutConfig::default(),
///     &mut rng,
/// );
///
/// assert!(automaton.states().iter().all(|state| state.position().is_some()));
/// ```
pub fn layout<R: Rng>(
    states: &mut [State],
    canvas: Canvas,
    config: &LayoutConfig,
    rng: &mut R,
) {
    place(states, canvas, config, rng);

    for iteration in 0..config.iterations {
        let pushes = repel(states, config.min_distance);
        trace!("layout iteration {}: {} pairs pushed apart", iteration, pushes);

        // no pair was within range, further iterations are no-ops.
        if pushes == 0 {
            break;
        }
    }

    clamp(states, canvas, config.padding);
}

/// Seeds the deterministic initial placement.
fn place<R: Rng>(states: &mut [State], canvas: Canvas, config: &LayoutConfig, rng: &mut R) {
    let center_y = canvas.height / 2.0;
    let usable_height = (canvas.height - 2.0 * config.margin).max(0.0);

    let final_cnt = states
        .iter()
        .filter(|state| state.is_final() && !state.is_initial())
        .count();
    let free_cnt = states.iter().filter(|state| !state.is_anchor()).count();

    let columns = (free_cnt as f64).sqrt().ceil().max(1.0) as usize;
    let rows = free_cnt.div_ceil(columns).max(1);
    let cell_width = (canvas.width - 2.0 * config.margin).max(0.0) / columns as f64;
    let cell_height = usable_height / rows as f64;

    let mut final_idx = 0;
    let mut free_idx = 0;
    for state in states.iter_mut() {
        let position = if state.is_initial() {
            Position::new(config.margin, center_y)
        } else if state.is_final() {
            let y = if final_cnt == 1 {
                center_y
            } else {
                let step = usable_height / final_cnt as f64;
                config.margin + step * (final_idx as f64 + 0.5)
            };
            final_idx += 1;

            Position::new(canvas.width - config.margin, y)
        } else {
            let (row, column) = (free_idx / columns, free_idx % columns);
            free_idx += 1;

            let x = config.margin + cell_width * (column as f64 + 0.5);
            let y = config.margin + cell_height * (row as f64 + 0.5);
            let (dx, dy) = if config.jitter > 0.0 {
                (
                    rng.gen_range(-config.jitter..=config.jitter),
                    rng.gen_range(-config.jitter..=config.jitter),
                )
            } else {
                (0.0, 0.0)
            };

            Position::new(x + dx, y + dy)
        };

        state.set_position_mut(position);
    }
}

/// Runs a single pass of pairwise repulsion, returning the number of pairs
/// that were pushed apart. Anchors never move, a free state paired with an
/// anchor absorbs the whole deficit while two free states split it.
fn repel(states: &mut [State], min_distance: f64) -> usize {
    let mut pushes = 0;

    for i in 0..states.len() {
        for j in (i + 1)..states.len() {
            let (a_fixed, b_fixed) = (states[i].is_anchor(), states[j].is_anchor());
            if a_fixed && b_fixed {
                continue;
            }

            let a = states[i].position().unwrap_or_default();
            let b = states[j].position().unwrap_or_default();
            let distance = a.distance(&b);
            if distance >= min_distance {
                continue;
            }

            let (ux, uy) = if distance > f64::EPSILON {
                ((b.x - a.x) / distance, (b.y - a.y) / distance)
            } else {
                // coincident, fan out along a per-pair angle.
                let angle = (i + j) as f64 * GOLDEN_ANGLE;
                (angle.cos(), angle.sin())
            };

            let deficit = min_distance - distance;
            let (a_share, b_share) = match (a_fixed, b_fixed) {
                (true, _) => (0.0, 1.0),
                (_, true) => (1.0, 0.0),
                _ => (0.5, 0.5),
            };

            states[i].set_position_mut(Position::new(
                a.x - ux * deficit * a_share,
                a.y - uy * deficit * a_share,
            ));
            states[j].set_position_mut(Position::new(
                b.x + ux * deficit * b_share,
                b.y + uy * deficit * b_share,
            ));
            pushes += 1;
        }
    }

    pushes
}

/// Clamps every state into `[padding, extent - padding]` on both axes. A
/// canvas too small to honor the padding collapses onto the padding line.
fn clamp(states: &mut [State], canvas: Canvas, padding: f64) {
    let max_x = (canvas.width - padding).max(padding);
    let max_y = (canvas.height - padding).max(padding);

    for state in states.iter_mut() {
        let position = state.position().unwrap_or_default();
        state.set_position_mut(Position::new(
            position.x.clamp(padding, max_x),
            position.y.clamp(padding, max_y),
        ));
    }
}

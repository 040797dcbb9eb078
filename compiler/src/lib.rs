//! Provides for the validation and compilation of a regular expression into
//! an epsilon-NFA via Thompson's construction, and for laying that automaton
//! out for display.
//!
//! The accepted grammar is deliberately small: lowercase letters, `.` for
//! concatenation, `+` for union, a postfix `*` and parentheses for grouping.
//!
//! # Example
//!
//! ```rust
//! // Validation and construction of an automaton is accomplished by a
//! // single function exposed in the `nfa_compiler` crate.
//! use nfa_compiler::compile_str;
//!
//! // A pattern accepting `ac` and `bc`.
//! let pattern = "(a+b).c";
//!
//! let automaton = compile_str(pattern).expect("failed to validate or build");
//!
//! // The resulting automaton can be simulated directly.
//! assert!(automaton.accepts("ac"));
//! assert!(automaton.accepts("bc"));
//! assert!(!automaton.accepts("c"));
//!
//! // Exactly one initial and one final state wrap the construction.
//! assert!(automaton.initial_state().is_some());
//! assert_eq!(1, automaton.final_states().count());
//! ```

pub mod ast;
pub mod compiler;
pub mod layout;
pub mod parser;
pub mod session;
pub mod validator;

pub use compiler::{build, compile, compile_str, ConvertError};
pub use layout::{layout, Canvas, LayoutConfig};
pub use parser::{parse, InternalConstructionError};
pub use session::{Converter, Snapshot, StateView, TransitionView};
pub use validator::{validate, SyntaxError};

//! Reactive binding layer.
//!
//! - `binding` - the rule table: for each output, the controls it reads and
//!   the function that rebuilds it
//! - `session` - one page's control state and outputs, with same-thread
//!   dispatch from a control change to the rules that depend on it
//!
//! # Invariants
//!
//! 1. A change to a control re-runs exactly the rules that list it.
//! 2. Every re-run sees the current value of all of its inputs.
//! 3. A recomputed figure replaces the previous one wholesale.
//! 4. Publishing the value a control already holds is a no-op.

mod binding;
mod session;

pub use binding::{Binding, BindingGraph, OutputId, RecomputeFn};
pub use session::{ControlChange, InvalidControlValue, Session, SessionView, Update};

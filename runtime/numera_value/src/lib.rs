//! Numera Value - observable boxed numeric values.
//!
//! A closed family of numeric variants (`IntNumber`, `DoubleNumber`)
//! behind one polymorphic interface for arithmetic, comparison, and
//! stringification.
//!
//! # Architecture
//!
//! - [`Number`]: the virtual operation set (add, sub, mul, div, uminus,
//!   `Display`), with declining base defaults and the division-by-zero
//!   notification channel
//! - [`Scalar`]: dispatch tag + raw value snapshots, and the left-wins
//!   coercion primitives (truncate into the int domain, widen into the
//!   double domain)
//! - [`Comparable`]: a capability independent of the number hierarchy —
//!   one three-way primitive, five derived relations, and a mismatch hook
//! - Channels come from `numera_signal`: a phased dispatch chain for
//!   division-by-zero, a plain listener list for property changes
//!
//! # Ownership
//!
//! Every arithmetic result is a newly owned `Box<dyn Number>`; operands
//! are borrowed read-only for the duration of the call. Instances are
//! single-threaded; only the diagnostic sink is shareable.
//!
//! # Re-exports
//!
//! The listener and sink types from `numera_signal` are re-exported for
//! convenience: `HookId`, `HookPhase`, `SharedSink`, and the sink
//! factories.

mod comparable;
mod double;
mod int;
mod number;
mod scalar;

#[cfg(test)]
mod tests;

pub use comparable::{
    incomparable, unordered, Comparable, CompareError, CompareErrorKind, CompareResult,
};
pub use double::DoubleNumber;
pub use int::IntNumber;
pub use number::{emit_div_by_zero, NotifyList, Number, PropertyChanged, SignalChain};
pub use scalar::Scalar;

// Re-export channel plumbing from numera_signal
pub use numera_signal::{
    buffer_sink, silent_sink, stderr_sink, HookId, HookPhase, SharedSink,
};

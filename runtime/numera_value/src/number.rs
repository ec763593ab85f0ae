//! The polymorphic number interface.
//!
//! `Number` is the common supertype of every boxed numeric variant. The
//! operation set is virtual: each concrete variant overrides the operations
//! it supports, and the base defaults decline by returning `None`
//! (UnsupportedOperation). Callers work through `&dyn Number` and own every
//! result as a fresh `Box<dyn Number>`; operands are borrowed read-only.
//!
//! Mixed-variant binary operations are resolved by the *left* operand: its
//! implementation coerces the right operand's [`Scalar`] into its own
//! representation before combining. The result type is always the left
//! operand's type.

use std::fmt;

use numera_signal::{DispatchChain, ListenerList, SharedSink};

use crate::scalar::Scalar;

/// Division-by-zero dispatch chain carried by every concrete number.
pub type SignalChain = DispatchChain<dyn Number>;

/// Property-changed listener list carried by every concrete number.
pub type NotifyList = ListenerList<PropertyChanged>;

/// Payload of the property-changed channel: which property was set, and to
/// what. Listeners interested in a single property filter by name
/// themselves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PropertyChanged {
    /// Name of the property that was set.
    pub property: &'static str,
    /// The newly stored value.
    pub value: Scalar,
}

/// Common interface of all boxed numeric values.
///
/// Stringification goes through the `Display` supertrait: integers render
/// as plain decimal digits, doubles in fixed six-decimal form.
pub trait Number: fmt::Display + 'static {
    /// Snapshot of the dispatch tag and raw value.
    fn scalar(&self) -> Scalar;

    /// Name of the concrete variant (`"int"`, `"double"`).
    fn type_name(&self) -> &'static str {
        self.scalar().type_name()
    }

    /// `self + other`. Base default declines.
    fn add(&self, _other: &dyn Number) -> Option<Box<dyn Number>> {
        None
    }

    /// `self - other`. Base default declines.
    fn sub(&self, _other: &dyn Number) -> Option<Box<dyn Number>> {
        None
    }

    /// `self * other`. Base default declines.
    fn mul(&self, _other: &dyn Number) -> Option<Box<dyn Number>> {
        None
    }

    /// `self / other`.
    ///
    /// When `other` holds the numeric zero of its own variant, one
    /// division-by-zero sequence is emitted **on `other`** and the result
    /// is `None`. Base default declines without emitting.
    fn div(&self, _other: &dyn Number) -> Option<Box<dyn Number>> {
        None
    }

    /// Additive inverse. Always succeeds.
    fn uminus(&self) -> Box<dyn Number>;

    /// The instance's division-by-zero channel.
    fn div_by_zero(&self) -> &SignalChain;

    /// The instance's property-changed channel.
    fn notify(&self) -> &NotifyList;

    /// Where this instance's default handlers report.
    fn sink(&self) -> &SharedSink;

    /// Default handler of the division-by-zero channel, overridable per
    /// concrete variant. The base default reports through the diagnostic
    /// sink; it does not fail.
    fn on_division_by_zero(&self) {
        self.sink().report(&format!(
            "error: division by zero: {} divisor is {}",
            self.type_name(),
            self
        ));
    }
}

/// Run one division-by-zero emission on `subject`, in channel order:
/// every before-phase listener, then `subject`'s default handler, then
/// every after-phase listener. Nothing can cancel or short-circuit the
/// sequence.
pub fn emit_div_by_zero(subject: &dyn Number) {
    tracing::debug!(ty = subject.type_name(), "division by zero signalled");
    subject
        .div_by_zero()
        .emit(subject, |s: &dyn Number| s.on_division_by_zero());
}

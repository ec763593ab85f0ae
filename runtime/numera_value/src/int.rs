//! Boxed 64-bit integer values.

use std::fmt;

use numera_signal::{stderr_sink, SharedSink};

use crate::number::{emit_div_by_zero, NotifyList, Number, PropertyChanged, SignalChain};
use crate::scalar::Scalar;

/// Concrete integer number.
///
/// Arithmetic runs in the integer domain with two's-complement wrapping;
/// the right operand of a binary operation is truncated into that domain
/// first. Setting the value always emits one property-changed notification,
/// even when the new value equals the old one.
pub struct IntNumber {
    value: i64,
    div_by_zero: SignalChain,
    notify: NotifyList,
    sink: SharedSink,
}

impl IntNumber {
    /// Create a zero-valued integer.
    pub fn new() -> Self {
        Self::new_with_value(0)
    }

    /// Create an integer holding `value`.
    pub fn new_with_value(value: i64) -> Self {
        IntNumber {
            value,
            div_by_zero: SignalChain::new(),
            notify: NotifyList::new(),
            sink: stderr_sink(),
        }
    }

    /// Reroute this instance's default-handler reports.
    #[must_use]
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    /// Current value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Store `value` and notify. The notification fires unconditionally on
    /// every call, including sets to the current value.
    pub fn set_value(&mut self, value: i64) {
        self.value = value;
        self.notify.emit(&PropertyChanged {
            property: "value",
            value: Scalar::Int(value),
        });
    }

    fn combine(&self, other: &dyn Number, op: fn(i64, i64) -> i64) -> Option<Box<dyn Number>> {
        let rhs = other.scalar().as_int();
        Some(Box::new(IntNumber::new_with_value(op(self.value, rhs))))
    }
}

impl Default for IntNumber {
    fn default() -> Self {
        Self::new()
    }
}

impl Number for IntNumber {
    fn scalar(&self) -> Scalar {
        Scalar::Int(self.value)
    }

    fn add(&self, other: &dyn Number) -> Option<Box<dyn Number>> {
        self.combine(other, i64::wrapping_add)
    }

    fn sub(&self, other: &dyn Number) -> Option<Box<dyn Number>> {
        self.combine(other, i64::wrapping_sub)
    }

    fn mul(&self, other: &dyn Number) -> Option<Box<dyn Number>> {
        self.combine(other, i64::wrapping_mul)
    }

    fn div(&self, other: &dyn Number) -> Option<Box<dyn Number>> {
        if other.scalar().is_zero() {
            emit_div_by_zero(other);
            return None;
        }
        // A double divisor inside (-1.0, 1.0) truncates to zero in the
        // integer domain; that is still a division by zero.
        let divisor = other.scalar().as_int();
        if divisor == 0 {
            emit_div_by_zero(other);
            return None;
        }
        Some(Box::new(IntNumber::new_with_value(
            self.value.wrapping_div(divisor),
        )))
    }

    fn uminus(&self) -> Box<dyn Number> {
        // wrapping_neg keeps negation total: i64::MIN maps to itself, so
        // double negation is the identity everywhere.
        Box::new(IntNumber::new_with_value(self.value.wrapping_neg()))
    }

    fn div_by_zero(&self) -> &SignalChain {
        &self.div_by_zero
    }

    fn notify(&self) -> &NotifyList {
        &self.notify
    }

    fn sink(&self) -> &SharedSink {
        &self.sink
    }
}

impl fmt::Display for IntNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

//! Boxed 64-bit floating-point values.

use std::fmt;

use numera_signal::{stderr_sink, SharedSink};

use crate::number::{emit_div_by_zero, NotifyList, Number, PropertyChanged, SignalChain};
use crate::scalar::Scalar;

/// Concrete double-precision number.
///
/// Arithmetic runs in the double domain; the right operand of a binary
/// operation is widened into that domain first. The divide-by-zero test is
/// exact comparison with `0.0` — no epsilon. Setting the value always
/// emits one property-changed notification.
pub struct DoubleNumber {
    value: f64,
    div_by_zero: SignalChain,
    notify: NotifyList,
    sink: SharedSink,
}

impl DoubleNumber {
    /// Create a zero-valued double.
    pub fn new() -> Self {
        Self::new_with_value(0.0)
    }

    /// Create a double holding `value`.
    pub fn new_with_value(value: f64) -> Self {
        DoubleNumber {
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
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Store `value` and notify. The notification fires unconditionally on
    /// every call, including sets to the current value.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.notify.emit(&PropertyChanged {
            property: "value",
            value: Scalar::Double(value),
        });
    }

    fn combine(&self, other: &dyn Number, op: fn(f64, f64) -> f64) -> Option<Box<dyn Number>> {
        let rhs = other.scalar().as_double();
        Some(Box::new(DoubleNumber::new_with_value(op(self.value, rhs))))
    }
}

impl Default for DoubleNumber {
    fn default() -> Self {
        Self::new()
    }
}

impl Number for DoubleNumber {
    fn scalar(&self) -> Scalar {
        Scalar::Double(self.value)
    }

    fn add(&self, other: &dyn Number) -> Option<Box<dyn Number>> {
        self.combine(other, |a, b| a + b)
    }

    fn sub(&self, other: &dyn Number) -> Option<Box<dyn Number>> {
        self.combine(other, |a, b| a - b)
    }

    fn mul(&self, other: &dyn Number) -> Option<Box<dyn Number>> {
        self.combine(other, |a, b| a * b)
    }

    fn div(&self, other: &dyn Number) -> Option<Box<dyn Number>> {
        if other.scalar().is_zero() {
            emit_div_by_zero(other);
            return None;
        }
        self.combine(other, |a, b| a / b)
    }

    fn uminus(&self) -> Box<dyn Number> {
        Box::new(DoubleNumber::new_with_value(-self.value))
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

impl fmt::Display for DoubleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.value)
    }
}

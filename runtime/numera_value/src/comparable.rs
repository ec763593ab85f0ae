//! The comparison capability.
//!
//! `Comparable` is independent of the number hierarchy: any type may
//! implement it. One primitive — `compare`, yielding a three-state
//! [`Ordering`] rather than a numeric difference — drives five derived
//! relations that are computed structurally and must not be overridden,
//! so that `eq`/`gt`/`lt`/`ge`/`le` always agree with the primitive.
//!
//! Comparing against a capability implementer of an incompatible concrete
//! type invokes the `on_incompatible` hook and fails with a distinguishable
//! error; it never silently reports equality.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use crate::double::DoubleNumber;
use crate::int::IntNumber;
use crate::number::Number;

/// Typed category of a failed comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompareErrorKind {
    /// The operands' concrete types cannot be compared with each other.
    Incompatible {
        left: &'static str,
        right: &'static str,
    },
    /// The operand types are fine but the values admit no ordering (NaN).
    Unordered,
}

impl fmt::Display for CompareErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incompatible { left, right } => {
                write!(f, "cannot compare {left} with {right}")
            }
            Self::Unordered => write!(f, "operands admit no ordering"),
        }
    }
}

/// A comparison that could not produce an ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareError {
    /// Structured category.
    pub kind: CompareErrorKind,
    /// Human-readable message, equal to `kind.to_string()`.
    pub message: String,
}

impl CompareError {
    fn from_kind(kind: CompareErrorKind) -> Self {
        let message = kind.to_string();
        CompareError { kind, message }
    }
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CompareError {}

/// Comparison between incompatible concrete types.
#[cold]
pub fn incomparable(left: &'static str, right: &'static str) -> CompareError {
    CompareError::from_kind(CompareErrorKind::Incompatible { left, right })
}

/// Comparison whose operands admit no ordering.
#[cold]
pub fn unordered() -> CompareError {
    CompareError::from_kind(CompareErrorKind::Unordered)
}

/// Result of a comparison or a derived relation.
pub type CompareResult<T> = Result<T, CompareError>;

/// Capability for three-way comparison.
///
/// Implementers provide `compare`, `as_any`, and `type_label`; the derived
/// relations are final by convention and must be left at their provided
/// definitions.
pub trait Comparable {
    /// Dynamic view for concrete-type checks in `compare` implementations.
    fn as_any(&self) -> &dyn Any;

    /// Name of the implementing concrete type, used in mismatch reports.
    fn type_label(&self) -> &'static str;

    /// Three-way comparison primitive.
    ///
    /// Implementations must invoke [`on_incompatible`](Self::on_incompatible)
    /// and return an [`incomparable`] error when `other`'s concrete type is
    /// not comparable with `Self`.
    fn compare(&self, other: &dyn Comparable) -> CompareResult<Ordering>;

    /// Hook invoked when `compare` receives an incompatible operand. The
    /// base default reports the mismatch without failing the call.
    fn on_incompatible(&self) {
        tracing::warn!(ty = self.type_label(), "comparison with incompatible type");
    }

    /// `self == other`, derived from [`compare`](Self::compare).
    fn eq(&self, other: &dyn Comparable) -> CompareResult<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    /// `self > other`, derived from [`compare`](Self::compare).
    fn gt(&self, other: &dyn Comparable) -> CompareResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// `self < other`, derived from [`compare`](Self::compare).
    fn lt(&self, other: &dyn Comparable) -> CompareResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// `self >= other`, the negation of [`lt`](Self::lt).
    fn ge(&self, other: &dyn Comparable) -> CompareResult<bool> {
        Ok(!self.lt(other)?)
    }

    /// `self <= other`, the negation of [`gt`](Self::gt).
    fn le(&self, other: &dyn Comparable) -> CompareResult<bool> {
        Ok(!self.gt(other)?)
    }
}

/// Widened view of a comparable operand that is a number, if it is one.
///
/// The numeric variants are mutually comparable; everything else is
/// incompatible with them.
fn numeric_value(other: &dyn Comparable) -> Option<f64> {
    if let Some(int) = other.as_any().downcast_ref::<IntNumber>() {
        Some(int.scalar().as_double())
    } else if let Some(double) = other.as_any().downcast_ref::<DoubleNumber>() {
        Some(double.value())
    } else {
        None
    }
}

fn compare_numeric(
    subject: &(impl Comparable + Number),
    other: &dyn Comparable,
) -> CompareResult<Ordering> {
    let Some(rhs) = numeric_value(other) else {
        subject.on_incompatible();
        return Err(incomparable(subject.type_label(), other.type_label()));
    };
    subject
        .scalar()
        .as_double()
        .partial_cmp(&rhs)
        .ok_or_else(unordered)
}

impl Comparable for IntNumber {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_label(&self) -> &'static str {
        "int"
    }

    fn compare(&self, other: &dyn Comparable) -> CompareResult<Ordering> {
        compare_numeric(self, other)
    }

    fn on_incompatible(&self) {
        self.sink()
            .report(&format!("error: {}: comparison with incompatible type", self.type_label()));
    }
}

impl Comparable for DoubleNumber {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_label(&self) -> &'static str {
        "double"
    }

    fn compare(&self, other: &dyn Comparable) -> CompareResult<Ordering> {
        compare_numeric(self, other)
    }

    fn on_incompatible(&self) {
        self.sink()
            .report(&format!("error: {}: comparison with incompatible type", self.type_label()));
    }
}

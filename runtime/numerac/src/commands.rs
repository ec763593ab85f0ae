//! Demonstration scenarios.
//!
//! Each command builds its output as a transcript (`Vec<String>`) so the
//! scenarios stay unit-testable; the binary prints the lines. Default
//! handlers report into a capturing sink that is merged into the
//! transcript where the reports occurred.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use numera_signal::{buffer_sink, HookPhase};
use numera_value::{DoubleNumber, IntNumber, Number, PropertyChanged};

/// Mixed-type arithmetic with property-changed listeners, ending in a
/// division by a zero-valued double.
pub fn run_demo() -> Vec<String> {
    tracing::debug!("running the mixed-arithmetic demonstration");

    let transcript = Rc::new(RefCell::new(Vec::<String>::new()));
    let diagnostics = buffer_sink();

    let mut i = IntNumber::new();
    let mut d = DoubleNumber::new().with_sink(Arc::clone(&diagnostics));

    for n in [&i as &dyn Number, &d as &dyn Number] {
        let log = Rc::clone(&transcript);
        n.notify().connect(move |e: &PropertyChanged| {
            log.borrow_mut()
                .push(format!("Property \"{}\" is set to {}.", e.property, e.value));
        });
    }

    i.set_value(100);
    d.set_value(12.345);

    if let Some(sum) = i.add(&d) {
        transcript.borrow_mut().push(format!("{i} + {d} is {sum}."));
    }
    if let Some(sum) = d.add(&i) {
        transcript.borrow_mut().push(format!("{d} + {i} is {sum}."));
    }

    d.set_value(0.0);
    if let Some(quotient) = i.div(&d) {
        transcript
            .borrow_mut()
            .push(format!("{i} / {d} is {quotient}."));
    }
    for line in diagnostics.get_output().lines() {
        transcript.borrow_mut().push(line.to_string());
    }

    let lines = transcript.borrow().clone();
    lines
}

/// Double arithmetic, then a division by zero with one listener in each
/// phase around the default handler, then unary minus.
pub fn run_phases() -> Vec<String> {
    tracing::debug!("running the listener-phase demonstration");

    let mut transcript = Vec::new();
    let diagnostics = buffer_sink();

    let mut d1 = DoubleNumber::new_with_value(20.0);
    let mut d2 = DoubleNumber::new_with_value(10.0).with_sink(Arc::clone(&diagnostics));

    for (label, result) in [
        ("+", d1.add(&d2)),
        ("-", d1.sub(&d2)),
        ("*", d1.mul(&d2)),
        ("/", d1.div(&d2)),
    ] {
        match result {
            Some(r) => transcript.push(format!(
                "{:.2} {label} {:.2} = {:.2}",
                d1.value(),
                d2.value(),
                r.scalar().as_double()
            )),
            None => transcript.push(format!("Operation {label} failed!")),
        }
    }

    d2.set_value(0.0);
    let before = Arc::clone(&diagnostics);
    d2.div_by_zero().connect(HookPhase::Before, move |_| {
        before.report("Error: division by zero, before the default handler.");
    });
    let after = Arc::clone(&diagnostics);
    d2.div_by_zero().connect(HookPhase::After, move |_| {
        after.report("Error: division by zero, after the default handler.");
    });

    if d1.div(&d2).is_none() {
        transcript.push("Operation / failed!".to_string());
    }
    for line in diagnostics.get_output().lines() {
        transcript.push(line.to_string());
    }

    d1.set_value(-20.0);
    let negated = d1.uminus();
    transcript.push(format!(
        "-({:.2}) = {:.2}",
        d1.value(),
        negated.scalar().as_double()
    ));

    transcript
}

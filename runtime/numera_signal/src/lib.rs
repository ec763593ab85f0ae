//! Numera Signal - ordered listener dispatch for the Numera runtime.
//!
//! This crate provides the notification machinery shared by all observable
//! values:
//!
//! - `DispatchChain`: an emission order made explicit as data — before-phase
//!   listeners, a default-handler slot, after-phase listeners — used by the
//!   division-by-zero channel
//! - `ListenerList`: registration-ordered listeners with no default handler,
//!   used by the property-changed channel
//! - Diagnostic sinks: where default handlers write their reports (stderr,
//!   an in-memory buffer for capture, or nowhere)
//!
//! Everything here is single-threaded and synchronous: emission runs on the
//! caller's stack, and a listener that blocks delays the triggering call.

mod chain;
mod notify;
mod sink;

pub use chain::{DispatchChain, HookId, HookPhase};
pub use notify::ListenerList;
pub use sink::{
    buffer_sink, silent_sink, stderr_sink, BufferSink, SharedSink, SinkImpl, StderrSink,
};

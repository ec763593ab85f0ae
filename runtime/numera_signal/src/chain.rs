//! Dispatch chain with an explicit default-handler slot.
//!
//! The emission order — before-phase listeners, then the subject's default
//! handler, then after-phase listeners — is stored as an ordered list of
//! entries rather than recomputed at emission time. This makes the ordering
//! a plain, inspectable data structure instead of emergent behavior.
//!
//! Listeners run unconditionally: there is no cancellation, and no listener
//! can suppress the default handler or the listeners after it.

use std::cell::{Cell, RefCell};

use smallvec::{smallvec, SmallVec};

/// Handle to a connected listener, used to disconnect it later.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HookId(u64);

impl HookId {
    pub(crate) fn from_raw(id: u64) -> Self {
        HookId(id)
    }

    pub(crate) fn raw(self) -> u64 {
        self.0
    }
}

/// Position of a listener relative to the default handler.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HookPhase {
    /// Runs before the default handler, in registration order.
    Before,
    /// Runs after the default handler, in registration order.
    After,
}

type Slot<E> = Box<dyn FnMut(&E)>;

/// One position in the emission order.
enum Entry<E: ?Sized> {
    Before { id: u64, slot: Slot<E> },
    Default,
    After { id: u64, slot: Slot<E> },
}

/// Ordered listener chain around a default handler.
///
/// New chains hold the single `Default` marker. Before-phase listeners are
/// inserted immediately ahead of the marker (so earlier registrations run
/// earlier); after-phase listeners are appended at the end.
///
/// # Contract
///
/// Re-entrant emission — a listener or the default handler triggering the
/// same chain again — is a programming error and panics. So does connecting
/// or disconnecting a listener from inside a running dispatch.
pub struct DispatchChain<E: ?Sized> {
    entries: RefCell<SmallVec<[Entry<E>; 4]>>,
    next_id: Cell<u64>,
    emitting: Cell<bool>,
}

impl<E: ?Sized> DispatchChain<E> {
    /// Create an empty chain containing only the default-handler slot.
    pub fn new() -> Self {
        DispatchChain {
            entries: RefCell::new(smallvec![Entry::Default]),
            next_id: Cell::new(0),
            emitting: Cell::new(false),
        }
    }

    /// Connect a listener in the given phase. Returns a handle for
    /// [`disconnect`](Self::disconnect).
    pub fn connect(&self, phase: HookPhase, slot: impl FnMut(&E) + 'static) -> HookId {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));

        let mut entries = self.entries.borrow_mut();
        match phase {
            HookPhase::Before => {
                let anchor = entries
                    .iter()
                    .position(|e| matches!(e, Entry::Default))
                    .unwrap_or(entries.len());
                entries.insert(
                    anchor,
                    Entry::Before {
                        id,
                        slot: Box::new(slot),
                    },
                );
            }
            HookPhase::After => entries.push(Entry::After {
                id,
                slot: Box::new(slot),
            }),
        }
        HookId(id)
    }

    /// Remove a previously connected listener.
    ///
    /// Returns `false` if the handle was already disconnected.
    pub fn disconnect(&self, hook: HookId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let len = entries.len();
        entries.retain(|e| {
            !matches!(e, Entry::Before { id, .. } | Entry::After { id, .. } if *id == hook.0)
        });
        entries.len() != len
    }

    /// Number of connected listeners (the default slot is not counted).
    pub fn listener_count(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|e| !matches!(e, Entry::Default))
            .count()
    }

    /// Run one full emission: before listeners, `default`, after listeners.
    ///
    /// # Panics
    ///
    /// Panics on re-entrant emission of the same chain.
    pub fn emit(&self, event: &E, mut default: impl FnMut(&E)) {
        assert!(
            !self.emitting.replace(true),
            "re-entrant emission on a dispatch chain"
        );
        {
            let mut entries = self.entries.borrow_mut();
            for entry in entries.iter_mut() {
                match entry {
                    Entry::Before { slot, .. } | Entry::After { slot, .. } => slot(event),
                    Entry::Default => default(event),
                }
            }
        }
        self.emitting.set(false);
    }
}

impl<E: ?Sized> Default for DispatchChain<E> {
    fn default() -> Self {
        Self::new()
    }
}

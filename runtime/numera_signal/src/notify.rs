//! Plain ordered listener list.
//!
//! Used by channels that have no default handler — notably the
//! property-changed channel. Listeners run in registration order and every
//! listener sees every event; filtering (by property name, for example) is
//! the listener's own responsibility.

use std::cell::{Cell, RefCell};

use smallvec::SmallVec;

use crate::chain::HookId;

type Slot<E> = Box<dyn FnMut(&E)>;

/// Registration-ordered listeners without a default handler.
///
/// Same dispatch contract as [`DispatchChain`](crate::DispatchChain):
/// emission is synchronous and inline, re-entrant emission panics, and the
/// list must not be mutated from inside a running dispatch.
pub struct ListenerList<E: ?Sized> {
    slots: RefCell<SmallVec<[(u64, Slot<E>); 4]>>,
    next_id: Cell<u64>,
    emitting: Cell<bool>,
}

impl<E: ?Sized> ListenerList<E> {
    /// Create an empty list.
    pub fn new() -> Self {
        ListenerList {
            slots: RefCell::new(SmallVec::new()),
            next_id: Cell::new(0),
            emitting: Cell::new(false),
        }
    }

    /// Connect a listener. Returns a handle for [`disconnect`](Self::disconnect).
    pub fn connect(&self, slot: impl FnMut(&E) + 'static) -> HookId {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.slots.borrow_mut().push((id, Box::new(slot)));
        HookId::from_raw(id)
    }

    /// Remove a previously connected listener.
    ///
    /// Returns `false` if the handle was already disconnected.
    pub fn disconnect(&self, hook: HookId) -> bool {
        let mut slots = self.slots.borrow_mut();
        let len = slots.len();
        slots.retain(|(id, _)| *id != hook.raw());
        slots.len() != len
    }

    /// Number of connected listeners.
    pub fn listener_count(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Deliver `event` to every listener, in registration order.
    ///
    /// # Panics
    ///
    /// Panics on re-entrant emission of the same list.
    pub fn emit(&self, event: &E) {
        assert!(
            !self.emitting.replace(true),
            "re-entrant emission on a listener list"
        );
        {
            let mut slots = self.slots.borrow_mut();
            for (_, slot) in slots.iter_mut() {
                slot(event);
            }
        }
        self.emitting.set(false);
    }
}

impl<E: ?Sized> Default for ListenerList<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn emits_in_registration_order() {
        let list: ListenerList<&str> = ListenerList::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            list.connect(move |e: &&str| log.borrow_mut().push(format!("{tag}:{e}")));
        }
        list.emit(&"x");

        assert_eq!(*log.borrow(), vec!["first:x", "second:x", "third:x"]);
    }

    #[test]
    fn emit_without_listeners_is_a_noop() {
        let list: ListenerList<u32> = ListenerList::new();
        list.emit(&1);
        assert_eq!(list.listener_count(), 0);
    }

    #[test]
    fn disconnect_skips_listener_on_later_emissions() {
        let list: ListenerList<u32> = ListenerList::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let keep = Rc::clone(&log);
        list.connect(move |e: &u32| keep.borrow_mut().push(*e));
        let drop_log = Rc::clone(&log);
        let id = list.connect(move |e: &u32| drop_log.borrow_mut().push(e.wrapping_neg()));

        list.emit(&1);
        assert!(list.disconnect(id));
        list.emit(&2);

        assert_eq!(*log.borrow(), vec![1, 1u32.wrapping_neg(), 2]);
    }

    #[test]
    #[should_panic(expected = "re-entrant emission")]
    fn reentrant_emission_panics() {
        let list: Rc<ListenerList<u32>> = Rc::new(ListenerList::new());
        let inner = Rc::clone(&list);
        list.connect(move |e: &u32| inner.emit(e));
        list.emit(&0);
    }
}

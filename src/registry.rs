//! Handler registry with per-type replay slots
//!
//! [`Registry`] owns the mutable state behind an emitter: one slot per
//! event type holding the ordered handler list and the most recently
//! emitted value, plus the wildcard handler list. The last value lives in
//! the slot next to its handlers rather than under a derived key, so event
//! type names carry no reserved namespace.
//!
//! ## Rules
//! - Handler order within a type is registration order; dispatch preserves it.
//! - Duplicate registrations of one handle are independent entries.
//! - The replay value is last-write-wins, one per type, no history.
//! - Removal never touches the replay value.

use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::handler::{Handler, WildcardHandler};

/// One event type's state: its subscribers and its replay value.
struct TypeSlot<T> {
    handlers: Vec<Handler<T>>,
    last: Option<T>,
}

impl<T> TypeSlot<T> {
    fn new() -> Self {
        Self {
            handlers: Vec::new(),
            last: None,
        }
    }

    fn is_empty(&self) -> bool {
        self.handlers.is_empty() && self.last.is_none()
    }
}

/// Registry mapping event types to handlers and replay values.
///
/// Usually manipulated through an [`Emitter`](crate::Emitter), but exposed
/// directly (via [`Emitter::registry`](crate::Emitter::registry)) for
/// introspection and bulk manipulation.
pub struct Registry<T> {
    slots: HashMap<String, TypeSlot<T>>,
    wildcard: Vec<WildcardHandler<T>>,
    events_published: u64,
}

impl<T> Registry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            wildcard: Vec::new(),
            events_published: 0,
        }
    }

    /// Append a handler to the given type's list, creating the slot if absent.
    pub fn register(&mut self, event_type: impl Into<String>, handler: Handler<T>) {
        self.slots
            .entry(event_type.into())
            .or_insert_with(TypeSlot::new)
            .handlers
            .push(handler);
    }

    /// Remove the first entry matching the handle's identity.
    ///
    /// Each call removes at most one entry, so a handle registered twice
    /// needs two removals. Returns [`Error::HandlerNotFound`] when no entry
    /// matches (including when the type has never been registered).
    pub fn unregister(&mut self, event_type: &str, handler: &Handler<T>) -> Result<()> {
        let not_found = || Error::HandlerNotFound {
            event_type: event_type.to_string(),
        };
        let slot = self.slots.get_mut(event_type).ok_or_else(not_found)?;
        let index = slot
            .handlers
            .iter()
            .position(|h| h.same(handler))
            .ok_or_else(not_found)?;
        slot.handlers.remove(index);
        if slot.is_empty() {
            self.slots.remove(event_type);
        }
        Ok(())
    }

    /// Append a wildcard handler.
    pub fn register_wildcard(&mut self, handler: WildcardHandler<T>) {
        self.wildcard.push(handler);
    }

    /// Remove the first wildcard entry matching the handle's identity.
    pub fn unregister_wildcard(&mut self, handler: &WildcardHandler<T>) -> Result<()> {
        let index = self
            .wildcard
            .iter()
            .position(|h| h.same(handler))
            .ok_or(Error::WildcardHandlerNotFound)?;
        self.wildcard.remove(index);
        Ok(())
    }

    /// Number of handlers registered for the given type.
    pub fn handler_count(&self, event_type: &str) -> usize {
        self.slots
            .get(event_type)
            .map(|slot| slot.handlers.len())
            .unwrap_or(0)
    }

    /// Number of wildcard handlers.
    pub fn wildcard_count(&self) -> usize {
        self.wildcard.len()
    }

    /// Event types with a live slot (handlers registered or a value cached).
    pub fn event_types(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// The most recently emitted value for the given type, if any.
    pub fn last(&self, event_type: &str) -> Option<&T> {
        self.slots.get(event_type).and_then(|slot| slot.last.as_ref())
    }

    /// Remove and return the replay value for the given type.
    pub fn clear_last(&mut self, event_type: &str) -> Option<T> {
        let slot = self.slots.get_mut(event_type)?;
        let last = slot.last.take();
        if slot.is_empty() {
            self.slots.remove(event_type);
        }
        last
    }

    /// Drop every handler and replay value. The emission counter is kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.wildcard.clear();
    }

    /// Registry statistics.
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            event_types: self.slots.len(),
            handlers: self.slots.values().map(|slot| slot.handlers.len()).sum(),
            wildcard_handlers: self.wildcard.len(),
            cached_types: self.slots.values().filter(|slot| slot.last.is_some()).count(),
            events_published: self.events_published,
        }
    }

    /// Shallow copy of the type's handler list, in registration order.
    pub(crate) fn snapshot(&self, event_type: &str) -> Vec<Handler<T>> {
        self.slots
            .get(event_type)
            .map(|slot| slot.handlers.clone())
            .unwrap_or_default()
    }

    /// Shallow copy of the wildcard list, in registration order.
    pub(crate) fn wildcard_snapshot(&self) -> Vec<WildcardHandler<T>> {
        self.wildcard.clone()
    }

    /// Store the emitted value as the type's replay value and bump the counter.
    ///
    /// Creates the slot when the type has no subscribers, so a replay value
    /// exists for every type ever emitted.
    pub(crate) fn record_emit(&mut self, event_type: &str, event: T) {
        self.events_published += 1;
        self.slots
            .entry(event_type.to_string())
            .or_insert_with(TypeSlot::new)
            .last = Some(event);
    }

    /// Take the replay value out of its slot for the duration of a callback.
    pub(crate) fn take_last(&mut self, event_type: &str) -> Option<T> {
        self.slots.get_mut(event_type).and_then(|slot| slot.last.take())
    }

    /// Put a taken replay value back, unless the slot was refilled meanwhile.
    pub(crate) fn restore_last(&mut self, event_type: &str, value: T) {
        if let Some(slot) = self.slots.get_mut(event_type) {
            if slot.last.is_none() {
                slot.last = Some(value);
            }
        }
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("event_types", &self.slots.keys().collect::<Vec<_>>())
            .field("wildcard_handlers", &self.wildcard.len())
            .field("events_published", &self.events_published)
            .finish()
    }
}

/// Registry statistics for monitoring and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegistryStats {
    /// Event types with a live slot.
    pub event_types: usize,
    /// Total handlers across all types (wildcard excluded).
    pub handlers: usize,
    /// Wildcard handlers.
    pub wildcard_handlers: usize,
    /// Types currently holding a replay value.
    pub cached_types: usize,
    /// Total emissions since the registry was created.
    pub events_published: u64,
}

//! Synchronous emitter handle
//!
//! [`Emitter`] is a cheap-to-clone handle over a shared [`Registry`].
//! Dispatch is fully synchronous: `emit` invokes every matching handler
//! in-place before returning, type-specific handlers first (in registration
//! order), wildcard handlers after.
//!
//! ## Rules
//! - Both handler lists are snapshotted before the first invocation, so
//!   re-entrant `on`/`off`/`emit` calls from inside a handler only affect
//!   future emissions.
//! - After the pass, the emitted value unconditionally becomes the type's
//!   replay value, subscribers or not.
//! - No isolation between handlers: a panicking handler unwinds out of
//!   `emit` and the rest of the pass is skipped.
//! - No `RefCell` borrow is held across any handler invocation, so handlers
//!   may freely call back into the same emitter.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::handler::{Handler, WildcardHandler};
use crate::registry::Registry;

/// Whether a new subscription receives the type's replay value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replay {
    /// Invoke the handler immediately with the most recently emitted value,
    /// if one exists.
    Deliver,
    /// Only future emissions reach the handler.
    Skip,
}

/// Handle to a shared handler registry.
///
/// Clones (and handles obtained from the same
/// [`Broker`](crate::Broker) channel) alias one registry: registrations
/// through one handle are visible through every other.
pub struct Emitter<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T> Emitter<T> {
    /// Create an emitter over a fresh private registry.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::new())),
        }
    }

    pub(crate) fn with_registry(registry: Rc<RefCell<Registry<T>>>) -> Self {
        Self { registry }
    }

    /// Register a handler for an event type, replaying the cached value.
    ///
    /// Shorthand for [`on_with`](Self::on_with) with [`Replay::Deliver`]:
    /// if the type has been emitted before, `handler` is invoked
    /// immediately and synchronously with the most recent value, in
    /// addition to being enrolled for future emissions.
    pub fn on(&self, event_type: impl Into<String>, handler: Handler<T>) {
        self.on_with(event_type, handler, Replay::Deliver);
    }

    /// Register a handler for an event type with explicit replay behavior.
    ///
    /// Registering the same handle twice creates two independent entries.
    pub fn on_with(&self, event_type: impl Into<String>, handler: Handler<T>, replay: Replay) {
        let event_type = event_type.into();
        self.registry
            .borrow_mut()
            .register(event_type.clone(), handler.clone());

        if replay == Replay::Skip {
            return;
        }
        // Take the replay value out of the slot so the callback runs
        // without a live borrow and may re-enter this emitter.
        let cached = self.registry.borrow_mut().take_last(&event_type);
        if let Some(value) = cached {
            handler.call(&value);
            // A re-entrant emit may have cached a newer value; that one wins.
            self.registry.borrow_mut().restore_last(&event_type, value);
        }
    }

    /// Remove one registration of `handler` for `event_type`.
    ///
    /// Removes the first entry matching the handle's identity; the replay
    /// value is untouched. Returns
    /// [`Error::HandlerNotFound`](crate::Error::HandlerNotFound) when the
    /// handler is not registered for that type.
    pub fn off(&self, event_type: &str, handler: &Handler<T>) -> Result<()> {
        self.registry.borrow_mut().unregister(event_type, handler)
    }

    /// Register a wildcard handler, invoked with `(type, event)` for every
    /// emission, after the type-specific handlers.
    ///
    /// Wildcard handlers observe only events emitted after registration;
    /// there is no wildcard replay.
    pub fn on_any(&self, handler: WildcardHandler<T>) {
        self.registry.borrow_mut().register_wildcard(handler);
    }

    /// Remove one wildcard registration of `handler`.
    pub fn off_any(&self, handler: &WildcardHandler<T>) -> Result<()> {
        self.registry.borrow_mut().unregister_wildcard(handler)
    }

    /// Emit an event: invoke handlers for `event_type` in registration
    /// order, then wildcard handlers, then store the value as the type's
    /// replay value.
    ///
    /// The replay value is written even when nothing is subscribed, so a
    /// late subscriber always finds the most recent emission. Event types
    /// are plain strings; `"*"` has no special meaning here and reaches
    /// only handlers registered for the literal type `"*"`.
    pub fn emit(&self, event_type: &str, event: T) {
        let (typed, wildcard) = {
            let registry = self.registry.borrow();
            (registry.snapshot(event_type), registry.wildcard_snapshot())
        };

        #[cfg(feature = "tracing")]
        {
            tracing::trace!(
                event_type = %event_type,
                handlers = typed.len(),
                wildcard = wildcard.len(),
                "emit"
            );
        }

        for handler in &typed {
            handler.call(&event);
        }
        for handler in &wildcard {
            handler.call(event_type, &event);
        }

        self.registry.borrow_mut().record_emit(event_type, event);
    }

    /// Direct access to the shared registry, for introspection or bulk
    /// manipulation. Mutations through the registry are visible to every
    /// handle aliasing it.
    pub fn registry(&self) -> Rc<RefCell<Registry<T>>> {
        Rc::clone(&self.registry)
    }
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.registry.try_borrow() {
            Ok(registry) => f.debug_struct("Emitter").field("registry", &*registry).finish(),
            Err(_) => f.debug_struct("Emitter").finish_non_exhaustive(),
        }
    }
}

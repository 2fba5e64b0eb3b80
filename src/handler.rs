//! Handler handles and the listener trait
//!
//! Handlers are reference-counted callbacks. The handle returned by
//! [`Handler::new`] is both the thing you register and the thing you later
//! pass to `off`: removal matches on handle identity (`Rc` pointer
//! equality), so keep a clone of the handle for as long as you may want to
//! unregister it. Two handlers built from the same closure source are still
//! distinct handles.

use std::fmt;
use std::rc::Rc;

/// Callback for a single event type, invoked with the event payload.
pub struct Handler<T>(Rc<dyn Fn(&T)>);

impl<T> Handler<T> {
    /// Wrap a closure as a registrable handler handle.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) + 'static,
    {
        Self(Rc::new(f))
    }

    /// Adapt a [`Listener`] implementation into a handler handle.
    pub fn from_listener<L>(listener: L) -> Self
    where
        L: Listener<T> + 'static,
    {
        Self::new(move |event| listener.on_event(event))
    }

    /// Invoke the handler with an event payload.
    pub fn call(&self, event: &T) {
        (self.0)(event)
    }

    /// Identity comparison: true only for clones of the same handle.
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler").field(&Rc::as_ptr(&self.0)).finish()
    }
}

/// Callback enrolled for every emission, invoked with `(type, payload)`.
///
/// Wildcard handlers always run after the type-specific handlers of the
/// same emission.
pub struct WildcardHandler<T>(Rc<dyn Fn(&str, &T)>);

impl<T> WildcardHandler<T> {
    /// Wrap a closure as a registrable wildcard handle.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str, &T) + 'static,
    {
        Self(Rc::new(f))
    }

    /// Invoke the handler with the emitted type and payload.
    pub fn call(&self, event_type: &str, event: &T) {
        (self.0)(event_type, event)
    }

    /// Identity comparison: true only for clones of the same handle.
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for WildcardHandler<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for WildcardHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WildcardHandler")
            .field(&Rc::as_ptr(&self.0))
            .finish()
    }
}

/// Trait for types that handle incoming events.
///
/// An alternative to raw closures for stateful subscribers; adapt with
/// [`Handler::from_listener`].
pub trait Listener<T> {
    /// Handle an incoming event.
    fn on_event(&self, event: &T);
}

/// A simple listener that prints events with their `Debug` rendering.
pub struct PrintListener;

impl<T: fmt::Debug> Listener<T> for PrintListener {
    fn on_event(&self, event: &T) {
        println!("{event:?}");
    }
}

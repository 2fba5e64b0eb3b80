//! Macros for ergonomic event publishing
//!
//! The payload argument of `emit` is optional in spirit: marker events
//! often carry nothing interesting. [`emit!`] fills in `Default::default()`
//! when the payload is omitted.

/// Emit an event through the given emitter.
///
/// # Examples
///
/// ```rust
/// use echobus::Emitter;
/// use echobus::emit;
///
/// let emitter = Emitter::<u32>::new();
///
/// // Payload form
/// emit!(emitter, "tick", 42);
///
/// // Marker form: emits `u32::default()`
/// emit!(emitter, "tick");
/// ```
#[macro_export]
macro_rules! emit {
    // Marker usage: emit!(emitter, type)
    ($emitter:expr, $event_type:expr) => {
        $emitter.emit($event_type, ::core::default::Default::default())
    };

    // Payload usage: emit!(emitter, type, event)
    ($emitter:expr, $event_type:expr, $event:expr) => {
        $emitter.emit($event_type, $event)
    };
}

//! # echobus
//!
//! Minimal synchronous publish/subscribe with last-value replay.
//!
//! Callers register handlers for named event types, emit events by type,
//! and the emitter invokes matching handlers in-place, in registration
//! order. Every emission also becomes the type's replay value, so a late
//! subscriber immediately receives the most recent event as if it had been
//! listening at emit time.
//!
//! ## Architecture
//!
//! The crate is one mechanism in three layers:
//! 1. **Broker**: channel identifier → shared registry; same identifier,
//!    same registry.
//! 2. **Emitter**: handle over one registry exposing `on`/`off`/`emit` and
//!    the wildcard variants.
//! 3. **Registry**: per-type slots holding the ordered handler list and the
//!    replay value, open for direct introspection.
//!
//! Everything is synchronous and single-threaded (handles are not `Send`);
//! re-entrant calls from inside handlers are supported through snapshot
//! dispatch. Hosts with multiple threads need their own synchronization
//! around a single logical thread of control.
//!
//! ## Example
//!
//! ```rust
//! use echobus::{Broker, Handler, WildcardHandler};
//!
//! let broker = Broker::<i32>::new();
//! let sensors = broker.channel("sensors");
//!
//! // Emissions are cached per type even with nobody listening.
//! sensors.emit("temperature", 21);
//!
//! // A late subscriber is replayed the most recent value immediately.
//! let reading = Handler::new(|value: &i32| println!("temperature: {value}"));
//! sensors.on("temperature", reading.clone());
//!
//! // Wildcard handlers see every type, after the typed handlers.
//! sensors.on_any(WildcardHandler::new(|event_type, value| {
//!     println!("{event_type} = {value}");
//! }));
//!
//! sensors.emit("temperature", 23);
//! sensors.off("temperature", &reading).unwrap();
//! ```

pub mod bus;
pub mod emitter;
pub mod error;
pub mod handler;
pub mod registry;

mod macros;

pub use bus::{Broker, DEFAULT_CHANNEL};
pub use emitter::{Emitter, Replay};
pub use error::{Error, Result};
pub use handler::{Handler, Listener, PrintListener, WildcardHandler};
pub use registry::{Registry, RegistryStats};

/// Convenience re-exports for glob imports.
pub mod prelude {
    pub use crate::bus::{Broker, DEFAULT_CHANNEL};
    pub use crate::emitter::{Emitter, Replay};
    pub use crate::error::{Error, Result};
    pub use crate::handler::{Handler, Listener, PrintListener, WildcardHandler};
    pub use crate::registry::{Registry, RegistryStats};
}

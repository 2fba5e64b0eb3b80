//! Channel broker
//!
//! [`Broker`] owns the mapping from channel identifiers to shared
//! registries. Asking for the same channel twice yields emitter handles
//! backed by the identical registry, so "same identifier ⇒ same registry"
//! holds without any ambient global state: whoever needs to share a channel
//! shares (a clone of) the broker.
//!
//! Registries are created lazily on first lookup and live as long as the
//! broker; there is no explicit teardown.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::emitter::Emitter;
use crate::registry::Registry;

/// Channel identifier used when callers do not pick one.
pub const DEFAULT_CHANNEL: &str = "default";

/// Owner of channel-keyed shared registries.
///
/// Cheap to clone; clones alias the same channel map.
pub struct Broker<T> {
    channels: Rc<RefCell<HashMap<String, Rc<RefCell<Registry<T>>>>>>,
}

impl<T> Broker<T> {
    /// Create a broker with no channels.
    pub fn new() -> Self {
        Self {
            channels: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Look up or lazily create the channel's registry and return an
    /// emitter handle bound to it.
    ///
    /// Handles from repeated calls with the same identifier alias one
    /// registry: a handler registered through one is invoked by emissions
    /// through any other.
    pub fn channel(&self, id: impl Into<String>) -> Emitter<T> {
        let registry = Rc::clone(
            self.channels
                .borrow_mut()
                .entry(id.into())
                .or_insert_with(|| Rc::new(RefCell::new(Registry::new()))),
        );
        Emitter::with_registry(registry)
    }

    /// Emitter for [`DEFAULT_CHANNEL`].
    pub fn default_channel(&self) -> Emitter<T> {
        self.channel(DEFAULT_CHANNEL)
    }

    /// Whether the channel's registry has been created.
    pub fn contains(&self, id: &str) -> bool {
        self.channels.borrow().contains_key(id)
    }

    /// Number of channels created so far.
    pub fn channel_count(&self) -> usize {
        self.channels.borrow().len()
    }

    /// Identifiers of every created channel.
    pub fn channel_ids(&self) -> Vec<String> {
        self.channels.borrow().keys().cloned().collect()
    }
}

impl<T> Clone for Broker<T> {
    fn clone(&self) -> Self {
        Self {
            channels: Rc::clone(&self.channels),
        }
    }
}

impl<T> Default for Broker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Broker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broker")
            .field("channels", &self.channels.borrow().keys().collect::<Vec<_>>())
            .finish()
    }
}

//! Error types for registry manipulation
//!
//! The emitter itself is infallible: registration and dispatch accept any
//! input. The only fallible operations are the removal paths, which report
//! when the handler they were asked to remove was never registered.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors returned by handler removal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Error {
    /// The handler is not registered for the given event type.
    ///
    /// Removal matches on handle identity, so this also covers the case
    /// where the type has never been registered at all.
    #[error("no matching handler registered for event type `{event_type}`")]
    HandlerNotFound { event_type: String },

    /// The handler is not registered as a wildcard handler.
    #[error("no matching wildcard handler registered")]
    WildcardHandlerNotFound,
}

/// Result type alias for emitter operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::HandlerNotFound {
            event_type: "tick".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no matching handler registered for event type `tick`"
        );
        assert_eq!(
            Error::WildcardHandlerNotFound.to_string(),
            "no matching wildcard handler registered"
        );
    }
}

//! Collaborator traits
//!
//! The client library never talks to a UI toolkit or a browser directly.
//! Everything it needs from its host is expressed here and injected.

use crate::error::Result;
use crate::types::RouteName;

/// Durable string key/value storage.
///
/// Mirrors the minimal surface of browser local storage: values survive a
/// restart of the host, and writes are synchronous.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Host navigation, used when the session forces the user back to login.
pub trait Navigator: Send + Sync {
    /// Navigate to the named destination
    fn navigate(&self, route: RouteName);
}

/// Interactive prompts shown to the user.
pub trait Prompt: Send + Sync {
    /// Ask a yes/no question. Returns `true` when the user accepts.
    fn confirm(&self, message: &str) -> bool;

    /// Show a blocking notice
    fn alert(&self, message: &str);
}

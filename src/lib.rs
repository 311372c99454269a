//! # Arity-aware foreach
//!
//! Walk the entries of a sequence, mapping or string and hand each one to a
//! callback, PHP-`foreach` style: callbacks declared with one parameter get
//! the value, callbacks declared with two get `(key, value)`.
//!
//! ## Walk rules
//!
//! 1. **Arity**: the callback's declared parameter count picks the call
//!    shape (`checkArguments`), or every call gets `(key, value)`
//! 2. **Own entries**: entries inherited through a [`Record`] prototype are
//!    skipped (`checkOwnProperty`)
//! 3. **Index casting**: sequence-like containers hand numeric keys to
//!    2-arg callbacks (`castArrayIndex`), otherwise `"0"`, `"1"`, ...
//! 4. **Short-circuit**: returning exactly `false` stops the walk
//!
//! All three options default to enabled. Per-call [`Overrides`] merge over
//! process-wide defaults that only [`set_options`] changes.
//!
//! ## Usage Example
//!
//! ```
//! use partial_foreach::{by_key_value, by_value, foreach, Key, Overrides};
//! use serde_json::json;
//!
//! let object = json!({"a": "1", "b": "2"});
//!
//! let mut values = Vec::new();
//! foreach(&object, by_value(|value: &serde_json::Value| values.push(value.clone())), None);
//! assert_eq!(values, vec![json!("1"), json!("2")]);
//!
//! let mut keys = Vec::new();
//! foreach(
//!     &vec![10, 20, 30],
//!     by_key_value(|key: Key<'_>, _: &i32| keys.push(key.to_string())),
//!     Some(&Overrides::new().cast_array_index(false)),
//! );
//! assert_eq!(keys, vec!["0", "1", "2"]);
//!
//! // Only an explicit `false` stops.
//! let mut visited = 0;
//! foreach(&"abc", by_value(|_: &str| { visited += 1; false }), None);
//! assert_eq!(visited, 1);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod callback;   // Callback shapes, arity and stop signals
pub mod container;  // Enumerable containers and keys
pub mod iterate;    // The walk itself
pub mod options;    // Settings, overrides and defaults

// Re-exports for convenience
pub use callback::{by_key_value, by_value, Args, Arity, ByKeyValue, ByValue, Callback, Declared, Signal};
pub use container::{Container, Entry, Key, Record};
pub use iterate::{foreach, try_foreach};
pub use options::{get_options, resolve_options, set_options, Defaults, Overrides, Settings};

use thiserror::Error;

/// Errors surfaced by the library
///
/// Walks themselves never fail; this only covers reading option documents.
#[derive(Error, Debug)]
pub enum ForeachError {
    /// Options document is not valid JSON
    #[error("invalid options document: {0}")]
    InvalidOptionsJson(#[from] serde_json::Error),
}

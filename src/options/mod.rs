//! Iteration options
//!
//! Three independent switches shape every walk:
//! - `checkArguments`: let the callback's declared arity pick 1-arg or 2-arg calls
//! - `checkOwnProperty`: skip entries inherited through a prototype chain
//! - `castArrayIndex`: hand sequence keys to 2-arg callbacks as numeric indices
//!
//! [`Settings`] is the effective, fully-populated record. [`Overrides`] is the
//! partial per-call record that gets merged over a [`Defaults`] object.

mod defaults;

pub use defaults::{get_options, global, resolve_options, set_options, Defaults};

use serde::Serialize;
use serde_json::Value;

use crate::ForeachError;

/// Effective configuration for a single walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Select the invocation shape from the callback's declared arity
    pub check_arguments: bool,

    /// Only visit entries the container owns directly
    pub check_own_property: bool,

    /// Cast sequence keys to numeric indices for 2-arg callbacks
    pub cast_array_index: bool,
}

impl Settings {
    /// Initial process-wide values: everything enabled.
    pub const INITIAL: Settings = Settings {
        check_arguments: true,
        check_own_property: true,
        cast_array_index: true,
    };

    /// Merge the set fields of `overrides` over `self`.
    pub fn merged(self, overrides: &Overrides) -> Self {
        Self {
            check_arguments: overrides.check_arguments.unwrap_or(self.check_arguments),
            check_own_property: overrides
                .check_own_property
                .unwrap_or(self.check_own_property),
            cast_array_index: overrides.cast_array_index.unwrap_or(self.cast_array_index),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Partial options record. `None` fields fall back to the current defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Overrides {
    /// Override for [`Settings::check_arguments`]
    pub check_arguments: Option<bool>,
    /// Override for [`Settings::check_own_property`]
    pub check_own_property: Option<bool>,
    /// Override for [`Settings::cast_array_index`]
    pub cast_array_index: Option<bool>,
}

impl Overrides {
    /// Empty overrides (resolves to the current defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `checkArguments`.
    pub fn check_arguments(mut self, enabled: bool) -> Self {
        self.check_arguments = Some(enabled);
        self
    }

    /// Set `checkOwnProperty`.
    pub fn check_own_property(mut self, enabled: bool) -> Self {
        self.check_own_property = Some(enabled);
        self
    }

    /// Set `castArrayIndex`.
    pub fn cast_array_index(mut self, enabled: bool) -> Self {
        self.cast_array_index = Some(enabled);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.check_arguments.is_none()
            && self.check_own_property.is_none()
            && self.cast_array_index.is_none()
    }

    /// Read overrides from an options document.
    ///
    /// Permissive: a non-object document, unknown fields and non-boolean
    /// values are all ignored rather than rejected.
    pub fn from_json(options: &Value) -> Self {
        let field = |name: &str| options.get(name).and_then(Value::as_bool);
        Self {
            check_arguments: field("checkArguments"),
            check_own_property: field("checkOwnProperty"),
            cast_array_index: field("castArrayIndex"),
        }
    }

    /// Parse an options document from JSON text.
    ///
    /// Only malformed JSON is an error; everything else follows
    /// [`Overrides::from_json`].
    pub fn from_json_str(text: &str) -> Result<Self, ForeachError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_json(&value))
    }
}

impl From<Settings> for Overrides {
    fn from(settings: Settings) -> Self {
        Self {
            check_arguments: Some(settings.check_arguments),
            check_own_property: Some(settings.check_own_property),
            cast_array_index: Some(settings.cast_array_index),
        }
    }
}

//! Default options shared across walks
//!
//! A [`Defaults`] object owns the settings every walk starts from. The crate
//! keeps one process-wide instance behind the free functions; callers that
//! want isolation (tests, embedders) construct their own.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Overrides, Settings};

static GLOBAL: Defaults = Defaults::new();

/// Mutex-guarded default settings.
///
/// Every merge is a single locked read-modify-write, so the three fields
/// are never observed half-updated.
#[derive(Debug)]
pub struct Defaults {
    current: Mutex<Settings>,
}

impl Defaults {
    /// Create defaults with every option enabled.
    pub const fn new() -> Self {
        Self::with_settings(Settings::INITIAL)
    }

    /// Create defaults starting from explicit settings.
    pub const fn with_settings(settings: Settings) -> Self {
        Self {
            current: Mutex::new(settings),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Settings> {
        // Settings is plain Copy data; a panic elsewhere cannot leave it torn.
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Merge `overrides` over the current defaults without storing the result.
    pub fn resolve(&self, overrides: Option<&Overrides>) -> Settings {
        let current = *self.lock();
        match overrides {
            Some(overrides) => current.merged(overrides),
            None => current,
        }
    }

    /// Merge `overrides` over the current defaults and store the result.
    ///
    /// `None` or empty overrides leave the defaults unchanged.
    pub fn set(&self, overrides: Option<&Overrides>) {
        let Some(overrides) = overrides else {
            return;
        };
        if overrides.is_empty() {
            return;
        }

        let mut current = self.lock();
        let previous = *current;
        let updated = previous.merged(overrides);
        if updated != previous {
            tracing::debug!(?previous, ?updated, "foreach defaults changed");
        }
        *current = updated;
    }

    /// Current defaults.
    pub fn get(&self) -> Settings {
        *self.lock()
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide defaults used by [`crate::foreach`].
pub fn global() -> &'static Defaults {
    &GLOBAL
}

/// Update the process-wide defaults.
pub fn set_options(overrides: Option<&Overrides>) {
    GLOBAL.set(overrides);
}

/// Read the process-wide defaults.
pub fn get_options() -> Settings {
    GLOBAL.get()
}

/// Resolve per-call overrides against the process-wide defaults.
pub fn resolve_options(overrides: Option<&Overrides>) -> Settings {
    GLOBAL.resolve(overrides)
}

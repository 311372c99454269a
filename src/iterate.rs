//! The walk
//!
//! For every enumerated entry:
//! 1. skip it when `checkOwnProperty` is on and the entry is inherited
//! 2. call `callback(value)` for 1-arg callbacks, or `callback(key, value)`
//!    with the key cast to a number for sequence-like containers when
//!    `castArrayIndex` is on
//! 3. stop as soon as the callback returns an explicit `false`
//!
//! Panics raised by a callback unwind through the walk untouched; errors
//! returned through [`try_foreach`] come back exactly as the callback
//! produced them.

use std::ops::ControlFlow;

use crate::callback::{Args, Arity, Callback, Signal};
use crate::container::Container;
use crate::options::{global, Defaults, Overrides, Settings};

/// Walk `container` with `callback`, starting from the process-wide
/// defaults merged with `options`.
///
/// ```
/// use partial_foreach::{by_key_value, by_value, foreach, Key};
///
/// let mut values = Vec::new();
/// foreach(&vec![1, 2, 3], by_value(|value: &i32| values.push(*value)), None);
/// assert_eq!(values, vec![1, 2, 3]);
///
/// let mut keys = Vec::new();
/// foreach(
///     &vec![1, 2, 3],
///     by_key_value(|key: Key<'_>, _: &i32| keys.push(key.into_owned())),
///     None,
/// );
/// assert_eq!(keys, vec![Key::Index(0), Key::Index(1), Key::Index(2)]);
/// ```
pub fn foreach<C, F>(container: &C, callback: F, options: Option<&Overrides>)
where
    C: Container + ?Sized,
    F: Callback<C::Value>,
    F::Output: Signal,
{
    global().foreach(container, callback, options);
}

/// Like [`foreach`] for callbacks that can fail. The first error stops the
/// walk and is returned unchanged.
pub fn try_foreach<C, F, R, E>(
    container: &C,
    callback: F,
    options: Option<&Overrides>,
) -> Result<(), E>
where
    C: Container + ?Sized,
    F: Callback<C::Value, Output = Result<R, E>>,
    R: Signal,
{
    global().try_foreach(container, callback, options)
}

impl Defaults {
    /// Walk `container` starting from these defaults merged with `options`.
    pub fn foreach<C, F>(&self, container: &C, callback: F, options: Option<&Overrides>)
    where
        C: Container + ?Sized,
        F: Callback<C::Value>,
        F::Output: Signal,
    {
        let settings = self.resolve(options);
        let stopped = walk(container, callback, settings, |output| {
            if output.is_stop() {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        if stopped.is_some() {
            tracing::trace!("foreach stopped by callback");
        }
    }

    /// Fallible walk starting from these defaults merged with `options`.
    pub fn try_foreach<C, F, R, E>(
        &self,
        container: &C,
        callback: F,
        options: Option<&Overrides>,
    ) -> Result<(), E>
    where
        C: Container + ?Sized,
        F: Callback<C::Value, Output = Result<R, E>>,
        R: Signal,
    {
        let settings = self.resolve(options);
        let halted = walk(container, callback, settings, |output| match output {
            Ok(signal) if signal.is_stop() => ControlFlow::Break(None),
            Ok(_) => ControlFlow::Continue(()),
            Err(error) => ControlFlow::Break(Some(error)),
        });

        match halted {
            Some(Some(error)) => {
                tracing::trace!("foreach aborted by callback error");
                Err(error)
            }
            Some(None) => {
                tracing::trace!("foreach stopped by callback");
                Ok(())
            }
            None => Ok(()),
        }
    }
}

/// Drive one walk. `inspect` turns each callback output into a decision;
/// the first break value is returned.
fn walk<C, F, B>(
    container: &C,
    mut callback: F,
    settings: Settings,
    mut inspect: impl FnMut(F::Output) -> ControlFlow<B>,
) -> Option<B>
where
    C: Container + ?Sized,
    F: Callback<C::Value>,
{
    if !callback.is_invocable() {
        tracing::trace!("foreach skipped: callback is not invocable");
        return None;
    }

    let arity = if settings.check_arguments {
        callback.arity()
    } else {
        Arity::Two
    };
    let cast_keys = settings.cast_array_index && container.is_sequence_like();
    tracing::trace!(
        arity = arity.count(),
        cast_keys,
        own_only = settings.check_own_property,
        "foreach walk"
    );

    let mut halted = None;
    let _ = container.enumerate(&mut |entry| {
        if settings.check_own_property && entry.inherited {
            return ControlFlow::Continue(());
        }

        let args = match arity {
            Arity::One => Args::value_only(entry.key, entry.value),
            Arity::Two => {
                let key = if cast_keys {
                    entry.key.into_numeric()
                } else {
                    entry.key.into_native()
                };
                Args::key_value(key, entry.value)
            }
        };

        match inspect(callback.call(args)) {
            ControlFlow::Continue(()) => ControlFlow::Continue(()),
            ControlFlow::Break(value) => {
                halted = Some(value);
                ControlFlow::Break(())
            }
        }
    });

    halted
}

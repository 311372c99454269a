//! Callback shapes
//!
//! A callback declares whether it wants only the value of each entry or the
//! `(key, value)` pair. Rust closures carry no parameter-count metadata we
//! could inspect, so the declaration travels with the callback: the
//! [`by_value`] and [`by_key_value`] adapters fix it at the call site, and
//! [`Declared`] derives it from signature text.

mod adapters;
mod signature;

pub use adapters::{by_key_value, by_value, ByKeyValue, ByValue, Declared};

use std::ops::ControlFlow;

use crate::container::Key;

/// Number of arguments a walk hands to the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// `callback(value)`
    One,

    /// `callback(key, value)`
    Two,
}

impl Arity {
    /// Argument count as a number.
    pub fn count(self) -> usize {
        match self {
            Arity::One => 1,
            Arity::Two => 2,
        }
    }
}

/// Arguments for one callback invocation.
///
/// The key is only exposed for [`Arity::Two`] invocations.
#[derive(Debug, Clone, PartialEq)]
pub struct Args<'a, V: ?Sized> {
    key: Key<'a>,
    value: &'a V,
    arity: Arity,
}

impl<'a, V: ?Sized> Args<'a, V> {
    /// Value-only invocation.
    pub fn value_only(key: Key<'a>, value: &'a V) -> Self {
        Self {
            key,
            value,
            arity: Arity::One,
        }
    }

    /// Key and value invocation.
    pub fn key_value(key: Key<'a>, value: &'a V) -> Self {
        Self {
            key,
            value,
            arity: Arity::Two,
        }
    }

    /// Shape of this invocation.
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Entry value.
    pub fn value(&self) -> &'a V {
        self.value
    }

    /// Entry key, present for 2-arg invocations only.
    pub fn key(&self) -> Option<&Key<'a>> {
        match self.arity {
            Arity::One => None,
            Arity::Two => Some(&self.key),
        }
    }

    /// Split into `(key, value)`, with the key hidden for 1-arg invocations.
    pub fn into_parts(self) -> (Option<Key<'a>>, &'a V) {
        match self.arity {
            Arity::One => (None, self.value),
            Arity::Two => (Some(self.key), self.value),
        }
    }

    pub(crate) fn into_pair(self) -> (Key<'a>, &'a V) {
        (self.key, self.value)
    }
}

/// Return values a callback may use to halt a walk.
///
/// Only an explicit `false` stops; `()`, `true`, `None`, `0`, `""` and
/// `null` all continue.
pub trait Signal {
    /// True when the walk must stop after this invocation.
    fn is_stop(&self) -> bool;
}

impl Signal for () {
    fn is_stop(&self) -> bool {
        false
    }
}

impl Signal for bool {
    fn is_stop(&self) -> bool {
        !*self
    }
}

impl<T: Signal> Signal for Option<T> {
    fn is_stop(&self) -> bool {
        self.as_ref().is_some_and(Signal::is_stop)
    }
}

impl<B, C> Signal for ControlFlow<B, C> {
    fn is_stop(&self) -> bool {
        self.is_break()
    }
}

impl Signal for serde_json::Value {
    fn is_stop(&self) -> bool {
        matches!(self, serde_json::Value::Bool(false))
    }
}

/// Something a walk can invoke once per entry.
pub trait Callback<V: ?Sized> {
    /// Value returned from each invocation.
    type Output;

    /// Declared parameter count.
    fn arity(&self) -> Arity;

    /// Whether there is anything to call. Walks over a non-invocable
    /// callback return immediately.
    fn is_invocable(&self) -> bool {
        true
    }

    /// Invoke for one entry.
    fn call(&mut self, args: Args<'_, V>) -> Self::Output;
}

impl<V: ?Sized, C: Callback<V> + ?Sized> Callback<V> for &mut C {
    type Output = C::Output;

    fn arity(&self) -> Arity {
        (**self).arity()
    }

    fn is_invocable(&self) -> bool {
        (**self).is_invocable()
    }

    fn call(&mut self, args: Args<'_, V>) -> Self::Output {
        (**self).call(args)
    }
}

/// An absent callback is not invocable.
impl<V: ?Sized, C: Callback<V>> Callback<V> for Option<C> {
    type Output = Option<C::Output>;

    fn arity(&self) -> Arity {
        self.as_ref().map_or(Arity::One, Callback::arity)
    }

    fn is_invocable(&self) -> bool {
        self.as_ref().is_some_and(Callback::is_invocable)
    }

    fn call(&mut self, args: Args<'_, V>) -> Self::Output {
        self.as_mut().map(|callback| callback.call(args))
    }
}

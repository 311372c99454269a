use std::fmt;
use std::marker::PhantomData;

use super::{Args, Arity, Callback};
use crate::container::Key;

/// Value-only closure, declared with one parameter.
pub struct ByValue<F, V: ?Sized> {
    f: F,
    _value: PhantomData<fn(&V)>,
}

/// Wrap `f` as a 1-parameter callback: `callback(value)`.
///
/// When a walk forces 2-arg invocation (`checkArguments` disabled) the
/// closure still only sees the value.
pub fn by_value<V: ?Sized, F, R>(f: F) -> ByValue<F, V>
where
    F: FnMut(&V) -> R,
{
    ByValue {
        f,
        _value: PhantomData,
    }
}

impl<V: ?Sized, F, R> Callback<V> for ByValue<F, V>
where
    F: FnMut(&V) -> R,
{
    type Output = R;

    fn arity(&self) -> Arity {
        Arity::One
    }

    fn call(&mut self, args: Args<'_, V>) -> R {
        (self.f)(args.value())
    }
}

impl<F, V: ?Sized> fmt::Debug for ByValue<F, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByValue").finish_non_exhaustive()
    }
}

/// Key and value closure, declared with two parameters.
pub struct ByKeyValue<F, V: ?Sized> {
    f: F,
    _value: PhantomData<fn(&V)>,
}

/// Wrap `f` as a 2-parameter callback: `callback(key, value)`.
pub fn by_key_value<V: ?Sized, F, R>(f: F) -> ByKeyValue<F, V>
where
    F: FnMut(Key<'_>, &V) -> R,
{
    ByKeyValue {
        f,
        _value: PhantomData,
    }
}

impl<V: ?Sized, F, R> Callback<V> for ByKeyValue<F, V>
where
    F: FnMut(Key<'_>, &V) -> R,
{
    type Output = R;

    fn arity(&self) -> Arity {
        Arity::Two
    }

    fn call(&mut self, args: Args<'_, V>) -> R {
        let (key, value) = args.into_pair();
        (self.f)(key, value)
    }
}

impl<F, V: ?Sized> fmt::Debug for ByKeyValue<F, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKeyValue").finish_non_exhaustive()
    }
}

/// Callback whose arity comes from a declared signature such as
/// `"function (key, value)"` or `"value => value"`.
///
/// The closure receives the raw [`Args`] and can inspect which shape the
/// walk chose.
pub struct Declared<F> {
    arity: Arity,
    f: F,
}

impl<F> Declared<F> {
    /// Sniff the arity out of `signature`.
    pub fn new(signature: &str, f: F) -> Self {
        Self::with_arity(Arity::from_declaration(signature), f)
    }

    /// Use an explicit arity.
    pub fn with_arity(arity: Arity, f: F) -> Self {
        Self { arity, f }
    }
}

impl<F> fmt::Debug for Declared<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Declared")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl<V: ?Sized, F, R> Callback<V> for Declared<F>
where
    F: FnMut(Args<'_, V>) -> R,
{
    type Output = R;

    fn arity(&self) -> Arity {
        self.arity
    }

    fn call(&mut self, args: Args<'_, V>) -> R {
        (self.f)(args)
    }
}

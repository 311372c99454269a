//! Shared callbacks for integration tests

#![allow(dead_code)]

use partial_foreach::{Args, Arity, Callback, Key};

/// Records every invocation: the key it was handed (if any) and an owned
/// copy of the value.
pub struct Recorder<T> {
    arity: Arity,
    stop_at: Option<usize>,
    pub calls: Vec<(Option<Key<'static>>, T)>,
}

impl<T> Recorder<T> {
    /// Recorder declared with one parameter.
    pub fn one_arg() -> Self {
        Self::with_arity(Arity::One)
    }

    /// Recorder declared with two parameters.
    pub fn two_args() -> Self {
        Self::with_arity(Arity::Two)
    }

    pub fn with_arity(arity: Arity) -> Self {
        Self {
            arity,
            stop_at: None,
            calls: Vec::new(),
        }
    }

    /// Return `false` from the Nth invocation.
    pub fn stopping_at(mut self, invocation: usize) -> Self {
        self.stop_at = Some(invocation);
        self
    }

    pub fn keys(&self) -> Vec<Option<Key<'static>>> {
        self.calls.iter().map(|(key, _)| key.clone()).collect()
    }

    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.calls.iter().map(|(_, value)| value.clone()).collect()
    }
}

impl<V: ?Sized + ToOwned> Callback<V> for Recorder<V::Owned> {
    type Output = bool;

    fn arity(&self) -> Arity {
        self.arity
    }

    fn call(&mut self, args: Args<'_, V>) -> bool {
        let (key, value) = args.into_parts();
        self.calls.push((key.map(Key::into_owned), value.to_owned()));
        self.stop_at != Some(self.calls.len())
    }
}

/// Key sequence `0, 1, ..` as numeric keys.
pub fn index_keys(count: usize) -> Vec<Option<Key<'static>>> {
    (0..count).map(|index| Some(Key::Index(index))).collect()
}

/// Key sequence `"0", "1", ..` as native string keys.
pub fn name_keys(count: usize) -> Vec<Option<Key<'static>>> {
    (0..count)
        .map(|index| Some(Key::name(index.to_string())))
        .collect()
}

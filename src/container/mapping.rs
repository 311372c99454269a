use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::ops::ControlFlow;

use super::{Container, Entry};

/// Sorted key order.
impl<K: AsRef<str>, V> Container for BTreeMap<K, V> {
    type Value = V;

    fn is_sequence_like(&self) -> bool {
        false
    }

    fn enumerate(
        &self,
        visit: &mut dyn FnMut(Entry<'_, V>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        for (key, value) in self {
            let name: &str = key.as_ref();
            visit(Entry::own(name, value))?;
        }
        ControlFlow::Continue(())
    }
}

/// Hash order; no ordering guarantee beyond the map's own.
impl<K: AsRef<str>, V, S: BuildHasher> Container for HashMap<K, V, S> {
    type Value = V;

    fn is_sequence_like(&self) -> bool {
        false
    }

    fn enumerate(
        &self,
        visit: &mut dyn FnMut(Entry<'_, V>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        for (key, value) in self {
            let name: &str = key.as_ref();
            visit(Entry::own(name, value))?;
        }
        ControlFlow::Continue(())
    }
}

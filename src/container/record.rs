//! Records with a prototype chain
//!
//! A [`Record`] owns an ordered set of named fields and may delegate to a
//! shared prototype record. Lookups fall through the chain; enumeration
//! yields own fields first, then inherited fields that are not shadowed by
//! a nearer record.

use std::collections::HashSet;
use std::ops::ControlFlow;
use std::sync::Arc;

use super::{Container, Entry};

/// Field name that makes a record sequence-like.
const LENGTH_FIELD: &str = "length";

/// Ordered named fields plus an optional shared prototype.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<V> {
    fields: Vec<(String, V)>,
    prototype: Option<Arc<Record<V>>>,
}

impl<V> Record<V> {
    /// Empty record without a prototype.
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            prototype: None,
        }
    }

    /// Empty record inheriting from `prototype`.
    pub fn inheriting(prototype: Arc<Record<V>>) -> Self {
        Self {
            fields: Vec::new(),
            prototype: Some(prototype),
        }
    }

    /// Builder form of [`Record::insert`].
    pub fn with_field(mut self, name: impl Into<String>, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an own field. Replacing keeps the field's original position.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    /// Remove an own field.
    pub fn remove(&mut self, name: &str) -> Option<V> {
        let position = self.fields.iter().position(|(existing, _)| existing == name)?;
        Some(self.fields.remove(position).1)
    }

    /// Own field only.
    pub fn get_own(&self, name: &str) -> Option<&V> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Own field, falling back to the prototype chain.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.chain().find_map(|record| record.get_own(name))
    }

    /// Whether `name` is an own field.
    pub fn has_own(&self, name: &str) -> bool {
        self.get_own(name).is_some()
    }

    /// Prototype, if any.
    pub fn prototype(&self) -> Option<&Arc<Record<V>>> {
        self.prototype.as_ref()
    }

    /// Number of own fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// No own fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// This record followed by its ancestors, nearest first.
    fn chain(&self) -> impl Iterator<Item = &Record<V>> {
        std::iter::successors(Some(self), |record| record.prototype.as_deref())
    }
}

impl<V> Default for Record<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl<V> Container for Record<V> {
    type Value = V;

    /// A `length` field anywhere on the chain makes the record array-like,
    /// whatever the field holds. Record values are opaque, so `length = 0`
    /// still counts; a JSON object needs a non-zero numeric `length`.
    fn is_sequence_like(&self) -> bool {
        self.get(LENGTH_FIELD).is_some()
    }

    fn enumerate(
        &self,
        visit: &mut dyn FnMut(Entry<'_, V>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        for (depth, record) in self.chain().enumerate() {
            for (name, value) in &record.fields {
                if !seen.insert(name.as_str()) {
                    continue;
                }
                let entry = if depth == 0 {
                    Entry::own(name.as_str(), value)
                } else {
                    Entry::inherited(name.as_str(), value)
                };
                visit(entry)?;
            }
        }
        ControlFlow::Continue(())
    }
}

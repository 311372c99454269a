//! Enumerable containers
//!
//! A [`Container`] hands out its entries in its natural order, each tagged
//! with a [`Key`] and whether it was inherited rather than owned. Three
//! container families exist:
//! - sequences (`[T]`, `Vec<T>`, `VecDeque<T>`): keys are positions
//! - mappings (`BTreeMap`, `HashMap`, [`Record`]): keys are names
//! - text (`str`, `String`): keys are character positions, values are
//!   single-character substrings
//!
//! `serde_json::Value` dispatches to the matching family.

mod json;
mod mapping;
mod record;
mod sequence;
mod text;

pub use record::Record;

use std::borrow::Cow;
use std::fmt;
use std::ops::ControlFlow;

/// Entry key as handed to 2-arg callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key<'a> {
    /// Numeric position
    Index(usize),

    /// Property name (including the string form of a position)
    Name(Cow<'a, str>),
}

impl<'a> Key<'a> {
    /// Named key.
    pub fn name(name: impl Into<Cow<'a, str>>) -> Self {
        Key::Name(name.into())
    }

    /// Numeric position, if this key is one.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    /// Name, if this key is one.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }

    /// Numeric form: names that read as a position become [`Key::Index`];
    /// other names have no numeric form and stay as they are.
    pub fn into_numeric(self) -> Self {
        match self {
            Key::Name(name) => match name.parse::<usize>() {
                Ok(index) => Key::Index(index),
                Err(_) => Key::Name(name),
            },
            index => index,
        }
    }

    /// Native string form: positions become names (`3` → `"3"`).
    pub fn into_native(self) -> Self {
        match self {
            Key::Index(index) => Key::Name(Cow::Owned(index.to_string())),
            name => name,
        }
    }

    /// Detach from the container's borrow.
    pub fn into_owned(self) -> Key<'static> {
        match self {
            Key::Index(index) => Key::Index(index),
            Key::Name(name) => Key::Name(Cow::Owned(name.into_owned())),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key<'_> {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Key::Name(Cow::Borrowed(name))
    }
}

impl From<String> for Key<'_> {
    fn from(name: String) -> Self {
        Key::Name(Cow::Owned(name))
    }
}

impl PartialEq<usize> for Key<'_> {
    fn eq(&self, other: &usize) -> bool {
        self.as_index() == Some(*other)
    }
}

impl PartialEq<&str> for Key<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_name() == Some(*other)
    }
}

/// One enumerated entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<'a, V: ?Sized> {
    /// Key in the container's native form
    pub key: Key<'a>,

    /// Borrowed value
    pub value: &'a V,

    /// Reached through a prototype rather than owned directly
    pub inherited: bool,
}

impl<'a, V: ?Sized> Entry<'a, V> {
    /// Entry owned by the container.
    pub fn own(key: impl Into<Key<'a>>, value: &'a V) -> Self {
        Self {
            key: key.into(),
            value,
            inherited: false,
        }
    }

    /// Entry reached through a prototype.
    pub fn inherited(key: impl Into<Key<'a>>, value: &'a V) -> Self {
        Self {
            key: key.into(),
            value,
            inherited: true,
        }
    }
}

/// Something a walk can enumerate.
///
/// Enumeration is internal: the container drives `visit` and stops as soon
/// as it returns [`ControlFlow::Break`], propagating the break.
pub trait Container {
    /// Type of the values handed to callbacks.
    type Value: ?Sized;

    /// Whether 2-arg walks may cast keys to numeric indices.
    fn is_sequence_like(&self) -> bool;

    /// Visit every enumerable entry, own entries and inherited ones alike.
    fn enumerate(
        &self,
        visit: &mut dyn FnMut(Entry<'_, Self::Value>) -> ControlFlow<()>,
    ) -> ControlFlow<()>;
}

impl<C: Container + ?Sized> Container for &C {
    type Value = C::Value;

    fn is_sequence_like(&self) -> bool {
        (**self).is_sequence_like()
    }

    fn enumerate(
        &self,
        visit: &mut dyn FnMut(Entry<'_, Self::Value>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        (**self).enumerate(visit)
    }
}

impl<C: Container + ?Sized> Container for Box<C> {
    type Value = C::Value;

    fn is_sequence_like(&self) -> bool {
        (**self).is_sequence_like()
    }

    fn enumerate(
        &self,
        visit: &mut dyn FnMut(Entry<'_, Self::Value>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        (**self).enumerate(visit)
    }
}

/// A missing container has no entries.
impl<C: Container> Container for Option<C> {
    type Value = C::Value;

    fn is_sequence_like(&self) -> bool {
        self.as_ref().is_some_and(Container::is_sequence_like)
    }

    fn enumerate(
        &self,
        visit: &mut dyn FnMut(Entry<'_, Self::Value>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        match self {
            Some(container) => container.enumerate(visit),
            None => ControlFlow::Continue(()),
        }
    }
}

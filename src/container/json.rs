use std::ops::ControlFlow;

use serde_json::{Map, Value};

use super::{Container, Entry};

/// `length` holding a non-zero number marks an object as array-like.
fn has_length(object: &Map<String, Value>) -> bool {
    object
        .get("length")
        .and_then(Value::as_f64)
        .is_some_and(|length| length != 0.0 && !length.is_nan())
}

/// Arrays enumerate by position, objects by field name (document order with
/// `preserve_order`), strings by character. `null`, booleans and numbers
/// have no entries.
impl Container for Value {
    type Value = Value;

    fn is_sequence_like(&self) -> bool {
        match self {
            Value::Array(_) => true,
            Value::String(text) => !text.is_empty(),
            Value::Object(object) => has_length(object),
            Value::Null | Value::Bool(_) | Value::Number(_) => false,
        }
    }

    fn enumerate(
        &self,
        visit: &mut dyn FnMut(Entry<'_, Value>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        match self {
            Value::Array(items) => items.enumerate(visit),
            Value::Object(object) => object.enumerate(visit),
            Value::String(text) => {
                for (position, ch) in text.chars().enumerate() {
                    let character = Value::String(ch.to_string());
                    visit(Entry::own(position, &character))?;
                }
                ControlFlow::Continue(())
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => ControlFlow::Continue(()),
        }
    }
}

impl Container for Map<String, Value> {
    type Value = Value;

    fn is_sequence_like(&self) -> bool {
        has_length(self)
    }

    fn enumerate(
        &self,
        visit: &mut dyn FnMut(Entry<'_, Value>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        for (name, value) in self {
            visit(Entry::own(name.as_str(), value))?;
        }
        ControlFlow::Continue(())
    }
}

use std::ops::ControlFlow;

use super::{Container, Entry};

/// Characters as single-character substrings, keyed by character position.
impl Container for str {
    type Value = str;

    fn is_sequence_like(&self) -> bool {
        true
    }

    fn enumerate(
        &self,
        visit: &mut dyn FnMut(Entry<'_, str>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        for (position, (offset, ch)) in self.char_indices().enumerate() {
            visit(Entry::own(position, &self[offset..offset + ch.len_utf8()]))?;
        }
        ControlFlow::Continue(())
    }
}

impl Container for String {
    type Value = str;

    fn is_sequence_like(&self) -> bool {
        true
    }

    fn enumerate(
        &self,
        visit: &mut dyn FnMut(Entry<'_, str>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        self.as_str().enumerate(visit)
    }
}

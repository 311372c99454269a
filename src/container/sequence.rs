use std::collections::VecDeque;
use std::ops::ControlFlow;

use super::{Container, Entry};

fn enumerate_positions<'a, T: 'a>(
    items: impl Iterator<Item = &'a T>,
    visit: &mut dyn FnMut(Entry<'_, T>) -> ControlFlow<()>,
) -> ControlFlow<()> {
    for (index, item) in items.enumerate() {
        visit(Entry::own(index, item))?;
    }
    ControlFlow::Continue(())
}

impl<T> Container for [T] {
    type Value = T;

    fn is_sequence_like(&self) -> bool {
        true
    }

    fn enumerate(
        &self,
        visit: &mut dyn FnMut(Entry<'_, T>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        enumerate_positions(self.iter(), visit)
    }
}

impl<T, const N: usize> Container for [T; N] {
    type Value = T;

    fn is_sequence_like(&self) -> bool {
        true
    }

    fn enumerate(
        &self,
        visit: &mut dyn FnMut(Entry<'_, T>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        enumerate_positions(self.iter(), visit)
    }
}

impl<T> Container for Vec<T> {
    type Value = T;

    fn is_sequence_like(&self) -> bool {
        true
    }

    fn enumerate(
        &self,
        visit: &mut dyn FnMut(Entry<'_, T>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        enumerate_positions(self.iter(), visit)
    }
}

impl<T> Container for VecDeque<T> {
    type Value = T;

    fn is_sequence_like(&self) -> bool {
        true
    }

    fn enumerate(
        &self,
        visit: &mut dyn FnMut(Entry<'_, T>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        enumerate_positions(self.iter(), visit)
    }
}

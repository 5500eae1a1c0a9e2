// lock-step walk over both sequences
use std::iter::FusedIterator;
use std::slice;

use crate::core::record::UidPair;

/// Yields one [`UidPair`] per position, stopping as soon as either sequence
/// runs out.
///
/// Created by [`UidMap::iter`](crate::UidMap::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    source: slice::Iter<'a, T>,
    destination: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(source: &'a [T], destination: &'a [T]) -> Self {
        Self {
            source: source.iter(),
            destination: destination.iter(),
        }
    }
}

impl<T: Copy> Iterator for Iter<'_, T> {
    type Item = UidPair<T>;

    fn next(&mut self) -> Option<Self::Item> {
        //the shorter cursor decides; leftovers in the longer one are never paired
        if self.source.len() == 0 || self.destination.len() == 0 {
            return None;
        }
        let &s = self.source.next()?;
        let &d = self.destination.next()?;
        Some(UidPair::new(s, d))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.source.len().min(self.destination.len());
        (n, Some(n))
    }
}

impl<T: Copy> ExactSizeIterator for Iter<'_, T> {}

impl<T: Copy> FusedIterator for Iter<'_, T> {}

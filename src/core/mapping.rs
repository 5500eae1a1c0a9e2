// positional source -> destination uid mapping
use std::ops::Index;

use crate::core::error::MapError;
use crate::core::iter::Iter;
use crate::core::types::{Identifier, Uid};

/// Correlates the UIDs of messages in a source mailbox with the UIDs they got
/// in a destination mailbox after a copy or move.
///
/// Entry `i` of `source` corresponds to entry `i` of `destination`. The two
/// slices may differ in length; the tail of the longer one is never paired.
/// The map only borrows the slices, so they stay alive and unmodified for as
/// long as the map is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UidMap<'a, T> {
    source: &'a [T],
    destination: &'a [T],
}

/// Shared zero-entry map for callers needing a default without allocating.
pub static EMPTY_UID_MAP: UidMap<'static, Uid> = UidMap::EMPTY;

impl UidMap<'static, Uid> {
    pub const EMPTY: Self = UidMap {
        source: &[],
        destination: &[],
    };
}

impl<'a, T: Identifier> UidMap<'a, T> {
    /// Builds a map from the sequences produced by a copy/move.
    ///
    /// Either sequence being absent is an [`MapError::InvalidArgument`];
    /// empty or unequal-length sequences are fine.
    pub fn new(
        source: Option<&'a [T]>,
        destination: Option<&'a [T]>,
    ) -> Result<Self, MapError> {
        let source = source.ok_or(MapError::InvalidArgument { name: "source" })?;
        let destination =
            destination.ok_or(MapError::InvalidArgument { name: "destination" })?;
        Ok(Self::from_slices(source, destination))
    }

    pub fn from_slices(source: &'a [T], destination: &'a [T]) -> Self {
        Self { source, destination }
    }

    //first match wins; a match past the end of destination counts as no match
    fn position(&self, src: T) -> Option<usize> {
        self.source
            .iter()
            .position(|&s| s == src)
            .filter(|&i| i < self.destination.len())
    }

    pub fn get(&self, src: T) -> Option<T> {
        self.position(src).map(|i| self.destination[i])
    }

    /// Non-failing probe: `(true, dest)` when `src` is mapped, otherwise
    /// `(false, T::INVALID)`.
    pub fn try_get_value(&self, src: T) -> (bool, T) {
        match self.get(src) {
            Some(dest) => (true, dest),
            None => (false, T::INVALID),
        }
    }

    /// Returns the destination for `src`, or [`MapError::OutOfRange`] when
    /// [`try_get_value`](Self::try_get_value) would report no mapping.
    pub fn lookup(&self, src: T) -> Result<T, MapError> {
        self.get(src).ok_or_else(|| MapError::OutOfRange { uid: src.to_string() })
    }

    pub fn contains_source(&self, src: T) -> bool {
        self.position(src).is_some()
    }

    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(self.source, self.destination)
    }

    /// Number of correlated pairs.
    pub fn len(&self) -> usize {
        self.source.len().min(self.destination.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn source(&self) -> &'a [T] {
        self.source
    }

    pub fn destination(&self) -> &'a [T] {
        self.destination
    }

    //inert tails of the longer sequence
    pub fn excess_source(&self) -> &'a [T] {
        &self.source[self.len()..]
    }

    pub fn excess_destination(&self) -> &'a [T] {
        &self.destination[self.len()..]
    }
}

impl<T: Identifier> Default for UidMap<'_, T> {
    fn default() -> Self {
        Self { source: &[], destination: &[] }
    }
}

impl<T: Identifier> Index<T> for UidMap<'_, T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `src` has no mapped destination; use
    /// [`lookup`](UidMap::lookup) for the fallible form.
    fn index(&self, src: T) -> &T {
        match self.position(src) {
            Some(i) => &self.destination[i],
            None => panic!("uid {} has no mapped destination", src),
        }
    }
}

impl<'a, T: Identifier> IntoIterator for &UidMap<'a, T> {
    type Item = crate::core::record::UidPair<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

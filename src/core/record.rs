// one correlated (source, destination) pair
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::Identifier;

/// A source UID and the destination UID it was copied or moved to.
///
/// Both values are stored verbatim; the invalid sentinel is a legal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UidPair<T> {
    source: T,
    destination: T,
}

impl<T: Copy> UidPair<T> {
    pub const fn new(source: T, destination: T) -> Self {
        Self { source, destination }
    }

    pub fn source(&self) -> T {
        self.source
    }

    pub fn destination(&self) -> T {
        self.destination
    }
}

impl<T: Copy> From<(T, T)> for UidPair<T> {
    fn from((source, destination): (T, T)) -> Self {
        Self::new(source, destination)
    }
}

impl<T: Copy> From<UidPair<T>> for (T, T) {
    fn from(pair: UidPair<T>) -> Self {
        (pair.source, pair.destination)
    }
}

impl<T: Identifier> fmt::Display for UidPair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Uid;

    #[test]
    fn pair_keeps_values_verbatim_including_invalid() {
        let p = UidPair::new(Uid(4), Uid::INVALID);
        assert_eq!(p.source(), Uid(4));
        assert_eq!(p.destination(), Uid::INVALID);
    }

    #[test]
    fn pair_converts_to_and_from_tuples() {
        let p: UidPair<Uid> = (Uid(1), Uid(100)).into();
        assert_eq!(p, UidPair::new(Uid(1), Uid(100)));

        let (s, d): (Uid, Uid) = p.into();
        assert_eq!((s, d), (Uid(1), Uid(100)));
        assert_eq!(p.to_string(), "1->100");
    }
}

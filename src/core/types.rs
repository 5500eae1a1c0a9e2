// identifier types
use std::fmt;

use serde::{Deserialize, Serialize};

/// A totally ordered identifier with a reserved "invalid" value.
///
/// The map treats identifiers as opaque: it only compares them for equality
/// and hands back [`Identifier::INVALID`] when a lookup has no answer.
pub trait Identifier: Copy + Ord + fmt::Display {
    const INVALID: Self;
}

/// A message UID inside a single mailbox.
///
/// UIDs are strictly positive; zero never names a message and is used as the
/// invalid sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uid(pub u32);

impl Uid {
    pub const INVALID: Uid = Uid(0);

    pub const fn new(value: u32) -> Self {
        Uid(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl Identifier for Uid {
    const INVALID: Self = Uid::INVALID;
}

impl From<u32> for Uid {
    fn from(value: u32) -> Self {
        Uid(value)
    }
}

impl From<Uid> for u32 {
    fn from(uid: Uid) -> Self {
        uid.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

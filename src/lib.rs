//! Positional correlation between the UIDs of copied or moved messages.
//!
//! A [`UidMap`] borrows the source and destination UID sequences reported
//! by a copy/move and answers "where did this message end up?" without
//! copying either sequence.

pub mod core;
pub mod mapping;

pub use crate::core::error::MapError;
pub use crate::core::iter::Iter;
pub use crate::core::mapping::{UidMap, EMPTY_UID_MAP};
pub use crate::core::record::UidPair;
pub use crate::core::types::{Identifier, Uid};
pub use crate::mapping::report::MappingReport;

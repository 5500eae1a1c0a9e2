// error taxonomy for map construction and lookup
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    //only raised at construction, when one of the two sequences is missing
    #[error("invalid argument: {name} sequence is absent")]
    InvalidArgument { name: &'static str },

    #[error("uid {uid} has no mapped destination")]
    OutOfRange { uid: String },

    #[error("mapping report error: {0}")]
    Report(String),
}

use thiserror::Error;

/// Input that cannot be turned into a median.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("cannot compute median of an empty sequence")]
    EmptySequence,
    #[error("invalid number '{token}'. Please enter numbers separated by spaces, e.g. '1 2 3.5 4'")]
    UnparsableToken { token: String },
    #[error("non-finite value '{value}' is not supported")]
    NonFinite { value: String },
}

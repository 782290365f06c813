use thiserror::Error;

pub type MfResult<T> = Result<T, MfError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MfError {
    #[error("Negative capacity for {what}: {value}")]
    NegativeCapacity { what: String, value: i64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Unknown node: {name}")]
    UnknownNode { name: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}

use thiserror::Error;

/// Errors raised by the algebra. All failures are synchronous and local:
/// nothing is retried, and no previously constructed value is corrupted by
/// a failed call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No registered rule converts the value to the requested kind.
    #[error("expecting a {target}, but got {value}")]
    Coercion { value: String, target: &'static str },

    /// A constructor precondition was violated.
    #[error("{0}")]
    Validation(String),

    /// The language is infinite and cannot be materialized as a finite set.
    #[error("the language is infinite and cannot be materialized as a finite set")]
    InfiniteLanguage,
}

pub type Result<T> = std::result::Result<T, Error>;

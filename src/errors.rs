use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Input text matched none of the accepted angle grammars.
    #[error("malformed angle: '{0}'")]
    MalformedAngle(String),

    /// Input parsed to a value that is NaN or infinite.
    #[error("angle is not finite: {0}")]
    NonFinite(f64),
}

pub type Result<T> = std::result::Result<T, Error>;

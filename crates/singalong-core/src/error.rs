use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The caller handed over no input at all. This is a caller defect,
    /// not a data-quality problem.
    #[error("missing input: expected a filename or archive member path")]
    MissingInput,

    #[error("could not decode name as {encoding}")]
    Decoding { encoding: &'static str },

    #[error("unknown text encoding label: {0}")]
    UnknownEncoding(String),
}

pub type Result<T> = std::result::Result<T, Error>;

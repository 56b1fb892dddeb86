use std::string::FromUtf8Error;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid base64 input: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
    #[error("Expected and actual encoded message do not match")]
    Mismatch { expected: String, actual: String },
}

pub type Result<T> = std::result::Result<T, Error>;

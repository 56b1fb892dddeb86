pub mod encoder;
pub mod error;
pub mod logger;
pub mod message;

pub use error::{Error, Result};

use crate::{encoder::Base64Codec, message::generate_message};

/// Base64 form of the message returned by [`message::generate_message`].
pub const EXPECTED_ENCODED_MESSAGE: &str =
    "UmFuZG9tIG1lc3NhZ2UsIHJlYWxseSBzZWN1cmUgc3R1ZmYgKlRPUF9TRUNSRVQq";

pub fn get_encoded_message() -> String {
    let message = generate_message();
    log::debug!("[get_encoded_message] Message length: {}", message.len());
    Base64Codec.encode(message.as_bytes())
}

/// Compares the encoded message against `expected` by exact string equality.
pub fn verify_encoded_message(expected: &str) -> Result<()> {
    let actual = get_encoded_message();
    if actual == expected {
        Ok(())
    } else {
        log::debug!("[verify_encoded_message] expected {expected}, got {actual}");
        Err(Error::Mismatch {
            expected: expected.to_string(),
            actual,
        })
    }
}

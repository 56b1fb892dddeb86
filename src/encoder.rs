use base64::{Engine, engine::general_purpose};

use crate::error::Result;

/// Standard base64 (RFC 4648 §4) with `=` padding.
pub struct Base64Codec;

impl Base64Codec {
    pub fn encode<T>(&self, input: T) -> String
    where
        T: AsRef<[u8]>,
        Self: Send + Sync,
    {
        general_purpose::STANDARD.encode(input)
    }

    pub fn decode<T>(&self, input: T) -> Result<Vec<u8>>
    where
        T: AsRef<[u8]>,
        Self: Send + Sync,
    {
        Ok(general_purpose::STANDARD.decode(input)?)
    }

    /// Decodes `input` and interprets the bytes as UTF-8 text.
    pub fn decode_to_string<T>(&self, input: T) -> Result<String>
    where
        T: AsRef<[u8]>,
        Self: Send + Sync,
    {
        Ok(String::from_utf8(self.decode(input)?)?)
    }
}

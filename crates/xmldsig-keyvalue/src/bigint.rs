//! CryptoBinary codec: unsigned integers as minimal big-endian bytes in base64.
//!
//! Output is always minimal. Input may carry leading zero pad bytes, which
//! some signers emit, and is decoded to the same integer.
//!
//! Octet strings such as the DSA `Seed` keep their exact length and go
//! through [`encode_bytes`] / [`decode_bytes`] instead.

use std::borrow::Cow;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use num_bigint::BigUint;

use crate::config::CodecConfig;
use crate::error::{KeyValueError, KeyValueResult};

/// Minimal unsigned big-endian bytes. Zero encodes as a single `0x00`.
pub fn to_crypto_binary(value: &BigUint) -> Vec<u8> {
    value.to_bytes_be()
}

/// Interpret `bytes` as unsigned big-endian, leading zeros allowed.
pub fn from_crypto_binary(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

pub fn encode_base64(value: &BigUint) -> String {
    BASE64.encode(to_crypto_binary(value))
}

/// Decode element text for `field`, enforcing `config.max_value_len`.
pub fn decode_base64(field: &str, text: &str, config: &CodecConfig) -> KeyValueResult<BigUint> {
    decode_bytes(field, text, config).map(|bytes| from_crypto_binary(&bytes))
}

/// Base64 of an octet string, leading zeros kept.
pub fn encode_bytes(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode element text for `field` to its exact bytes.
///
/// Rejects empty and oversize values the same way [`decode_base64`] does.
pub fn decode_bytes(field: &str, text: &str, config: &CodecConfig) -> KeyValueResult<Vec<u8>> {
    let compact = strip_whitespace(text);
    if compact.is_empty() {
        return Err(KeyValueError::malformed(field, "empty value"));
    }

    // Reject before allocating; the estimate overshoots by at most two bytes.
    let estimate = base64::decoded_len_estimate(compact.len());
    if estimate > config.max_value_len.saturating_add(2) {
        return Err(too_large(field, estimate, config));
    }

    let bytes = BASE64
        .decode(compact.as_bytes())
        .map_err(|e| KeyValueError::malformed(field, e))?;
    if bytes.is_empty() {
        return Err(KeyValueError::malformed(field, "empty value"));
    }
    if bytes.len() > config.max_value_len {
        return Err(too_large(field, bytes.len(), config));
    }

    Ok(bytes)
}

fn too_large(field: &str, len: usize, config: &CodecConfig) -> KeyValueError {
    KeyValueError::ValueTooLarge {
        field: field.to_owned(),
        len,
        max: config.max_value_len,
    }
}

fn strip_whitespace(text: &str) -> Cow<'_, str> {
    if text.bytes().any(|b| b.is_ascii_whitespace()) {
        Cow::Owned(text.chars().filter(|c| !c.is_ascii_whitespace()).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Serde adapter writing a `BigUint` as CryptoBinary base64 text.
///
/// Deserialization applies the default [`CodecConfig`] checks, so JSON input
/// is held to the same rules as element text.
pub mod serde_base64 {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    fn decode<E: serde::de::Error>(text: &str) -> Result<Vec<u8>, E> {
        decode_bytes("value", text, &CodecConfig::default()).map_err(E::custom)
    }

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode_base64(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(from_crypto_binary(&decode::<D::Error>(&text)?))
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<BigUint>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => serializer.serialize_some(&encode_base64(v)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<BigUint>, D::Error> {
            let Some(text) = Option::<String>::deserialize(deserializer)? else {
                return Ok(None);
            };
            Ok(Some(from_crypto_binary(&decode::<D::Error>(&text)?)))
        }
    }

    /// Octet strings: base64 of the exact bytes.
    pub mod bytes {
        use super::*;

        pub fn serialize<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&encode_bytes(value))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
            let text = String::deserialize(deserializer)?;
            decode(&text)
        }
    }
}

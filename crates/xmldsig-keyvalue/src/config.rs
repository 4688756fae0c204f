//! Decode limits applied while parsing untrusted XML

use serde::{Deserialize, Serialize};

/// Default ceiling on a single decoded value, in bytes.
///
/// RSA-65536 moduli are 8192 bytes; DSA parameters top out at 384.
pub const DEFAULT_MAX_VALUE_LEN: usize = 8192;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Largest decoded byte length accepted for any one field.
    pub max_value_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_value_len: DEFAULT_MAX_VALUE_LEN,
        }
    }
}

impl CodecConfig {
    pub fn with_max_value_len(max_value_len: usize) -> Self {
        Self { max_value_len }
    }
}

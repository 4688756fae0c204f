pub mod build;
pub mod config;
pub mod inspect;
pub mod roundtrip;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::debug;
use xmldsig_keyvalue::ns::{DSIG, node};
use xmldsig_keyvalue::{CodecConfig, DsaParameters, Element, KeyValue, RsaParameters};

/// Global context passed to all commands
pub struct Context {
    pub json_output: bool,
    /// Decode limits: --max-value-len, else config file and environment
    pub codec: CodecConfig,
    pub verbose: bool,
}

/// JSON interchange form of one key: integers as CryptoBinary base64.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "lowercase")]
pub enum KeyParameters {
    Dsa(DsaParameters),
    Rsa(RsaParameters),
}

impl KeyParameters {
    pub fn from_key_value(kv: &KeyValue) -> Option<Self> {
        match kv {
            KeyValue::Dsa(kv) => kv.key().cloned().map(Self::Dsa),
            KeyValue::Rsa(kv) => kv.key().cloned().map(Self::Rsa),
        }
    }
}

impl From<KeyParameters> for KeyValue {
    fn from(params: KeyParameters) -> Self {
        match params {
            KeyParameters::Dsa(p) => p.into(),
            KeyParameters::Rsa(p) => p.into(),
        }
    }
}

/// Read an XML file holding either a `KeyValue` or a `KeyInfo` root.
pub fn read_document(path: &str) -> Result<Element> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    let root = Element::parse_str(&text).with_context(|| format!("{path} is not well-formed XML"))?;
    debug!(path, root = root.local_name(), "read document");
    Ok(root)
}

/// The `KeyValue` elements of a document: the root itself, or the
/// `KeyValue` children of a `KeyInfo` root.
pub fn key_value_elements(root: &Element) -> Result<Vec<&Element>> {
    if root.is(DSIG, node::KEY_VALUE) {
        return Ok(vec![root]);
    }
    if root.is(DSIG, node::KEY_INFO) {
        return Ok(root
            .child_elements()
            .filter(|child| child.is(DSIG, node::KEY_VALUE))
            .collect());
    }
    anyhow::bail!(
        "Expected a {} or {} root element, found {}",
        node::KEY_VALUE,
        node::KEY_INFO,
        root.local_name()
    )
}

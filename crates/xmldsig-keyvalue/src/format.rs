//! Shared capability of the KeyValue algorithm variants

use crate::builder::{build_dsa_key_value, build_rsa_key_value};
use crate::config::CodecConfig;
use crate::error::KeyValueResult;
use crate::ns::node;
use crate::parser::{parse_dsa_key_value, parse_rsa_key_value};
use crate::params::{DsaParameters, RsaParameters};
use crate::xml::Element;

/// Parameter sets that map to one algorithm element under `KeyValue`.
pub trait KeyValueFormat: Sized {
    /// Local name of the algorithm element, e.g. `DSAKeyValue`.
    const ALGORITHM_ELEMENT: &'static str;

    /// Build the algorithm element.
    fn to_element(&self) -> Element;

    /// Parse the algorithm element.
    fn from_element(element: &Element, config: &CodecConfig) -> KeyValueResult<Self>;
}

impl KeyValueFormat for DsaParameters {
    const ALGORITHM_ELEMENT: &'static str = node::DSA_KEY_VALUE;

    fn to_element(&self) -> Element {
        build_dsa_key_value(self)
    }

    fn from_element(element: &Element, config: &CodecConfig) -> KeyValueResult<Self> {
        parse_dsa_key_value(element, config)
    }
}

impl KeyValueFormat for RsaParameters {
    const ALGORITHM_ELEMENT: &'static str = node::RSA_KEY_VALUE;

    fn to_element(&self) -> Element {
        build_rsa_key_value(self)
    }

    fn from_element(element: &Element, config: &CodecConfig) -> KeyValueResult<Self> {
        parse_rsa_key_value(element, config)
    }
}

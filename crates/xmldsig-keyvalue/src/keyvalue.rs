//! KeyValue wrappers.
//!
//! A wrapper is either empty or holds one parameter set. `load_xml` replaces
//! the parameter set only when parsing succeeds; `get_xml` never mutates.
//! Instances take `&mut self` for every write, so sharing one across threads
//! requires the caller's own synchronization; distinct instances share nothing.

use crate::builder::wrap_key_value;
use crate::config::CodecConfig;
use crate::error::{KeyValueError, KeyValueResult};
use crate::format::KeyValueFormat;
use crate::ns::{DSIG, node};
use crate::params::{DsaParameters, RsaParameters};
use crate::parser::{expect_element, parse_key_value};
use crate::xml::Element;

/// Wrapper owning an optional parameter set of type `K`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedKeyValue<K> {
    key: Option<K>,
    config: CodecConfig,
}

pub type DsaKeyValue = TypedKeyValue<DsaParameters>;
pub type RsaKeyValue = TypedKeyValue<RsaParameters>;

impl<K> Default for TypedKeyValue<K> {
    fn default() -> Self {
        Self {
            key: None,
            config: CodecConfig::default(),
        }
    }
}

impl<K: KeyValueFormat> TypedKeyValue<K> {
    /// An empty wrapper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `key`. `None` is accepted and leaves the wrapper empty.
    pub fn from_key(key: impl Into<Option<K>>) -> Self {
        Self {
            key: key.into(),
            config: CodecConfig::default(),
        }
    }

    /// Limits applied by later `load_xml` calls.
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub fn set_key(&mut self, key: impl Into<Option<K>>) {
        self.key = key.into();
    }

    pub fn into_key(self) -> Option<K> {
        self.key
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_none()
    }

    /// Builds `KeyValue/<algorithm element>`.
    pub fn get_xml(&self) -> KeyValueResult<Element> {
        let key = self.key.as_ref().ok_or(KeyValueError::EmptyKey)?;
        Ok(wrap_key_value(key.to_element()))
    }

    /// Replaces the held key with the one parsed from a `KeyValue` element.
    ///
    /// On error the previously held key is kept.
    pub fn load_xml<'a>(&mut self, element: impl Into<Option<&'a Element>>) -> KeyValueResult<()> {
        let parsed = parse_key_value::<K>(element.into(), &self.config)?;
        self.key = Some(parsed);
        Ok(())
    }
}

/// The closed set of KeyValue variants this crate understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyValue {
    Dsa(DsaKeyValue),
    Rsa(RsaKeyValue),
}

impl KeyValue {
    /// Algorithm element names recognised by [`KeyValue::from_xml`].
    pub const ALGORITHM_ELEMENTS: [&'static str; 2] = [node::DSA_KEY_VALUE, node::RSA_KEY_VALUE];

    /// Parses a `KeyValue` element, dispatching on the local name of its
    /// first recognised algorithm child.
    pub fn from_xml(element: &Element, config: &CodecConfig) -> KeyValueResult<Self> {
        let algorithm = Self::algorithm_of(element)?;
        match algorithm {
            node::DSA_KEY_VALUE => {
                let mut kv = DsaKeyValue::new().with_config(*config);
                kv.load_xml(element)?;
                Ok(Self::Dsa(kv))
            }
            _ => {
                let mut kv = RsaKeyValue::new().with_config(*config);
                kv.load_xml(element)?;
                Ok(Self::Rsa(kv))
            }
        }
    }

    pub fn get_xml(&self) -> KeyValueResult<Element> {
        match self {
            Self::Dsa(kv) => kv.get_xml(),
            Self::Rsa(kv) => kv.get_xml(),
        }
    }

    /// Local name of the algorithm element this variant maps to.
    pub fn algorithm(&self) -> &'static str {
        match self {
            Self::Dsa(_) => DsaParameters::ALGORITHM_ELEMENT,
            Self::Rsa(_) => RsaParameters::ALGORITHM_ELEMENT,
        }
    }

    /// Name of the first recognised algorithm child of a `KeyValue` element.
    fn algorithm_of(element: &Element) -> KeyValueResult<&'static str> {
        expect_element(element, node::KEY_VALUE)?;
        element
            .child_elements()
            .filter(|child| child.namespace() == Some(DSIG))
            .find_map(|child| {
                Self::ALGORITHM_ELEMENTS
                    .into_iter()
                    .find(|name| *name == child.local_name())
            })
            .ok_or_else(|| {
                let found: Vec<&str> = element.child_elements().map(Element::local_name).collect();
                KeyValueError::UnsupportedKeyValue(if found.is_empty() {
                    "empty KeyValue".to_owned()
                } else {
                    found.join(", ")
                })
            })
    }
}

impl From<DsaParameters> for KeyValue {
    fn from(params: DsaParameters) -> Self {
        Self::Dsa(DsaKeyValue::from_key(params))
    }
}

impl From<RsaParameters> for KeyValue {
    fn from(params: RsaParameters) -> Self {
        Self::Rsa(RsaKeyValue::from_key(params))
    }
}

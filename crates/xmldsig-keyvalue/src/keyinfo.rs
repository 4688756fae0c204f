//! `KeyInfo` container: an ordered list of clauses, of which only
//! `KeyValue` is interpreted. Everything else passes through untouched.

use tracing::debug;

use crate::config::CodecConfig;
use crate::error::{KeyValueError, KeyValueResult};
use crate::keyvalue::KeyValue;
use crate::ns::{DSIG, attr, node};
use crate::parser::expect_element;
use crate::xml::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInfoClause {
    KeyValue(KeyValue),
    /// Any child not understood by this crate, kept verbatim.
    Other(Element),
}

impl KeyInfoClause {
    fn from_xml(element: &Element, config: &CodecConfig) -> KeyValueResult<Self> {
        if !element.is(DSIG, node::KEY_VALUE) {
            return Ok(Self::Other(element.clone()));
        }
        match KeyValue::from_xml(element, config) {
            Ok(kv) => Ok(Self::KeyValue(kv)),
            Err(KeyValueError::UnsupportedKeyValue(_)) => Ok(Self::Other(element.clone())),
            Err(e) => Err(e),
        }
    }

    fn get_xml(&self) -> KeyValueResult<Element> {
        match self {
            Self::KeyValue(kv) => kv.get_xml(),
            Self::Other(element) => Ok(element.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInfo {
    id: Option<String>,
    clauses: Vec<KeyInfoClause>,
    config: CodecConfig,
}

impl KeyInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<Option<String>>) {
        self.id = id.into();
    }

    pub fn clauses(&self) -> &[KeyInfoClause] {
        &self.clauses
    }

    pub fn add_clause(&mut self, clause: KeyInfoClause) {
        self.clauses.push(clause);
    }

    /// The interpreted `KeyValue` clauses, in document order.
    pub fn key_values(&self) -> impl Iterator<Item = &KeyValue> {
        self.clauses.iter().filter_map(|clause| match clause {
            KeyInfoClause::KeyValue(kv) => Some(kv),
            KeyInfoClause::Other(_) => None,
        })
    }

    pub fn get_xml(&self) -> KeyValueResult<Element> {
        let mut element = Element::dsig(node::KEY_INFO);
        if let Some(id) = &self.id {
            element.set_attribute(attr::ID, id.as_str());
        }
        for clause in &self.clauses {
            element.push_child(clause.get_xml()?);
        }
        Ok(element)
    }

    /// Replaces id and clauses with those of a `KeyInfo` element.
    ///
    /// On error the current contents are kept.
    pub fn load_xml<'a>(&mut self, element: impl Into<Option<&'a Element>>) -> KeyValueResult<()> {
        let element = element
            .into()
            .ok_or(KeyValueError::InvalidArgument("element"))?;
        expect_element(element, node::KEY_INFO)?;

        let clauses = element
            .child_elements()
            .map(|child| KeyInfoClause::from_xml(child, &self.config))
            .collect::<KeyValueResult<Vec<_>>>()?;

        debug!(
            clauses = clauses.len(),
            key_values = clauses
                .iter()
                .filter(|c| matches!(c, KeyInfoClause::KeyValue(_)))
                .count(),
            "loaded KeyInfo"
        );
        self.id = element.attribute(attr::ID).map(str::to_owned);
        self.clauses = clauses;
        Ok(())
    }
}

impl From<KeyValue> for KeyInfoClause {
    fn from(kv: KeyValue) -> Self {
        Self::KeyValue(kv)
    }
}

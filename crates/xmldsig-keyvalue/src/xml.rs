//! Owned, namespace-aware XML element tree.
//!
//! Elements keep their resolved namespace URI and local name; prefixes are
//! dropped on parse. Serialization declares a default namespace wherever an
//! element's namespace differs from its parent's, so output depends only on
//! the tree contents.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;

use crate::error::{KeyValueError, KeyValueResult};
use crate::ns;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    namespace: Option<String>,
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(namespace: Option<&str>, name: &str) -> Self {
        Self {
            namespace: namespace.map(str::to_owned),
            name: name.to_owned(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Element in the XML-DSig namespace.
    pub fn dsig(name: &str) -> Self {
        Self::new(Some(ns::DSIG), name)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn local_name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.name == name && self.namespace() == Some(namespace)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name.to_owned(), value)),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First child element with this namespace URI and local name.
    pub fn child(&self, namespace: &str, name: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.is(namespace, name))
    }

    /// Concatenated direct text content.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    pub fn parse_str(xml: &str) -> KeyValueResult<Self> {
        let mut reader = NsReader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let (resolved, event) = reader.read_resolved_event()?;
            match event {
                Event::Start(start) => {
                    let element = open_element(resolved, &start)?;
                    stack.push(element);
                }
                Event::Empty(start) => {
                    let element = open_element(resolved, &start)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| KeyValueError::Xml("unbalanced end tag".into()))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    let text = text.unescape()?;
                    push_text(&mut stack, &text)?;
                }
                Event::CData(data) => {
                    let data = data.into_inner();
                    let text = std::str::from_utf8(&data)
                        .map_err(|e| KeyValueError::Xml(e.to_string()))?;
                    push_text(&mut stack, text)?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(KeyValueError::Xml("unexpected end of document".into()));
        }
        root.ok_or_else(|| KeyValueError::Xml("document has no root element".into()))
    }

    pub fn to_xml_string(&self) -> KeyValueResult<String> {
        let mut writer = Writer::new(Vec::new());
        self.write_to(&mut writer, None)?;
        String::from_utf8(writer.into_inner()).map_err(|e| KeyValueError::Xml(e.to_string()))
    }

    fn write_to(
        &self,
        writer: &mut Writer<Vec<u8>>,
        parent_ns: Option<&str>,
    ) -> KeyValueResult<()> {
        let mut start = BytesStart::new(self.name.as_str());
        if self.namespace() != parent_ns {
            start.push_attribute(("xmlns", self.namespace().unwrap_or("")));
        }
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_to(writer, self.namespace())?,
                Node::Text(t) => writer.write_event(Event::Text(BytesText::new(t)))?,
            }
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

fn open_element(resolved: ResolveResult<'_>, start: &BytesStart<'_>) -> KeyValueResult<Element> {
    let namespace = match resolved {
        ResolveResult::Bound(ns) => Some(
            std::str::from_utf8(ns.as_ref())
                .map_err(|e| KeyValueError::Xml(e.to_string()))?
                .to_owned(),
        ),
        ResolveResult::Unbound => None,
        ResolveResult::Unknown(prefix) => {
            return Err(KeyValueError::Xml(format!(
                "unknown namespace prefix '{}'",
                String::from_utf8_lossy(&prefix)
            )));
        }
    };

    let local_name = start.local_name();
    let name =
        std::str::from_utf8(local_name.as_ref()).map_err(|e| KeyValueError::Xml(e.to_string()))?;
    let mut element = Element {
        namespace,
        name: name.to_owned(),
        attributes: Vec::new(),
        children: Vec::new(),
    };

    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| KeyValueError::Xml(e.to_string()))?;
        // The default namespace is re-derived on write.
        if key == "xmlns" {
            continue;
        }
        let value = attr.unescape_value()?;
        element.attributes.push((key.to_owned(), value.into_owned()));
    }

    Ok(element)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> KeyValueResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.push_child(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(KeyValueError::Xml("multiple root elements".into())),
    }
    Ok(())
}

fn push_text(stack: &mut [Element], text: &str) -> KeyValueResult<()> {
    // Indentation between elements is not content.
    if text.trim().is_empty() {
        return Ok(());
    }
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Text(text.to_owned()));
            Ok(())
        }
        None => Err(KeyValueError::Xml("text outside of root element".into())),
    }
}

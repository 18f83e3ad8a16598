//! # XML Element Tree
//!
//! A small read-only element tree built from `quick-xml` events. NFC-e
//! documents are a few kilobytes, so the whole tree is materialized once and
//! then queried with slash-separated paths (`infNFe/emit/xNome`).
//!
//! Namespaces are ignored: elements and attributes are keyed by local name.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{DanfceError, Result};

/// One XML element with its attributes, concatenated text and children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<XmlNode>,
}

/// Stand-in for a missing subtree; every lookup on it comes back empty.
pub(crate) static EMPTY_NODE: XmlNode = XmlNode {
    name: String::new(),
    attributes: Vec::new(),
    text: String::new(),
    children: Vec::new(),
};

impl XmlNode {
    /// Parse a complete XML document and return its root element.
    pub fn parse(xml: &str) -> Result<XmlNode> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    stack.push(Self::open(e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let node = Self::open(e)?;
                    Self::attach(&mut stack, &mut root, node)?;
                }
                Ok(Event::End(_)) => {
                    let node = stack.pop().ok_or_else(|| {
                        DanfceError::DocumentParse("unexpected closing tag".to_string())
                    })?;
                    Self::attach(&mut stack, &mut root, node)?;
                }
                Ok(Event::Text(e)) => {
                    let text = e
                        .unescape()
                        .map_err(|err| DanfceError::DocumentParse(err.to_string()))?;
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    let raw = e.into_inner();
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&String::from_utf8_lossy(&raw));
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(DanfceError::DocumentParse(format!(
                        "at byte {}: {}",
                        reader.buffer_position(),
                        e
                    )));
                }
            }
        }

        if let Some(open) = stack.last() {
            return Err(DanfceError::DocumentParse(format!(
                "document ends inside <{}>",
                open.name
            )));
        }
        root.ok_or_else(|| DanfceError::DocumentParse("no root element".to_string()))
    }

    fn open(e: &BytesStart) -> Result<XmlNode> {
        let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();

        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| DanfceError::DocumentParse(err.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).to_string();
            let value = attr
                .unescape_value()
                .map_err(|err| DanfceError::DocumentParse(err.to_string()))?
                .to_string();
            attributes.push((key, value));
        }

        Ok(XmlNode {
            name,
            attributes,
            ..Default::default()
        })
    }

    fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) -> Result<()> {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None if root.is_none() => *root = Some(node),
            None => {
                return Err(DanfceError::DocumentParse(format!(
                    "second root element <{}>",
                    node.name
                )));
            }
        }
        Ok(())
    }

    /// First child with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given local name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Follow a slash-separated path of child names.
    pub fn find(&self, path: &str) -> Option<&XmlNode> {
        path.split('/').try_fold(self, |node, name| node.child(name))
    }

    /// Trimmed text at `path`, or empty when the path does not exist.
    pub fn text_at(&self, path: &str) -> String {
        self.find(path)
            .map(|node| node.text.trim().to_string())
            .unwrap_or_default()
    }

    /// Attribute value by local name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_tree() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
            <nfeProc xmlns="http://www.portalfiscal.inf.br/nfe" versao="4.00">
                <NFe><infNFe Id="NFe123"><emit><xNome>Padaria &amp; Cia</xNome></emit></infNFe></NFe>
            </nfeProc>"#;
        let root = XmlNode::parse(xml).unwrap();

        assert_eq!(root.name, "nfeProc");
        assert_eq!(root.attribute("versao"), Some("4.00"));
        assert_eq!(root.text_at("NFe/infNFe/emit/xNome"), "Padaria & Cia");
        assert_eq!(root.find("NFe/infNFe").unwrap().attribute("Id"), Some("NFe123"));
    }

    #[test]
    fn test_missing_path_is_empty() {
        let root = XmlNode::parse("<a><b>1</b></a>").unwrap();
        assert_eq!(root.text_at("b"), "1");
        assert_eq!(root.text_at("c/d"), "");
        assert!(root.find("b/c").is_none());
    }

    #[test]
    fn test_repeated_children_keep_order() {
        let root = XmlNode::parse("<a><det>1</det><x/><det>2</det></a>").unwrap();
        let texts: Vec<&str> = root.children_named("det").map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["1", "2"]);
    }

    #[test]
    fn test_cdata_text() {
        let root = XmlNode::parse("<a><qrCode><![CDATA[https://x?p=1|2]]></qrCode></a>").unwrap();
        assert_eq!(root.text_at("qrCode"), "https://x?p=1|2");
    }

    #[test]
    fn test_malformed_documents_fail() {
        assert!(matches!(
            XmlNode::parse("<a><b></a>"),
            Err(DanfceError::DocumentParse(_))
        ));
        assert!(matches!(
            XmlNode::parse("<a><b>"),
            Err(DanfceError::DocumentParse(_))
        ));
        assert!(matches!(
            XmlNode::parse("just text"),
            Err(DanfceError::DocumentParse(_))
        ));
    }
}

//! Minimal XML property-list reader.
//!
//! Parses the subset of the plist format that signature definitions use
//! (dict, array, string, boolean, integer, data) into an owned value tree.
//! Unknown elements are skipped, never fatal: the file is vendor-updated and
//! may grow keys this crate does not care about.

use crate::error::{ExtractError, Result};
use roxmltree::{Document, Node};
use std::collections::HashMap;
use tracing::debug;

/// A parsed plist value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Dict(HashMap<String, Value>),
    Array(Vec<Value>),
    String(String),
    Bool(bool),
    Integer(i64),
    /// Raw base64 payload of a `<data>` element, unencoded.
    Data(String),
}

impl Value {
    pub fn as_dict(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Dict(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Text content of a value. `<data>` payloads count as their base64
    /// text, the way text-based plist readers surface them; signature
    /// identities are stored that way.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Data(d) => Some(d),
            _ => None,
        }
    }

    /// Dict lookup; None for non-dict values or missing keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_dict().and_then(|map| map.get(key))
    }

    /// Dict lookup of a string value, defaulting to "" when the key is
    /// missing or not text-valued.
    pub fn get_str_or_empty(&self, key: &str) -> String {
        self.get(key)
            .and_then(Value::as_text)
            .unwrap_or_default()
            .to_string()
    }
}

/// Parse an XML plist document into its top-level value.
pub fn parse(xml: &str) -> Result<Value> {
    // roxmltree doesn't support DTDs, so strip everything before <plist.
    let stripped = match xml.find("<plist") {
        Some(start) => &xml[start..],
        None => xml,
    };

    let doc = Document::parse(stripped)
        .map_err(|e| ExtractError::plist_parse(e.to_string()))?;

    let root = doc
        .root()
        .first_element_child()
        .ok_or_else(|| ExtractError::plist_parse("document has no root element"))?;

    // Unwrap the <plist> wrapper if present; some embedded plists omit it.
    let top = if root.tag_name().name() == "plist" {
        root.first_element_child()
            .ok_or_else(|| ExtractError::plist_parse("<plist> element is empty"))?
    } else {
        root
    };

    parse_value(top)
        .ok_or_else(|| ExtractError::plist_parse(format!("unsupported root element <{}>", top.tag_name().name())))
}

fn parse_value(node: Node) -> Option<Value> {
    match node.tag_name().name() {
        "dict" => Some(Value::Dict(parse_dict(node))),
        "array" => {
            let items = node
                .children()
                .filter(|c| c.is_element())
                .filter_map(parse_value)
                .collect();
            Some(Value::Array(items))
        }
        "string" => Some(Value::String(node.text().unwrap_or("").to_string())),
        "true" => Some(Value::Bool(true)),
        "false" => Some(Value::Bool(false)),
        "integer" => node
            .text()
            .and_then(|t| t.trim().parse::<i64>().ok())
            .map(Value::Integer),
        "data" => Some(Value::Data(
            node.text().unwrap_or("").split_whitespace().collect(),
        )),
        other => {
            debug!("Skipping unsupported plist element <{}>", other);
            None
        }
    }
}

fn parse_dict(node: Node) -> HashMap<String, Value> {
    let mut map = HashMap::new();
    let mut current_key: Option<String> = None;

    for child in node.children() {
        if !child.is_element() {
            continue;
        }

        if child.tag_name().name() == "key" {
            current_key = Some(child.text().unwrap_or("").to_string());
            continue;
        }

        // A value element consumes the pending key even when the value
        // itself is unsupported, so key/value pairing stays aligned.
        if let Some(key) = current_key.take() {
            if let Some(value) = parse_value(child) {
                map.insert(key, value);
            }
        } else {
            debug!(
                "Skipping <{}> with no preceding <key>",
                child.tag_name().name()
            );
        }
    }

    map
}

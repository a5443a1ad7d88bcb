//! Nodes and Elements
//!
//! Arena node identifiers and element payloads.

use std::collections::{BTreeMap, HashSet};

/// Index of an element in the document arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::NONE
    }
}

/// An element in the document
#[derive(Debug)]
pub struct Element {
    /// Tag name
    pub tag: String,
    /// Element's own text content (not including descendants)
    pub text: Option<String>,
    /// Hidden elements and their subtrees are not rendered or laid out
    pub hidden: bool,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) classes: HashSet<String>,
    pub(crate) styles: BTreeMap<String, String>,
    pub(crate) parent: NodeId,
    pub(crate) children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            text: None,
            hidden: false,
            attributes: BTreeMap::new(),
            classes: HashSet::new(),
            styles: BTreeMap::new(),
            parent: NodeId::NONE,
            children: Vec::new(),
        }
    }

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|v| v.as_str())
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Check class membership
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    /// Add or remove a class; adding twice is a no-op
    pub fn set_class(&mut self, name: &str, on: bool) {
        if on {
            self.classes.insert(name.to_string());
        } else {
            self.classes.remove(name);
        }
    }

    /// Classes in sorted order
    pub fn class_list(&self) -> Vec<&str> {
        let mut list: Vec<&str> = self.classes.iter().map(|c| c.as_str()).collect();
        list.sort_unstable();
        list
    }

    /// Get an inline style declaration
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(|v| v.as_str())
    }

    /// Set an inline style declaration, one value per property
    pub fn set_style(&mut self, property: &str, value: &str) {
        self.styles.insert(property.to_string(), value.to_string());
    }

    /// Remove an inline style declaration
    pub fn remove_style(&mut self, property: &str) {
        self.styles.remove(property);
    }

    pub fn parent(&self) -> NodeId {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

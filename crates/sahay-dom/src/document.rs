//! Document - High-level document API

use crate::node::{Element, NodeId};
use crate::DomError;

/// A document: an arena of elements under a single root
#[derive(Debug)]
pub struct Document {
    /// Document URL (route)
    url: String,
    nodes: Vec<Element>,
    root: NodeId,
}

impl Document {
    /// Create a new document with an empty root element
    pub fn new(url: &str) -> Self {
        let mut doc = Self {
            url: url.to_string(),
            nodes: Vec::new(),
            root: NodeId::NONE,
        };
        doc.root = doc.create_element("html");
        doc
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the root element id
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of elements in the document
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Element::new(tag));
        id
    }

    /// Append a detached element to a parent
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.get(parent).is_none() {
            return Err(DomError::InvalidNode(parent));
        }
        if self.get(child).is_none() {
            return Err(DomError::InvalidNode(child));
        }
        self.nodes[child.index()].parent = parent;
        self.nodes[parent.index()].children.push(child);
        Ok(())
    }

    /// Get an element by id
    pub fn get(&self, id: NodeId) -> Option<&Element> {
        if id.is_valid() {
            self.nodes.get(id.index())
        } else {
            None
        }
    }

    /// Get a mutable element by id
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        if id.is_valid() {
            self.nodes.get_mut(id.index())
        } else {
            None
        }
    }

    /// Set an element's own text
    pub fn set_text(&mut self, id: NodeId, text: &str) -> Result<(), DomError> {
        let el = self.get_mut(id).ok_or(DomError::InvalidNode(id))?;
        el.text = Some(text.to_string());
        Ok(())
    }

    /// Set an attribute on an element
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        let el = self.get_mut(id).ok_or(DomError::InvalidNode(id))?;
        el.set_attribute(name, value);
        Ok(())
    }

    /// Hide or show an element (and transitively its subtree)
    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) -> Result<(), DomError> {
        let el = self.get_mut(id).ok_or(DomError::InvalidNode(id))?;
        el.hidden = hidden;
        Ok(())
    }

    /// All element ids in document (pre)order, root first
    pub fn document_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        self.collect_order(self.root, &mut order);
        order
    }

    fn collect_order(&self, id: NodeId, out: &mut Vec<NodeId>) {
        let Some(el) = self.get(id) else { return };
        out.push(id);
        for &child in &el.children {
            self.collect_order(child, out);
        }
    }

    /// An element is visible if neither it nor any ancestor is hidden
    pub fn is_visible(&self, id: NodeId) -> bool {
        let mut cursor = id;
        while let Some(el) = self.get(cursor) {
            if el.hidden {
                return false;
            }
            cursor = el.parent;
        }
        id.is_valid()
    }

    /// Text of an element and its descendants, in document order
    pub fn text_content(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        self.collect_text(id, &mut parts);
        parts.join(" ")
    }

    fn collect_text(&self, id: NodeId, out: &mut Vec<String>) {
        let Some(el) = self.get(id) else { return };
        if let Some(text) = &el.text {
            if !text.trim().is_empty() {
                out.push(text.trim().to_string());
            }
        }
        for &child in &el.children {
            self.collect_text(child, out);
        }
    }

    // Root presentation surface, used by the effect applicator.

    /// Check a class on the root element
    pub fn root_has_class(&self, name: &str) -> bool {
        self.get(self.root).map(|el| el.has_class(name)).unwrap_or(false)
    }

    /// Toggle a class on the root element
    pub fn set_root_class(&mut self, name: &str, on: bool) {
        let root = self.root;
        if let Some(el) = self.get_mut(root) {
            el.set_class(name, on);
        }
    }

    /// Get an inline style declaration on the root element
    pub fn root_style(&self, property: &str) -> Option<&str> {
        self.get(self.root).and_then(|el| el.style(property))
    }

    /// Set an inline style declaration on the root element
    pub fn set_root_style(&mut self, property: &str, value: &str) {
        let root = self.root;
        if let Some(el) = self.get_mut(root) {
            el.set_style(property, value);
        }
    }

    /// Remove an inline style declaration from the root element
    pub fn remove_root_style(&mut self, property: &str) {
        let root = self.root;
        if let Some(el) = self.get_mut(root) {
            el.remove_style(property);
        }
    }

    /// Get an attribute on the root element
    pub fn root_attribute(&self, name: &str) -> Option<&str> {
        self.get(self.root).and_then(|el| el.attribute(name))
    }

    /// Set an attribute on the root element
    pub fn set_root_attribute(&mut self, name: &str, value: &str) {
        let root = self.root;
        if let Some(el) = self.get_mut(root) {
            el.set_attribute(name, value);
        }
    }
}

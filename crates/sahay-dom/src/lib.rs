//! Sahay Document Model
//!
//! A minimal arena-backed document the assistive engine acts on.
//!
//! Features:
//! - Elements with tag, text, attributes, classes, hidden flag
//! - Document-order traversal and visibility queries
//! - Idempotent class/style/attribute surface on the document root

pub mod document;
pub mod node;

pub use document::Document;
pub use node::{Element, NodeId};

/// Document model error
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("Invalid node id: {0:?}")]
    InvalidNode(NodeId),
}

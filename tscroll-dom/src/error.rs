//! Document error types

use crate::NodeId;

/// Errors raised by document mutations and selector parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The node was removed or never belonged to this document.
    #[error("unknown node: {0:?}")]
    UnknownNode(NodeId),

    /// Appending would make a node its own ancestor.
    #[error("cannot append {child:?} under its own descendant {parent:?}")]
    Cycle { parent: NodeId, child: NodeId },

    /// The document's root element cannot be detached or removed.
    #[error("cannot detach the document root")]
    DetachRoot,

    /// The selector string could not be parsed.
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

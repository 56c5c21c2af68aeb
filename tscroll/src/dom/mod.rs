//! The document collaborator consumed by the scrollbar.
//!
//! The widget never owns elements. It reads and writes a host document
//! through this narrow trait; [`tscroll_dom::Document`] implements it for
//! tests and terminal hosts.

mod document;

use std::fmt::Debug;
use std::hash::Hash;

/// Host document operations the scrollbar needs.
///
/// Mutators are infallible from the widget's point of view: an
/// implementation that cannot apply a write should log and ignore it.
pub trait Dom {
    /// Handle to an element.
    type Node: Clone + Eq + Hash + Debug;

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// All elements matching `selector`. Invalid selectors match nothing.
    fn select(&self, selector: &str) -> Vec<Self::Node>;

    /// Whether the handle still refers to an element. Detached elements
    /// exist; removed ones do not.
    fn exists(&self, node: &Self::Node) -> bool;

    /// Descendants of `root` carrying `class`, in document order.
    fn find_by_class(&self, root: &Self::Node, class: &str) -> Vec<Self::Node>;

    // -------------------------------------------------------------------------
    // Metrics
    // -------------------------------------------------------------------------

    fn height(&self, node: &Self::Node) -> f64;

    fn set_height(&mut self, node: &Self::Node, px: f64);

    fn scroll_top(&self, node: &Self::Node) -> f64;

    fn set_scroll_top(&mut self, node: &Self::Node, px: f64);

    // -------------------------------------------------------------------------
    // Presentation
    // -------------------------------------------------------------------------

    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

    fn set_visible(&mut self, node: &Self::Node, visible: bool);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn add_class(&mut self, node: &Self::Node, class: &str);

    fn remove_class(&mut self, node: &Self::Node, class: &str);

    /// Write a pixel length to an inline style property.
    fn set_px(&mut self, node: &Self::Node, property: &str, px: f64) {
        self.set_style(node, property, &format_px(px));
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> Self::Node;

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);

    /// Remove a node and its subtree.
    fn remove(&mut self, node: &Self::Node);

    // -------------------------------------------------------------------------
    // Stylesheets
    // -------------------------------------------------------------------------

    fn has_stylesheet(&self, id: &str) -> bool;

    fn insert_stylesheet(&mut self, id: &str, css: &str);
}

/// Format a CSS pixel length, normalizing negative zero.
pub fn format_px(px: f64) -> String {
    let px = if px == 0.0 { 0.0 } else { px };
    format!("{px}px")
}

/// How a caller names an element: a handle, a collection, or a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<N> {
    Node(N),
    Nodes(Vec<N>),
    Selector(String),
}

impl<N: Clone> Target<N> {
    /// Resolve to the matching elements. Handles to removed elements
    /// resolve to nothing.
    pub fn resolve<D: Dom<Node = N>>(&self, dom: &D) -> Vec<N> {
        match self {
            Self::Node(node) => dom.exists(node).then(|| node.clone()).into_iter().collect(),
            Self::Nodes(nodes) => nodes.iter().filter(|n| dom.exists(n)).cloned().collect(),
            Self::Selector(selector) => dom.select(selector),
        }
    }
}

impl<N> From<&str> for Target<N> {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.to_string())
    }
}

impl<N> From<String> for Target<N> {
    fn from(selector: String) -> Self {
        Self::Selector(selector)
    }
}

impl<N> From<Vec<N>> for Target<N> {
    fn from(nodes: Vec<N>) -> Self {
        Self::Nodes(nodes)
    }
}

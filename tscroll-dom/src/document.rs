//! Arena-backed element tree.
//!
//! A [`Document`] owns every node. Nodes are addressed by [`NodeId`], which
//! stays valid until the node (or one of its ancestors) is removed. Ids are
//! never reused, so a stale id simply stops resolving.

use std::collections::BTreeMap;

use crate::element::Element;
use crate::error::DomError;
use crate::selector::Selector;

/// Handle to a node owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    height: f64,
    scroll_top: f64,
    hidden: bool,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            style: BTreeMap::new(),
            height: 0.0,
            scroll_top: 0.0,
            hidden: false,
            text: None,
            parent: None,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Option<Node>>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document with `<html>`, `<head>` and `<body>`.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
        };
        doc.root = doc.alloc(Node::new("html"));
        doc.head = doc.alloc(Node::new("head"));
        doc.body = doc.alloc(Node::new("body"));
        doc.link(doc.root, doc.head);
        doc.link(doc.root, doc.body);
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(node));
        id
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    fn require_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.node_mut(id).ok_or(DomError::UnknownNode(id))
    }

    // -------------------------------------------------------------------------
    // Tree structure
    // -------------------------------------------------------------------------

    /// Create a detached node.
    pub fn create(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::new(tag))
    }

    /// Materialize an element tree and append it under `parent`.
    pub fn insert(&mut self, parent: NodeId, element: Element) -> Result<NodeId, DomError> {
        if self.node(parent).is_none() {
            return Err(DomError::UnknownNode(parent));
        }
        let id = self.build(element);
        self.link(parent, id);
        Ok(id)
    }

    fn build(&mut self, element: Element) -> NodeId {
        let Element {
            tag,
            id,
            classes,
            style,
            height,
            scroll_top,
            hidden,
            text,
            children,
        } = element;

        let node = self.alloc(Node {
            id,
            classes,
            style,
            height,
            scroll_top,
            hidden,
            text,
            ..Node::new(&tag)
        });
        for child in children {
            let child_id = self.build(child);
            self.link(node, child_id);
        }
        node
    }

    /// Move `child` (attached or not) to the end of `parent`'s children.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.node(parent).is_none() {
            return Err(DomError::UnknownNode(parent));
        }
        if self.node(child).is_none() {
            return Err(DomError::UnknownNode(child));
        }
        if child == self.root {
            return Err(DomError::DetachRoot);
        }
        if parent == child || self.is_ancestor(child, parent) {
            return Err(DomError::Cycle { parent, child });
        }

        self.detach(child);
        self.link(parent, child);
        Ok(())
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).and_then(|n| n.parent) else {
            return;
        };
        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|c| *c != id);
        }
        if let Some(node) = self.node_mut(id) {
            node.parent = None;
        }
    }

    /// Remove a node and its whole subtree from the document.
    pub fn remove(&mut self, id: NodeId) -> Result<(), DomError> {
        if self.node(id).is_none() {
            return Err(DomError::UnknownNode(id));
        }
        if id == self.root {
            return Err(DomError::DetachRoot);
        }

        self.detach(id);
        let doomed = self.descendants_inclusive(id);
        log::trace!("[dom] removing {} node(s) rooted at {:?}", doomed.len(), id);
        for node in doomed {
            self.nodes[node.0] = None;
        }
        Ok(())
    }

    /// Whether `ancestor` is a proper ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.parent(id);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.parent(p);
        }
        false
    }

    /// Whether the handle refers to a live node, connected or not.
    pub fn exists(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Whether the node exists and is connected to the document root.
    pub fn contains(&self, id: NodeId) -> bool {
        id == self.root || (self.node(id).is_some() && self.is_ancestor(self.root, id))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    fn descendants_inclusive(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut all = self.descendants_inclusive(id);
        all.remove(0);
        all
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// All connected elements matching `selector`, in document order.
    pub fn query(&self, selector: &str) -> Result<Vec<NodeId>, DomError> {
        self.query_within(self.root, selector)
    }

    /// Descendants of `scope` matching `selector`, in document order.
    ///
    /// Ancestor compounds may match above `scope`, as with `Element.querySelectorAll`.
    pub fn query_within(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, DomError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .descendants(scope)
            .into_iter()
            .filter(|id| self.matches(*id, &selector))
            .collect())
    }

    /// First connected element with the given id attribute.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|n| self.node(*n).and_then(|n| n.id.as_deref()) == Some(id))
    }

    pub fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        let Some(node) = self.node(id) else {
            return false;
        };
        if !selector
            .subject()
            .matches(&node.tag, node.id.as_deref(), &node.classes)
        {
            return false;
        }

        // Descendant combinators: match each remaining compound against the
        // nearest qualifying ancestor, walking outward.
        let mut current = node.parent;
        for compound in selector.ancestors() {
            loop {
                let Some(ancestor) = current.and_then(|a| self.node(a)) else {
                    return false;
                };
                current = ancestor.parent;
                if compound.matches(&ancestor.tag, ancestor.id.as_deref(), &ancestor.classes) {
                    break;
                }
            }
        }
        true
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.tag.as_str())
    }

    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(|n| n.id.as_deref())
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(|n| n.text.as_deref())
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), DomError> {
        self.require_mut(id)?.text = Some(text.into());
        Ok(())
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        self.node(id).map(|n| n.classes.as_slice()).unwrap_or(&[])
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<(), DomError> {
        let node = self.require_mut(id)?;
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
        Ok(())
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) -> Result<(), DomError> {
        self.require_mut(id)?.classes.retain(|c| c != class);
        Ok(())
    }

    /// Inline style property, if set.
    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.node(id)
            .and_then(|n| n.style.get(property))
            .map(String::as_str)
    }

    pub fn set_style(
        &mut self,
        id: NodeId,
        property: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        self.require_mut(id)?
            .style
            .insert(property.to_string(), value.into());
        Ok(())
    }

    pub fn remove_style(&mut self, id: NodeId, property: &str) -> Result<(), DomError> {
        self.require_mut(id)?.style.remove(property);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Metrics
    // -------------------------------------------------------------------------

    pub fn height(&self, id: NodeId) -> Option<f64> {
        self.node(id).map(|n| n.height)
    }

    pub fn set_height(&mut self, id: NodeId, height: f64) -> Result<(), DomError> {
        self.require_mut(id)?.height = height.max(0.0);
        Ok(())
    }

    pub fn scroll_top(&self, id: NodeId) -> Option<f64> {
        self.node(id).map(|n| n.scroll_top)
    }

    /// Set the vertical scroll offset. Negative offsets clamp to zero.
    pub fn set_scroll_top(&mut self, id: NodeId, scroll_top: f64) -> Result<(), DomError> {
        self.require_mut(id)?.scroll_top = scroll_top.max(0.0);
        Ok(())
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.hidden)
    }

    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) -> Result<(), DomError> {
        self.require_mut(id)?.hidden = hidden;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Stylesheets
    // -------------------------------------------------------------------------

    /// Text of the `<style>` element in `<head>` with the given id.
    pub fn stylesheet(&self, id: &str) -> Option<&str> {
        self.children(self.head)
            .iter()
            .filter_map(|c| self.node(*c))
            .find(|n| n.tag == "style" && n.id.as_deref() == Some(id))
            .map(|n| n.text.as_deref().unwrap_or_default())
    }

    /// Append a `<style id=..>` element to `<head>`.
    pub fn insert_stylesheet(&mut self, id: &str, css: &str) -> NodeId {
        let element = Element::new("style").id(id);
        let node = self.build(Element {
            text: Some(css.to_string()),
            ..element
        });
        self.link(self.head, node);
        node
    }
}

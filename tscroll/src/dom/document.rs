//! [`Dom`] for the bundled arena document.

use tscroll_dom::{Document, DomError, NodeId};

use super::{Dom, Target};

fn ignore(result: Result<(), DomError>) {
    if let Err(e) = result {
        log::debug!("[tscroll] document write ignored: {e}");
    }
}

impl From<NodeId> for Target<NodeId> {
    fn from(node: NodeId) -> Self {
        Self::Node(node)
    }
}

impl Dom for Document {
    type Node = NodeId;

    fn select(&self, selector: &str) -> Vec<NodeId> {
        self.query(selector).unwrap_or_else(|e| {
            log::debug!("[tscroll] {e}");
            Vec::new()
        })
    }

    fn exists(&self, node: &NodeId) -> bool {
        Document::exists(self, *node)
    }

    fn find_by_class(&self, root: &NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(*root)
            .into_iter()
            .filter(|n| self.has_class(*n, class))
            .collect()
    }

    fn height(&self, node: &NodeId) -> f64 {
        Document::height(self, *node).unwrap_or_default()
    }

    fn set_height(&mut self, node: &NodeId, px: f64) {
        ignore(Document::set_height(self, *node, px));
    }

    fn scroll_top(&self, node: &NodeId) -> f64 {
        Document::scroll_top(self, *node).unwrap_or_default()
    }

    fn set_scroll_top(&mut self, node: &NodeId, px: f64) {
        ignore(Document::set_scroll_top(self, *node, px));
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        ignore(Document::set_style(self, *node, property, value));
    }

    fn set_visible(&mut self, node: &NodeId, visible: bool) {
        ignore(self.set_hidden(*node, !visible));
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        Document::has_class(self, *node, class)
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        ignore(Document::add_class(self, *node, class));
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        ignore(Document::remove_class(self, *node, class));
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.create(tag)
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        ignore(Document::append_child(self, *parent, *child));
    }

    fn remove(&mut self, node: &NodeId) {
        ignore(Document::remove(self, *node));
    }

    fn has_stylesheet(&self, id: &str) -> bool {
        self.stylesheet(id).is_some()
    }

    fn insert_stylesheet(&mut self, id: &str, css: &str) {
        Document::insert_stylesheet(self, id, css);
    }
}

use std::collections::BTreeMap;

/// Detached element description.
///
/// Elements are plain values built with a chained builder and materialized
/// into a [`Document`](crate::Document) with `Document::insert`.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub style: BTreeMap<String, String>,

    // Box metrics. There is no layout engine, so heights are authored
    // directly and scroll offsets are whatever the host last wrote.
    pub height: f64,
    pub scroll_top: f64,
    pub hidden: bool,

    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            tag: "div".to_string(),
            id: None,
            classes: Vec::new(),
            style: BTreeMap::new(),
            height: 0.0,
            scroll_top: 0.0,
            hidden: false,
            text: None,
            children: Vec::new(),
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::default()
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: "span".to_string(),
            text: Some(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    // Metrics
    pub fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn scroll_top(mut self, scroll_top: f64) -> Self {
        self.scroll_top = scroll_top.max(0.0);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    // Inline style
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }
}

use std::collections::HashMap;
use tracing::debug;

/// Handle to an element in a [`Page`] arena.
///
/// Handles stay valid for the lifetime of the page; detaching an element does
/// not invalidate other handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A single element: tag, attributes, and inline style. Built with chained
/// setters and attached to a [`Page`] via [`Page::append`].
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attrs: HashMap<String, String>,
    style: HashMap<String, String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: HashMap::new(),
            style: HashMap::new(),
        }
    }

    /// Set the `id` attribute.
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Set the `class` attribute (whitespace-separated list).
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Set the `href` attribute.
    pub fn href(self, href: impl Into<String>) -> Self {
        self.attr("href", href)
    }

    /// Set an arbitrary attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    element: Element,
    /// Rendered markup payload replacing any child elements.
    markup: Option<String>,
}

/// Arena-backed element tree standing in for the live document.
///
/// Queries walk the tree from the root in document order, so detached
/// subtrees are never returned even though their nodes stay allocated.
#[derive(Debug, Clone)]
pub struct Page {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Page {
    /// Create a page containing only a `body` root element.
    pub fn new() -> Self {
        let root_node = Node {
            parent: None,
            children: Vec::new(),
            element: Element::new("body"),
            markup: None,
        };
        Self {
            nodes: vec![root_node],
            root: NodeId(0),
        }
    }

    /// The root `body` element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Append an element as the last child of `parent`, returning its handle.
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            element,
            markup: None,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Append an element to the root.
    pub fn append_to_root(&mut self, element: Element) -> NodeId {
        self.append(self.root, element)
    }

    fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            // Reverse so children pop in document order.
            for child in self.nodes[id.0].children.iter().rev() {
                stack.push(*child);
            }
        }
        order
    }

    /// First element with the given `id` attribute, in document order.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.walk()
            .into_iter()
            .find(|n| self.attr(*n, "id") == Some(id))
    }

    /// All elements carrying `class` in their class list, in document order.
    pub fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|n| self.has_class(*n, class))
            .collect()
    }

    /// All `a` elements whose `href` contains `needle`, in document order.
    pub fn anchors_with_href_containing(&self, needle: &str) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|n| {
                self.tag(*n) == "a"
                    && self
                        .attr(*n, "href")
                        .is_some_and(|href| href.contains(needle))
            })
            .collect()
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].element.tag
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0].element.attrs.get(name).map(String::as_str)
    }

    /// Whether `class` appears in the element's whitespace-separated class list.
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.attr(node, "class")
            .map(|list| list.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Add `class` if absent, remove it if present.
    pub fn toggle_class(&mut self, node: NodeId, class: &str) {
        let mut list: Vec<&str> = self
            .attr(node, "class")
            .map(|l| l.split_whitespace().collect())
            .unwrap_or_default();
        if let Some(pos) = list.iter().position(|c| *c == class) {
            list.remove(pos);
        } else {
            list.push(class);
        }
        let joined = list.join(" ");
        self.nodes[node.0].element.attrs.insert("class".to_string(), joined);
    }

    /// Inline style property, if set.
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes[node.0].element.style.get(property).map(String::as_str)
    }

    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        self.nodes[node.0]
            .element
            .style
            .insert(property.to_string(), value.to_string());
    }

    /// Whether the element has been hidden with `display: none`.
    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.style(node, "display") == Some("none")
    }

    /// Replace the element's contents with rendered markup, detaching any
    /// child elements.
    pub fn set_markup(&mut self, node: NodeId, markup: impl Into<String>) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in &children {
            self.nodes[child.0].parent = None;
        }
        debug!(
            node = node.0,
            detached_children = children.len(),
            "container contents replaced"
        );
        self.nodes[node.0].markup = Some(markup.into());
    }

    /// Markup previously rendered into the element, if any.
    pub fn markup(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].markup.as_deref()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

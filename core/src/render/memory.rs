//! In-memory document
//!
//! A small arena DOM used by tests and the CLI preview. It supports exactly
//! what the renderer needs plus inspection: bubbling click dispatch with
//! `stop_propagation`, tree queries, and HTML serialization.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use super::dom::{ClickEvent, ClickListener, Document};
use super::RenderError;

/// Handle to a node in a [`MemoryDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

struct NodeData {
    tag: String,
    id: Option<String>,
    class_name: String,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    listeners: Vec<Rc<RefCell<ClickListener>>>,
}

impl NodeData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            class_name: String::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

#[derive(Default)]
struct MemoryClick {
    stopped: Cell<bool>,
}

impl ClickEvent for MemoryClick {
    fn stop_propagation(&self) {
        self.stopped.set(true);
    }
}

/// Arena-backed element tree rooted at a `<body>` node.
pub struct MemoryDocument {
    nodes: RefCell<Vec<NodeData>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(vec![NodeData::new("body")]),
        }
    }

    /// Root of the tree; the only node attached from the start
    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    /// Create a detached element carrying an `id` attribute
    pub fn create_element_with_id(&self, tag: &str, id: &str) -> NodeId {
        let mut data = NodeData::new(tag);
        data.id = Some(id.to_string());
        self.push(data)
    }

    fn push(&self, data: NodeData) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(data);
        NodeId(nodes.len() - 1)
    }

    pub fn tag(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].tag.clone()
    }

    pub fn class_name(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].class_name.clone()
    }

    pub fn text(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].text.clone()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[node.0].children.clone()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.borrow()[node.0].parent
    }

    /// True when `node` is reachable from the body
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.ancestry(node).last() == Some(&self.body())
    }

    /// Descendants of `root` (excluding `root`) whose class list contains
    /// `class`, in document order
    pub fn find_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = nodes[root.0].children.iter().rev().copied().collect();

        while let Some(node) = stack.pop() {
            let data = &nodes[node.0];
            if data.class_name.split_whitespace().any(|c| c == class) {
                found.push(node);
            }
            stack.extend(data.children.iter().rev().copied());
        }
        found
    }

    /// `node`, its parent, and so on up to the root
    fn ancestry(&self, node: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut path = vec![node];
        let mut current = nodes[node.0].parent;
        while let Some(parent) = current {
            path.push(parent);
            current = nodes[parent.0].parent;
        }
        path
    }

    /// Dispatch a click at `target`, bubbling towards the root.
    ///
    /// All listeners on a node run before propagation is checked, so a
    /// listener calling `stop_propagation` only shields the ancestors.
    /// Returns the number of listeners invoked.
    pub fn click(&self, target: NodeId) -> usize {
        let event = MemoryClick::default();
        let event_ref: &dyn ClickEvent = &event;
        let mut invoked = 0;

        for node in self.ancestry(target) {
            // Release the arena borrow before running listeners
            let listeners = self.nodes.borrow()[node.0].listeners.clone();
            for listener in listeners {
                let mut listener = listener.borrow_mut();
                (*listener)(event_ref);
                invoked += 1;
            }
            if event.stopped.get() {
                break;
            }
        }
        invoked
    }

    /// Serialize `node` and its subtree as HTML
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, 0, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, depth: usize, out: &mut String) {
        let (tag, id, class_name, text, children) = {
            let nodes = self.nodes.borrow();
            let data = &nodes[node.0];
            (
                data.tag.clone(),
                data.id.clone(),
                data.class_name.clone(),
                data.text.clone(),
                data.children.clone(),
            )
        };

        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(&tag);
        if let Some(id) = id {
            out.push_str(&format!(" id=\"{}\"", escape_html(&id)));
        }
        if !class_name.is_empty() {
            out.push_str(&format!(" class=\"{}\"", escape_html(&class_name)));
        }
        out.push('>');

        if children.is_empty() {
            out.push_str(&escape_html(&text));
        } else {
            out.push('\n');
            for child in children {
                self.write_html(child, depth + 1, out);
            }
            out.push_str(&indent);
        }
        out.push_str(&format!("</{tag}>\n"));
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryDocument")
            .field("nodes", &self.nodes.borrow().len())
            .finish()
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let candidates: Vec<NodeId> = self
            .nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, data)| data.id.as_deref() == Some(id))
            .map(|(index, _)| NodeId(index))
            .collect();

        candidates.into_iter().find(|node| self.is_attached(*node))
    }

    fn create_element(&self, tag: &str) -> Result<NodeId, RenderError> {
        Ok(self.push(NodeData::new(tag)))
    }

    fn set_class_name(&self, node: &NodeId, class: &str) {
        self.nodes.borrow_mut()[node.0].class_name = class.to_string();
    }

    /// Replaces the node's children with the text, like the DOM property
    fn set_text_content(&self, node: &NodeId, text: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let children = std::mem::take(&mut nodes[node.0].children);
        for child in children {
            nodes[child.0].parent = None;
        }
        nodes[node.0].text = text.to_string();
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<(), RenderError> {
        if self.ancestry(*parent).contains(child) {
            return Err(RenderError::AppendChild {
                reason: "the new child is an ancestor of the parent".to_string(),
            });
        }

        let mut nodes = self.nodes.borrow_mut();
        if let Some(old_parent) = nodes[child.0].parent.take() {
            nodes[old_parent.0].children.retain(|c| c != child);
        }
        nodes[child.0].parent = Some(*parent);
        nodes[parent.0].children.push(*child);
        Ok(())
    }

    fn add_click_listener(&self, node: &NodeId, listener: ClickListener) -> Result<(), RenderError> {
        self.nodes.borrow_mut()[node.0]
            .listeners
            .push(Rc::new(RefCell::new(listener)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_listener(counter: &Rc<Cell<u32>>, stop: bool) -> ClickListener {
        let counter = Rc::clone(counter);
        Box::new(move |event: &dyn ClickEvent| {
            counter.set(counter.get() + 1);
            if stop {
                event.stop_propagation();
            }
        })
    }

    #[test]
    fn test_click_bubbles_to_ancestors() {
        let doc = MemoryDocument::new();
        let outer = doc.create_element("div").unwrap();
        let inner = doc.create_element("span").unwrap();
        doc.append_child(&doc.body(), &outer).unwrap();
        doc.append_child(&outer, &inner).unwrap();

        let hits = Rc::new(Cell::new(0));
        doc.add_click_listener(&outer, counting_listener(&hits, false))
            .unwrap();

        assert_eq!(doc.click(inner), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_stop_propagation_shields_ancestors_only() {
        let doc = MemoryDocument::new();
        let outer = doc.create_element("div").unwrap();
        let inner = doc.create_element("span").unwrap();
        doc.append_child(&outer, &inner).unwrap();

        let outer_hits = Rc::new(Cell::new(0));
        let inner_hits = Rc::new(Cell::new(0));
        doc.add_click_listener(&outer, counting_listener(&outer_hits, false))
            .unwrap();
        doc.add_click_listener(&inner, counting_listener(&inner_hits, true))
            .unwrap();
        doc.add_click_listener(&inner, counting_listener(&inner_hits, false))
            .unwrap();

        assert_eq!(doc.click(inner), 2);
        assert_eq!(inner_hits.get(), 2);
        assert_eq!(outer_hits.get(), 0);
    }

    #[test]
    fn test_element_by_id_requires_attachment() {
        let doc = MemoryDocument::new();
        let container = doc.create_element_with_id("div", "lettersContainer");
        assert_eq!(doc.element_by_id("lettersContainer"), None);

        doc.append_child(&doc.body(), &container).unwrap();
        assert_eq!(doc.element_by_id("lettersContainer"), Some(container));
    }

    #[test]
    fn test_append_moves_node_and_rejects_cycles() {
        let doc = MemoryDocument::new();
        let a = doc.create_element("div").unwrap();
        let b = doc.create_element("div").unwrap();
        let c = doc.create_element("div").unwrap();
        doc.append_child(&a, &c).unwrap();
        doc.append_child(&b, &c).unwrap();

        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), vec![c]);
        assert_eq!(doc.parent(c), Some(b));

        assert!(matches!(
            doc.append_child(&c, &b),
            Err(RenderError::AppendChild { .. })
        ));
    }

    #[test]
    fn test_find_by_class_matches_tokens_in_order() {
        let doc = MemoryDocument::new();
        let first = doc.create_element("div").unwrap();
        let second = doc.create_element("div").unwrap();
        let nested = doc.create_element("div").unwrap();
        doc.set_class_name(&first, "card wide");
        doc.set_class_name(&second, "card");
        doc.set_class_name(&nested, "card-body card");
        doc.append_child(&doc.body(), &first).unwrap();
        doc.append_child(&first, &nested).unwrap();
        doc.append_child(&doc.body(), &second).unwrap();

        assert_eq!(
            doc.find_by_class(doc.body(), "card"),
            vec![first, nested, second]
        );
    }

    #[test]
    fn test_to_html_escapes_text() {
        let doc = MemoryDocument::new();
        let div = doc.create_element_with_id("div", "grid");
        let span = doc.create_element("span").unwrap();
        doc.set_class_name(&span, "form");
        doc.set_text_content(&span, "<b> & ب");
        doc.append_child(&div, &span).unwrap();

        assert_eq!(
            doc.to_html(div),
            "<div id=\"grid\">\n  <span class=\"form\">&lt;b&gt; &amp; ب</span>\n</div>\n"
        );
    }
}

//! Document abstraction
//!
//! The renderer only needs a handful of DOM operations. Hosts implement
//! [`Document`] over their own node type: the browser frontend over
//! `web_sys::Element`, tests and tooling over [`MemoryDocument`](super::MemoryDocument).

use super::RenderError;

/// The click being dispatched to a listener.
pub trait ClickEvent {
    /// Keep the click from reaching listeners on ancestor nodes.
    fn stop_propagation(&self);
}

/// Listener attached to a node; lives as long as the node.
pub type ClickListener = Box<dyn FnMut(&dyn ClickEvent)>;

/// Minimal element tree the grid is built in.
pub trait Document {
    /// Handle to an element. Cloning a handle must not clone the element.
    type Node: Clone;

    /// Look up an attached element by its `id` attribute
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn create_element(&self, tag: &str) -> Result<Self::Node, RenderError>;

    fn set_class_name(&self, node: &Self::Node, class: &str);

    fn set_text_content(&self, node: &Self::Node, text: &str);

    /// Append `child` as the last child of `parent`
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), RenderError>;

    /// Register `listener` for clicks on `node` or any of its descendants.
    /// Clicks bubble from the target towards the root.
    fn add_click_listener(
        &self,
        node: &Self::Node,
        listener: ClickListener,
    ) -> Result<(), RenderError>;
}

//! Browser implementation of the renderer's document seam

use alifba_core::{ClickEvent, ClickListener, Document, RenderError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// A page's `document`, building real DOM elements.
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// The document of the current window, if there is one
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }
}

struct WebClick<'a>(&'a web_sys::Event);

impl ClickEvent for WebClick<'_> {
    fn stop_propagation(&self) {
        self.0.stop_propagation();
    }
}

impl Document for WebDocument {
    type Node = web_sys::Element;

    fn element_by_id(&self, id: &str) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id)
    }

    fn create_element(&self, tag: &str) -> Result<web_sys::Element, RenderError> {
        self.document
            .create_element(tag)
            .map_err(|e| RenderError::CreateElement {
                tag: tag.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn set_class_name(&self, node: &web_sys::Element, class: &str) {
        node.set_class_name(class);
    }

    fn set_text_content(&self, node: &web_sys::Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn append_child(
        &self,
        parent: &web_sys::Element,
        child: &web_sys::Element,
    ) -> Result<(), RenderError> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|e| RenderError::AppendChild {
                reason: format!("{e:?}"),
            })
    }

    fn add_click_listener(
        &self,
        node: &web_sys::Element,
        mut listener: ClickListener,
    ) -> Result<(), RenderError> {
        let on_click =
            Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |e: web_sys::MouseEvent| {
                listener(&WebClick(&e));
            });

        node.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|e| RenderError::AddListener {
                reason: format!("{e:?}"),
            })?;

        // Cards are never removed, so the listener lives as long as the page
        on_click.forget();
        Ok(())
    }
}

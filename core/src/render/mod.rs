//! Letter grid rendering
//!
//! Builds one card per letter:
//!
//! ```text
//! div.<column_class>
//! └── div.letter-card            click → names/<name>
//!     ├── div.main-letter        glyph
//!     └── div.small-forms
//!         ├── span               click → sounds/<sound> (stops propagation)
//!         ├── span               "
//!         └── span               "
//! ```
//!
//! Form spans own their clicks: a click on a span plays the letter sound and
//! never reaches the card. Any other click inside the card plays the name.

mod dom;
mod error;
mod memory;


use std::rc::Rc;

use alifba_types::{ClipKind, GridConfig, Letter};

use crate::audio::Player;

pub use dom::{ClickEvent, ClickListener, Document};
pub use error::RenderError;
pub use memory::{MemoryDocument, NodeId};

pub const CARD_CLASS: &str = "letter-card";
pub const MAIN_LETTER_CLASS: &str = "main-letter";
pub const FORMS_CLASS: &str = "small-forms";

/// Find the grid container by `config.container_id` and render into it.
///
/// A page without the container renders nothing and returns `Ok(0)`.
pub fn mount<D: Document>(
    document: &D,
    letters: &[Letter],
    config: &GridConfig,
    player: Rc<dyn Player>,
) -> Result<usize, RenderError> {
    let Some(container) = document.element_by_id(&config.container_id) else {
        tracing::debug!(
            container_id = %config.container_id,
            "Grid container not found, nothing rendered"
        );
        return Ok(0);
    };

    render(document, &container, letters, config, player)
}

/// Append one card per letter to `container`, in order.
///
/// Existing children of `container` are left in place. No playback is
/// requested until a card is clicked. Returns the number of cards appended.
pub fn render<D: Document>(
    document: &D,
    container: &D::Node,
    letters: &[Letter],
    config: &GridConfig,
    player: Rc<dyn Player>,
) -> Result<usize, RenderError> {
    for letter in letters {
        let column = build_card(document, letter, config, &player)?;
        document.append_child(container, &column)?;
    }

    tracing::debug!(cards = letters.len(), "Rendered letter grid");
    Ok(letters.len())
}

/// Build the column wrapper and card for a single letter
fn build_card<D: Document>(
    document: &D,
    letter: &Letter,
    config: &GridConfig,
    player: &Rc<dyn Player>,
) -> Result<D::Node, RenderError> {
    let column = document.create_element("div")?;
    document.set_class_name(&column, &config.column_class);

    let card = document.create_element("div")?;
    document.set_class_name(&card, CARD_CLASS);

    let main = document.create_element("div")?;
    document.set_class_name(&main, MAIN_LETTER_CLASS);
    document.set_text_content(&main, &letter.glyph);

    let forms = document.create_element("div")?;
    document.set_class_name(&forms, FORMS_CLASS);

    let sound_path = letter.clip_path(ClipKind::Sound, &config.audio);
    for form in &letter.forms {
        let span = document.create_element("span")?;
        document.set_text_content(&span, form);

        let player = Rc::clone(player);
        let path = sound_path.clone();
        document.add_click_listener(
            &span,
            Box::new(move |event: &dyn ClickEvent| {
                event.stop_propagation();
                player.play(&path);
            }),
        )?;

        document.append_child(&forms, &span)?;
    }

    let name_path = letter.clip_path(ClipKind::Name, &config.audio);
    let player = Rc::clone(player);
    document.add_click_listener(
        &card,
        Box::new(move |_: &dyn ClickEvent| player.play(&name_path)),
    )?;

    document.append_child(&card, &main)?;
    document.append_child(&card, &forms)?;
    document.append_child(&column, &card)?;

    Ok(column)
}

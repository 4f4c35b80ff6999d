//! Alifba browser entry point
//!
//! Loads the built-in alphabet and mounts the letter grid into the page's
//! `#lettersContainer`. A page without the container stays untouched.

use std::rc::Rc;

use alifba_app::{HtmlAudioPlayer, WebDocument};
use alifba_core::{Alphabet, Player, mount};
use alifba_types::GridConfig;
use dioxus_logger::tracing::Level;

fn main() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        web_sys::console::error_1(&format!("Failed to initialize logger: {e}").into());
    }

    let alphabet = match Alphabet::builtin() {
        Ok(alphabet) => alphabet,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load built-in alphabet");
            return;
        }
    };
    alphabet.report_issues();

    let Some(document) = WebDocument::from_window() else {
        tracing::error!("No window document available");
        return;
    };

    let config = GridConfig::default();
    let player: Rc<dyn Player> = Rc::new(HtmlAudioPlayer);

    match mount(&document, alphabet.letters(), &config, player) {
        Ok(cards) => tracing::info!(cards, "Letter grid ready"),
        Err(e) => tracing::error!(error = %e, "Failed to render letter grid"),
    }
}

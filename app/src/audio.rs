//! Playback through `HTMLAudioElement`
//!
//! Every request creates a fresh audio element and starts it right away, so
//! clicks overlap freely. A clip that is missing or cannot be decoded rejects
//! the `play()` promise; the rejection is logged at debug level and otherwise
//! ignored.

use alifba_core::Player;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlAudioPlayer;

impl Player for HtmlAudioPlayer {
    fn play(&self, path: &str) {
        let audio = match HtmlAudioElement::new_with_src(path) {
            Ok(audio) => audio,
            Err(e) => {
                tracing::debug!(path, error = ?e, "Could not create audio element");
                return;
            }
        };

        let promise: js_sys::Promise = match audio.play() {
            Ok(promise) => promise,
            Err(e) => {
                tracing::debug!(path, error = ?e, "Playback request rejected");
                return;
            }
        };

        let path = path.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                tracing::debug!(path = %path, error = ?e, "Playback failed");
            }
        });
    }
}

//! Browser backends for the Alifba letter grid
//!
//! - [`dom`]: [`WebDocument`], the renderer's document seam over `web_sys`
//! - [`audio`]: [`HtmlAudioPlayer`], fire-and-forget `HTMLAudioElement` playback

pub mod audio;
pub mod dom;

pub use audio::HtmlAudioPlayer;
pub use dom::WebDocument;

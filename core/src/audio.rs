//! Playback capability
//!
//! Card handlers never touch a media API directly. They hand a resolved path
//! to a [`Player`], which starts playback and returns immediately. Every
//! request is independent: nothing is queued, ducked or deduplicated, so
//! overlapping clicks produce overlapping audio.

use std::cell::RefCell;

/// Something that can start playing an audio resource.
pub trait Player {
    /// Start playing `path`. Failures are the player's to absorb.
    fn play(&self, path: &str);
}

impl<F> Player for F
where
    F: Fn(&str),
{
    fn play(&self, path: &str) {
        self(path)
    }
}

/// Player that ignores every request
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayer;

impl Player for SilentPlayer {
    fn play(&self, path: &str) {
        tracing::trace!(path, "Playback suppressed");
    }
}

/// Player that remembers every requested path, in order.
#[derive(Debug, Default)]
pub struct RecordingPlayer {
    requests: RefCell<Vec<String>>,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths requested so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// Return and forget the recorded paths
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.requests.borrow_mut())
    }
}

impl Player for RecordingPlayer {
    fn play(&self, path: &str) {
        self.requests.borrow_mut().push(path.to_string());
    }
}

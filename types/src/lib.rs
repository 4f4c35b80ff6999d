//! Shared letter and layout types for Alifba
//!
//! This crate contains serializable types that are shared between the dataset
//! loader and renderer (alifba-core), the WASM frontend (alifba-app) and the
//! native tooling (alifba-cli).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Letters
// ─────────────────────────────────────────────────────────────────────────────

/// Position of a glyph within a connected word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPosition {
    Initial,
    Medial,
    Final,
}

impl FormPosition {
    /// Index into [`Letter::forms`]
    pub fn index(self) -> usize {
        match self {
            FormPosition::Initial => 0,
            FormPosition::Medial => 1,
            FormPosition::Final => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormPosition::Initial => "initial",
            FormPosition::Medial => "medial",
            FormPosition::Final => "final",
        }
    }

    /// All positions in display order
    pub fn all() -> &'static [FormPosition] {
        &[
            FormPosition::Initial,
            FormPosition::Medial,
            FormPosition::Final,
        ]
    }
}

/// One letter of the alphabet with its pronunciation identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    /// Isolated display glyph
    #[serde(rename = "char")]
    pub glyph: String,

    /// Identifier of the letter-name clip (`audio/names/<name>.mp3`)
    pub name: String,

    /// Identifier of the letter-sound clip (`audio/sounds/<sound>.mp3`).
    /// `None` when the dataset entry does not carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,

    /// Initial, medial and final renderings. A single space marks a form
    /// that does not differ visually.
    pub forms: [String; 3],
}

impl Letter {
    pub fn new(
        glyph: impl Into<String>,
        name: impl Into<String>,
        sound: Option<&str>,
        forms: [&str; 3],
    ) -> Self {
        Self {
            glyph: glyph.into(),
            name: name.into(),
            sound: sound.map(str::to_string),
            forms: forms.map(str::to_string),
        }
    }

    pub fn form(&self, position: FormPosition) -> &str {
        &self.forms[position.index()]
    }

    /// Identifier used to build the clip path for `kind`.
    ///
    /// A missing sound yields an empty identifier, so the resolved path points
    /// at an asset that does not exist.
    pub fn clip_id(&self, kind: ClipKind) -> &str {
        match kind {
            ClipKind::Name => &self.name,
            ClipKind::Sound => self.sound.as_deref().unwrap_or_default(),
        }
    }

    /// Resolve the audio path for `kind` under `layout`
    pub fn clip_path(&self, kind: ClipKind, layout: &AudioLayout) -> String {
        layout.resolve(kind, self.clip_id(kind))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Audio layout
// ─────────────────────────────────────────────────────────────────────────────

/// Which recording a click asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipKind {
    /// Pronunciation of the letter's name (main glyph click)
    Name,
    /// Phonetic sound of the letter (form click)
    Sound,
}

/// Static asset layout for audio clips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioLayout {
    #[serde(default = "default_base_dir")]
    pub base_dir: String,

    #[serde(default = "default_names_dir")]
    pub names_dir: String,

    #[serde(default = "default_sounds_dir")]
    pub sounds_dir: String,

    /// File extension without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_base_dir() -> String {
    "audio".to_string()
}

fn default_names_dir() -> String {
    "names".to_string()
}

fn default_sounds_dir() -> String {
    "sounds".to_string()
}

fn default_extension() -> String {
    "mp3".to_string()
}

impl Default for AudioLayout {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            names_dir: default_names_dir(),
            sounds_dir: default_sounds_dir(),
            extension: default_extension(),
        }
    }
}

impl AudioLayout {
    pub fn dir_for(&self, kind: ClipKind) -> &str {
        match kind {
            ClipKind::Name => &self.names_dir,
            ClipKind::Sound => &self.sounds_dir,
        }
    }

    /// `<base>/<dir>/<id>.<ext>`
    pub fn resolve(&self, kind: ClipKind, id: &str) -> String {
        format!(
            "{}/{}/{}.{}",
            self.base_dir,
            self.dir_for(kind),
            id,
            self.extension
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Grid configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Settings for mounting the letter grid into a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Id of the element the cards are appended to
    #[serde(default = "default_container_id")]
    pub container_id: String,

    /// Class of the responsive column wrapping each card
    #[serde(default = "default_column_class")]
    pub column_class: String,

    #[serde(default)]
    pub audio: AudioLayout,
}

fn default_container_id() -> String {
    "lettersContainer".to_string()
}

fn default_column_class() -> String {
    "col-6 col-sm-4 col-md-3 col-lg-2".to_string()
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            column_class: default_column_class(),
            audio: AudioLayout::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ba() -> Letter {
        Letter::new("ب", "ba", Some("b"), ["بـ", "ـبـ", "ـب"])
    }

    #[test]
    fn test_default_layout_paths() {
        let layout = AudioLayout::default();
        assert_eq!(layout.resolve(ClipKind::Name, "ba"), "audio/names/ba.mp3");
        assert_eq!(layout.resolve(ClipKind::Sound, "b"), "audio/sounds/b.mp3");
    }

    #[test]
    fn test_letter_clip_paths() {
        let layout = AudioLayout::default();
        let letter = ba();
        assert_eq!(letter.clip_path(ClipKind::Name, &layout), "audio/names/ba.mp3");
        assert_eq!(letter.clip_path(ClipKind::Sound, &layout), "audio/sounds/b.mp3");
    }

    #[test]
    fn test_missing_sound_resolves_empty_segment() {
        let letter = Letter::new("ل", "laam", None, ["لـ", "ـلـ", "ـل"]);
        assert_eq!(letter.clip_id(ClipKind::Sound), "");
        assert_eq!(
            letter.clip_path(ClipKind::Sound, &AudioLayout::default()),
            "audio/sounds/.mp3"
        );
    }

    #[test]
    fn test_form_positions() {
        let letter = ba();
        assert_eq!(letter.form(FormPosition::Initial), "بـ");
        assert_eq!(letter.form(FormPosition::Medial), "ـبـ");
        assert_eq!(letter.form(FormPosition::Final), "ـب");

        let indices: Vec<usize> = FormPosition::all().iter().map(|p| p.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_grid_config_defaults_from_partial_toml() {
        let config: GridConfig = toml::from_str(
            r#"
            container_id = "grid"

            [audio]
            extension = "ogg"
            "#,
        )
        .unwrap();

        assert_eq!(config.container_id, "grid");
        assert_eq!(config.column_class, "col-6 col-sm-4 col-md-3 col-lg-2");
        assert_eq!(config.audio.base_dir, "audio");
        assert_eq!(config.audio.resolve(ClipKind::Name, "ba"), "audio/names/ba.ogg");
    }

    #[test]
    fn test_grid_config_default_container() {
        assert_eq!(GridConfig::default().container_id, "lettersContainer");
    }

    #[test]
    fn test_letter_serializes_glyph_as_char() {
        let parsed: Letter = toml::from_str(
            r#"
            char = "ت"
            name = "ta"
            sound = "t"
            forms = ["تـ", "ـتـ", "ـت"]
            "#,
        )
        .unwrap();
        assert_eq!(parsed.glyph, "ت");
        assert_eq!(parsed.sound.as_deref(), Some("t"));
    }
}

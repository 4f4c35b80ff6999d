//! Alphabet dataset
//!
//! The built-in dataset ships as an embedded TOML document with one
//! `[[letter]]` table per letter. Alternate datasets in the same format can be
//! loaded from disk.
//!
//! Loading is strict about shape (every entry needs a glyph, a name and exactly
//! three forms) and lenient about content: entries that are inconsistent but
//! still renderable load as written and are reported as [`DatasetIssue`]s.

mod error;
mod issues;

use std::collections::BTreeMap;
use std::path::Path;

use alifba_types::Letter;
use serde::Deserialize;

pub use error::AlphabetError;
pub use issues::DatasetIssue;

static BUILTIN_ALPHABET: &str = include_str!("../../assets/alphabet.toml");

#[derive(Debug, Deserialize)]
struct AlphabetFile {
    #[serde(default, rename = "letter")]
    letters: Vec<LetterEntry>,
}

/// On-disk shape of a letter; keeps unrecognised keys so they can be reported
#[derive(Debug, Deserialize)]
struct LetterEntry {
    #[serde(rename = "char")]
    glyph: String,
    name: String,
    #[serde(default)]
    sound: Option<String>,
    forms: [String; 3],
    #[serde(flatten)]
    extra: BTreeMap<String, toml::Value>,
}

/// Ordered, read-only letter dataset.
#[derive(Debug, Clone, Default)]
pub struct Alphabet {
    letters: Vec<Letter>,
    issues: Vec<DatasetIssue>,
}

impl Alphabet {
    /// The embedded 28-letter Arabic alphabet
    pub fn builtin() -> Result<Self, AlphabetError> {
        Self::from_toml_str(BUILTIN_ALPHABET)
    }

    /// Load a dataset from a TOML file
    pub fn load(path: &Path) -> Result<Self, AlphabetError> {
        let content = std::fs::read_to_string(path).map_err(|source| AlphabetError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let file: AlphabetFile =
            toml::from_str(&content).map_err(|source| AlphabetError::ParseFile {
                path: path.to_path_buf(),
                source,
            })?;

        let alphabet = Self::from_entries(file.letters);
        tracing::debug!(
            path = %path.display(),
            letters = alphabet.len(),
            issues = alphabet.issues.len(),
            "Loaded alphabet"
        );
        Ok(alphabet)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, AlphabetError> {
        let file: AlphabetFile = toml::from_str(content)?;
        Ok(Self::from_entries(file.letters))
    }

    /// Build a dataset from letters already in memory
    pub fn from_letters(letters: Vec<Letter>) -> Self {
        let issues = issues::check_letters(&letters);
        Self { letters, issues }
    }

    fn from_entries(entries: Vec<LetterEntry>) -> Self {
        let mut unknown = Vec::new();
        let letters: Vec<Letter> = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                for field in entry.extra.keys() {
                    unknown.push(DatasetIssue::UnknownField {
                        index,
                        name: entry.name.clone(),
                        field: field.clone(),
                    });
                }
                Letter {
                    glyph: entry.glyph,
                    name: entry.name,
                    sound: entry.sound,
                    forms: entry.forms,
                }
            })
            .collect();

        let mut issues = issues::check_letters(&letters);
        issues.extend(unknown);
        issues.sort_by_key(DatasetIssue::index);

        Self { letters, issues }
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Letter> {
        self.letters.iter()
    }

    /// Find a letter by its name identifier, with its position in the dataset
    pub fn find(&self, name: &str) -> Option<(usize, &Letter)> {
        self.letters.iter().enumerate().find(|(_, l)| l.name == name)
    }

    pub fn issues(&self) -> &[DatasetIssue] {
        &self.issues
    }

    /// Emit one warning per dataset issue
    pub fn report_issues(&self) {
        for issue in &self.issues {
            tracing::warn!(index = issue.index(), "{issue}");
        }
    }
}

impl<'a> IntoIterator for &'a Alphabet {
    type Item = &'a Letter;
    type IntoIter = std::slice::Iter<'a, Letter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

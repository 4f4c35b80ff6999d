//! Non-fatal dataset findings

use std::collections::HashSet;
use std::fmt;

use alifba_types::Letter;

/// An inconsistency found in a loaded dataset.
///
/// Issues are reported, never corrected: the affected letter keeps exactly
/// what the dataset says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetIssue {
    /// Entry has no `sound` identifier; its form clicks resolve to an empty path segment
    MissingSound { index: usize, name: String },
    /// Entry carries a field the loader does not know
    UnknownField {
        index: usize,
        name: String,
        field: String,
    },
    /// `name` or `sound` is present but blank
    EmptyIdentifier { index: usize, field: &'static str },
    DuplicateName { index: usize, name: String },
    DuplicateSound { index: usize, sound: String },
}

impl DatasetIssue {
    /// Position of the offending entry in the dataset
    pub fn index(&self) -> usize {
        match self {
            DatasetIssue::MissingSound { index, .. }
            | DatasetIssue::UnknownField { index, .. }
            | DatasetIssue::EmptyIdentifier { index, .. }
            | DatasetIssue::DuplicateName { index, .. }
            | DatasetIssue::DuplicateSound { index, .. } => *index,
        }
    }
}

impl fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetIssue::MissingSound { index, name } => {
                write!(f, "letter #{index} ({name}) has no sound identifier")
            }
            DatasetIssue::UnknownField { index, name, field } => {
                write!(f, "letter #{index} ({name}) has unknown field `{field}`")
            }
            DatasetIssue::EmptyIdentifier { index, field } => {
                write!(f, "letter #{index} has an empty `{field}`")
            }
            DatasetIssue::DuplicateName { index, name } => {
                write!(f, "letter #{index} repeats name `{name}`")
            }
            DatasetIssue::DuplicateSound { index, sound } => {
                write!(f, "letter #{index} repeats sound `{sound}`")
            }
        }
    }
}

/// Structural checks that only need the letters themselves
pub(crate) fn check_letters(letters: &[Letter]) -> Vec<DatasetIssue> {
    let mut issues = Vec::new();
    let mut names = HashSet::new();
    let mut sounds = HashSet::new();

    for (index, letter) in letters.iter().enumerate() {
        if letter.name.trim().is_empty() {
            issues.push(DatasetIssue::EmptyIdentifier {
                index,
                field: "name",
            });
        } else if !names.insert(letter.name.as_str()) {
            issues.push(DatasetIssue::DuplicateName {
                index,
                name: letter.name.clone(),
            });
        }

        match letter.sound.as_deref() {
            None => issues.push(DatasetIssue::MissingSound {
                index,
                name: letter.name.clone(),
            }),
            Some(sound) if sound.trim().is_empty() => {
                issues.push(DatasetIssue::EmptyIdentifier {
                    index,
                    field: "sound",
                });
            }
            Some(sound) => {
                if !sounds.insert(sound) {
                    issues.push(DatasetIssue::DuplicateSound {
                        index,
                        sound: sound.to_string(),
                    });
                }
            }
        }
    }

    issues
}

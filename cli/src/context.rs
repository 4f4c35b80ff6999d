use std::path::Path;

use alifba_core::{Alphabet, AlphabetError};
use alifba_types::GridConfig;

/// Everything a command needs: the dataset and the grid layout.
#[derive(Debug, Clone)]
pub struct CliContext {
    pub alphabet: Alphabet,
    pub config: GridConfig,
}

impl CliContext {
    /// Load the dataset at `dataset`, or the built-in alphabet when `None`
    pub fn load(dataset: Option<&Path>) -> Result<Self, AlphabetError> {
        let alphabet = match dataset {
            Some(path) => Alphabet::load(path)?,
            None => Alphabet::builtin()?,
        };
        Ok(Self::with_alphabet(alphabet))
    }

    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            config: GridConfig::default(),
        }
    }
}

//! Identifier Derivation - Code-Safe Symbol Names
//!
//! Both generated modules are named and linked through one validated
//! identifier derived from the input file's base name.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Image name is empty")]
    Empty,

    #[error("Identifier derived from \"{name}\" would start with a digit")]
    LeadingDigit { name: String },

    #[error("Image name \"{name}\" contains unsupported character '{found}'")]
    ForbiddenCharacter { name: String, found: char },
}

/// Validated C identifier derived from an input base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    base: String,
}

impl Identifier {
    /// Derive from a file stem: hyphens and spaces become underscores, every
    /// remaining character must already be valid in a C identifier.
    pub fn derive(stem: &str) -> Result<Self, IdentifierError> {
        let base: String = stem
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c })
            .collect();

        if base.is_empty() {
            return Err(IdentifierError::Empty);
        }
        if base.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(IdentifierError::LeadingDigit {
                name: stem.to_string(),
            });
        }
        if let Some(found) = base.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
            return Err(IdentifierError::ForbiddenCharacter {
                name: stem.to_string(),
                found,
            });
        }

        Ok(Self { base })
    }

    /// Descriptor symbol, also the stem of both generated filenames.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Symbol naming the generated byte array.
    pub fn map_symbol(&self) -> String {
        format!("{}_map", self.base)
    }

    /// Include-guard token for the declaration module.
    pub fn guard(&self) -> String {
        format!("{}_H", self.base.to_ascii_uppercase())
    }
}

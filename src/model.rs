//! Phonetic language models: the vocabulary a generator draws from.
//!
//! A [`LanguageModel`] is an immutable, ordered table of [`PhoneticElement`]s,
//! each tagged as vowel or consonant and as a single letter or a two-letter
//! cluster. Models are constructed once, validated, and shared read-only; the
//! generation logic never mutates them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PwgenError;

/// Which alternation slot an element occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Vowel,
    Consonant,
}

impl ElementKind {
    /// The kind expected after this one in the alternation.
    pub fn flip(self) -> Self {
        match self {
            ElementKind::Vowel => ElementKind::Consonant,
            ElementKind::Consonant => ElementKind::Vowel,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementKind::Vowel => "vowel",
            ElementKind::Consonant => "consonant",
        })
    }
}

/// Single letter or two-letter cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arity {
    Single,
    Cluster,
}

/// A one- or two-letter phonetic building block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticElement {
    letters: String,
    kind: ElementKind,
    arity: Arity,
}

impl PhoneticElement {
    /// Create a validated element. The letter count must match the arity and
    /// every letter must be lowercase ASCII.
    pub fn new(
        letters: impl Into<String>,
        kind: ElementKind,
        arity: Arity,
    ) -> Result<Self, PwgenError> {
        let element = PhoneticElement {
            letters: letters.into(),
            kind,
            arity,
        };
        element.validate()?;
        Ok(element)
    }

    pub(crate) fn validate(&self) -> Result<(), PwgenError> {
        let expected = match self.arity {
            Arity::Single => 1,
            Arity::Cluster => 2,
        };
        if self.letters.chars().count() != expected {
            return Err(PwgenError::Model(format!(
                "element {:?} is tagged {:?} but has {} letters",
                self.letters,
                self.arity,
                self.letters.chars().count()
            )));
        }
        if !self.letters.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(PwgenError::Model(format!(
                "element {:?} contains characters outside a-z",
                self.letters
            )));
        }
        Ok(())
    }

    /// The element's letters, always lowercase ASCII.
    pub fn letters(&self) -> &str {
        &self.letters
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Number of characters this element contributes to a password.
    pub fn letter_count(&self) -> usize {
        self.letters.chars().count()
    }

    pub(crate) fn contains_any(&self, excluded: &[char]) -> bool {
        self.letters.chars().any(|c| excluded.contains(&c))
    }
}

/// An immutable vocabulary of phonetic elements.
///
/// Conceptually partitioned into four groups: single vowels, vowel clusters,
/// single consonants, consonant clusters. A group may be empty; an empty
/// cluster group simply disables clustering for that kind. Element order is
/// the table order and is stable across calls, which keeps scripted-source
/// generation deterministic.
///
/// Duplicate letters across kinds are tolerated: the model is a generation
/// vocabulary, not a parser.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    name: String,
    elements: Vec<PhoneticElement>,
}

impl LanguageModel {
    /// Construct a model, re-validating every element. Deserialized tables
    /// bypass [`PhoneticElement::new`] and are checked here.
    pub fn new(
        name: impl Into<String>,
        elements: Vec<PhoneticElement>,
    ) -> Result<Self, PwgenError> {
        if elements.is_empty() {
            return Err(PwgenError::Model("model has no elements".to_string()));
        }
        for element in &elements {
            element.validate()?;
        }
        Ok(LanguageModel {
            name: name.into(),
            elements,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All elements in table order.
    pub fn elements(&self) -> &[PhoneticElement] {
        &self.elements
    }

    /// The elements of one (kind, arity) partition, in table order.
    pub fn elements_of(&self, kind: ElementKind, arity: Arity) -> Vec<&PhoneticElement> {
        self.elements
            .iter()
            .filter(|e| e.kind() == kind && e.arity() == arity)
            .collect()
    }

    /// Whether the model carries any two-letter cluster of the given kind.
    pub fn has_cluster_support(&self, kind: ElementKind) -> bool {
        self.elements
            .iter()
            .any(|e| e.kind() == kind && e.arity() == Arity::Cluster)
    }
}

//! The built-in English phonetic table.
//!
//! Derived from the classic pwgen element list. The `gh` and `ng` clusters
//! are left out: they only read naturally mid-word, and strict
//! vowel/consonant alternation has no way to keep them off the front of a
//! password.

use crate::model::{Arity, ElementKind, LanguageModel, PhoneticElement};
use crate::PwgenError;

const VOWEL_SINGLES: &[&str] = &["a", "e", "i", "o", "u"];

const VOWEL_CLUSTERS: &[&str] = &["ae", "ah", "ai", "ee", "ei", "ie", "oh", "oo"];

// 'y' acts as a consonant here, as in the pwgen table; 'q' only appears
// through the "qu" cluster.
const CONSONANT_SINGLES: &[&str] = &[
    "b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p", "r", "s", "t", "v", "w", "x", "y",
    "z",
];

const CONSONANT_CLUSTERS: &[&str] = &["ch", "ph", "qu", "sh", "th"];

/// Build the English model.
pub fn model() -> Result<LanguageModel, PwgenError> {
    let groups = [
        (VOWEL_SINGLES, ElementKind::Vowel, Arity::Single),
        (VOWEL_CLUSTERS, ElementKind::Vowel, Arity::Cluster),
        (CONSONANT_SINGLES, ElementKind::Consonant, Arity::Single),
        (CONSONANT_CLUSTERS, ElementKind::Consonant, Arity::Cluster),
    ];

    let mut elements = Vec::new();
    for (table, kind, arity) in groups {
        for letters in table {
            elements.push(PhoneticElement::new(*letters, kind, arity)?);
        }
    }
    LanguageModel::new("english", elements)
}

//! Named built-in models and the on-disk model format.
//!
//! A model definition file is a small JSON document:
//!
//! ```json
//! {
//!   "name": "demo",
//!   "elements": [
//!     { "letters": "a",  "kind": "vowel",     "arity": "single" },
//!     { "letters": "b",  "kind": "consonant", "arity": "single" },
//!     { "letters": "sh", "kind": "consonant", "arity": "cluster" }
//!   ]
//! }
//! ```
//!
//! The table is validated on load; a file whose elements contradict their
//! declared kind/arity tags is rejected with [`PwgenError::Model`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{LanguageModel, PhoneticElement};
use crate::PwgenError;

pub mod english;

/// Names accepted by [`resolve`].
pub const BUILTIN_MODELS: &[&str] = &["english"];

/// Look up a built-in model by name.
pub fn resolve(name: &str) -> Result<LanguageModel, PwgenError> {
    match name {
        "english" => english::model(),
        other => Err(PwgenError::ModelNotFound(other.to_string())),
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ModelFile {
    name: String,
    elements: Vec<PhoneticElement>,
}

/// Load a model definition from a JSON file.
pub fn load_file(path: &Path) -> Result<LanguageModel, PwgenError> {
    log::info!("loading language model from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

fn parse(content: &str) -> Result<LanguageModel, PwgenError> {
    let file: ModelFile = serde_json::from_str(content)
        .map_err(|e| PwgenError::Model(format!("failed to parse model JSON: {e}")))?;
    LanguageModel::new(file.name, file.elements)
}

#[cfg(test)]
mod tests {
    use super::{parse, resolve};
    use crate::model::{Arity, ElementKind};
    use crate::PwgenError;

    #[test]
    fn resolves_builtin_english() {
        let model = resolve("english").unwrap();
        assert_eq!(model.name(), "english");
    }

    #[test]
    fn unknown_name_is_not_found() {
        assert!(matches!(
            resolve("klingon"),
            Err(PwgenError::ModelNotFound(name)) if name == "klingon"
        ));
    }

    #[test]
    fn parses_a_valid_model_file() {
        let model = parse(
            r#"{
                "name": "demo",
                "elements": [
                    { "letters": "a",  "kind": "vowel",     "arity": "single" },
                    { "letters": "b",  "kind": "consonant", "arity": "single" },
                    { "letters": "sh", "kind": "consonant", "arity": "cluster" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(model.name(), "demo");
        assert_eq!(model.elements().len(), 3);
        assert_eq!(
            model.elements_of(ElementKind::Consonant, Arity::Cluster)[0].letters(),
            "sh"
        );
    }

    #[test]
    fn rejects_elements_contradicting_their_tags() {
        let result = parse(
            r#"{
                "name": "bad",
                "elements": [
                    { "letters": "abc", "kind": "vowel", "arity": "cluster" }
                ]
            }"#,
        );
        assert!(matches!(result, Err(PwgenError::Model(_))));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse("not json"), Err(PwgenError::Model(_))));
    }
}

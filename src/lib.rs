//! # pwgen-rs
//!
//! A Rust library for generating human-memorable yet hard-to-guess passwords.
//!
//! ## Features
//!
//! - **Phonetic construction**: passwords assembled from alternating vowel and
//!   consonant elements so they stay pronounceable
//! - **Pluggable language models**: swap the phonetic vocabulary without
//!   touching the generation logic, including models loaded from JSON files
//! - **Character-class requirements**: require digits, uppercase letters, or
//!   symbols, and exclude visually ambiguous glyphs
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! pwgen-rs = { version = "0.3", default-features = false }
//! ```
//!
//! ```
//! use pwgen_rs::{generate_batch, models, GenerationRequest, OsRandomness};
//!
//! let model = models::resolve("english")?;
//! let request = GenerationRequest::builder()
//!     .length(12)
//!     .include_symbols(true)
//!     .count(4)
//!     .build()?;
//!
//! let mut rng = OsRandomness;
//! for password in generate_batch(&model, &request, &mut rng)? {
//!     println!("{password}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod charset;
pub mod generator;
pub mod model;
pub mod models;
pub mod random;
pub mod rng;

pub use generator::{accept, generate_batch, generate_password, MAX_ATTEMPTS};
pub use model::{Arity, ElementKind, LanguageModel, PhoneticElement};
pub use random::{generate_random, PoolRestrictions};
pub use rng::{OsRandomness, RandomnessSource, ScriptedSource};

use derive_builder::Builder;

/// Errors produced by model loading and password generation.
#[derive(thiserror::Error, Debug)]
pub enum PwgenError {
    #[error("model '{0}' not found. Built-in models: english")]
    ModelNotFound(String),
    #[error("invalid model definition: {0}")]
    Model(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("model has no usable {0} elements")]
    ModelExhausted(ElementKind),
    #[error("system entropy source unavailable: {0}")]
    EntropyUnavailable(rand::Error),
    #[error("no acceptable password after {attempts} attempts; relax the request")]
    GenerationImpossible { attempts: usize },
    #[error("no {0} left in the valid character set")]
    AlphabetExhausted(&'static str),
}

/// One password-generation request.
///
/// Built via [`GenerationRequest::builder`]; `build()` rejects a zero
/// `length` or `count`. Defaults follow the classic pwgen tool: length 8
/// with at least one digit and one uppercase letter required.
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "GenerationRequestBuilder::check"))]
pub struct GenerationRequest {
    /// Exact password length in characters.
    #[builder(default = "8")]
    pub length: usize,
    /// Require at least one digit.
    #[builder(default = "true")]
    pub include_digits: bool,
    /// Require at least one uppercase letter.
    #[builder(default = "true")]
    pub include_uppercase: bool,
    /// Require at least one symbol.
    #[builder(default = "false")]
    pub include_symbols: bool,
    /// Exclude visually ambiguous glyphs (see [`charset::AMBIGUOUS`]).
    #[builder(default = "false")]
    pub avoid_ambiguous: bool,
    /// Number of passwords to produce.
    #[builder(default = "1")]
    pub count: usize,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        GenerationRequest {
            length: 8,
            include_digits: true,
            include_uppercase: true,
            include_symbols: false,
            avoid_ambiguous: false,
            count: 1,
        }
    }
}

impl GenerationRequest {
    /// Start building a request from the defaults.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

impl GenerationRequestBuilder {
    fn check(&self) -> Result<(), String> {
        if self.length == Some(0) {
            return Err("length must be at least 1".to_string());
        }
        if self.count == Some(0) {
            return Err("count must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::GenerationRequest;

    #[test]
    fn builder_defaults_match_classic_pwgen() {
        let request = GenerationRequest::builder().build().unwrap();
        assert_eq!(request.length, 8);
        assert!(request.include_digits);
        assert!(request.include_uppercase);
        assert!(!request.include_symbols);
        assert!(!request.avoid_ambiguous);
        assert_eq!(request.count, 1);
    }

    #[test]
    fn builder_rejects_zero_length() {
        assert!(GenerationRequest::builder().length(0).build().is_err());
    }

    #[test]
    fn builder_rejects_zero_count() {
        assert!(GenerationRequest::builder().count(0).build().is_err());
    }
}

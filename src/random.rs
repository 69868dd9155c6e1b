//! Fully random (non-phonetic) password generation.
//!
//! The character-pool counterpart to [`crate::generator`]: every position is
//! an independent uniform draw from a pool assembled per the request. Used
//! for passwords too short to be pronounceable and for callers that prefer
//! raw entropy over memorability.

use crate::charset;
use crate::generator::{accept, MAX_ATTEMPTS};
use crate::rng::RandomnessSource;
use crate::{GenerationRequest, PwgenError};

/// Extra restrictions on the character pool.
#[derive(Debug, Clone, Default)]
pub struct PoolRestrictions {
    /// Characters removed from the pool outright.
    pub remove_chars: String,
    /// Drop vowels (and the leet-readable digits `0`/`1`) so the output
    /// cannot spell accidental nasty words.
    pub no_vowels: bool,
}

/// Generate one fully random password.
///
/// Class requirements are enforced through the same acceptance loop as the
/// phonetic generator, but waived for passwords of one or two characters,
/// which could not host every requested class anyway.
pub fn generate_random(
    request: &GenerationRequest,
    restrictions: &PoolRestrictions,
    rng: &mut dyn RandomnessSource,
) -> Result<String, PwgenError> {
    let pool = build_pool(request, restrictions)?;
    let enforce_classes = request.length > 2;

    for _ in 0..MAX_ATTEMPTS {
        let mut candidate = String::with_capacity(request.length);
        for _ in 0..request.length {
            candidate.push(pool[rng.next_in_range(pool.len())?]);
        }
        if !enforce_classes || accept(&candidate, request) {
            return Ok(candidate);
        }
    }
    Err(PwgenError::GenerationImpossible {
        attempts: MAX_ATTEMPTS,
    })
}

fn build_pool(
    request: &GenerationRequest,
    restrictions: &PoolRestrictions,
) -> Result<Vec<char>, PwgenError> {
    let mut excluded = restrictions.remove_chars.clone();
    if request.avoid_ambiguous {
        excluded.push_str(charset::AMBIGUOUS);
    }
    if restrictions.no_vowels {
        excluded.push_str(charset::VOWELS);
    }

    // Lowercase letters always contribute but are not a required class.
    let sections = [
        (request.include_digits, true, charset::DIGITS, "digits"),
        (request.include_uppercase, true, charset::UPPERS, "uppercase letters"),
        (true, false, charset::LOWERS, "lowercase letters"),
        (request.include_symbols, true, charset::SYMBOLS, "symbols"),
    ];

    let mut pool = Vec::new();
    for (wanted, required, alphabet, class) in sections {
        if !wanted {
            continue;
        }
        let chars = charset::allowed_chars(alphabet, &excluded);
        if chars.is_empty() && required {
            return Err(PwgenError::AlphabetExhausted(class));
        }
        pool.extend(chars);
    }
    if pool.is_empty() {
        return Err(PwgenError::AlphabetExhausted("characters"));
    }
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::{generate_random, PoolRestrictions};
    use crate::charset;
    use crate::rng::{OsRandomness, ScriptedSource};
    use crate::{GenerationRequest, PwgenError};

    #[test]
    fn scripted_draws_reproduce_an_exact_candidate() {
        // Pool order: digits (10), uppercase (26), lowercase (26).
        let request = GenerationRequest::builder().length(3).build().unwrap();
        let mut rng = ScriptedSource::new([0, 10, 36]);
        let password = generate_random(&request, &PoolRestrictions::default(), &mut rng).unwrap();
        assert_eq!(password, "0Aa");
    }

    #[test]
    fn requested_classes_are_present() {
        let request = GenerationRequest::builder()
            .length(16)
            .include_symbols(true)
            .build()
            .unwrap();
        let mut rng = OsRandomness;
        for _ in 0..25 {
            let password =
                generate_random(&request, &PoolRestrictions::default(), &mut rng).unwrap();
            assert_eq!(password.chars().count(), 16);
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| charset::SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn short_passwords_waive_class_requirements() {
        let request = GenerationRequest::builder().length(2).build().unwrap();
        let mut rng = OsRandomness;
        let password = generate_random(&request, &PoolRestrictions::default(), &mut rng).unwrap();
        assert_eq!(password.chars().count(), 2);
    }

    #[test]
    fn no_vowels_keeps_vowels_out() {
        let request = GenerationRequest::builder().length(24).build().unwrap();
        let restrictions = PoolRestrictions {
            no_vowels: true,
            ..Default::default()
        };
        let mut rng = OsRandomness;
        for _ in 0..10 {
            let password = generate_random(&request, &restrictions, &mut rng).unwrap();
            assert!(!password.chars().any(|c| charset::VOWELS.contains(c)));
        }
    }

    #[test]
    fn ambiguous_glyphs_are_excluded() {
        let request = GenerationRequest::builder()
            .length(24)
            .avoid_ambiguous(true)
            .build()
            .unwrap();
        let mut rng = OsRandomness;
        for _ in 0..10 {
            let password =
                generate_random(&request, &PoolRestrictions::default(), &mut rng).unwrap();
            assert!(!password.chars().any(|c| charset::AMBIGUOUS.contains(c)));
        }
    }

    #[test]
    fn removing_every_digit_fails_loudly() {
        let request = GenerationRequest::builder().length(8).build().unwrap();
        let restrictions = PoolRestrictions {
            remove_chars: charset::DIGITS.to_string(),
            ..Default::default()
        };
        let mut rng = OsRandomness;
        assert!(matches!(
            generate_random(&request, &restrictions, &mut rng),
            Err(PwgenError::AlphabetExhausted("digits"))
        ));
    }
}

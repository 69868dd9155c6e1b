//! The phonetic password-construction algorithm.
//!
//! A candidate is built in two stages. The building stage alternates vowel
//! and consonant elements, starting from a uniformly random kind, until the
//! letters add up to the requested length. The post-processing stage then
//! overwrites random positions to satisfy any requested character classes
//! (digits, uppercase, symbols). The acceptance filter re-checks the finished
//! candidate; a rejection throws the whole attempt away and rebuilds from
//! scratch, so no state carries over between attempts.

use crate::charset;
use crate::model::{Arity, ElementKind, LanguageModel, PhoneticElement};
use crate::rng::RandomnessSource;
use crate::{GenerationRequest, PwgenError};

/// Chance, out of [`CLUSTER_BIAS_DEN`], that a two-letter cluster is offered
/// when one fits. Matches the classic pwgen cadence.
const CLUSTER_BIAS: usize = 3;
const CLUSTER_BIAS_DEN: usize = 10;

/// Full rebuild attempts before a request is declared impossible.
pub const MAX_ATTEMPTS: usize = 1000;

/// Generate one password satisfying the request.
///
/// Candidates failing the acceptance filter are rebuilt from scratch, up to
/// [`MAX_ATTEMPTS`] times. Collaborator failures ([`PwgenError::ModelExhausted`],
/// [`PwgenError::EntropyUnavailable`]) abort immediately; no partial candidate
/// is ever returned.
pub fn generate_password(
    model: &LanguageModel,
    request: &GenerationRequest,
    rng: &mut dyn RandomnessSource,
) -> Result<String, PwgenError> {
    for attempt in 0..MAX_ATTEMPTS {
        let candidate = assemble(model, request, rng)?;
        if accept(&candidate, request) {
            return Ok(candidate);
        }
        log::trace!("candidate rejected on attempt {attempt}, rebuilding");
    }
    Err(PwgenError::GenerationImpossible {
        attempts: MAX_ATTEMPTS,
    })
}

/// Generate `request.count` passwords.
///
/// The batch aborts on the first failure rather than silently delivering
/// fewer passwords than requested.
pub fn generate_batch(
    model: &LanguageModel,
    request: &GenerationRequest,
    rng: &mut dyn RandomnessSource,
) -> Result<Vec<String>, PwgenError> {
    let mut passwords = Vec::with_capacity(request.count);
    for _ in 0..request.count {
        passwords.push(generate_password(model, request, rng)?);
    }
    Ok(passwords)
}

/// The acceptance filter: does `candidate` satisfy every hard constraint of
/// `request`?
///
/// The assembler satisfies these by construction; this is the documented
/// safety net and the seam for additional policies.
pub fn accept(candidate: &str, request: &GenerationRequest) -> bool {
    if candidate.chars().count() != request.length {
        return false;
    }
    let classes = [
        (request.include_digits, charset::DIGITS),
        (request.include_uppercase, charset::UPPERS),
        (request.include_symbols, charset::SYMBOLS),
    ];
    for (required, alphabet) in classes {
        if required && !candidate.chars().any(|c| alphabet.contains(c)) {
            return false;
        }
    }
    if request.avoid_ambiguous
        && candidate.chars().any(|c| charset::AMBIGUOUS.contains(c))
    {
        return false;
    }
    true
}

enum AssemblerState {
    Building,
    PostProcessing { chars: Vec<char> },
    Done(String),
}

/// Build one candidate. Errors reported by the model or the randomness
/// source surface immediately; the failed attempt leaves nothing behind.
fn assemble(
    model: &LanguageModel,
    request: &GenerationRequest,
    rng: &mut dyn RandomnessSource,
) -> Result<String, PwgenError> {
    let exclusions = ambiguous_exclusions(request);
    let mut state = AssemblerState::Building;
    loop {
        state = match state {
            AssemblerState::Building => {
                let stream = phonetic_stream(model, request.length, &exclusions, rng)?;
                let chars = stream
                    .iter()
                    .flat_map(|e| e.letters().chars())
                    .collect();
                AssemblerState::PostProcessing { chars }
            }
            AssemblerState::PostProcessing { mut chars } => {
                splice_required_classes(&mut chars, request, &exclusions, rng)?;
                AssemblerState::Done(chars.into_iter().collect())
            }
            AssemblerState::Done(candidate) => return Ok(candidate),
        };
    }
}

/// The exclusion set applied to element choice and replacement alphabets.
fn ambiguous_exclusions(request: &GenerationRequest) -> Vec<char> {
    if request.avoid_ambiguous {
        charset::AMBIGUOUS.chars().collect()
    } else {
        Vec::new()
    }
}

/// The raw phonetic pass: alternate element kinds from a random seed kind
/// until the letters add up to exactly `length`.
fn phonetic_stream<'a>(
    model: &'a LanguageModel,
    length: usize,
    exclusions: &[char],
    rng: &mut dyn RandomnessSource,
) -> Result<Vec<&'a PhoneticElement>, PwgenError> {
    let mut expected = if rng.next_in_range(2)? == 0 {
        ElementKind::Vowel
    } else {
        ElementKind::Consonant
    };
    let mut remaining = length;
    let mut stream = Vec::new();
    while remaining > 0 {
        let element = pick_element(model, expected, remaining, exclusions, rng)?;
        remaining -= element.letter_count();
        stream.push(element);
        expected = expected.flip();
    }
    Ok(stream)
}

/// The element selector: one element of `kind` that fits in `remaining`
/// characters. Clusters are only offered when at least two characters remain,
/// so the stream never overshoots the target length.
fn pick_element<'a>(
    model: &'a LanguageModel,
    kind: ElementKind,
    remaining: usize,
    exclusions: &[char],
    rng: &mut dyn RandomnessSource,
) -> Result<&'a PhoneticElement, PwgenError> {
    let singles = usable(model.elements_of(kind, Arity::Single), exclusions);
    let clusters = usable(model.elements_of(kind, Arity::Cluster), exclusions);

    let offer_cluster = remaining >= 2
        && !clusters.is_empty()
        && rng.next_in_range(CLUSTER_BIAS_DEN)? < CLUSTER_BIAS;

    let pool = if offer_cluster { &clusters } else { &singles };
    if pool.is_empty() {
        return Err(PwgenError::ModelExhausted(kind));
    }
    Ok(pool[rng.next_in_range(pool.len())?])
}

/// Filter a pool down to elements free of excluded characters. Uniform over
/// the allowed elements, same distribution as draw-and-skip but with
/// guaranteed termination.
fn usable<'a>(
    pool: Vec<&'a PhoneticElement>,
    exclusions: &[char],
) -> Vec<&'a PhoneticElement> {
    if exclusions.is_empty() {
        return pool;
    }
    pool.into_iter()
        .filter(|e| !e.contains_any(exclusions))
        .collect()
}

/// The post-processing pass: for each requested class not already present,
/// overwrite one random position with a random character of that class.
///
/// Position 0 keeps its letter so candidates stay letter-led and
/// pronounceable; a one-character password has nowhere else to host the
/// class, so the exclusion is waived for `length == 1`.
fn splice_required_classes(
    chars: &mut [char],
    request: &GenerationRequest,
    exclusions: &[char],
    rng: &mut dyn RandomnessSource,
) -> Result<(), PwgenError> {
    let excluded: String = exclusions.iter().collect();
    let passes = [
        (request.include_digits, charset::DIGITS, "digits"),
        (request.include_uppercase, charset::UPPERS, "uppercase letters"),
        (request.include_symbols, charset::SYMBOLS, "symbols"),
    ];
    for (wanted, alphabet, class) in passes {
        if !wanted || chars.iter().any(|c| alphabet.contains(*c)) {
            continue;
        }
        let replacements = charset::allowed_chars(alphabet, &excluded);
        if replacements.is_empty() {
            return Err(PwgenError::AlphabetExhausted(class));
        }
        let position = if chars.len() == 1 {
            0
        } else {
            1 + rng.next_in_range(chars.len() - 1)?
        };
        chars[position] = replacements[rng.next_in_range(replacements.len())?];
    }
    Ok(())
}

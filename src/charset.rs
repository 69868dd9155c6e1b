//! Character-class alphabets shared by both generators.

/// Digit alphabet.
pub const DIGITS: &str = "0123456789";

/// Uppercase letter alphabet.
pub const UPPERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase letter alphabet.
pub const LOWERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Symbol alphabet.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Glyphs easily misread for one another when displayed or typed
/// (`0`/`O`, `1`/`l`/`I`, and friends).
pub const AMBIGUOUS: &str = "B8G6I1l0OQDS5Z2";

/// Vowels, in every class that reads as one. Includes `0` and `1` so that a
/// vowel-free password cannot spell anything once digits are leet-read.
pub const VOWELS: &str = "01aeiouyAEIOUY";

/// The characters of `alphabet` minus anything in `excluded`.
pub fn allowed_chars(alphabet: &str, excluded: &str) -> Vec<char> {
    alphabet.chars().filter(|c| !excluded.contains(*c)).collect()
}

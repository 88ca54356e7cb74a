//! String canonicalization for fuzzy comparisons.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a string for comparison: lowercase, diacritics stripped,
/// every run of non-alphanumeric characters collapsed to a single space,
/// leading/trailing whitespace removed.
///
/// Total function: any input, including the empty string, yields a result.
pub fn normalize(s: &str) -> String {
    // NFD decomposition splits accented characters into base + combining
    // mark; dropping the marks leaves the bare letters.
    let decomposed: String = s.nfd().filter(|c| !is_combining_mark(*c)).collect();

    let mut out = String::with_capacity(decomposed.len());
    let mut pending_space = false;
    for c in decomposed.to_lowercase().chars() {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }
    out
}

//! Description cleanup
//!
//! Produces the human-readable remainder of an utterance once amounts,
//! currency markers, and filler words are gone. Matching is
//! case-insensitive but surviving tokens keep their original casing.

use regex::Regex;
use tracing::debug;

use crate::lexicon;

/// Description of last resort when nothing survives cleanup
pub const PLACEHOLDER_DESCRIPTION: &str = "Voice expense";

/// Cleaned text shorter than this falls back to key phrases
const MIN_CLEANED_CHARS: usize = 3;

/// The key-phrase fallback keeps words longer than this
const KEY_PHRASE_MIN_CHARS: usize = 3;

/// The key-phrase fallback keeps at most this many words
const KEY_PHRASE_MAX_WORDS: usize = 5;

/// Extract a cleaned description from an utterance
///
/// Never returns an empty string. The amount argument is the value the
/// amount pass extracted; it is a diagnostic hint only and gates nothing.
///
/// Cleanup order matters: numeric tokens go first, then symbol-prefixed
/// amounts, then standalone currency words. A "$50 " therefore loses its
/// digits and trailing space to the numeric pass, gluing the leftover "$"
/// onto the next word; tests pin that order.
pub fn extract_description(text: &str, amount: f64) -> String {
    debug!("Cleaning description (extracted amount {})", amount);

    let numeric_re = Regex::new(r"(?i)\d+(?:\.\d+)?\s*[km]?\b").expect("valid regex");
    let symbol_re = Regex::new(&format!(
        r"[{}]\s*\d+(?:\.\d+)?",
        lexicon::CURRENCY_SYMBOLS
    ))
    .expect("valid regex");
    let currency_re = Regex::new(&format!(
        r"(?i)\b(?:{})\b",
        lexicon::CURRENCY_PATTERNS.join("|")
    ))
    .expect("valid regex");

    let stripped = numeric_re.replace_all(text, "");
    let stripped = symbol_re.replace_all(&stripped, "");
    let stripped = currency_re.replace_all(&stripped, "");

    let cleaned: Vec<&str> = stripped
        .split_whitespace()
        .map(lexicon::trim_punct)
        .filter(|token| !token.is_empty() && !lexicon::is_filler(token))
        .collect();
    let description = cleaned.join(" ");

    if description.chars().count() < MIN_CLEANED_CHARS {
        let fallback = key_phrases(text);
        if fallback.is_empty() {
            debug!("Description fell back to placeholder");
            return PLACEHOLDER_DESCRIPTION.to_string();
        }
        return fallback;
    }

    description
}

/// Key-phrase fallback: keep the longer non-filler words of the raw text
///
/// Only numeric and symbol-prefixed amounts are removed here; currency
/// words stay, so "got 50 bucks" degrades to "bucks" rather than nothing.
fn key_phrases(text: &str) -> String {
    let numeric_re = Regex::new(r"(?i)\d+(?:\.\d+)?[km]?").expect("valid regex");
    let symbol_re = Regex::new(&format!(
        r"[{}]\d+(?:\.\d+)?",
        lexicon::CURRENCY_SYMBOLS
    ))
    .expect("valid regex");

    let stripped = numeric_re.replace_all(text, "");
    let stripped = symbol_re.replace_all(&stripped, "");

    let words: Vec<&str> = stripped
        .split_whitespace()
        .filter(|w| w.chars().count() > KEY_PHRASE_MIN_CHARS && !lexicon::is_filler(w))
        .map(lexicon::trim_punct)
        .take(KEY_PHRASE_MAX_WORDS)
        .collect();

    words.join(" ")
}

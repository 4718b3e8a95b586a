//! Amount extraction
//!
//! Five strategies run in a fixed priority order over normalized text; the
//! first strategy to produce a positive value wins. Lower-priority
//! strategies never override an earlier hit, so "$25 for 4 people" reads
//! as 25, not 4.

use regex::Regex;
use tracing::debug;

use crate::lexicon;

/// Extract a monetary amount from free text
///
/// Returns 0.0 when no strategy matches. The input is lower-cased and
/// stripped of thousands separators up front, so normalizing an already
/// normalized string changes nothing.
pub fn extract_amount(text: &str) -> f64 {
    let text = text.to_lowercase().replace(',', "");

    // Ordered strategy chain; first positive value short-circuits the rest
    let strategies: &[(&str, fn(&str) -> f64)] = &[
        ("shorthand", shorthand_amount),
        ("currency symbol", currency_symbol_amount),
        ("number with currency word", number_with_currency_amount),
        ("plain number", plain_number_amount),
        ("word form", word_form_amount),
    ];

    for &(name, strategy) in strategies {
        let amount = strategy(&text);
        if amount > 0.0 {
            debug!("Extracted amount {} via {} strategy", amount, name);
            return amount;
        }
    }

    debug!("No amount found");
    0.0
}

/// Shorthand amounts: 8k, 1.5k, 2m
fn shorthand_amount(text: &str) -> f64 {
    let suffixes: &[(&str, f64)] = &[
        (r"(\d+(?:\.\d+)?)\s*k\b", 1_000.0),
        (r"(\d+(?:\.\d+)?)\s*m\b", 1_000_000.0),
    ];

    for &(pattern, multiplier) in suffixes {
        let re = Regex::new(pattern).expect("valid regex");
        if let Some(caps) = re.captures(text) {
            if let Ok(value) = caps[1].parse::<f64>() {
                return value * multiplier;
            }
        }
    }

    0.0
}

/// Currency symbol amounts: $50, £20.5, € 100
fn currency_symbol_amount(text: &str) -> f64 {
    let pattern = format!(r"[{}]\s*(\d+(?:\.\d{{1,2}})?)", lexicon::CURRENCY_SYMBOLS);
    let re = Regex::new(&pattern).expect("valid regex");
    match re.captures(text) {
        Some(caps) => caps[1].parse().unwrap_or(0.0),
        None => 0.0,
    }
}

/// Numeric amounts followed by a currency word: 50 dollars, 100 tsh
fn number_with_currency_amount(text: &str) -> f64 {
    let pattern = format!(
        r"(\d+(?:\.\d{{1,2}})?)\s*(?:{})\b",
        lexicon::CURRENCY_PATTERNS.join("|")
    );
    let re = Regex::new(&pattern).expect("valid regex");
    match re.captures(text) {
        Some(caps) => caps[1].parse().unwrap_or(0.0),
        None => 0.0,
    }
}

/// First standalone decimal number anywhere in the text
fn plain_number_amount(text: &str) -> f64 {
    let re = Regex::new(r"\b(\d+(?:\.\d{1,2})?)\b").expect("valid regex");
    match re.captures(text) {
        Some(caps) => caps[1].parse().unwrap_or(0.0),
        None => 0.0,
    }
}

/// Word-form amounts: "twenty dollars", "five hundred bucks"
///
/// Number words accumulate left to right; "hundred" and "thousand" multiply
/// the running value instead of adding (an empty accumulator counts as 1).
/// The total is only emitted when a spoken currency word ends the scan, so
/// a bare "five hundred" yields nothing. Compound phrases past one thousand
/// keep multiplying the whole accumulator, which misreads "one thousand
/// five hundred dollars"; that inherited limitation is pinned by a test.
fn word_form_amount(text: &str) -> f64 {
    let mut acc: f64 = 0.0;

    for token in text.split_whitespace() {
        let token = lexicon::trim_punct(token);

        if let Some(value) = lexicon::number_word(token) {
            match value {
                100 | 1000 => {
                    let base = if acc == 0.0 { 1.0 } else { acc };
                    acc = base * value as f64;
                }
                _ => acc += value as f64,
            }
        } else if lexicon::WORD_AMOUNT_STOPS.contains(&token) {
            return acc;
        }
    }

    0.0
}

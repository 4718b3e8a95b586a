//! Category classification by keyword scoring
//!
//! Each category is scored by how many of its configured keywords occur as
//! substrings of the lower-cased text, counted once per distinct keyword.
//! The strictly highest score wins; ties break toward the earlier category
//! in table order.

use tracing::debug;

use crate::lexicon;
use crate::models::Category;

/// Classify an utterance into a spending category
///
/// Always returns a valid category; `Category::Misc` when no keyword from
/// any list matches.
pub fn extract_category(text: &str) -> Category {
    let text = text.to_lowercase();

    let mut best = Category::Misc;
    let mut best_score = 0;

    for (category, keywords) in lexicon::CATEGORY_KEYWORDS {
        let score = keywords.iter().filter(|kw| text.contains(**kw)).count();
        if score > best_score {
            best = *category;
            best_score = score;
        }
    }

    if best_score > 0 {
        debug!("Categorized as {} (score {})", best, best_score);
    }
    best
}

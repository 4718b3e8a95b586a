//! Parse orchestration
//!
//! `parse` is the one call collaborators make: it composes amount
//! extraction, category classification, and description cleanup into a
//! single `ParseResult`. Nothing here can fail; a bad utterance produces
//! a result with `success == false` and an error message.

use tracing::debug;

use crate::amount::extract_amount;
use crate::category::extract_category;
use crate::description::extract_description;
use crate::models::{Category, ParseResult};

/// Parse one expense utterance into a structured result
///
/// Empty and whitespace-only input short-circuits before any extraction
/// runs. Otherwise the text is trimmed, the three extractors run, and
/// `success` holds exactly when an amount was found and the description is
/// non-empty. The cleanup placeholder counts as a description, so failures
/// come almost entirely from amount extraction.
pub fn parse(text: &str) -> ParseResult {
    if text.trim().is_empty() {
        return ParseResult {
            success: false,
            amount: 0.0,
            category: Category::Misc,
            description: String::new(),
            original_text: String::new(),
            error: Some("Empty input".to_string()),
        };
    }

    let text = text.trim();
    let amount = extract_amount(text);
    let category = extract_category(text);
    let description = extract_description(text, amount);

    let success = amount > 0.0 && !description.is_empty();
    debug!(
        "Parsed utterance: success={} amount={} category={}",
        success, amount, category
    );

    ParseResult {
        success,
        amount,
        category,
        description,
        original_text: text.to_string(),
        error: if success {
            None
        } else {
            Some("Could not parse amount or description".to_string())
        },
    }
}

/// Example phrases shown to the user after a failed parse
pub fn suggestions() -> &'static [&'static str] {
    &[
        "Try: 'Spent 50 dollars on groceries'",
        "Try: 'Paid 20.5 for lunch'",
        "Try: '8k for rent'",
        "Try: 'Bought coffee for 5 bucks'",
        "Try: 'Uber ride 15 dollars'",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::PLACEHOLDER_DESCRIPTION;

    // ========== Empty Input Tests ==========

    #[test]
    fn test_empty_input() {
        let result = parse("");
        assert!(!result.success);
        assert_eq!(result.amount, 0.0);
        assert_eq!(result.category, Category::Misc);
        assert_eq!(result.description, "");
        assert_eq!(result.original_text, "");
        assert_eq!(result.error.as_deref(), Some("Empty input"));
    }

    #[test]
    fn test_whitespace_only_input() {
        let result = parse("   \t  ");
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Empty input"));
    }

    // ========== Successful Parse Tests ==========

    #[test]
    fn test_parse_shorthand_rent() {
        let result = parse("I spent 8k on rent");
        assert!(result.success);
        assert_eq!(result.amount, 8000.0);
        assert_eq!(result.category, Category::Rent);
        assert_eq!(result.description, "rent");
        assert_eq!(result.original_text, "I spent 8k on rent");
        assert!(result.error.is_none());
    }

    #[test]
    fn test_parse_symbol_lunch() {
        let result = parse("$50 for lunch");
        assert!(result.success);
        assert_eq!(result.amount, 50.0);
        assert_eq!(result.category, Category::Food);
    }

    #[test]
    fn test_parse_word_amount_coffee() {
        let result = parse("twenty dollars for coffee");
        assert!(result.success);
        assert_eq!(result.amount, 20.0);
        assert_eq!(result.category, Category::Food);
    }

    #[test]
    fn test_parse_trims_input() {
        let result = parse("  $5 coffee  ");
        assert!(result.success);
        assert_eq!(result.original_text, "$5 coffee");
    }

    #[test]
    fn test_parse_bare_number_uses_placeholder() {
        // An amount with no describable remainder still succeeds thanks to
        // the placeholder description
        let result = parse("500");
        assert!(result.success);
        assert_eq!(result.amount, 500.0);
        assert_eq!(result.description, PLACEHOLDER_DESCRIPTION);
    }

    // ========== Failed Parse Tests ==========

    #[test]
    fn test_parse_without_amount_fails() {
        let result = parse("just vibing today");
        assert!(!result.success);
        assert_eq!(result.amount, 0.0);
        assert_eq!(
            result.error.as_deref(),
            Some("Could not parse amount or description")
        );
        // The description is still extracted for display purposes
        assert_eq!(result.description, "vibing");
    }

    // ========== Suggestions Tests ==========

    #[test]
    fn test_suggestions_fixed_list() {
        let list = suggestions();
        assert_eq!(list.len(), 5);
        assert_eq!(list[0], "Try: 'Spent 50 dollars on groceries'");
        assert!(list.iter().all(|s| s.starts_with("Try: ")));
    }
}

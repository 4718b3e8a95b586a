//! Domain models for Earmark

use serde::{Deserialize, Serialize};

/// Spending categories recognized by the classifier
///
/// The order of `Category::all` doubles as the classifier tie-break order:
/// on equal keyword scores the earlier category wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Category {
    Food,
    Transport,
    Subscriptions,
    Rent,
    #[default]
    Misc,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Subscriptions => "Subscriptions",
            Self::Rent => "Rent",
            Self::Misc => "Misc",
        }
    }

    /// All categories in tie-break order
    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transport,
            Self::Subscriptions,
            Self::Rent,
            Self::Misc,
        ]
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" | "transportation" => Ok(Self::Transport),
            "subscriptions" | "subscription" => Ok(Self::Subscriptions),
            "rent" => Ok(Self::Rent),
            "misc" | "miscellaneous" => Ok(Self::Misc),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of parsing a single expense utterance
///
/// Created fresh per call and owned by the caller. `success` holds exactly
/// when `amount > 0` and `description` is non-empty; a failed parse always
/// carries an `error` message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult {
    pub success: bool,
    /// Extracted amount; 0.0 means no strategy matched
    pub amount: f64,
    pub category: Category,
    pub description: String,
    /// The trimmed input the parse ran over
    pub original_text: String,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_as_str() {
        assert_eq!(Category::Food.as_str(), "Food");
        assert_eq!(Category::Transport.as_str(), "Transport");
        assert_eq!(Category::Subscriptions.as_str(), "Subscriptions");
        assert_eq!(Category::Rent.as_str(), "Rent");
        assert_eq!(Category::Misc.as_str(), "Misc");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(Category::from_str("food").unwrap(), Category::Food);
        assert_eq!(Category::from_str("FOOD").unwrap(), Category::Food);
        assert_eq!(Category::from_str("Rent").unwrap(), Category::Rent);
        assert_eq!(
            Category::from_str("subscription").unwrap(),
            Category::Subscriptions
        );
        assert!(Category::from_str("groceries").is_err());
    }

    #[test]
    fn test_category_display_roundtrip() {
        for category in Category::all() {
            let parsed = Category::from_str(&category.to_string()).unwrap();
            assert_eq!(parsed, *category);
        }
    }

    #[test]
    fn test_category_all_order() {
        let all = Category::all();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0], Category::Food);
        assert_eq!(all[4], Category::Misc);
    }

    #[test]
    fn test_category_default_is_misc() {
        assert_eq!(Category::default(), Category::Misc);
    }

    #[test]
    fn test_category_serializes_as_capitalized_name() {
        assert_eq!(serde_json::to_string(&Category::Food).unwrap(), "\"Food\"");
        assert_eq!(serde_json::to_string(&Category::Misc).unwrap(), "\"Misc\"");
    }

    #[test]
    fn test_parse_result_serializes_all_fields() {
        let result = ParseResult {
            success: true,
            amount: 50.0,
            category: Category::Food,
            description: "lunch".to_string(),
            original_text: "$50 for lunch".to_string(),
            error: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"amount\":50.0"));
        assert!(json.contains("\"category\":\"Food\""));
        assert!(json.contains("\"error\":null"));
    }
}

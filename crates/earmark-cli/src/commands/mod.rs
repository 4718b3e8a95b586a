//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `batch` - Batch parsing of transcript files
//! - `parse` - Single-utterance commands (parse, check, suggestions, categories)

pub mod batch;
pub mod parse;

// Re-export command functions for main.rs
pub use batch::*;
pub use parse::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

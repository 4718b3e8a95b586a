//! Earmark Core Library
//!
//! Shared functionality for the Earmark voice-expense tool:
//! - Lexical tables for categories, fillers, number words, and currencies
//! - Amount extraction through an ordered strategy cascade
//! - Keyword-scored category classification
//! - Description cleanup with a key-phrase fallback
//! - One-call parse orchestration producing a `ParseResult`
//! - Second-pass validation gating persistence
//! - Batch parsing of line-oriented transcription files

pub mod amount;
pub mod batch;
pub mod category;
pub mod description;
pub mod error;
pub mod lexicon;
pub mod models;
pub mod parser;
pub mod validate;

pub use amount::extract_amount;
pub use batch::{parse_lines, summarize, BatchSummary};
pub use category::extract_category;
pub use description::extract_description;
pub use error::{Error, Result};
pub use models::{Category, ParseResult};
pub use parser::{parse, suggestions};
pub use validate::{validate, validate_with_config, Validation, ValidationConfig};

//! Batch parsing
//!
//! Runs the parser over line-oriented input, one utterance per line.
//! Blank lines are skipped rather than reported as failures.

use std::io::{BufRead, BufReader, Read};

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::models::ParseResult;
use crate::parser::parse;

/// Tallies for a batch run
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub parsed: usize,
    pub failed: usize,
}

/// Parse every non-blank line from a reader
pub fn parse_lines<R: Read>(reader: R) -> Result<Vec<ParseResult>> {
    let reader = BufReader::new(reader);
    let mut results = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        results.push(parse(&line));
    }

    debug!("Parsed {} lines", results.len());
    Ok(results)
}

/// Tally successes and failures across a batch
pub fn summarize(results: &[ParseResult]) -> BatchSummary {
    let parsed = results.iter().filter(|r| r.success).count();
    BatchSummary {
        total: results.len(),
        parsed,
        failed: results.len() - parsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_each_line() {
        let input = "spent 8k on rent\n$50 for lunch\ntwenty dollars for coffee\n";
        let results = parse_lines(input.as_bytes()).unwrap();

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.success));
        assert_eq!(results[0].amount, 8000.0);
        assert_eq!(results[1].amount, 50.0);
        assert_eq!(results[2].amount, 20.0);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let input = "\n$50 for lunch\n\n   \nuber 25\n";
        let results = parse_lines(input.as_bytes()).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].original_text, "$50 for lunch");
        assert_eq!(results[1].original_text, "uber 25");
    }

    #[test]
    fn test_failures_kept_in_order() {
        let input = "$50 for lunch\njust vibing today\nuber 25\n";
        let results = parse_lines(input.as_bytes()).unwrap();

        assert_eq!(results.len(), 3);
        assert!(results[0].success);
        assert!(!results[1].success);
        assert!(results[2].success);
        assert_eq!(
            results[1].error.as_deref(),
            Some("Could not parse amount or description")
        );
    }

    #[test]
    fn test_empty_input() {
        let results = parse_lines("".as_bytes()).unwrap();
        assert!(results.is_empty());

        let summary = summarize(&results);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.parsed, 0);
        assert_eq!(summary.failed, 0);
    }

    #[test]
    fn test_summarize_counts() {
        let input = "$50 for lunch\njust vibing today\nspent 8k on rent\n";
        let results = parse_lines(input.as_bytes()).unwrap();
        let summary = summarize(&results);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.parsed, 2);
        assert_eq!(summary.failed, 1);
    }
}

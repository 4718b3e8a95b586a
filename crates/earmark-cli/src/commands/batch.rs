//! Batch command implementation
//!
//! Parses a transcript file, one utterance per line, printing per-line
//! outcomes and a closing summary.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use earmark_core::{parse_lines, summarize, validate_with_config};
use serde_json::json;

use super::{truncate, validation_config};

pub fn cmd_batch(file: &Path, json: bool, max_amount: Option<f64>) -> Result<()> {
    let handle = File::open(file)
        .with_context(|| format!("Failed to open transcript file: {}", file.display()))?;

    let results = parse_lines(handle).context("Failed to read transcript file")?;
    tracing::debug!("Read {} lines from {}", results.len(), file.display());

    let config = validation_config(max_amount);

    if json {
        let payload: Vec<_> = results
            .iter()
            .map(|result| {
                json!({
                    "result": result,
                    "validation": validate_with_config(result, &config),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("📂 Parsing {}...", file.display());
    println!();

    for result in &results {
        let verdict = validate_with_config(result, &config);
        if !result.success {
            println!(
                "   ❌ {} ({})",
                truncate(&result.original_text, 40),
                verdict.message
            );
        } else if !verdict.is_valid {
            println!(
                "   ⚠️  {} → ${:.2} {} ({})",
                truncate(&result.original_text, 40),
                result.amount,
                result.category,
                verdict.message
            );
        } else {
            println!(
                "   ✅ {} → ${:.2} {} \"{}\"",
                truncate(&result.original_text, 40),
                result.amount,
                result.category,
                result.description
            );
        }
    }

    let summary = summarize(&results);
    println!();
    println!("📊 Batch Summary");
    println!("   ─────────────────────────────");
    println!("   Parsed: {}", summary.parsed);
    println!("   Failed: {}", summary.failed);
    println!("   Total:  {}", summary.total);

    if summary.failed > 0 {
        println!();
        println!("💡 Run 'earmark suggestions' for phrasings that parse reliably.");
    }

    Ok(())
}

//! Single-utterance command implementations
//!
//! This module contains:
//! - `cmd_parse` - Parse one utterance and print the result
//! - `cmd_check` - Parse and fail the process if validation rejects it
//! - `cmd_suggestions` - Print example phrasings
//! - `cmd_categories` - List categories and their keywords
//! - `validation_config` - Shared utility to apply CLI validation overrides

use std::str::FromStr;

use anyhow::Result;
use earmark_core::lexicon::CATEGORY_KEYWORDS;
use earmark_core::{parse, suggestions, validate_with_config, Category, ValidationConfig};
use serde_json::json;

use super::truncate;

/// Build the validation bounds, applying any CLI override
pub fn validation_config(max_amount: Option<f64>) -> ValidationConfig {
    let mut config = ValidationConfig::default();
    if let Some(max) = max_amount {
        tracing::debug!("Overriding max amount: {}", max);
        config.max_amount = max;
    }
    config
}

pub fn cmd_parse(text: &str, json: bool, max_amount: Option<f64>) -> Result<()> {
    let result = parse(text);
    let verdict = validate_with_config(&result, &validation_config(max_amount));

    if json {
        let payload = json!({
            "result": result,
            "validation": verdict,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("🎙️  \"{}\"", text);

    if !result.success {
        println!("❌ {}", verdict.message);
        println!();
        println!("💡 Suggestions:");
        for suggestion in suggestions() {
            println!("   {}", suggestion);
        }
        return Ok(());
    }

    println!("   ─────────────────────────────");
    println!("   Amount:      ${:.2}", result.amount);
    println!("   Category:    {}", result.category);
    println!("   Description: {}", result.description);

    if verdict.is_valid {
        println!("✅ {}", verdict.message);
    } else {
        println!("⚠️  {}", verdict.message);
    }

    Ok(())
}

pub fn cmd_check(text: &str, max_amount: Option<f64>) -> Result<()> {
    let result = parse(text);
    let verdict = validate_with_config(&result, &validation_config(max_amount));

    if !verdict.is_valid {
        anyhow::bail!("{}", verdict.message);
    }

    println!(
        "✅ ${:.2} {} \"{}\"",
        result.amount, result.category, result.description
    );

    Ok(())
}

pub fn cmd_suggestions() -> Result<()> {
    println!("💡 Phrasings the parser handles well:");
    for suggestion in suggestions() {
        println!("   {}", suggestion);
    }

    Ok(())
}

pub fn cmd_categories(name: Option<&str>) -> Result<()> {
    if let Some(name) = name {
        let category = Category::from_str(name).map_err(|e| anyhow::anyhow!(e))?;

        println!("🏷️  {}", category);
        if let Some((_, keywords)) = CATEGORY_KEYWORDS
            .iter()
            .find(|(candidate, _)| *candidate == category)
        {
            println!("   Keywords: {}", keywords.join(", "));
        }
        return Ok(());
    }

    println!("🏷️  Categories");
    println!("   ─────────────────────────────────────────────────────────────");
    for (category, keywords) in CATEGORY_KEYWORDS {
        println!(
            "   {:<14} {}",
            category.as_str(),
            truncate(&keywords.join(", "), 60)
        );
    }

    Ok(())
}

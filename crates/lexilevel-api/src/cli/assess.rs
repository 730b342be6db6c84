//! Offline assessment command.

use std::io::Read;

use anyhow::Result;
use console::style;

use lexilevel_core::service::assessment::evaluate;
use lexilevel_types::level::ProficiencyLevel;

/// Assess `text` (or stdin) and print the level, metrics, and suggestions.
pub fn assess(text: Option<String>, hobbies: &str, json: bool) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let evaluation = evaluate(&text, hobbies);

    if json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
        return Ok(());
    }

    let assessment = &evaluation.assessment;
    let level = match assessment.level {
        ProficiencyLevel::Beginner => style(assessment.level.as_str()).green(),
        ProficiencyLevel::Intermediate => style(assessment.level.as_str()).yellow(),
        ProficiencyLevel::Advanced => style(assessment.level.as_str()).red(),
        ProficiencyLevel::Unknown => style(assessment.level.as_str()).dim(),
    };

    println!();
    println!("  Level: {}", level.bold());
    println!(
        "  {}",
        style(format!(
            "{} words, average length {}, reading ease {:.2}",
            assessment.metrics.token_count,
            assessment
                .metrics
                .avg_word_length
                .map(|l| format!("{l:.2}"))
                .unwrap_or_else(|| "n/a".to_string()),
            assessment.readability
        ))
        .dim()
    );
    println!();

    if evaluation.result.suggestions.is_empty() {
        println!("  {}", style("No suggestions.").dim());
    } else {
        println!("  {}", style("── Suggestions ──").dim());
        for suggestion in &evaluation.result.suggestions {
            println!("  • {suggestion}");
        }
    }
    println!();

    Ok(())
}

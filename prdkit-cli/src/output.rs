//! Terminal output.
//!
//! Documents go to stdout so they can be piped; status lines go to stderr.

use crate::cli::OutputFormat;
use crate::config::PrdkitConfig;
use crate::error::Presentation;
use crate::pipeline::RunOutput;
use colored::Colorize;
use prdkit_eval::ScoredPrd;
use std::path::PathBuf;

/// Render a run for stdout.
pub fn render(output: &RunOutput, format: OutputFormat) -> String {
    match (format, &output.evaluation) {
        (OutputFormat::Markdown, None) => prdkit_prd::render::markdown(&output.prd),
        (OutputFormat::Markdown, Some(evaluation)) => format!(
            "{}\n---\n\n{}",
            prdkit_prd::render::markdown(&output.prd),
            prdkit_eval::report::markdown(evaluation)
        ),
        (OutputFormat::Json, None) => output.prd.to_json_pretty(),
        (OutputFormat::Json, Some(evaluation)) => {
            let scored = ScoredPrd::new(output.prd.clone(), evaluation.clone());
            serde_json::to_string_pretty(&scored).unwrap_or_default()
        }
    }
}

pub fn print_config(config: &PrdkitConfig) {
    let tokens = config.max_output_tokens.map_or_else(|| "provider default".to_string(), |t| t.to_string());
    println!("{}", "Configuration:".yellow().bold());
    println!("  API Key:          {}", config.masked_api_key());
    println!("  Base URL:         {}", config.base_url);
    println!("  Model:            {}", config.model.cyan());
    println!("  Generator Temp:   {}", config.generator_temperature);
    println!("  Evaluator Temp:   {}", config.evaluator_temperature);
    println!("  Max Tokens:       {tokens}");
    println!(
        "  Moderation:       {}",
        if config.moderation { "enabled".green() } else { "disabled".yellow() }
    );
    println!("  Log Level:        {} ({})", config.log_level, config.log_format);
    println!();
}

pub fn print_summary(output: &RunOutput, generated: bool) {
    if generated {
        eprintln!("{} PRD generated", "✓".bright_green());
    }
    if let Some(evaluation) = &output.evaluation {
        eprintln!(
            "{} Evaluated: overall {:.1}/10 (clarity {:.1}, completeness {:.1}, measurability {:.1}, business value {:.1})",
            "✓".bright_green(),
            evaluation.overall_score(),
            evaluation.clarity(),
            evaluation.completeness(),
            evaluation.measurability(),
            evaluation.business_value(),
        );
    }
}

pub fn print_exported(paths: &[PathBuf]) {
    for path in paths {
        eprintln!("  {} {}", "→".bright_blue(), path.display());
    }
}

pub fn print_error(shown: &Presentation) {
    eprintln!("{}", shown.title.red().bold());
    for line in &shown.lines {
        eprintln!("  {line}");
    }
}

//! prdkit - notes → PRD → evaluation
//!
//! ## Usage
//!
//! ```bash
//! prdkit generate --notes "We need a login page. Users forget passwords a lot." --evaluate
//! PRDKIT_MODEL=gpt-4o prdkit generate --notes-file notes.txt --out-dir out
//! ```

use anyhow::Result;
use clap::Parser;
use prdkit_cli::cli::{Cli, Command, OutputArgs};
use prdkit_cli::{Pipeline, PrdkitConfig, RunOutput, export, output, pipeline, present};
use prdkit_core::Llm;
use prdkit_guardrail::SafetyGuard;
use prdkit_model::{ModerationClient, OpenAIClient};
use prdkit_telemetry::init_telemetry;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[tokio::main]
async fn main() {
    // A missing .env is fine; values may come from the environment.
    if let Ok(path) = dotenvy::dotenv() {
        eprintln!("Loaded config from: {}", path.display());
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        let shown = present(&e);
        output::print_error(&shown);
        std::process::exit(shown.exit_code);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = PrdkitConfig::from_env()?.with_overrides(cli.model.clone(), cli.base_url.clone())?;
    init_telemetry("prdkit", &config.telemetry(cli.verbose));
    debug!(model = %config.model, base_url = %config.base_url, "configuration loaded");

    match cli.command {
        Command::Config => {
            output::print_config(&config);
            println!("Configuration is valid!");
            Ok(())
        }
        Command::Generate(args) => {
            let notes = pipeline::read_notes(args.notes.as_deref(), args.notes_file.as_deref())?;
            let pipeline = build_pipeline(&config, cli.timeout_secs)?;
            let result = pipeline.generate(&notes, args.evaluate, args.skip_safety).await?;
            emit(&result, &args.output, true)
        }
        Command::Evaluate(args) => {
            let prd = pipeline::read_prd(&args.prd_file)?;
            let notes = args.notes_file.as_deref().map(pipeline::read_file).transpose()?;
            let pipeline = build_pipeline(&config, cli.timeout_secs)?;
            let result = pipeline.evaluate(prd, notes.as_deref()).await?;
            emit(&result, &args.output, false)
        }
    }
}

/// One HTTP client shared by both stages, plus moderation when enabled.
fn build_pipeline(config: &PrdkitConfig, timeout_secs: Option<u64>) -> Result<Pipeline> {
    let llm: Arc<dyn Llm> = Arc::new(OpenAIClient::new(config.openai())?);

    let mut guard = SafetyGuard::new();
    if config.moderation {
        guard = guard.with_moderator(Arc::new(ModerationClient::new(config.openai())?));
    }

    Ok(Pipeline::new(llm)
        .with_generator_config(config.generator())
        .with_evaluator_config(config.evaluator())
        .with_guard(guard)
        .with_timeout(timeout_secs.map(Duration::from_secs)))
}

fn emit(result: &RunOutput, args: &OutputArgs, generated: bool) -> Result<()> {
    output::print_summary(result, generated);
    match &args.out_dir {
        Some(dir) => {
            let written = export::export(dir, result)?;
            output::print_exported(&written);
        }
        None => println!("{}", output::render(result, args.format)),
    }
    Ok(())
}

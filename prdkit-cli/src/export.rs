//! Writing results to an output directory.

use crate::pipeline::RunOutput;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const PRD_MARKDOWN: &str = "prd.md";
pub const PRD_JSON: &str = "prd.json";
pub const EVALUATION_MARKDOWN: &str = "evaluation.md";
pub const EVALUATION_JSON: &str = "evaluation.json";

/// Write the PRD, and the evaluation when present, into `dir`. Returns the written paths.
pub fn export(dir: &Path, output: &RunOutput) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut files = vec![
        (PRD_MARKDOWN, prdkit_prd::render::markdown(&output.prd)),
        (PRD_JSON, output.prd.to_json_pretty()),
    ];
    if let Some(evaluation) = &output.evaluation {
        files.push((EVALUATION_MARKDOWN, prdkit_eval::report::markdown(evaluation)));
        files.push((EVALUATION_JSON, evaluation.to_json_pretty()));
    }

    files
        .into_iter()
        .map(|(name, contents)| {
            let path = dir.join(name);
            std::fs::write(&path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(path)
        })
        .collect()
}

//! Content Model: the hand-authored dataset the page is rendered from.
//! Built-in literals by default; optionally replaced by a JSON file at startup.

pub mod data;
pub mod models;
pub mod validation;

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

pub use data::builtin_content;
pub use models::Content;
pub use validation::validate_content;

/// Loads the dataset: the JSON file at `path` when given, else the built-in literals.
///
/// A file that fails validation is rejected. Issues in the built-in dataset are
/// only logged so the page still renders.
pub fn load_content(path: Option<&Path>) -> Result<Content> {
    let Some(path) = path else {
        let content = builtin_content();
        let report = validate_content(&content);
        for issue in &report.issues {
            warn!("Built-in content: {}", issue.reason);
        }
        info!(
            "Using built-in content ({} experience, {} education, {} projects)",
            content.experience.len(),
            content.education.len(),
            content.projects.len()
        );
        return Ok(content);
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file {}", path.display()))?;
    let content: Content = serde_json::from_str(&raw)
        .with_context(|| format!("Content file {} is not valid JSON", path.display()))?;

    let report = validate_content(&content);
    if !report.passed {
        let reasons: Vec<_> = report.issues.iter().map(|i| i.reason.as_str()).collect();
        bail!(
            "Content file {} failed validation: {}",
            path.display(),
            reasons.join("; ")
        );
    }

    info!("Loaded content from {}", path.display());
    Ok(content)
}

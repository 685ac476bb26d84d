use super::types::{Scorecard, ScorecardDefinition};
use crate::rating::{validate_configuration, Configuration};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a scorecard from a YAML file
///
/// `fallback` is used when the file declares no configuration of its own.
/// A configuration declared in the file is validated like the main one.
pub fn load_scorecard(path: &Path, fallback: Configuration) -> Result<Scorecard> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scorecard at {}", path.display()))?;

    let definition: ScorecardDefinition = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse scorecard: invalid YAML in {}", path.display()))?;

    if let Some(ref configuration) = definition.configuration {
        if let Err(errors) = validate_configuration(configuration) {
            anyhow::bail!(
                "Invalid configuration in scorecard {}: {}",
                path.display(),
                errors.join("; ")
            );
        }
    }

    tracing::debug!(
        path = %path.display(),
        name = %definition.name,
        raters = definition.raters.len(),
        "loaded scorecard"
    );

    Ok(Scorecard::new(definition, fallback))
}

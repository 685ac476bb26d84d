use super::config::Configuration;

/// Validate rating bounds at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_configuration(config: &Configuration) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let fields = [
        ("min_rating", config.min_rating),
        ("max_rating", config.max_rating),
        ("min_weighting", config.min_weighting),
        ("max_weighting", config.max_weighting),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            errors.push(format!("{}: must be a finite number, got {}", name, value));
        }
    }

    if config.min_rating > config.max_rating {
        errors.push(format!(
            "min_rating: {} is greater than max_rating {}",
            config.min_rating, config.max_rating
        ));
    }

    if config.min_weighting > config.max_weighting {
        errors.push(format!(
            "min_weighting: {} is greater than max_weighting {}",
            config.min_weighting, config.max_weighting
        ));
    }

    if config.min_weighting < 0.0 {
        errors.push("min_weighting: must be non-negative".to_string());
    }

    if config.max_weighting <= 0.0 {
        errors.push("max_weighting: must be positive".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

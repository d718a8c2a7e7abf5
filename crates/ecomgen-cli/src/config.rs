use std::path::Path;

use ecomgen_generate::GenerateOptions;

use crate::CliError;

/// Load generation options from an optional TOML file.
///
/// Keys mirror `GenerateOptions`; missing keys keep their defaults and
/// unknown keys are rejected. Dates are quoted strings (`"2025-01-31"`).
pub fn load_options(path: Option<&Path>) -> Result<GenerateOptions, CliError> {
    let Some(path) = path else {
        return Ok(GenerateOptions::default());
    };
    let content = std::fs::read_to_string(path)?;
    parse_options(&content)
}

pub fn parse_options(content: &str) -> Result<GenerateOptions, CliError> {
    let options: GenerateOptions = toml::from_str(content)?;
    if options.locales.is_empty() {
        return Err(CliError::InvalidConfig(
            "locales must not be empty".to_string(),
        ));
    }
    Ok(options)
}

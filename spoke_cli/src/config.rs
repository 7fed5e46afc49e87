//! Loading calculator settings from TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use spoke_core::CalculatorSettings;

/// Read settings from `path`, or use the defaults when no file is given.
///
/// Keys missing from the file keep their default values.
pub fn load_settings(path: Option<&Path>) -> Result<CalculatorSettings> {
    let settings = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            parse_settings(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => CalculatorSettings::default(),
    };
    settings.validate()?;
    tracing::debug!(?settings, "calculator settings loaded");
    Ok(settings)
}

fn parse_settings(text: &str) -> Result<CalculatorSettings> {
    Ok(toml::from_str(text)?)
}

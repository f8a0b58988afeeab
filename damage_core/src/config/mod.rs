//! Configuration loading from TOML and JSON files

mod constants;
mod scenario;
mod skills;

pub use constants::{CalculatorDefaults, SkillDefaults, UnitDefaults};
pub use scenario::{
    load_scenario, parse_scenario_json, parse_scenario_toml, ResolvedScenario, Scenario,
};
pub use skills::{default_skill_inputs, default_skills, load_skill_configs, parse_skill_configs};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Parse and validate calculator defaults from a TOML string
pub fn parse_calculator_defaults(content: &str) -> Result<CalculatorDefaults, ConfigError> {
    let defaults: CalculatorDefaults = parse_toml(content)?;
    defaults.validate()?;
    Ok(defaults)
}

/// Load and validate calculator defaults from a TOML file
pub fn load_calculator_defaults(path: &Path) -> Result<CalculatorDefaults, ConfigError> {
    let defaults: CalculatorDefaults = load_toml(path)?;
    defaults.validate()?;
    Ok(defaults)
}

/// The defaults shipped with the crate
pub fn default_calculator_defaults() -> CalculatorDefaults {
    let toml = include_str!("../../config/defaults.toml");
    parse_calculator_defaults(toml).unwrap_or_else(|err| {
        tracing::warn!(%err, "built-in defaults unusable, using compiled values");
        CalculatorDefaults::default()
    })
}

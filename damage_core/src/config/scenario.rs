//! Scenario files - one attacker, one defender, one skill, one formula

use super::{CalculatorDefaults, ConfigError};
use crate::damage::{calculate_breakdown, DamageBreakdown, Skill};
use crate::input::{InputWarning, SkillInput, UnitInput, Validator};
use crate::types::FormulaType;
use crate::unit::Unit;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A complete calculator setup as written in a TOML or JSON file
///
/// Values are in input form (percentages 0-100, optional fields) and still
/// have to pass through [`Scenario::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Overrides for the built-in defaults
    pub defaults: Option<CalculatorDefaults>,
    pub attacker: UnitInput,
    pub defender: UnitInput,
    pub skill: SkillInput,
    pub formula: FormulaType,
}

/// A scenario after validation, ready to calculate
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedScenario {
    pub attacker: Unit,
    pub defender: Unit,
    pub skill: Skill,
    pub formula: FormulaType,
    pub warnings: Vec<InputWarning>,
}

impl Scenario {
    /// Defaults in effect: the scenario's own, or the built-in ones
    pub fn effective_defaults(&self) -> CalculatorDefaults {
        self.defaults
            .clone()
            .unwrap_or_else(super::default_calculator_defaults)
    }

    /// Run every input through the validation boundary
    pub fn resolve(&self) -> ResolvedScenario {
        let defaults = self.effective_defaults();
        let mut validator = Validator::new();

        let attacker = self.attacker.resolve(&defaults.attacker, &mut validator);
        let defender = self.defender.resolve(&defaults.defender, &mut validator);
        let skill = self.skill.resolve(&defaults.skill, &mut validator);

        ResolvedScenario {
            attacker,
            defender,
            skill,
            formula: self.formula,
            warnings: validator.into_warnings(),
        }
    }
}

impl ResolvedScenario {
    pub fn calculate(&self) -> DamageBreakdown {
        calculate_breakdown(&self.attacker, &self.defender, &self.skill, self.formula)
    }
}

fn checked(scenario: Scenario) -> Result<Scenario, ConfigError> {
    if let Some(defaults) = &scenario.defaults {
        defaults.validate()?;
    }
    Ok(scenario)
}

/// Parse a scenario from TOML
pub fn parse_scenario_toml(content: &str) -> Result<Scenario, ConfigError> {
    checked(super::parse_toml(content)?)
}

/// Parse a scenario from JSON
pub fn parse_scenario_json(content: &str) -> Result<Scenario, ConfigError> {
    checked(serde_json::from_str(content)?)
}

/// Load a scenario, choosing the parser by file extension
pub fn load_scenario(path: &Path) -> Result<Scenario, ConfigError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let scenario = match extension.as_str() {
        "toml" => {
            let content = fs::read_to_string(path)?;
            parse_scenario_toml(&content)?
        }
        "json" => {
            let content = fs::read_to_string(path)?;
            parse_scenario_json(&content)?
        }
        other => {
            return Err(ConfigError::UnsupportedFormat(format!(
                "'{}' (expected .toml or .json): {}",
                other,
                path.display()
            )))
        }
    };

    tracing::info!(path = %path.display(), "loaded scenario");
    Ok(scenario)
}

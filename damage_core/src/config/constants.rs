//! Calculator defaults configuration
//!
//! The values a front end falls back to when a field is left empty or
//! cannot be parsed.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Defaults for every input the calculator asks for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorDefaults {
    #[serde(default = "UnitDefaults::attacker")]
    pub attacker: UnitDefaults,
    #[serde(default = "UnitDefaults::defender")]
    pub defender: UnitDefaults,
    #[serde(default)]
    pub skill: SkillDefaults,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        CalculatorDefaults {
            attacker: UnitDefaults::attacker(),
            defender: UnitDefaults::defender(),
            skill: SkillDefaults::default(),
        }
    }
}

impl CalculatorDefaults {
    /// Reject defaults that the validation boundary would itself have to repair
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (role, unit) in [("attacker", &self.attacker), ("defender", &self.defender)] {
            let stats = [
                ("attack", unit.attack),
                ("health", unit.health),
                ("defense", unit.defense),
                ("speed", unit.speed),
            ];
            for (field, value) in stats {
                if !(value.is_finite() && value >= 0.0) {
                    return Err(ConfigError::ValidationError(format!(
                        "{}.{} must be finite and non-negative, got {}",
                        role, field, value
                    )));
                }
            }
            if !(0.0..=100.0).contains(&unit.crit_damage_percent) {
                return Err(ConfigError::ValidationError(format!(
                    "{}.crit_damage_percent must be within 0-100, got {}",
                    role, unit.crit_damage_percent
                )));
            }
        }

        let skill = &self.skill;
        let coefficients = [
            ("multiplier", skill.multiplier),
            ("atk_coef", skill.atk_coef),
            ("def_coef", skill.def_coef),
            ("hp_coef", skill.hp_coef),
            ("a_coef", skill.a_coef),
            ("d_coef", skill.d_coef),
            ("spd_add", skill.spd_add),
        ];
        for (field, value) in coefficients {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "skill.{} must be finite and non-negative, got {}",
                    field, value
                )));
            }
        }
        if !(skill.spd_div.is_finite() && skill.spd_div > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "skill.spd_div must be finite and positive, got {}",
                skill.spd_div
            )));
        }

        Ok(())
    }
}

/// Per-role unit defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefaults {
    pub name: String,
    #[serde(default)]
    pub attack: f64,
    #[serde(default)]
    pub health: f64,
    #[serde(default)]
    pub defense: f64,
    #[serde(default)]
    pub speed: f64,
    /// Crit damage as a percentage (50 = crits deal 150%)
    #[serde(default = "default_crit_damage_percent")]
    pub crit_damage_percent: f64,
}

impl UnitDefaults {
    /// ATK 1000, HP 4000, DEF 500, SPD 100
    pub fn attacker() -> Self {
        UnitDefaults {
            name: "Attacker".to_string(),
            attack: 1000.0,
            health: 4000.0,
            defense: 500.0,
            speed: 100.0,
            crit_damage_percent: default_crit_damage_percent(),
        }
    }

    /// HP 8000, DEF 800
    pub fn defender() -> Self {
        UnitDefaults {
            name: "Defender".to_string(),
            attack: 0.0,
            health: 8000.0,
            defense: 800.0,
            speed: 0.0,
            crit_damage_percent: default_crit_damage_percent(),
        }
    }
}

fn default_crit_damage_percent() -> f64 {
    50.0
}

/// Skill defaults, including the default coefficient for every scaling mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDefaults {
    #[serde(default = "default_skill_name")]
    pub name: String,
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    #[serde(default = "default_atk_coef")]
    pub atk_coef: f64,
    #[serde(default = "default_def_coef")]
    pub def_coef: f64,
    #[serde(default = "default_hp_coef")]
    pub hp_coef: f64,
    #[serde(default = "default_a_coef")]
    pub a_coef: f64,
    #[serde(default = "default_d_coef")]
    pub d_coef: f64,
    /// The "+60" in `(SPD + 60) / 620`
    #[serde(default = "default_spd_add")]
    pub spd_add: f64,
    /// The "/620" in `(SPD + 60) / 620`
    #[serde(default = "default_spd_div")]
    pub spd_div: f64,
}

impl Default for SkillDefaults {
    fn default() -> Self {
        SkillDefaults {
            name: default_skill_name(),
            multiplier: default_multiplier(),
            atk_coef: default_atk_coef(),
            def_coef: default_def_coef(),
            hp_coef: default_hp_coef(),
            a_coef: default_a_coef(),
            d_coef: default_d_coef(),
            spd_add: default_spd_add(),
            spd_div: default_spd_div(),
        }
    }
}

fn default_skill_name() -> String {
    "Basic".to_string()
}
fn default_multiplier() -> f64 {
    1.0
}
fn default_atk_coef() -> f64 {
    1.7
}
fn default_def_coef() -> f64 {
    3.6
}
fn default_hp_coef() -> f64 {
    0.19
}
fn default_a_coef() -> f64 {
    1.7
}
fn default_d_coef() -> f64 {
    2.9
}
fn default_spd_add() -> f64 {
    60.0
}
fn default_spd_div() -> f64 {
    620.0
}

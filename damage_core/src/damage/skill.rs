//! Skill - one damage-dealing ability and its scaling rule

use crate::config::SkillDefaults;
use crate::types::ScalingMode;
use serde::{Deserialize, Serialize};

/// Which stat(s) a skill scales from, with exactly that mode's coefficients
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Scaling {
    /// `coef * ATK`
    AtkCoef { coef: f64 },
    /// `coef * target DEF`
    DefCoef { coef: f64 },
    /// `coef * MAX_HP`
    HpCoef { coef: f64 },
    /// `a_coef * ATK + d_coef * target DEF`
    AtkDefCombo { a_coef: f64, d_coef: f64 },
    /// `ATK * (SPD + spd_add) / spd_div`
    SpdWithAtk { spd_add: f64, spd_div: f64 },
    /// `target DEF * (SPD + spd_add) / spd_div`
    SpdWithDef { spd_add: f64, spd_div: f64 },
    /// `MAX_HP * (SPD + spd_add) / spd_div`
    SpdWithHp { spd_add: f64, spd_div: f64 },
    /// Plain ATK
    #[default]
    NormalAtk,
}

impl Scaling {
    pub fn mode(&self) -> ScalingMode {
        match self {
            Scaling::AtkCoef { .. } => ScalingMode::AtkCoef,
            Scaling::DefCoef { .. } => ScalingMode::DefCoef,
            Scaling::HpCoef { .. } => ScalingMode::HpCoef,
            Scaling::AtkDefCombo { .. } => ScalingMode::AtkDefCombo,
            Scaling::SpdWithAtk { .. } => ScalingMode::SpdWithAtk,
            Scaling::SpdWithDef { .. } => ScalingMode::SpdWithDef,
            Scaling::SpdWithHp { .. } => ScalingMode::SpdWithHp,
            Scaling::NormalAtk => ScalingMode::NormalAtk,
        }
    }

    /// Build a mode with its default coefficients
    pub fn with_defaults(mode: ScalingMode, defaults: &SkillDefaults) -> Self {
        match mode {
            ScalingMode::AtkCoef => Scaling::AtkCoef {
                coef: defaults.atk_coef,
            },
            ScalingMode::DefCoef => Scaling::DefCoef {
                coef: defaults.def_coef,
            },
            ScalingMode::HpCoef => Scaling::HpCoef {
                coef: defaults.hp_coef,
            },
            ScalingMode::AtkDefCombo => Scaling::AtkDefCombo {
                a_coef: defaults.a_coef,
                d_coef: defaults.d_coef,
            },
            ScalingMode::SpdWithAtk => Scaling::SpdWithAtk {
                spd_add: defaults.spd_add,
                spd_div: defaults.spd_div,
            },
            ScalingMode::SpdWithDef => Scaling::SpdWithDef {
                spd_add: defaults.spd_add,
                spd_div: defaults.spd_div,
            },
            ScalingMode::SpdWithHp => Scaling::SpdWithHp {
                spd_add: defaults.spd_add,
                spd_div: defaults.spd_div,
            },
            ScalingMode::NormalAtk => Scaling::NormalAtk,
        }
    }

    /// The formula with this skill's actual coefficients filled in
    pub fn describe(&self) -> String {
        match self {
            Scaling::AtkCoef { coef } => format!("{} * ATK", coef),
            Scaling::DefCoef { coef } => format!("{} * target DEF", coef),
            Scaling::HpCoef { coef } => format!("{} * MAX HP", coef),
            Scaling::AtkDefCombo { a_coef, d_coef } => {
                format!("{} * ATK  +  {} * target DEF", a_coef, d_coef)
            }
            Scaling::SpdWithAtk { spd_add, spd_div } => {
                format!("ATK * (SPD + {}) / {}", spd_add, spd_div)
            }
            Scaling::SpdWithDef { spd_add, spd_div } => {
                format!("target DEF * (SPD + {}) / {}", spd_add, spd_div)
            }
            Scaling::SpdWithHp { spd_add, spd_div } => {
                format!("MAX HP * (SPD + {}) / {}", spd_add, spd_div)
            }
            Scaling::NormalAtk => "ATK * multiplier".to_string(),
        }
    }
}

/// A damage-dealing ability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Display name
    pub name: String,
    #[serde(flatten)]
    pub scaling: Scaling,
    /// Applied to the scaled value, before flat damage
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    /// Added per hit
    #[serde(default)]
    pub flat_damage: f64,
    /// Number of hits, at least 1
    #[serde(default = "default_hits")]
    pub hits: u32,
    /// Skip the defense stage entirely
    #[serde(default)]
    pub ignore_defense: bool,
}

fn default_multiplier() -> f64 {
    1.0
}

fn default_hits() -> u32 {
    1
}

impl Default for Skill {
    fn default() -> Self {
        Skill::basic()
    }
}

impl Skill {
    pub fn new(name: impl Into<String>, multiplier: f64, scaling: Scaling) -> Self {
        Skill {
            name: name.into(),
            scaling,
            multiplier,
            flat_damage: 0.0,
            hits: 1,
            ignore_defense: false,
        }
    }

    /// Single-hit plain attack
    pub fn basic() -> Self {
        Skill::new("Basic", 1.0, Scaling::NormalAtk)
    }

    pub fn mode(&self) -> ScalingMode {
        self.scaling.mode()
    }

    pub fn is_multi_hit(&self) -> bool {
        self.hits > 1
    }
}

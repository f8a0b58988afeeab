//! Core enumerations shared by the stat model and the damage engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Elemental affinity of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    #[default]
    None,
    Fire,
    Wind,
    Water,
    Light,
    Dark,
}

impl Element {
    /// Get all elements, `None` first
    pub fn all() -> &'static [Element] {
        &[
            Element::None,
            Element::Fire,
            Element::Wind,
            Element::Water,
            Element::Light,
            Element::Dark,
        ]
    }

    /// Menu numbering: 1=Fire, 2=Wind, 3=Water, 4=Light, 5=Dark, anything else None
    pub fn from_menu_index(index: i64) -> Self {
        match index {
            1 => Element::Fire,
            2 => Element::Wind,
            3 => Element::Water,
            4 => Element::Light,
            5 => Element::Dark,
            _ => Element::None,
        }
    }

    /// Next element in menu order (wraps)
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|e| *e == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous element in menu order (wraps)
    pub fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|e| *e == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Element::None => "NONE",
            Element::Fire => "FIRE",
            Element::Wind => "WIND",
            Element::Water => "WATER",
            Element::Light => "LIGHT",
            Element::Dark => "DARK",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::all()
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("element", s))
    }
}

/// How the attacker's element stands against the defender's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRelation {
    #[default]
    Neutral,
    Stronger,
    Weaker,
}

impl ElementRelation {
    pub fn name(&self) -> &'static str {
        match self {
            ElementRelation::Neutral => "NEUTRAL",
            ElementRelation::Stronger => "STRONGER",
            ElementRelation::Weaker => "WEAKER",
        }
    }

    /// Human-readable description of what the relation does to a hit
    pub fn effect_description(&self) -> &'static [&'static str] {
        match self {
            ElementRelation::Stronger => {
                &["Attacker is stronger -> +5% damage, +15% crit rate"]
            }
            ElementRelation::Weaker => &[
                "Attacker is weaker -> always -15% crit rate",
                "50% chance glancing: -30% dmg, plus additional -16% when weaker (total x0.588)",
                "50% chance non-glancing: normal/crit hits are reduced by 5% (x0.95)",
            ],
            ElementRelation::Neutral => &["Neutral -> no bonus/penalty"],
        }
    }
}

impl fmt::Display for ElementRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which defense formula converts effective DEF into a damage factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaType {
    /// `100 / (100 + DEF)`
    #[default]
    Generic,
    /// `ATK / (ATK + DEF)`
    #[serde(alias = "summoner_war_like")]
    Ratio,
}

impl FormulaType {
    /// Menu numbering: 2 = Ratio, anything else Generic
    pub fn from_menu_index(index: i64) -> Self {
        if index == 2 {
            FormulaType::Ratio
        } else {
            FormulaType::Generic
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            FormulaType::Generic => FormulaType::Ratio,
            FormulaType::Ratio => FormulaType::Generic,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormulaType::Generic => "GENERIC",
            FormulaType::Ratio => "RATIO",
        }
    }
}

impl fmt::Display for FormulaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormulaType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" => Ok(FormulaType::Generic),
            "ratio" | "summoner_war_like" => Ok(FormulaType::Ratio),
            _ => Err(UnknownVariant::new("formula", s)),
        }
    }
}

/// Tag for the stat(s) a skill's damage derives from
///
/// The coefficients for each mode live on [`crate::damage::Scaling`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingMode {
    AtkCoef,
    DefCoef,
    HpCoef,
    AtkDefCombo,
    SpdWithAtk,
    SpdWithDef,
    SpdWithHp,
    #[default]
    NormalAtk,
}

impl ScalingMode {
    pub fn all() -> &'static [ScalingMode] {
        &[
            ScalingMode::AtkCoef,
            ScalingMode::DefCoef,
            ScalingMode::HpCoef,
            ScalingMode::AtkDefCombo,
            ScalingMode::SpdWithAtk,
            ScalingMode::SpdWithDef,
            ScalingMode::SpdWithHp,
            ScalingMode::NormalAtk,
        ]
    }

    /// Menu numbering 1..=7 in declaration order, anything else NormalAtk
    pub fn from_menu_index(index: i64) -> Self {
        match index {
            1 => ScalingMode::AtkCoef,
            2 => ScalingMode::DefCoef,
            3 => ScalingMode::HpCoef,
            4 => ScalingMode::AtkDefCombo,
            5 => ScalingMode::SpdWithAtk,
            6 => ScalingMode::SpdWithDef,
            7 => ScalingMode::SpdWithHp,
            _ => ScalingMode::NormalAtk,
        }
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|m| *m == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|m| *m == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }

    /// Whether this mode reads `spd_add`/`spd_div`
    pub fn is_speed_paired(&self) -> bool {
        matches!(
            self,
            ScalingMode::SpdWithAtk | ScalingMode::SpdWithDef | ScalingMode::SpdWithHp
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScalingMode::AtkCoef => "ATK_COEF",
            ScalingMode::DefCoef => "DEF_COEF",
            ScalingMode::HpCoef => "HP_COEF",
            ScalingMode::AtkDefCombo => "ATK_DEF_COMBO",
            ScalingMode::SpdWithAtk => "SPD_WITH_ATK",
            ScalingMode::SpdWithDef => "SPD_WITH_DEF",
            ScalingMode::SpdWithHp => "SPD_WITH_HP",
            ScalingMode::NormalAtk => "NORMAL_ATK",
        }
    }

    /// Generic shape of the mode's formula, for menus
    pub fn formula_description(&self) -> &'static str {
        match self {
            ScalingMode::AtkCoef => "coef * ATK",
            ScalingMode::DefCoef => "coef * target DEF",
            ScalingMode::HpCoef => "coef * MAX_HP",
            ScalingMode::AtkDefCombo => "aCoef * ATK + dCoef * target DEF",
            ScalingMode::SpdWithAtk => "ATK * (SPD + add) / div",
            ScalingMode::SpdWithDef => "target DEF * (SPD + add) / div",
            ScalingMode::SpdWithHp => "MAX_HP * (SPD + add) / div",
            ScalingMode::NormalAtk => "ATK * multiplier",
        }
    }
}

impl fmt::Display for ScalingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalingMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ScalingMode::all()
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownVariant::new("scaling mode", s))
    }
}

/// A name that did not match any variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }
}

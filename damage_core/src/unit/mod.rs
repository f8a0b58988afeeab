//! Unit - one combat participant (attacker or defender)

mod stat_value;

pub use stat_value::StatValue;

use crate::types::Element;
use serde::{Deserialize, Serialize};

/// Attacker-side modifiers
///
/// Every field except `flat_attack` is a fraction in [0, 1]
/// (0.25 = 25%). Conversion from percentages happens in [`crate::input`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffensiveModifiers {
    /// Attack buff (multiplies total ATK by `1 + attack_buff`)
    #[serde(default)]
    pub attack_buff: f64,
    /// Flat ATK added after the buff
    #[serde(default)]
    pub flat_attack: f64,
    #[serde(default)]
    pub crit_rate: f64,
    /// Extra damage on crit (0.5 = crits deal 150%)
    #[serde(default = "default_crit_damage")]
    pub crit_damage: f64,
    /// Reduces target DEF by this fraction
    #[serde(default)]
    pub defense_break: f64,
    /// Ignores this fraction of the (already broken) target DEF
    #[serde(default)]
    pub ignore_defense: f64,
    #[serde(default)]
    pub damage_amplify: f64,
}

fn default_crit_damage() -> f64 {
    0.5
}

impl Default for OffensiveModifiers {
    fn default() -> Self {
        OffensiveModifiers {
            attack_buff: 0.0,
            flat_attack: 0.0,
            crit_rate: 0.0,
            crit_damage: default_crit_damage(),
            defense_break: 0.0,
            ignore_defense: 0.0,
            damage_amplify: 0.0,
        }
    }
}

/// Defender-side modifiers (fractions in [0, 1])
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefensiveModifiers {
    #[serde(default)]
    pub damage_reduction: f64,
}

/// A combat participant
///
/// A unit has no identity beyond one calculation: build it, hand it to
/// [`crate::damage::calculate_damage`], throw it away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Display name
    pub name: String,
    #[serde(default)]
    pub element: Element,

    // === Stats ===
    #[serde(default)]
    pub attack: StatValue,
    #[serde(default)]
    pub health: StatValue,
    #[serde(default)]
    pub defense: StatValue,
    #[serde(default)]
    pub speed: StatValue,

    // === Modifiers ===
    #[serde(default)]
    pub offense: OffensiveModifiers,
    #[serde(default)]
    pub defense_mods: DefensiveModifiers,
}

impl Unit {
    /// Create a unit with zeroed stats and default modifiers
    pub fn new(name: impl Into<String>) -> Self {
        Unit {
            name: name.into(),
            element: Element::None,
            attack: StatValue::default(),
            health: StatValue::default(),
            defense: StatValue::default(),
            speed: StatValue::default(),
            offense: OffensiveModifiers::default(),
            defense_mods: DefensiveModifiers::default(),
        }
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    pub fn total_attack(&self) -> f64 {
        self.attack.total()
    }

    pub fn total_health(&self) -> f64 {
        self.health.total()
    }

    pub fn total_defense(&self) -> f64 {
        self.defense.total()
    }

    pub fn total_speed(&self) -> f64 {
        self.speed.total()
    }
}

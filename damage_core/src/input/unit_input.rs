//! UnitInput - raw, percentage-form description of a unit

use super::Validator;
use crate::config::UnitDefaults;
use crate::types::Element;
use crate::unit::{DefensiveModifiers, OffensiveModifiers, StatValue, Unit};
use serde::{Deserialize, Serialize};

/// A unit as a user or scenario file describes it
///
/// Every field is optional; a missing field takes the role default.
/// Percent fields are 0-100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitInput {
    pub name: Option<String>,
    pub element: Option<Element>,

    // === Stats ===
    pub base_attack: Option<f64>,
    pub bonus_attack: Option<f64>,
    pub base_health: Option<f64>,
    pub bonus_health: Option<f64>,
    pub base_defense: Option<f64>,
    pub bonus_defense: Option<f64>,
    pub base_speed: Option<f64>,
    pub bonus_speed: Option<f64>,

    // === Offense ===
    pub attack_buff_percent: Option<f64>,
    pub flat_attack: Option<f64>,
    pub crit_rate_percent: Option<f64>,
    pub crit_damage_percent: Option<f64>,
    pub defense_break_percent: Option<f64>,
    pub ignore_defense_percent: Option<f64>,
    pub damage_amplify_percent: Option<f64>,

    // === Defense ===
    pub damage_reduction_percent: Option<f64>,
}

fn stat(v: &mut Validator, base: Option<f64>, bonus: Option<f64>, default: f64, label: &str) -> StatValue {
    StatValue::new(
        v.non_negative(base, default, &format!("Base {}", label)),
        v.non_negative(bonus, 0.0, &format!("Bonus {}", label)),
    )
}

impl UnitInput {
    /// Apply defaults, clamp, and convert percentages to fractions
    pub fn resolve(&self, defaults: &UnitDefaults, v: &mut Validator) -> Unit {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(&defaults.name)
            .to_string();

        let attack = stat(v, self.base_attack, self.bonus_attack, defaults.attack, "ATK");
        let health = stat(v, self.base_health, self.bonus_health, defaults.health, "HP");
        let defense = stat(v, self.base_defense, self.bonus_defense, defaults.defense, "DEF");
        let speed = stat(v, self.base_speed, self.bonus_speed, defaults.speed, "SPD");

        let offense = OffensiveModifiers {
            attack_buff: v.percentage(self.attack_buff_percent, 0.0, "Attack buff"),
            flat_attack: v.non_negative(self.flat_attack, 0.0, "Flat attack"),
            crit_rate: v.percentage(self.crit_rate_percent, 0.0, "Crit rate"),
            crit_damage: v.percentage(
                self.crit_damage_percent,
                defaults.crit_damage_percent,
                "Crit damage",
            ),
            defense_break: v.percentage(self.defense_break_percent, 0.0, "Defense break"),
            ignore_defense: v.percentage(self.ignore_defense_percent, 0.0, "Ignore defense"),
            damage_amplify: v.percentage(self.damage_amplify_percent, 0.0, "Damage amplify"),
        };

        let defense_mods = DefensiveModifiers {
            damage_reduction: v.percentage(self.damage_reduction_percent, 0.0, "Damage reduction"),
        };

        Unit {
            name,
            element: self.element.unwrap_or_default(),
            attack,
            health,
            defense,
            speed,
            offense,
            defense_mods,
        }
    }
}

//! DamageResult - the {min, max, average} triple and the pipeline breakdown

use crate::element::ElementalModifiers;
use crate::types::ElementRelation;
use serde::{Deserialize, Serialize};

/// Expected damage totals for one skill use, summed across hits
///
/// `min_damage` is the expected total when no hit crits, `max_damage` when
/// every hit crits. Both are already averaged over glancing hits, so they
/// are not worst/best-case rolls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    /// Expected total with no crits
    pub min_damage: f64,
    /// Expected total with every hit critting
    pub max_damage: f64,
    /// Expected total at the adjusted crit rate
    pub avg_damage: f64,
}

impl DamageResult {
    pub fn new(min_damage: f64, max_damage: f64, avg_damage: f64) -> Self {
        DamageResult {
            min_damage,
            max_damage,
            avg_damage,
        }
    }

    /// `[min, max, avg]`
    pub fn as_array(&self) -> [f64; 3] {
        [self.min_damage, self.max_damage, self.avg_damage]
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "{:.2} min / {:.2} avg / {:.2} max",
            self.min_damage, self.avg_damage, self.max_damage
        )
    }
}

/// Every intermediate value of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    // === Scaling ===
    /// Total ATK after buff and flat attack
    pub effective_attack: f64,
    /// Scaling-mode output, per hit
    pub base_scaled_per_hit: f64,
    /// `base_scaled * multiplier + flat_damage`, per hit
    pub pre_defense_per_hit: f64,

    // === Elemental ===
    pub relation: ElementRelation,
    pub elemental: ElementalModifiers,

    // === Crit ===
    /// Crit rate after the elemental delta, clamped to [0, 1]
    pub adjusted_crit_rate: f64,
    pub crit_multiplier: f64,
    /// `1 + adjusted_crit_rate * (crit_multiplier - 1)`
    pub avg_crit_factor: f64,

    /// Per-hit damage after amplify, reduction and elemental damage
    pub per_hit_base: f64,

    // === Defense ===
    /// Target DEF after break and ignore (reported even when the skill ignores DEF)
    pub effective_defense: f64,
    /// Factor applied to every hit; 1 when defense is ignored
    pub defense_factor: f64,
    pub defense_ignored: bool,

    pub hits: u32,
    pub result: DamageResult,
}

impl DamageBreakdown {
    /// Pre-defense, non-crit damage across all hits
    pub fn pre_defense_total(&self) -> f64 {
        self.pre_defense_per_hit * self.hits as f64
    }

    /// Percentage of damage the defense stage removed
    pub fn defense_reduction_percent(&self) -> f64 {
        crate::defense::reduction_percent(self.defense_factor)
    }
}

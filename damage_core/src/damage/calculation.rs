//! Damage calculation - turning two units and a skill into expected damage
//!
//! Pipeline, per hit:
//! 1. effective ATK = total ATK * (1 + buff) + flat
//! 2. base scaled value from the skill's scaling mode
//! 3. `* multiplier + flat_damage`
//! 4. `* (1 + amplify) * (1 - reduction) * elemental damage`
//! 5. split into non-glancing and glancing tracks
//! 6. crit: full-crit variant and expected-crit variant of each track
//! 7. defense factor on every variant (skipped when the skill ignores DEF)
//! 8. blend the tracks by glancing probability, multiply by hits
//! 9. floor at 0
//!
//! Crit and glancing are both integrated analytically, so the result has no
//! randomness at all.

use super::{DamageBreakdown, DamageResult, Scaling, Skill};
use crate::defense::{defense_factor, effective_defense};
use crate::element::{self, ElementalModifiers};
use crate::types::FormulaType;
use crate::unit::Unit;

/// Calculate `{min, max, avg}` damage for one use of `skill`
pub fn calculate_damage(
    attacker: &Unit,
    defender: &Unit,
    skill: &Skill,
    formula: FormulaType,
) -> DamageResult {
    calculate_breakdown(attacker, defender, skill, formula).result
}

/// Calculate damage and keep every intermediate value
pub fn calculate_breakdown(
    attacker: &Unit,
    defender: &Unit,
    skill: &Skill,
    formula: FormulaType,
) -> DamageBreakdown {
    // Steps 1-3: scaling
    let effective_attack = effective_attack(attacker);
    let base_scaled = base_scaled_per_hit(attacker, defender, &skill.scaling, effective_attack);
    let pre_defense = base_scaled * skill.multiplier + skill.flat_damage;

    // Step 4: global and elemental multipliers
    let relation = element::relation(attacker.element, defender.element);
    let elemental = ElementalModifiers::for_relation(relation);

    let net_damage_mul =
        (1.0 + attacker.offense.damage_amplify) * (1.0 - defender.defense_mods.damage_reduction);
    let per_hit_base = pre_defense * net_damage_mul * elemental.damage_mul;

    // Steps 5-6: glancing tracks and crit variants
    let adjusted_crit_rate = (attacker.offense.crit_rate + elemental.crit_delta).clamp(0.0, 1.0);
    let crit_multiplier = 1.0 + attacker.offense.crit_damage;
    let avg_crit_factor = 1.0 + adjusted_crit_rate * (crit_multiplier - 1.0);

    let no_crit = GlanceSplit {
        non_glance: per_hit_base * elemental.non_glance_mul,
        glance: per_hit_base * elemental.glance_mul,
    };
    let crit = no_crit.scaled(crit_multiplier);
    let avg = no_crit.scaled(avg_crit_factor);

    // Step 7: defense
    let effective_def = effective_defense(
        defender.total_defense(),
        attacker.offense.defense_break,
        attacker.offense.ignore_defense,
    );
    let factor = if skill.ignore_defense {
        1.0
    } else {
        defense_factor(effective_attack, effective_def, formula)
    };

    // Steps 8-9: glancing blend, hits, floor
    let hits = skill.hits as f64;
    let total = |split: GlanceSplit| -> f64 {
        let after_defense = split.scaled(factor);
        (after_defense.blend(elemental.glancing_prob) * hits).max(0.0)
    };

    let result = DamageResult::new(total(no_crit), total(crit), total(avg));

    tracing::debug!(
        skill = %skill.name,
        mode = %skill.mode(),
        %formula,
        %relation,
        min = result.min_damage,
        max = result.max_damage,
        avg = result.avg_damage,
        "damage calculated"
    );

    DamageBreakdown {
        effective_attack,
        base_scaled_per_hit: base_scaled,
        pre_defense_per_hit: pre_defense,
        relation,
        elemental,
        adjusted_crit_rate,
        crit_multiplier,
        avg_crit_factor,
        per_hit_base,
        effective_defense: effective_def,
        defense_factor: factor,
        defense_ignored: skill.ignore_defense,
        hits: skill.hits,
        result,
    }
}

/// Total ATK with the attack buff and flat attack applied
pub fn effective_attack(attacker: &Unit) -> f64 {
    attacker.total_attack() * (1.0 + attacker.offense.attack_buff) + attacker.offense.flat_attack
}

/// The scaling mode's raw per-hit value, before multiplier and flat damage
pub fn base_scaled_per_hit(
    attacker: &Unit,
    defender: &Unit,
    scaling: &Scaling,
    effective_attack: f64,
) -> f64 {
    let speed = attacker.total_speed();
    match *scaling {
        Scaling::AtkCoef { coef } => coef * effective_attack,
        Scaling::DefCoef { coef } => coef * defender.total_defense(),
        Scaling::HpCoef { coef } => coef * attacker.total_health(),
        Scaling::AtkDefCombo { a_coef, d_coef } => {
            a_coef * effective_attack + d_coef * defender.total_defense()
        }
        Scaling::SpdWithAtk { spd_add, spd_div } => {
            effective_attack * ((speed + spd_add) / spd_div)
        }
        Scaling::SpdWithDef { spd_add, spd_div } => {
            defender.total_defense() * ((speed + spd_add) / spd_div)
        }
        Scaling::SpdWithHp { spd_add, spd_div } => {
            attacker.total_health() * ((speed + spd_add) / spd_div)
        }
        Scaling::NormalAtk => effective_attack,
    }
}

/// Per-hit damage before crit, elemental and defense: `scaled * multiplier + flat`
pub fn pre_defense_per_hit(attacker: &Unit, defender: &Unit, skill: &Skill) -> f64 {
    let atk = effective_attack(attacker);
    base_scaled_per_hit(attacker, defender, &skill.scaling, atk) * skill.multiplier
        + skill.flat_damage
}

/// One per-hit value on the non-glancing and glancing tracks
#[derive(Debug, Clone, Copy)]
struct GlanceSplit {
    non_glance: f64,
    glance: f64,
}

impl GlanceSplit {
    fn scaled(self, factor: f64) -> Self {
        GlanceSplit {
            non_glance: self.non_glance * factor,
            glance: self.glance * factor,
        }
    }

    /// Expected value over the glancing coin flip
    fn blend(self, glancing_prob: f64) -> f64 {
        (1.0 - glancing_prob) * self.non_glance + glancing_prob * self.glance
    }
}

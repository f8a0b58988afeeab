//! Defense system - effective DEF and the two defense formulas

mod generic;
mod ratio;

pub use generic::generic_defense_factor;
pub use ratio::ratio_defense_factor;

use crate::types::FormulaType;

/// Defense calculation constants
pub mod constants {
    /// Divisor of the generic formula: `D / (D + DEF)`
    pub const GENERIC_DEF_DIVISOR: f64 = 100.0;

    /// Keeps the ratio formula's denominator away from zero
    pub const EPSILON: f64 = 1e-9;
}

/// Target DEF after the attacker's defense break and ignore-defense
///
/// Break applies first, ignore applies to what is left. Never negative.
pub fn effective_defense(total_def: f64, defense_break: f64, ignore_defense: f64) -> f64 {
    let broken = total_def * (1.0 - defense_break);
    (broken * (1.0 - ignore_defense)).max(0.0)
}

/// Damage factor for the chosen formula
pub fn defense_factor(effective_attack: f64, effective_def: f64, formula: FormulaType) -> f64 {
    match formula {
        FormulaType::Generic => generic_defense_factor(effective_def),
        FormulaType::Ratio => ratio_defense_factor(effective_attack, effective_def),
    }
}

/// Percentage of damage removed by a defense factor
pub fn reduction_percent(factor: f64) -> f64 {
    ((1.0 - factor) * 100.0).clamp(0.0, 100.0)
}

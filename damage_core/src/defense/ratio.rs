//! Ratio defense - attack versus defense
//!
//! `factor = ATK / (ATK + DEF)`
//!
//! The attacker's effective ATK competes with the defender's effective DEF,
//! so the same DEF blocks less against a stronger attacker.

use super::constants::EPSILON;

/// Damage factor for the ratio formula
///
/// Returns 0 when both sides are zero. `EPSILON` in the denominator keeps
/// the division finite without moving the result at realistic scales.
pub fn ratio_defense_factor(effective_attack: f64, effective_def: f64) -> f64 {
    if effective_attack + effective_def > 0.0 {
        effective_attack / (effective_attack + effective_def + EPSILON)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_atk_and_def() {
        let factor = ratio_defense_factor(1000.0, 1000.0);
        assert!((factor - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_defense_is_near_one() {
        let factor = ratio_defense_factor(1000.0, 0.0);
        assert!((factor - 1.0).abs() < 1e-9);
        assert!(factor < 1.0);
    }

    #[test]
    fn test_both_zero() {
        assert!((ratio_defense_factor(0.0, 0.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_attack() {
        assert!((ratio_defense_factor(0.0, 800.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stronger_attacker_gets_through_more() {
        let weak = ratio_defense_factor(500.0, 800.0);
        let strong = ratio_defense_factor(2000.0, 800.0);
        assert!(strong > weak);
    }
}

//! Generic defense - hyperbolic reduction independent of the attacker
//!
//! `factor = 100 / (100 + DEF)`
//!
//! Every 100 DEF adds one more "base" worth of effective health:
//! - 0 DEF: factor 1.0 (full damage)
//! - 100 DEF: factor 0.5
//! - 800 DEF: factor 1/9 (~0.111)

use super::constants::GENERIC_DEF_DIVISOR;

/// Damage factor for the generic formula
pub fn generic_defense_factor(effective_def: f64) -> f64 {
    GENERIC_DEF_DIVISOR / (GENERIC_DEF_DIVISOR + effective_def)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_defense() {
        assert!((generic_defense_factor(0.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hundred_defense_halves() {
        assert!((generic_defense_factor(100.0) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_defender() {
        // 100 / (100 + 800) = 0.1111
        let factor = generic_defense_factor(800.0);
        assert!((factor - 1.0 / 9.0).abs() < 1e-12);
    }
}

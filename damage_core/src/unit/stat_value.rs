//! StatValue - base + bonus stat pair

use serde::{Deserialize, Serialize};

/// A stat made of a base value (from the unit itself) and a bonus
/// (from runes/artifacts)
///
/// The total is always recomputed from the two parts, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    /// Base value
    #[serde(default)]
    pub base: f64,
    /// Additive bonus on top of the base
    #[serde(default)]
    pub bonus: f64,
}

impl StatValue {
    /// Create a new StatValue with the given base and no bonus
    pub fn with_base(base: f64) -> Self {
        StatValue { base, bonus: 0.0 }
    }

    pub fn new(base: f64, bonus: f64) -> Self {
        StatValue { base, bonus }
    }

    /// base + bonus
    pub fn total(&self) -> f64 {
        self.base + self.bonus
    }
}

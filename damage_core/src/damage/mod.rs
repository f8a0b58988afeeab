//! Damage system - skills, the damage pipeline, and its results

mod calculation;
mod result;
mod skill;

pub use calculation::{
    base_scaled_per_hit, calculate_breakdown, calculate_damage, effective_attack,
    pre_defense_per_hit,
};
pub use result::{DamageBreakdown, DamageResult};
pub use skill::{Scaling, Skill};

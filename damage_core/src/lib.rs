//! damage_core - Deterministic elemental RPG damage calculator
//!
//! This library provides:
//! - Unit: Attacker/defender stats with offensive and defensive modifiers
//! - Skill: Scaling mode, multiplier, flat damage and hit count
//! - calculate_damage: Expected {min, max, avg} damage with crits and glancing
//!   hits integrated analytically
//! - Input validation: Percentages and raw values repaired into engine values
//! - Config: Defaults, skill presets and scenario files (TOML/JSON)

pub mod config;
pub mod damage;
pub mod defense;
pub mod element;
pub mod input;
pub mod prelude;
pub mod types;
pub mod unit;

// Re-export core types for convenience
pub use config::{default_skills, ConfigError, ResolvedScenario, Scenario};
pub use damage::{calculate_breakdown, calculate_damage, DamageBreakdown, DamageResult, Scaling, Skill};
pub use element::ElementalModifiers;
pub use input::{InputWarning, SkillInput, UnitInput, Validator, WarningKind};
pub use types::{Element, ElementRelation, FormulaType, ScalingMode};
pub use unit::{DefensiveModifiers, OffensiveModifiers, StatValue, Unit};

//! Prelude module for convenient imports
//!
//! ```rust
//! use damage_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Element, ElementRelation, FormulaType, ScalingMode};
pub use crate::unit::{StatValue, Unit};

// Damage system
pub use crate::damage::{calculate_breakdown, calculate_damage, DamageBreakdown, DamageResult, Scaling, Skill};

// Input boundary
pub use crate::input::{SkillInput, UnitInput, Validator};

// Config
pub use crate::config::{default_calculator_defaults, default_skills, CalculatorDefaults, Scenario};

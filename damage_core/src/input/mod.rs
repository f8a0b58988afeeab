//! Input validation - the one place raw values become engine values
//!
//! Front ends and scenario files hand in percentages (0-100) and possibly
//! negative or unparseable numbers. Everything is repaired here, with a
//! warning, so the engine only ever sees clamped stats and [0, 1] fractions.

mod skill_input;
mod unit_input;

pub use skill_input::SkillInput;
pub use unit_input::UnitInput;

use serde::{Deserialize, Serialize};
use std::fmt;

/// What was wrong with an input value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Negative where only >= 0 makes sense; replaced with 0
    Negative,
    /// Percentage outside 0-100 or count too large; clamped
    OutOfRange,
    /// Hit count below 1; replaced with 1
    BelowMinimumHits,
    /// Could not be read as a number; the default is used
    Unparseable,
    /// Speed divisor not positive; the default is used
    NonPositiveDivisor,
}

/// A recoverable problem found at the input boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputWarning {
    /// Human name of the field ("Base ATK", "Crit rate", ...)
    pub field: String,
    pub kind: WarningKind,
    /// The value as given
    pub original: String,
    /// The value actually used
    pub replacement: String,
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::Negative => write!(
                f,
                "{} should be non-negative (got {}). Using {}.",
                self.field, self.original, self.replacement
            ),
            WarningKind::OutOfRange => write!(
                f,
                "{} should be 0-100% (got {}). Clamping to {}.",
                self.field, self.original, self.replacement
            ),
            WarningKind::BelowMinimumHits => write!(
                f,
                "{} should be at least 1 (got {}). Using {}.",
                self.field, self.original, self.replacement
            ),
            WarningKind::Unparseable => write!(
                f,
                "{}: could not read '{}'. Using {}.",
                self.field, self.original, self.replacement
            ),
            WarningKind::NonPositiveDivisor => write!(
                f,
                "{} should be positive (got {}). Using {}.",
                self.field, self.original, self.replacement
            ),
        }
    }
}

/// Collects warnings while repairing raw values
#[derive(Debug, Clone, Default)]
pub struct Validator {
    warnings: Vec<InputWarning>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp a stat-like value to >= 0
    ///
    /// A missing value takes `default`. NaN and infinities are treated as
    /// unparseable and also take `default`.
    pub fn non_negative(&mut self, value: Option<f64>, default: f64, field: &str) -> f64 {
        let value = self.finite_or(value, default, field);
        if value < 0.0 {
            self.warn(field, WarningKind::Negative, value, 0.0);
            return 0.0;
        }
        value
    }

    /// Clamp a percentage to [0, 100] and convert it to a fraction
    pub fn percentage(&mut self, percent: Option<f64>, default: f64, field: &str) -> f64 {
        let percent = self.finite_or(percent, default, field);
        let clamped = percent.clamp(0.0, 100.0);
        if clamped != percent {
            self.warn(field, WarningKind::OutOfRange, percent, clamped);
        }
        clamped / 100.0
    }

    /// Floor a hit count at 1 and cap it at `u32::MAX`
    pub fn hit_count(&mut self, hits: i64, field: &str) -> u32 {
        if hits < 1 {
            self.warn(field, WarningKind::BelowMinimumHits, hits, 1);
            return 1;
        }
        match u32::try_from(hits) {
            Ok(hits) => hits,
            Err(_) => {
                self.warn(field, WarningKind::OutOfRange, hits, u32::MAX);
                u32::MAX
            }
        }
    }

    /// A divisor must be finite and strictly positive; otherwise use `default`
    pub fn divisor(&mut self, value: Option<f64>, default: f64, field: &str) -> f64 {
        let value = self.finite_or(value, default, field);
        if value > 0.0 {
            value
        } else {
            self.warn(field, WarningKind::NonPositiveDivisor, value, default);
            default
        }
    }

    /// Parse a raw number
    ///
    /// Empty input is `None` without a warning. Unparseable input is `None`
    /// with a warning. Either way the caller's default applies.
    pub fn parse_number(&mut self, raw: &str, field: &str) -> Option<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                self.warn(field, WarningKind::Unparseable, trimmed, "default");
                None
            }
        }
    }

    /// Parse a raw count; fractional input is truncated toward zero
    pub fn parse_count(&mut self, raw: &str, field: &str) -> Option<i64> {
        self.parse_number(raw, field).map(|value| value.trunc() as i64)
    }

    pub fn warnings(&self) -> &[InputWarning] {
        &self.warnings
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<InputWarning> {
        self.warnings
    }

    fn finite_or(&mut self, value: Option<f64>, default: f64, field: &str) -> f64 {
        match value {
            Some(value) if !value.is_finite() => {
                self.warn(field, WarningKind::Unparseable, value, default);
                default
            }
            Some(value) => value,
            None => default,
        }
    }

    fn warn(
        &mut self,
        field: &str,
        kind: WarningKind,
        original: impl fmt::Display,
        replacement: impl fmt::Display,
    ) {
        let warning = InputWarning {
            field: field.to_string(),
            kind,
            original: original.to_string(),
            replacement: replacement.to_string(),
        };
        tracing::warn!(field, ?kind, "{}", warning);
        self.warnings.push(warning);
    }
}

//! SkillInput - raw description of a skill, every field optional

use super::Validator;
use crate::config::SkillDefaults;
use crate::damage::{Scaling, Skill};
use crate::types::ScalingMode;
use serde::{Deserialize, Serialize};

/// A skill as a user, scenario file or preset file describes it
///
/// Only the coefficients of the selected `mode` are read; the rest are
/// ignored, even when they hold bad values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillInput {
    pub name: Option<String>,
    pub mode: Option<ScalingMode>,
    pub multiplier: Option<f64>,
    pub flat_damage: Option<f64>,
    pub hits: Option<i64>,
    pub ignore_defense: Option<bool>,

    /// Coefficient for ATK_COEF, DEF_COEF and HP_COEF
    pub coef: Option<f64>,
    pub a_coef: Option<f64>,
    pub d_coef: Option<f64>,
    pub spd_add: Option<f64>,
    pub spd_div: Option<f64>,
}

impl SkillInput {
    /// Apply defaults and repair bad values
    pub fn resolve(&self, defaults: &SkillDefaults, v: &mut Validator) -> Skill {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(&defaults.name)
            .to_string();

        let mode = self.mode.unwrap_or_default();
        let scaling = self.resolve_scaling(mode, defaults, v);

        Skill {
            name,
            scaling,
            multiplier: v.non_negative(self.multiplier, defaults.multiplier, "Skill multiplier"),
            flat_damage: v.non_negative(self.flat_damage, 0.0, "Flat damage"),
            hits: v.hit_count(self.hits.unwrap_or(1), "Number of hits"),
            ignore_defense: self.ignore_defense.unwrap_or(false),
        }
    }

    fn resolve_scaling(&self, mode: ScalingMode, d: &SkillDefaults, v: &mut Validator) -> Scaling {
        match mode {
            ScalingMode::AtkCoef => Scaling::AtkCoef {
                coef: v.non_negative(self.coef, d.atk_coef, "ATK coefficient"),
            },
            ScalingMode::DefCoef => Scaling::DefCoef {
                coef: v.non_negative(self.coef, d.def_coef, "DEF coefficient"),
            },
            ScalingMode::HpCoef => Scaling::HpCoef {
                coef: v.non_negative(self.coef, d.hp_coef, "HP coefficient"),
            },
            ScalingMode::AtkDefCombo => Scaling::AtkDefCombo {
                a_coef: v.non_negative(self.a_coef, d.a_coef, "ATK coefficient"),
                d_coef: v.non_negative(self.d_coef, d.d_coef, "DEF coefficient"),
            },
            ScalingMode::SpdWithAtk => {
                let (spd_add, spd_div) = self.speed_pair(d, v);
                Scaling::SpdWithAtk { spd_add, spd_div }
            }
            ScalingMode::SpdWithDef => {
                let (spd_add, spd_div) = self.speed_pair(d, v);
                Scaling::SpdWithDef { spd_add, spd_div }
            }
            ScalingMode::SpdWithHp => {
                let (spd_add, spd_div) = self.speed_pair(d, v);
                Scaling::SpdWithHp { spd_add, spd_div }
            }
            ScalingMode::NormalAtk => Scaling::NormalAtk,
        }
    }

    fn speed_pair(&self, d: &SkillDefaults, v: &mut Validator) -> (f64, f64) {
        let spd_add = v.non_negative(self.spd_add, d.spd_add, "SPD add");
        let spd_div = v.divisor(self.spd_div, d.spd_div, "SPD div");
        (spd_add, spd_div)
    }

    /// Describe an already-resolved skill as input, e.g. to prefill a form
    pub fn from_skill(skill: &Skill) -> Self {
        let mut input = SkillInput {
            name: Some(skill.name.clone()),
            mode: Some(skill.mode()),
            multiplier: Some(skill.multiplier),
            flat_damage: Some(skill.flat_damage),
            hits: Some(i64::from(skill.hits)),
            ignore_defense: Some(skill.ignore_defense),
            ..Default::default()
        };
        match skill.scaling {
            Scaling::AtkCoef { coef } | Scaling::DefCoef { coef } | Scaling::HpCoef { coef } => {
                input.coef = Some(coef);
            }
            Scaling::AtkDefCombo { a_coef, d_coef } => {
                input.a_coef = Some(a_coef);
                input.d_coef = Some(d_coef);
            }
            Scaling::SpdWithAtk { spd_add, spd_div }
            | Scaling::SpdWithDef { spd_add, spd_div }
            | Scaling::SpdWithHp { spd_add, spd_div } => {
                input.spd_add = Some(spd_add);
                input.spd_div = Some(spd_div);
            }
            Scaling::NormalAtk => {}
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::WarningKind;

    #[test]
    fn test_empty_input_is_basic_attack() {
        let mut v = Validator::new();
        let skill = SkillInput::default().resolve(&SkillDefaults::default(), &mut v);
        assert_eq!(skill, Skill::basic());
        assert!(v.is_clean());
    }

    #[test]
    fn test_mode_takes_default_coefficients() {
        let defaults = SkillDefaults::default();
        let mut v = Validator::new();

        let input = SkillInput {
            mode: Some(ScalingMode::DefCoef),
            ..Default::default()
        };
        assert_eq!(
            input.resolve(&defaults, &mut v).scaling,
            Scaling::DefCoef { coef: 3.6 }
        );

        let input = SkillInput {
            mode: Some(ScalingMode::SpdWithDef),
            spd_add: Some(90.0),
            ..Default::default()
        };
        assert_eq!(
            input.resolve(&defaults, &mut v).scaling,
            Scaling::SpdWithDef {
                spd_add: 90.0,
                spd_div: 620.0
            }
        );
        assert!(v.is_clean());
    }

    #[test]
    fn test_hits_floored() {
        let input = SkillInput {
            hits: Some(0),
            ..Default::default()
        };
        let mut v = Validator::new();
        let skill = input.resolve(&SkillDefaults::default(), &mut v);
        assert_eq!(skill.hits, 1);
        assert_eq!(v.warnings()[0].kind, WarningKind::BelowMinimumHits);
    }

    #[test]
    fn test_zero_divisor_falls_back() {
        let input = SkillInput {
            mode: Some(ScalingMode::SpdWithAtk),
            spd_div: Some(0.0),
            ..Default::default()
        };
        let mut v = Validator::new();
        let skill = input.resolve(&SkillDefaults::default(), &mut v);
        assert_eq!(
            skill.scaling,
            Scaling::SpdWithAtk {
                spd_add: 60.0,
                spd_div: 620.0
            }
        );
        assert_eq!(v.warnings()[0].kind, WarningKind::NonPositiveDivisor);
    }

    #[test]
    fn test_inactive_coefficients_not_validated() {
        let input = SkillInput {
            mode: Some(ScalingMode::AtkCoef),
            d_coef: Some(-4.0),
            spd_div: Some(-1.0),
            ..Default::default()
        };
        let mut v = Validator::new();
        let skill = input.resolve(&SkillDefaults::default(), &mut v);
        assert_eq!(skill.scaling, Scaling::AtkCoef { coef: 1.7 });
        assert!(v.is_clean());
    }

    #[test]
    fn test_negative_values_repaired() {
        let input = SkillInput {
            mode: Some(ScalingMode::HpCoef),
            coef: Some(-0.2),
            multiplier: Some(-1.0),
            flat_damage: Some(-50.0),
            ..Default::default()
        };
        let mut v = Validator::new();
        let skill = input.resolve(&SkillDefaults::default(), &mut v);
        assert_eq!(skill.scaling, Scaling::HpCoef { coef: 0.0 });
        assert!((skill.multiplier - 0.0).abs() < f64::EPSILON);
        assert!((skill.flat_damage - 0.0).abs() < f64::EPSILON);
        assert_eq!(v.warnings().len(), 3);
    }

    #[test]
    fn test_non_finite_values_take_defaults() {
        let toml = r#"
mode = "spd_with_atk"
multiplier = nan
spd_add = -inf
spd_div = inf
hits = 5_000_000_000
"#;
        let input: SkillInput = toml::from_str(toml).unwrap();
        let mut v = Validator::new();
        let skill = input.resolve(&SkillDefaults::default(), &mut v);

        assert!((skill.multiplier - 1.0).abs() < f64::EPSILON);
        assert_eq!(
            skill.scaling,
            Scaling::SpdWithAtk {
                spd_add: 60.0,
                spd_div: 620.0
            }
        );
        assert_eq!(skill.hits, u32::MAX);

        let kinds: Vec<_> = v.warnings().iter().map(|w| w.kind).collect();
        assert_eq!(
            kinds,
            vec![
                WarningKind::Unparseable,
                WarningKind::Unparseable,
                WarningKind::Unparseable,
                WarningKind::OutOfRange,
            ]
        );
    }

    #[test]
    fn test_from_skill_resolves_back() {
        let mut skill = Skill::new(
            "Crushing Blow",
            1.5,
            Scaling::AtkDefCombo {
                a_coef: 2.0,
                d_coef: 1.0,
            },
        );
        skill.hits = 2;
        skill.ignore_defense = true;

        let mut v = Validator::new();
        let resolved = SkillInput::from_skill(&skill).resolve(&SkillDefaults::default(), &mut v);
        assert_eq!(resolved, skill);
    }

    #[test]
    fn test_parse_toml_skill_input() {
        let toml = r#"
name = "Tidal Wave"
mode = "hp_coef"
coef = 0.25
hits = 2
"#;
        let input: SkillInput = toml::from_str(toml).unwrap();
        let mut v = Validator::new();
        let skill = input.resolve(&SkillDefaults::default(), &mut v);
        assert_eq!(skill.name, "Tidal Wave");
        assert_eq!(skill.scaling, Scaling::HpCoef { coef: 0.25 });
        assert_eq!(skill.hits, 2);
    }
}

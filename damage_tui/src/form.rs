//! Editable form rows over the calculator's input types
//!
//! Each field knows its label, how to show its current value, and how to
//! write raw text back into a `UnitInput` or `SkillInput`. Range checks are
//! left to `resolve`; this layer only parses.

use damage_core::config::{SkillDefaults, UnitDefaults};
use damage_core::input::{SkillInput, UnitInput, Validator};
use damage_core::{Element, ScalingMode};

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, edited with Enter
    Text,
    /// Number, edited with Enter
    Number,
    /// Fixed set of values, cycled with Left/Right
    Choice,
}

/// One rendered row of a form
#[derive(Debug, Clone, PartialEq)]
pub struct FormRow {
    pub label: &'static str,
    pub value: String,
    /// True when the field is unset and `value` shows the default
    pub is_default: bool,
    pub kind: FieldKind,
}

fn number_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn row(label: &'static str, kind: FieldKind, value: Option<String>, default: String) -> FormRow {
    match value {
        Some(value) => FormRow {
            label,
            value,
            is_default: false,
            kind,
        },
        None => FormRow {
            label,
            value: default,
            is_default: true,
            kind,
        },
    }
}

fn set_number(slot: &mut Option<f64>, raw: &str, label: &str, v: &mut Validator) {
    *slot = v.parse_number(raw, label);
}

fn set_text(slot: &mut Option<String>, raw: &str) {
    let trimmed = raw.trim();
    *slot = if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    };
}

fn cycle_element(slot: &mut Option<Element>, forward: bool) {
    let current = slot.unwrap_or_default();
    *slot = Some(if forward { current.next() } else { current.prev() });
}

// === Unit fields ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitField {
    Name,
    Element,
    BaseAttack,
    BonusAttack,
    BaseHealth,
    BonusHealth,
    BaseDefense,
    BonusDefense,
    BaseSpeed,
    BonusSpeed,
    AttackBuff,
    FlatAttack,
    CritRate,
    CritDamage,
    DefenseBreak,
    IgnoreDefense,
    DamageAmplify,
    DamageReduction,
}

impl UnitField {
    pub fn attacker_fields() -> &'static [UnitField] {
        &[
            UnitField::Name,
            UnitField::Element,
            UnitField::BaseAttack,
            UnitField::BonusAttack,
            UnitField::BaseHealth,
            UnitField::BonusHealth,
            UnitField::BaseDefense,
            UnitField::BonusDefense,
            UnitField::BaseSpeed,
            UnitField::BonusSpeed,
            UnitField::AttackBuff,
            UnitField::FlatAttack,
            UnitField::CritRate,
            UnitField::CritDamage,
            UnitField::DefenseBreak,
            UnitField::IgnoreDefense,
            UnitField::DamageAmplify,
        ]
    }

    pub fn defender_fields() -> &'static [UnitField] {
        &[
            UnitField::Name,
            UnitField::Element,
            UnitField::BaseHealth,
            UnitField::BonusHealth,
            UnitField::BaseDefense,
            UnitField::BonusDefense,
            UnitField::DamageReduction,
        ]
    }

    /// Matches the field names the validator reports
    pub fn label(&self) -> &'static str {
        match self {
            UnitField::Name => "Name",
            UnitField::Element => "Element",
            UnitField::BaseAttack => "Base ATK",
            UnitField::BonusAttack => "Bonus ATK",
            UnitField::BaseHealth => "Base HP",
            UnitField::BonusHealth => "Bonus HP",
            UnitField::BaseDefense => "Base DEF",
            UnitField::BonusDefense => "Bonus DEF",
            UnitField::BaseSpeed => "Base SPD",
            UnitField::BonusSpeed => "Bonus SPD",
            UnitField::AttackBuff => "Attack buff",
            UnitField::FlatAttack => "Flat attack",
            UnitField::CritRate => "Crit rate",
            UnitField::CritDamage => "Crit damage",
            UnitField::DefenseBreak => "Defense break",
            UnitField::IgnoreDefense => "Ignore defense",
            UnitField::DamageAmplify => "Damage amplify",
            UnitField::DamageReduction => "Damage reduction",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            UnitField::Name => FieldKind::Text,
            UnitField::Element => FieldKind::Choice,
            _ => FieldKind::Number,
        }
    }

    pub fn is_percent(&self) -> bool {
        matches!(
            self,
            UnitField::AttackBuff
                | UnitField::CritRate
                | UnitField::CritDamage
                | UnitField::DefenseBreak
                | UnitField::IgnoreDefense
                | UnitField::DamageAmplify
                | UnitField::DamageReduction
        )
    }

    fn number_slot<'a>(&self, input: &'a mut UnitInput) -> Option<&'a mut Option<f64>> {
        Some(match self {
            UnitField::BaseAttack => &mut input.base_attack,
            UnitField::BonusAttack => &mut input.bonus_attack,
            UnitField::BaseHealth => &mut input.base_health,
            UnitField::BonusHealth => &mut input.bonus_health,
            UnitField::BaseDefense => &mut input.base_defense,
            UnitField::BonusDefense => &mut input.bonus_defense,
            UnitField::BaseSpeed => &mut input.base_speed,
            UnitField::BonusSpeed => &mut input.bonus_speed,
            UnitField::AttackBuff => &mut input.attack_buff_percent,
            UnitField::FlatAttack => &mut input.flat_attack,
            UnitField::CritRate => &mut input.crit_rate_percent,
            UnitField::CritDamage => &mut input.crit_damage_percent,
            UnitField::DefenseBreak => &mut input.defense_break_percent,
            UnitField::IgnoreDefense => &mut input.ignore_defense_percent,
            UnitField::DamageAmplify => &mut input.damage_amplify_percent,
            UnitField::DamageReduction => &mut input.damage_reduction_percent,
            UnitField::Name | UnitField::Element => return None,
        })
    }

    fn number(&self, input: &UnitInput) -> Option<f64> {
        match self {
            UnitField::BaseAttack => input.base_attack,
            UnitField::BonusAttack => input.bonus_attack,
            UnitField::BaseHealth => input.base_health,
            UnitField::BonusHealth => input.bonus_health,
            UnitField::BaseDefense => input.base_defense,
            UnitField::BonusDefense => input.bonus_defense,
            UnitField::BaseSpeed => input.base_speed,
            UnitField::BonusSpeed => input.bonus_speed,
            UnitField::AttackBuff => input.attack_buff_percent,
            UnitField::FlatAttack => input.flat_attack,
            UnitField::CritRate => input.crit_rate_percent,
            UnitField::CritDamage => input.crit_damage_percent,
            UnitField::DefenseBreak => input.defense_break_percent,
            UnitField::IgnoreDefense => input.ignore_defense_percent,
            UnitField::DamageAmplify => input.damage_amplify_percent,
            UnitField::DamageReduction => input.damage_reduction_percent,
            UnitField::Name | UnitField::Element => None,
        }
    }

    fn default_number(&self, defaults: &UnitDefaults) -> f64 {
        match self {
            UnitField::BaseAttack => defaults.attack,
            UnitField::BaseHealth => defaults.health,
            UnitField::BaseDefense => defaults.defense,
            UnitField::BaseSpeed => defaults.speed,
            UnitField::CritDamage => defaults.crit_damage_percent,
            _ => 0.0,
        }
    }

    pub fn row(&self, input: &UnitInput, defaults: &UnitDefaults) -> FormRow {
        let suffix = if self.is_percent() { "%" } else { "" };
        match self {
            UnitField::Name => row(
                self.label(),
                self.kind(),
                input.name.clone(),
                defaults.name.clone(),
            ),
            UnitField::Element => row(
                self.label(),
                self.kind(),
                input.element.map(|e| e.to_string()),
                Element::default().to_string(),
            ),
            _ => row(
                self.label(),
                self.kind(),
                self.number(input).map(|n| format!("{}{}", number_text(n), suffix)),
                format!("{}{}", number_text(self.default_number(defaults)), suffix),
            ),
        }
    }

    /// Raw text for the edit buffer; empty when the field is unset
    pub fn edit_text(&self, input: &UnitInput) -> String {
        match self {
            UnitField::Name => input.name.clone().unwrap_or_default(),
            UnitField::Element => String::new(),
            _ => self.number(input).map(number_text).unwrap_or_default(),
        }
    }

    /// Write edited text back; empty text clears the field
    pub fn apply(&self, input: &mut UnitInput, raw: &str, v: &mut Validator) {
        match self {
            UnitField::Name => set_text(&mut input.name, raw),
            UnitField::Element => {}
            _ => {
                let label = self.label();
                if let Some(slot) = self.number_slot(input) {
                    set_number(slot, raw, label, v);
                }
            }
        }
    }

    pub fn cycle(&self, input: &mut UnitInput, forward: bool) {
        if let UnitField::Element = self {
            cycle_element(&mut input.element, forward);
        }
    }
}

// === Skill fields ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillField {
    Name,
    Mode,
    Multiplier,
    FlatDamage,
    Hits,
    IgnoreDefense,
    Coef,
    ACoef,
    DCoef,
    SpdAdd,
    SpdDiv,
}

impl SkillField {
    /// Common fields, then only the coefficients the mode reads
    pub fn fields_for(mode: ScalingMode) -> Vec<SkillField> {
        let mut fields = vec![
            SkillField::Name,
            SkillField::Mode,
            SkillField::Multiplier,
            SkillField::FlatDamage,
            SkillField::Hits,
            SkillField::IgnoreDefense,
        ];
        match mode {
            ScalingMode::AtkCoef | ScalingMode::DefCoef | ScalingMode::HpCoef => {
                fields.push(SkillField::Coef)
            }
            ScalingMode::AtkDefCombo => fields.extend([SkillField::ACoef, SkillField::DCoef]),
            ScalingMode::SpdWithAtk | ScalingMode::SpdWithDef | ScalingMode::SpdWithHp => {
                fields.extend([SkillField::SpdAdd, SkillField::SpdDiv])
            }
            ScalingMode::NormalAtk => {}
        }
        fields
    }

    pub fn label(&self, mode: ScalingMode) -> &'static str {
        match self {
            SkillField::Name => "Skill name",
            SkillField::Mode => "Scaling mode",
            SkillField::Multiplier => "Skill multiplier",
            SkillField::FlatDamage => "Flat damage",
            SkillField::Hits => "Number of hits",
            SkillField::IgnoreDefense => "Ignores DEF",
            SkillField::Coef => match mode {
                ScalingMode::DefCoef => "DEF coefficient",
                ScalingMode::HpCoef => "HP coefficient",
                _ => "ATK coefficient",
            },
            SkillField::ACoef => "ATK coefficient",
            SkillField::DCoef => "DEF coefficient",
            SkillField::SpdAdd => "SPD add",
            SkillField::SpdDiv => "SPD div",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            SkillField::Name => FieldKind::Text,
            SkillField::Mode | SkillField::IgnoreDefense => FieldKind::Choice,
            _ => FieldKind::Number,
        }
    }

    fn number_slot<'a>(&self, input: &'a mut SkillInput) -> Option<&'a mut Option<f64>> {
        Some(match self {
            SkillField::Multiplier => &mut input.multiplier,
            SkillField::FlatDamage => &mut input.flat_damage,
            SkillField::Coef => &mut input.coef,
            SkillField::ACoef => &mut input.a_coef,
            SkillField::DCoef => &mut input.d_coef,
            SkillField::SpdAdd => &mut input.spd_add,
            SkillField::SpdDiv => &mut input.spd_div,
            _ => return None,
        })
    }

    fn number(&self, input: &SkillInput) -> Option<f64> {
        match self {
            SkillField::Multiplier => input.multiplier,
            SkillField::FlatDamage => input.flat_damage,
            SkillField::Coef => input.coef,
            SkillField::ACoef => input.a_coef,
            SkillField::DCoef => input.d_coef,
            SkillField::SpdAdd => input.spd_add,
            SkillField::SpdDiv => input.spd_div,
            _ => None,
        }
    }

    fn default_number(&self, mode: ScalingMode, d: &SkillDefaults) -> f64 {
        match self {
            SkillField::Multiplier => d.multiplier,
            SkillField::Coef => match mode {
                ScalingMode::DefCoef => d.def_coef,
                ScalingMode::HpCoef => d.hp_coef,
                _ => d.atk_coef,
            },
            SkillField::ACoef => d.a_coef,
            SkillField::DCoef => d.d_coef,
            SkillField::SpdAdd => d.spd_add,
            SkillField::SpdDiv => d.spd_div,
            _ => 0.0,
        }
    }

    pub fn row(&self, input: &SkillInput, defaults: &SkillDefaults) -> FormRow {
        let mode = input.mode.unwrap_or_default();
        let label = self.label(mode);
        let kind = self.kind();
        match self {
            SkillField::Name => row(label, kind, input.name.clone(), defaults.name.clone()),
            SkillField::Mode => row(
                label,
                kind,
                input.mode.map(|m| m.to_string()),
                ScalingMode::default().to_string(),
            ),
            SkillField::Hits => row(
                label,
                kind,
                input.hits.map(|h| h.to_string()),
                "1".to_string(),
            ),
            SkillField::IgnoreDefense => row(
                label,
                kind,
                input.ignore_defense.map(yes_no),
                yes_no(false),
            ),
            _ => row(
                label,
                kind,
                self.number(input).map(number_text),
                number_text(self.default_number(mode, defaults)),
            ),
        }
    }

    pub fn edit_text(&self, input: &SkillInput) -> String {
        match self {
            SkillField::Name => input.name.clone().unwrap_or_default(),
            SkillField::Hits => input.hits.map(|h| h.to_string()).unwrap_or_default(),
            SkillField::Mode | SkillField::IgnoreDefense => String::new(),
            _ => self.number(input).map(number_text).unwrap_or_default(),
        }
    }

    pub fn apply(&self, input: &mut SkillInput, raw: &str, v: &mut Validator) {
        let label = self.label(input.mode.unwrap_or_default());
        match self {
            SkillField::Name => set_text(&mut input.name, raw),
            SkillField::Hits => input.hits = v.parse_count(raw, label),
            SkillField::Mode | SkillField::IgnoreDefense => {}
            _ => {
                if let Some(slot) = self.number_slot(input) {
                    set_number(slot, raw, label, v);
                }
            }
        }
    }

    pub fn cycle(&self, input: &mut SkillInput, forward: bool) {
        match self {
            SkillField::Mode => {
                let current = input.mode.unwrap_or_default();
                input.mode = Some(if forward { current.next() } else { current.prev() });
                // coefficients belong to the old mode
                input.coef = None;
                input.a_coef = None;
                input.d_coef = None;
                input.spd_add = None;
                input.spd_div = None;
            }
            SkillField::IgnoreDefense => {
                input.ignore_defense = Some(!input.ignore_defense.unwrap_or(false));
            }
            _ => {}
        }
    }
}

fn yes_no(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}

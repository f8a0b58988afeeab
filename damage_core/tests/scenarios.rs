//! Integration test: worked damage scenarios end to end
//!
//! Units are built through the input boundary the way a front end would,
//! then run through the engine.

use damage_core::config::{default_calculator_defaults, parse_scenario_toml};
use damage_core::input::{SkillInput, UnitInput, Validator};
use damage_core::{calculate_breakdown, calculate_damage, Element, FormulaType, Skill, Unit};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

/// Attacker ATK 1000 and defender DEF 800, everything else default
fn units(attacker_element: Element, defender_element: Element) -> (Unit, Unit) {
    let defaults = default_calculator_defaults();
    let mut v = Validator::new();

    let attacker = UnitInput {
        element: Some(attacker_element),
        ..Default::default()
    }
    .resolve(&defaults.attacker, &mut v);
    let defender = UnitInput {
        element: Some(defender_element),
        ..Default::default()
    }
    .resolve(&defaults.defender, &mut v);

    assert!(v.is_clean());
    (attacker, defender)
}

#[test]
fn neutral_basic_attack_against_800_def() {
    let (attacker, defender) = units(Element::None, Element::None);
    let breakdown = calculate_breakdown(&attacker, &defender, &Skill::basic(), FormulaType::Generic);

    assert!(close(breakdown.base_scaled_per_hit, 1000.0));
    assert!(close(breakdown.defense_factor, 100.0 / 900.0));
    assert!(close(breakdown.result.avg_damage, 1000.0 / 9.0));
    assert!(close(breakdown.result.min_damage, breakdown.result.avg_damage));
    assert!((breakdown.result.avg_damage - 111.1).abs() < 0.02);
}

#[test]
fn stronger_element_adds_damage_and_crit() {
    let (attacker, defender) = units(Element::Fire, Element::Wind);
    let breakdown = calculate_breakdown(&attacker, &defender, &Skill::basic(), FormulaType::Generic);

    assert!(close(breakdown.elemental.damage_mul, 1.05));
    assert!(close(breakdown.adjusted_crit_rate, 0.15));

    let crit_average = 1.0 + 0.15 * (1.0 + 0.5 - 1.0);
    let expected = 1000.0 * 1.05 * crit_average / 9.0;
    assert!(close(breakdown.result.avg_damage, expected));
    assert!(close(breakdown.result.min_damage, 1050.0 / 9.0));
}

#[test]
fn weaker_element_blends_glancing_tracks() {
    let (attacker, defender) = units(Element::Wind, Element::Fire);
    let breakdown = calculate_breakdown(&attacker, &defender, &Skill::basic(), FormulaType::Generic);

    assert!(close(breakdown.elemental.glancing_prob, 0.5));
    // crit delta pushes 0% crit below zero; clamped
    assert!(close(breakdown.adjusted_crit_rate, 0.0));

    let factor = 100.0 / 900.0;
    let non_glance = 1000.0 * 0.95 * factor;
    let glance = 1000.0 * 0.588 * factor;
    assert!(close(breakdown.result.avg_damage, 0.5 * non_glance + 0.5 * glance));
}

#[test]
fn three_hits_are_three_times_one() {
    let (attacker, defender) = units(Element::Water, Element::Fire);
    let single = Skill::basic();
    let mut triple = Skill::basic();
    triple.hits = 3;

    let one = calculate_damage(&attacker, &defender, &single, FormulaType::Generic);
    let three = calculate_damage(&attacker, &defender, &triple, FormulaType::Generic);

    assert_eq!(three.min_damage, one.min_damage * 3.0);
    assert_eq!(three.max_damage, one.max_damage * 3.0);
    assert_eq!(three.avg_damage, one.avg_damage * 3.0);
}

#[test]
fn ignore_defense_sweep_is_flat() {
    let (attacker, mut defender) = units(Element::None, Element::None);
    let mut skill = Skill::basic();
    skill.ignore_defense = true;

    defender.defense.base = 0.0;
    let baseline = calculate_damage(&attacker, &defender, &skill, FormulaType::Generic);

    for def in (0..=10_000).step_by(250) {
        defender.defense.base = def as f64;
        for formula in [FormulaType::Generic, FormulaType::Ratio] {
            let result = calculate_damage(&attacker, &defender, &skill, formula);
            assert_eq!(result, baseline, "DEF {} changed the result", def);
        }
    }
}

#[test]
fn scenario_file_runs_end_to_end() {
    let toml = r#"
formula = "ratio"

[attacker]
name = "Storm Knight"
element = "light"
base_attack = 1800
bonus_attack = 400
crit_rate_percent = 60
crit_damage_percent = 90
defense_break_percent = 70

[defender]
name = "Shade"
element = "dark"
base_defense = 1200
damage_reduction_percent = 20

[skill]
name = "Judgement"
mode = "atk_def_combo"
hits = 2
"#;
    let resolved = parse_scenario_toml(toml).unwrap().resolve();
    assert!(resolved.warnings.is_empty());

    let breakdown = resolved.calculate();
    assert_eq!(breakdown.relation.name(), "STRONGER");
    assert!(close(breakdown.adjusted_crit_rate, 0.75));
    assert!(close(breakdown.effective_defense, 1200.0 * 0.3));
    assert!(breakdown.result.min_damage < breakdown.result.avg_damage);
    assert!(breakdown.result.avg_damage < breakdown.result.max_damage);
}

#[test]
fn bad_inputs_still_calculate() {
    let defaults = default_calculator_defaults();
    let mut v = Validator::new();

    let attacker = UnitInput {
        base_attack: Some(-500.0),
        crit_rate_percent: Some(250.0),
        ..Default::default()
    }
    .resolve(&defaults.attacker, &mut v);
    let defender = UnitInput::default().resolve(&defaults.defender, &mut v);
    let skill = SkillInput {
        hits: Some(-2),
        ..Default::default()
    }
    .resolve(&defaults.skill, &mut v);

    assert_eq!(v.warnings().len(), 3);

    let result = calculate_damage(&attacker, &defender, &skill, FormulaType::Generic);
    assert_eq!(result.as_array(), [0.0, 0.0, 0.0]);
}

/// Rolls crits and glancing hits one by one and compares the sample mean
/// with the analytic average.
#[test]
fn sampled_average_matches_analytic_average() {
    let cases = [
        (Element::None, Element::None, 35.0),
        (Element::Fire, Element::Wind, 40.0),
        (Element::Wind, Element::Fire, 70.0),
    ];

    for (attacker_element, defender_element, crit_rate) in cases {
        let (mut attacker, defender) = units(attacker_element, defender_element);
        attacker.offense.crit_rate = crit_rate / 100.0;
        let mut skill = Skill::basic();
        skill.hits = 2;

        let b = calculate_breakdown(&attacker, &defender, &skill, FormulaType::Generic);

        let mut rng = StdRng::seed_from_u64(0x5eed);
        let rolls = 200_000;
        let mut sum = 0.0;
        for _ in 0..rolls {
            for _ in 0..skill.hits {
                let glance_mul = if rng.gen_bool(b.elemental.glancing_prob) {
                    b.elemental.glance_mul
                } else {
                    b.elemental.non_glance_mul
                };
                let crit_mul = if rng.gen_bool(b.adjusted_crit_rate) {
                    b.crit_multiplier
                } else {
                    1.0
                };
                sum += b.per_hit_base * glance_mul * crit_mul * b.defense_factor;
            }
        }
        let sampled = sum / rolls as f64;

        let relative = (sampled - b.result.avg_damage).abs() / b.result.avg_damage;
        assert!(
            relative < 0.01,
            "{} vs {}: sampled {} analytic {}",
            attacker_element,
            defender_element,
            sampled,
            b.result.avg_damage
        );
    }
}

//! Integration test: Load scenario -> Validate -> Calculate -> Edit -> Recalculate
//!
//! This test validates the full flow from a scenario file on disk to the
//! damage numbers the TUI shows.

use damage_core::config::{default_skills, load_scenario};
use damage_core::{
    calculate_breakdown, DamageBreakdown, ElementRelation, FormulaType, ResolvedScenario,
    ScalingMode,
};
use std::path::{Path, PathBuf};

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

/// Helper to print the damage triple
fn print_breakdown(name: &str, b: &DamageBreakdown) {
    println!("  {}:", name);
    println!("    Relation: {}", b.relation);
    println!("    Pre-defense / hit: {:.2}", b.pre_defense_per_hit);
    println!("    Defense factor: {:.4}", b.defense_factor);
    println!("    {}", b.result.summary());
}

fn scenario_path(file: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../scenarios")
        .join(file)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

#[test]
fn test_toml_scenario_flow() {
    separator("STEP 1: Loading TOML Scenario");

    let path = scenario_path("storm_vs_shade.toml");
    println!("  Scenario path: {:?}", path);
    let scenario = load_scenario(&path).expect("Failed to load scenario");
    assert_eq!(scenario.formula, FormulaType::Ratio);

    separator("STEP 2: Resolving Inputs");

    let resolved: ResolvedScenario = scenario.resolve();
    assert!(resolved.warnings.is_empty(), "{:?}", resolved.warnings);
    assert_eq!(resolved.attacker.name, "Storm Knight");
    assert!(close(resolved.attacker.total_attack(), 2200.0));
    assert!(close(resolved.defender.total_defense(), 1500.0));
    assert_eq!(resolved.skill.mode(), ScalingMode::AtkDefCombo);

    separator("STEP 3: Calculating");

    let breakdown = resolved.calculate();
    print_breakdown("Judgement", &breakdown);

    assert_eq!(breakdown.relation, ElementRelation::Stronger);
    assert!(close(breakdown.adjusted_crit_rate, 0.75));
    assert!(close(breakdown.base_scaled_per_hit, 1.7 * 2200.0 + 2.9 * 1500.0));
    assert!(close(breakdown.effective_defense, 450.0));
    assert!(close(breakdown.defense_factor, 2200.0 / (2200.0 + 450.0 + 1e-9)));

    separator("STEP 4: Switching Formula");

    let mut generic = resolved.clone();
    generic.formula = FormulaType::Generic;
    let generic_breakdown = generic.calculate();
    print_breakdown("Judgement (generic)", &generic_breakdown);

    assert!(close(generic_breakdown.defense_factor, 100.0 / 550.0));
    assert!(generic_breakdown.result.avg_damage < breakdown.result.avg_damage);
}

#[test]
fn test_json_scenario_flow() {
    separator("STEP 1: Loading JSON Scenario");

    let path = scenario_path("gale_vs_ifrit.json");
    let scenario = load_scenario(&path).expect("Failed to load scenario");

    separator("STEP 2: Calculating Weaker Matchup");

    let resolved = scenario.resolve();
    let breakdown = resolved.calculate();
    print_breakdown("Gale Rush", &breakdown);

    assert_eq!(breakdown.relation, ElementRelation::Weaker);
    assert!(close(breakdown.adjusted_crit_rate, 0.25));
    assert!(close(breakdown.effective_attack, 1430.0));
    assert!(close(breakdown.base_scaled_per_hit, 1430.0 * ((225.0 + 60.0) / 620.0)));
    assert_eq!(breakdown.hits, 3);

    let factor = 100.0 / 750.0;
    let track = |mul: f64| breakdown.per_hit_base * mul * breakdown.avg_crit_factor * factor;
    let expected = (0.5 * track(0.95) + 0.5 * track(0.70 * 0.84)) * 3.0;
    assert!(close(breakdown.result.avg_damage, expected));
}

#[test]
fn test_every_preset_against_loaded_units() {
    separator("Every Preset vs Storm Knight / Shade");

    let scenario = load_scenario(&scenario_path("storm_vs_shade.toml"))
        .expect("Failed to load scenario");
    let resolved = scenario.resolve();

    for skill in default_skills() {
        let b = calculate_breakdown(
            &resolved.attacker,
            &resolved.defender,
            &skill,
            resolved.formula,
        );
        print_breakdown(&skill.name, &b);

        assert!(b.result.min_damage > 0.0, "{} dealt nothing", skill.name);
        assert!(b.result.min_damage <= b.result.avg_damage);
        assert!(b.result.avg_damage <= b.result.max_damage);
        if skill.ignore_defense {
            assert!(close(b.defense_factor, 1.0));
        }
    }
}

#[test]
fn test_missing_scenario_is_an_error() {
    let result = load_scenario(&scenario_path("does_not_exist.toml"));
    assert!(result.is_err());
}

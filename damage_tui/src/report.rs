//! Plain-text combat summary, shared by `--print` and the Result tab

use damage_core::{DamageBreakdown, DamageResult, ResolvedScenario};

/// Group the integer part with commas
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn with_grouping(fixed: &str) -> String {
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let mut out = format!("{}{}", sign, group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `1234567.891` -> `1,234,567.89`
pub fn format_amount(value: f64) -> String {
    with_grouping(&format!("{:.2}", value))
}

/// Like [`format_amount`] but drops trailing zeros: `1500.0` -> `1,500`
pub fn format_compact(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };
    with_grouping(trimmed)
}

/// Fraction to a whole percentage: `0.25` -> `25`
pub fn percent(fraction: f64) -> i64 {
    (fraction * 100.0).round() as i64
}

/// Attacker, defender, skill and element sections
pub fn combat_summary(scenario: &ResolvedScenario, breakdown: &DamageBreakdown) -> Vec<String> {
    let a = &scenario.attacker;
    let d = &scenario.defender;
    let s = &scenario.skill;
    let mut lines = Vec::new();

    lines.push("=== Combat Summary ===".to_string());
    lines.push(format!("Attacker: {}  (Element: {})", a.name, a.element));
    for (label, stat) in [("ATK:  ", a.attack), ("SPD:  ", a.speed), ("HP:   ", a.health)] {
        lines.push(format!(
            "  {} {} (base {} + bonus {})",
            label,
            format_compact(stat.total()),
            format_compact(stat.base),
            format_compact(stat.bonus)
        ));
    }
    lines.push(format!(
        "  Attack buff: {}%, Flat ATK: {}",
        percent(a.offense.attack_buff),
        format_compact(a.offense.flat_attack)
    ));
    lines.push(format!(
        "  Crit:  {}%  |  Crit Dmg: +{}%",
        percent(a.offense.crit_rate),
        percent(a.offense.crit_damage)
    ));
    lines.push(format!(
        "  DEF break: {}%  |  Ignore DEF%: {}%",
        percent(a.offense.defense_break),
        percent(a.offense.ignore_defense)
    ));
    lines.push(format!(
        "  Damage amplify: {}%",
        percent(a.offense.damage_amplify)
    ));
    lines.push(String::new());

    lines.push(format!("Defender: {}  (Element: {})", d.name, d.element));
    lines.push(format!(
        "  DEF:    {} (base {} + bonus {})",
        format_compact(d.total_defense()),
        format_compact(d.defense.base),
        format_compact(d.defense.bonus)
    ));
    lines.push(format!("  HP:     {}", format_compact(d.total_health())));
    lines.push(format!(
        "  Damage reduction: {}%",
        percent(d.defense_mods.damage_reduction)
    ));
    lines.push(String::new());

    lines.push(format!("Skill: {}", s.name));
    lines.push(format!("  Scaling mode: {}", s.mode()));
    lines.push(format!(
        "  Multiplier:   {}   Flat dmg per hit: {}",
        s.multiplier,
        format_compact(s.flat_damage)
    ));
    if s.is_multi_hit() {
        lines.push(format!("  Hits:         {} (multi-hit)", s.hits));
    } else {
        lines.push("  Hits:         1".to_string());
    }
    lines.push(format!(
        "  Ignores DEF:  {}",
        if s.ignore_defense {
            "YES (skill bypasses defense)"
        } else {
            "no"
        }
    ));
    lines.push(format!("  Formula:      {}", s.scaling.describe()));
    lines.push(String::new());

    lines.push(format!(
        "Element interaction: Attacker {} vs Defender {} -> {}",
        a.element, d.element, breakdown.relation
    ));
    for (i, effect) in breakdown.relation.effect_description().iter().enumerate() {
        if i == 0 {
            lines.push(format!("  Element effect: {}", effect));
        } else {
            lines.push(format!("   - {}", effect));
        }
    }
    lines.push(String::new());

    lines.push(format!(
        "Pre-defense (per-hit, no crit): {}",
        format_compact(breakdown.pre_defense_per_hit)
    ));
    lines.push(format!(
        "Pre-defense (total, no crit):   {}",
        format_compact(breakdown.pre_defense_total())
    ));
    lines
}

/// The min/max/average block
pub fn result_lines(title: &str, result: &DamageResult) -> Vec<String> {
    vec![
        format!("=== {} ===", title),
        format!("Min (no crit): {}", format_amount(result.min_damage)),
        format!("Max (crit):    {}", format_amount(result.max_damage)),
        format!("Average:       {}", format_amount(result.avg_damage)),
    ]
}

/// Full report as printed by `--print`
pub fn full_report(scenario: &ResolvedScenario, breakdown: &DamageBreakdown) -> Vec<String> {
    let mut lines = combat_summary(scenario, breakdown);
    lines.push(String::new());
    lines.extend(result_lines(
        &format!("Damage result ({})", scenario.formula),
        &breakdown.result,
    ));
    lines.push(String::new());
    lines.push(format!(
        "Crit multiplier: x{} (base crit rate {}%, adjusted {}%)",
        format_compact(breakdown.crit_multiplier),
        percent(scenario.attacker.offense.crit_rate),
        percent(breakdown.adjusted_crit_rate)
    ));
    if breakdown.defense_ignored {
        lines.push("Defense: ignored by skill".to_string());
    } else {
        lines.push(format!(
            "Defense: effective DEF {} -> factor {:.4} ({:.1}% reduced)",
            format_compact(breakdown.effective_defense),
            breakdown.defense_factor,
            breakdown.defense_reduction_percent()
        ));
    }
    if !scenario.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings:".to_string());
        for warning in &scenario.warnings {
            lines.push(format!("  {}", warning));
        }
    }
    lines
}

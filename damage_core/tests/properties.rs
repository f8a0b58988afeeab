//! Property tests for the damage engine over arbitrary clamped inputs

use damage_core::element::relation;
use damage_core::{
    calculate_damage, Element, ElementRelation, FormulaType, Scaling, Skill, StatValue, Unit,
};
use proptest::prelude::*;

fn element() -> impl Strategy<Value = Element> {
    prop::sample::select(Element::all().to_vec())
}

fn formula() -> impl Strategy<Value = FormulaType> {
    prop_oneof![Just(FormulaType::Generic), Just(FormulaType::Ratio)]
}

fn stat() -> impl Strategy<Value = StatValue> {
    (0.0..20_000.0f64, 0.0..5_000.0f64).prop_map(|(base, bonus)| StatValue::new(base, bonus))
}

fn fraction() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(1.0), 0.0..=1.0f64]
}

fn unit() -> impl Strategy<Value = Unit> {
    (
        element(),
        (stat(), stat(), stat(), stat()),
        (fraction(), 0.0..2_000.0f64, fraction(), fraction()),
        (fraction(), fraction(), fraction(), fraction()),
    )
        .prop_map(
            |(element, (attack, health, defense, speed), (buff, flat, crit, crit_dmg), (brk, ign, amp, red))| {
                let mut unit = Unit::new("Unit").with_element(element);
                unit.attack = attack;
                unit.health = health;
                unit.defense = defense;
                unit.speed = speed;
                unit.offense.attack_buff = buff;
                unit.offense.flat_attack = flat;
                unit.offense.crit_rate = crit;
                unit.offense.crit_damage = crit_dmg;
                unit.offense.defense_break = brk;
                unit.offense.ignore_defense = ign;
                unit.offense.damage_amplify = amp;
                unit.defense_mods.damage_reduction = red;
                unit
            },
        )
}

fn coef() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0..5.0f64]
}

fn speed_pair() -> impl Strategy<Value = (f64, f64)> {
    (0.0..200.0f64, 1.0..2_000.0f64)
}

fn scaling() -> impl Strategy<Value = Scaling> {
    prop_oneof![
        coef().prop_map(|coef| Scaling::AtkCoef { coef }),
        coef().prop_map(|coef| Scaling::DefCoef { coef }),
        coef().prop_map(|coef| Scaling::HpCoef { coef }),
        (coef(), coef()).prop_map(|(a_coef, d_coef)| Scaling::AtkDefCombo { a_coef, d_coef }),
        speed_pair().prop_map(|(spd_add, spd_div)| Scaling::SpdWithAtk { spd_add, spd_div }),
        speed_pair().prop_map(|(spd_add, spd_div)| Scaling::SpdWithDef { spd_add, spd_div }),
        speed_pair().prop_map(|(spd_add, spd_div)| Scaling::SpdWithHp { spd_add, spd_div }),
        Just(Scaling::NormalAtk),
    ]
}

/// Scaling modes that never read the target's DEF
fn scaling_without_target_def() -> impl Strategy<Value = Scaling> {
    scaling().prop_filter("reads target DEF", |s| {
        !matches!(
            s,
            Scaling::DefCoef { .. } | Scaling::AtkDefCombo { .. } | Scaling::SpdWithDef { .. }
        )
    })
}

fn skill_with(scaling: impl Strategy<Value = Scaling>) -> impl Strategy<Value = Skill> {
    (scaling, 0.0..4.0f64, 0.0..500.0f64, 1u32..8, any::<bool>()).prop_map(
        |(scaling, multiplier, flat_damage, hits, ignore_defense)| {
            let mut skill = Skill::new("Skill", multiplier, scaling);
            skill.flat_damage = flat_damage;
            skill.hits = hits;
            skill.ignore_defense = ignore_defense;
            skill
        },
    )
}

fn skill() -> impl Strategy<Value = Skill> {
    skill_with(scaling())
}

/// Absolute slack for comparisons that pass through `1 + (x - 1)`
fn slack(value: f64) -> f64 {
    value.abs() * 1e-12 + 1e-12
}

proptest! {
    #[test]
    fn deterministic(a in unit(), d in unit(), s in skill(), f in formula()) {
        let first = calculate_damage(&a, &d, &s, f);
        let second = calculate_damage(&a, &d, &s, f);
        for (x, y) in first.as_array().iter().zip(second.as_array().iter()) {
            prop_assert_eq!(x.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn min_avg_max_ordered(a in unit(), d in unit(), s in skill(), f in formula()) {
        let r = calculate_damage(&a, &d, &s, f);
        prop_assert!(r.min_damage <= r.avg_damage + slack(r.avg_damage), "{:?}", r);
        prop_assert!(r.avg_damage <= r.max_damage + slack(r.max_damage), "{:?}", r);
    }

    #[test]
    fn never_negative(a in unit(), d in unit(), s in skill(), f in formula()) {
        let r = calculate_damage(&a, &d, &s, f);
        prop_assert!(r.min_damage >= 0.0);
        prop_assert!(r.max_damage >= 0.0);
        prop_assert!(r.avg_damage >= 0.0);
    }

    #[test]
    fn hits_scale_exactly(a in unit(), d in unit(), s in skill(), f in formula(), n in 1u32..20) {
        let mut single = s.clone();
        single.hits = 1;
        let mut many = s;
        many.hits = n;

        let one = calculate_damage(&a, &d, &single, f);
        let all = calculate_damage(&a, &d, &many, f);
        let n = n as f64;
        prop_assert_eq!(all.min_damage, one.min_damage * n);
        prop_assert_eq!(all.max_damage, one.max_damage * n);
        prop_assert_eq!(all.avg_damage, one.avg_damage * n);
    }

    #[test]
    fn ignored_defense_is_irrelevant(
        a in unit(),
        d in unit(),
        s in skill_with(scaling_without_target_def()),
        f in formula(),
        other_def in stat(),
    ) {
        let mut s = s;
        s.ignore_defense = true;
        let mut d2 = d.clone();
        d2.defense = other_def;

        prop_assert_eq!(calculate_damage(&a, &d, &s, f), calculate_damage(&a, &d2, &s, f));
    }
}

#[test]
fn elemental_symmetry() {
    let triangle = [Element::Fire, Element::Wind, Element::Water];

    for a in triangle {
        for b in triangle {
            let forward = relation(a, b);
            let backward = relation(b, a);
            assert_eq!(
                forward == ElementRelation::Stronger,
                backward == ElementRelation::Weaker,
                "{} vs {}",
                a,
                b
            );
        }
    }

    // Light and Dark beat each other
    assert_eq!(relation(Element::Light, Element::Dark), ElementRelation::Stronger);
    assert_eq!(relation(Element::Dark, Element::Light), ElementRelation::Stronger);

    for e in Element::all() {
        assert_eq!(relation(Element::None, *e), ElementRelation::Neutral);
        assert_eq!(relation(*e, Element::None), ElementRelation::Neutral);
    }
}

//! Elemental resolver - attacker element vs defender element
//!
//! Fire beats Wind, Wind beats Water, Water beats Fire.
//! Light and Dark each beat the other.
//! Anything else, or `None` on either side, is neutral.

use crate::types::{Element, ElementRelation};
use serde::{Deserialize, Serialize};

/// Elemental modifier constants
pub mod constants {
    /// Damage multiplier when the attacker is stronger
    pub const STRONGER_DAMAGE_MUL: f64 = 1.05;

    /// Crit rate added when the attacker is stronger
    pub const STRONGER_CRIT_DELTA: f64 = 0.15;

    /// Crit rate added (negative) when the attacker is weaker
    pub const WEAKER_CRIT_DELTA: f64 = -0.15;

    /// Chance that a hit from the weaker side glances
    pub const WEAKER_GLANCE_PROB: f64 = 0.5;

    /// Multiplier on non-glancing hits from the weaker side
    pub const WEAKER_NORMAL_MUL: f64 = 0.95;

    /// Multiplier on glancing hits from the weaker side:
    /// -30% for the glance, then a further -16%
    pub const WEAKER_GLANCE_MUL: f64 = 0.70 * 0.84;
}

/// (attacker, defender) pairs where the attacker is stronger
static BEATS: [(Element, Element); 5] = [
    (Element::Fire, Element::Wind),
    (Element::Wind, Element::Water),
    (Element::Water, Element::Fire),
    (Element::Light, Element::Dark),
    (Element::Dark, Element::Light),
];

fn beats(attacker: Element, defender: Element) -> bool {
    BEATS.contains(&(attacker, defender))
}

/// Relation of the attacker's element to the defender's
pub fn relation(attacker: Element, defender: Element) -> ElementRelation {
    if attacker == Element::None || defender == Element::None {
        return ElementRelation::Neutral;
    }

    if beats(attacker, defender) {
        ElementRelation::Stronger
    } else if beats(defender, attacker) {
        ElementRelation::Weaker
    } else {
        ElementRelation::Neutral
    }
}

/// The damage/crit/glancing bundle an elemental relation applies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementalModifiers {
    pub damage_mul: f64,
    pub crit_delta: f64,
    pub glancing_prob: f64,
    pub non_glance_mul: f64,
    pub glance_mul: f64,
}

impl ElementalModifiers {
    pub const NEUTRAL: ElementalModifiers = ElementalModifiers {
        damage_mul: 1.0,
        crit_delta: 0.0,
        glancing_prob: 0.0,
        non_glance_mul: 1.0,
        glance_mul: 1.0,
    };

    pub fn for_relation(relation: ElementRelation) -> Self {
        use constants::*;
        match relation {
            ElementRelation::Stronger => ElementalModifiers {
                damage_mul: STRONGER_DAMAGE_MUL,
                crit_delta: STRONGER_CRIT_DELTA,
                ..Self::NEUTRAL
            },
            ElementRelation::Weaker => ElementalModifiers {
                damage_mul: 1.0,
                crit_delta: WEAKER_CRIT_DELTA,
                glancing_prob: WEAKER_GLANCE_PROB,
                non_glance_mul: WEAKER_NORMAL_MUL,
                glance_mul: WEAKER_GLANCE_MUL,
            },
            ElementRelation::Neutral => Self::NEUTRAL,
        }
    }

    /// Resolve the relation and look up its modifiers in one step
    pub fn between(attacker: Element, defender: Element) -> Self {
        Self::for_relation(relation(attacker, defender))
    }
}

impl Default for ElementalModifiers {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle() {
        assert_eq!(relation(Element::Fire, Element::Wind), ElementRelation::Stronger);
        assert_eq!(relation(Element::Wind, Element::Water), ElementRelation::Stronger);
        assert_eq!(relation(Element::Water, Element::Fire), ElementRelation::Stronger);

        assert_eq!(relation(Element::Wind, Element::Fire), ElementRelation::Weaker);
        assert_eq!(relation(Element::Water, Element::Wind), ElementRelation::Weaker);
        assert_eq!(relation(Element::Fire, Element::Water), ElementRelation::Weaker);
    }

    #[test]
    fn test_light_dark_both_stronger() {
        assert_eq!(relation(Element::Light, Element::Dark), ElementRelation::Stronger);
        assert_eq!(relation(Element::Dark, Element::Light), ElementRelation::Stronger);
    }

    #[test]
    fn test_none_is_neutral() {
        for e in Element::all() {
            assert_eq!(relation(Element::None, *e), ElementRelation::Neutral);
            assert_eq!(relation(*e, Element::None), ElementRelation::Neutral);
        }
    }

    #[test]
    fn test_unrelated_pairs_neutral() {
        assert_eq!(relation(Element::Fire, Element::Fire), ElementRelation::Neutral);
        assert_eq!(relation(Element::Fire, Element::Light), ElementRelation::Neutral);
        assert_eq!(relation(Element::Dark, Element::Water), ElementRelation::Neutral);
    }

    #[test]
    fn test_weaker_modifiers() {
        let mods = ElementalModifiers::for_relation(ElementRelation::Weaker);
        assert!((mods.glance_mul - 0.588).abs() < 1e-12);
        assert!((mods.non_glance_mul - 0.95).abs() < f64::EPSILON);
        assert!((mods.glancing_prob - 0.5).abs() < f64::EPSILON);
        assert!((mods.crit_delta + 0.15).abs() < f64::EPSILON);
        assert!((mods.damage_mul - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stronger_modifiers() {
        let mods = ElementalModifiers::between(Element::Water, Element::Fire);
        assert!((mods.damage_mul - 1.05).abs() < f64::EPSILON);
        assert!((mods.crit_delta - 0.15).abs() < f64::EPSILON);
        assert!((mods.glancing_prob - 0.0).abs() < f64::EPSILON);
        assert!((mods.glance_mul - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_neutral_modifiers_identity() {
        assert_eq!(
            ElementalModifiers::between(Element::Fire, Element::Dark),
            ElementalModifiers::NEUTRAL
        );
    }
}

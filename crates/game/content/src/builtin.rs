//! The builtin shop catalog.
//!
//! Six weapons and four potions, in the menu order the client presents
//! them. The unarmed entry is the default loadout; it stays in the catalog
//! so lookups and re-equipping work, at zero cost.

use duel_core::{
    Catalog, ConsumableSpec, EffectDuration, RollRange, SkillRequirements, StatDeltas, WeaponSpec,
};

fn weapon(
    name: &str,
    min: u32,
    max: u32,
    requirements: SkillRequirements,
    cost: u32,
) -> WeaponSpec {
    WeaponSpec {
        name: name.to_owned(),
        damage: RollRange::new(min, max),
        requirements,
        cost,
    }
}

fn consumable(name: &str, duration: EffectDuration, effects: StatDeltas, cost: u32) -> ConsumableSpec {
    ConsumableSpec {
        name: name.to_owned(),
        duration,
        effects,
        cost,
    }
}

/// Builds the fixed builtin catalog.
///
/// The content is validated on construction; the builtin tables always
/// pass, so this does not return a `Result`.
pub fn builtin_catalog() -> Catalog {
    let weapons = vec![
        (
            "unarmed".to_owned(),
            weapon("Unarmed", 1, 1, SkillRequirements::NONE, 0),
        ),
        (
            "knife".to_owned(),
            weapon("Knife", 2, 3, SkillRequirements::NONE, 10),
        ),
        (
            "sword".to_owned(),
            weapon(
                "Sword",
                3,
                5,
                SkillRequirements {
                    strength: 2,
                    agility: 0,
                    intellect: 0,
                },
                35,
            ),
        ),
        (
            "twin-blade".to_owned(),
            weapon(
                "Twin-Blade",
                1,
                7,
                SkillRequirements {
                    strength: 0,
                    agility: 2,
                    intellect: 0,
                },
                25,
            ),
        ),
        (
            "wand".to_owned(),
            weapon(
                "Wand",
                3,
                3,
                SkillRequirements {
                    strength: 0,
                    agility: 0,
                    intellect: 2,
                },
                30,
            ),
        ),
        (
            "greatsword".to_owned(),
            weapon(
                "Greatsword",
                6,
                7,
                SkillRequirements {
                    strength: 3,
                    agility: 0,
                    intellect: 2,
                },
                65,
            ),
        ),
    ];

    let consumables = vec![
        (
            "health-potion".to_owned(),
            consumable(
                "Health Potion",
                EffectDuration::Permanent,
                StatDeltas {
                    hitpoints: 5,
                    ..StatDeltas::default()
                },
                5,
            ),
        ),
        (
            "strength-potion".to_owned(),
            consumable(
                "Strength Potion",
                EffectDuration::Turns(3),
                StatDeltas {
                    strength: 3,
                    ..StatDeltas::default()
                },
                10,
            ),
        ),
        (
            "agility-potion".to_owned(),
            consumable(
                "Agility Potion",
                EffectDuration::Turns(3),
                StatDeltas {
                    agility: 3,
                    ..StatDeltas::default()
                },
                10,
            ),
        ),
        (
            "intellect-potion".to_owned(),
            consumable(
                "Intellect Potion",
                EffectDuration::Turns(3),
                StatDeltas {
                    intellect: 3,
                    ..StatDeltas::default()
                },
                10,
            ),
        ),
    ];

    Catalog::new(weapons, consumables).expect("builtin catalog content is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_validates() {
        let catalog = builtin_catalog();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.weapons().count(), 6);
        assert_eq!(catalog.consumables().count(), 4);
    }

    #[test]
    fn builtin_content_matches_the_shop_prices() {
        let catalog = builtin_catalog();

        let greatsword = catalog.weapon("greatsword").unwrap();
        assert_eq!(greatsword.cost, 65);
        assert_eq!(greatsword.damage, RollRange::new(6, 7));
        assert_eq!(greatsword.requirements.strength, 3);
        assert_eq!(greatsword.requirements.intellect, 2);

        let heal = catalog.consumable("health-potion").unwrap();
        assert_eq!(heal.cost, 5);
        assert_eq!(heal.duration, EffectDuration::Permanent);
        assert_eq!(heal.effects.hitpoints, 5);

        // Menu order is part of the input contract.
        assert_eq!(catalog.weapon_key_at(0), Some("unarmed"));
        assert_eq!(catalog.consumable_key_at(0), Some("health-potion"));
    }
}

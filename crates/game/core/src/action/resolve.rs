//! Action resolvers.
//!
//! Each resolver validates a selection against the acting combatant (and,
//! for attack, the opponent), mutates state only on the success path, and
//! returns an [`ActionOutcome`] for display. A returned [`ActionError`]
//! guarantees that coins, inventory, equipment and effects are exactly as
//! they were before the call.

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::rng::RngOracle;
use crate::state::{ActiveEffect, Combatant};

use super::{ActionError, ActionOutcome, ItemClass, Skill};

/// Draws damage from the attacker's equipped weapon and applies it to the
/// defender. Always consumes the turn; a defender at or below zero
/// hitpoints afterwards means the match is over in the attacker's favor.
pub fn attack(
    attacker: &Combatant,
    defender: &mut Combatant,
    rng: &mut dyn RngOracle,
) -> ActionOutcome {
    let damage = rng.roll(attacker.weapon.damage);
    defender.hitpoints -= damage as i32;

    ActionOutcome::Attacked {
        attacker: attacker.name.clone(),
        defender: defender.name.clone(),
        damage,
        defeated: !defender.is_alive(),
    }
}

/// Buys a catalog item. Weapons replace the equipped weapon and are gated
/// by the any-one-requirement skill check; consumables stack in the
/// inventory. Check order: existence, funds, then skill.
pub fn purchase(
    buyer: &mut Combatant,
    catalog: &Catalog,
    class: ItemClass,
    key: &str,
) -> Result<ActionOutcome, ActionError> {
    match class {
        ItemClass::Consumable => {
            let spec = catalog.consumable(key).ok_or(ActionError::ItemNotFound)?;
            check_funds(buyer, spec.cost)?;
            if !buyer.inventory.add_one(key) {
                return Err(ActionError::InventoryFull);
            }
            buyer.coins -= spec.cost;

            Ok(ActionOutcome::Purchased {
                buyer: buyer.name.clone(),
                item: spec.name.clone(),
                cost: spec.cost,
                class,
            })
        }
        ItemClass::Weapon => {
            let spec = catalog.weapon(key).ok_or(ActionError::ItemNotFound)?;
            check_funds(buyer, spec.cost)?;
            if !buyer.meets_any_requirement(&spec.requirements) {
                return Err(ActionError::InsufficientSkill);
            }
            buyer.coins -= spec.cost;
            buyer.weapon = spec.clone();

            Ok(ActionOutcome::Purchased {
                buyer: buyer.name.clone(),
                item: spec.name.clone(),
                cost: spec.cost,
                class,
            })
        }
    }
}

/// Consumes one owned item: applies its deltas immediately, decrements the
/// inventory stack, and registers the active effect with its full
/// duration.
pub fn use_item(
    user: &mut Combatant,
    catalog: &Catalog,
    key: &str,
) -> Result<ActionOutcome, ActionError> {
    if user.inventory.quantity(key) == 0 {
        return Err(ActionError::ItemNotFound);
    }
    // Owned items always came from the catalog, but a reloaded catalog
    // may no longer know them; treat that the same as not owning the item.
    let spec = catalog.consumable(key).ok_or(ActionError::ItemNotFound)?;
    if user.active_effects.is_full() {
        return Err(ActionError::EffectsFull);
    }

    user.inventory.remove_one(key);
    user.apply_deltas(&spec.effects);
    user.active_effects
        .push(ActiveEffect::new(spec.name.clone(), spec.effects, spec.duration));

    Ok(ActionOutcome::ItemUsed {
        user: user.name.clone(),
        item: spec.name.clone(),
        gained: spec.effects,
    })
}

/// Trains one attribute for the fixed fee and increment.
pub fn train(
    trainer: &mut Combatant,
    config: &GameConfig,
    skill: Skill,
) -> Result<ActionOutcome, ActionError> {
    check_funds(trainer, config.training_cost)?;

    trainer.coins -= config.training_cost;
    trainer.train(skill, config.training_increment);

    Ok(ActionOutcome::Trained {
        trainer: trainer.name.clone(),
        skill,
        gained: config.training_increment,
        cost: config.training_cost,
    })
}

/// Earns a uniformly random payout within the configured range. Always
/// succeeds.
pub fn work(worker: &mut Combatant, config: &GameConfig, rng: &mut dyn RngOracle) -> ActionOutcome {
    let earned = rng.roll(config.work_payout);
    worker.coins += earned;

    ActionOutcome::Worked {
        worker: worker.name.clone(),
        earned,
    }
}

fn check_funds(actor: &Combatant, cost: u32) -> Result<(), ActionError> {
    if actor.coins < cost {
        return Err(ActionError::InsufficientFunds {
            needed: cost,
            available: actor.coins,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        ConsumableSpec, EffectDuration, RollRange, SkillRequirements, StatDeltas, WeaponSpec,
    };
    use crate::rng::testing::ScriptedRng;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                (
                    "sword".to_owned(),
                    WeaponSpec {
                        name: "Sword".to_owned(),
                        damage: RollRange::new(3, 5),
                        requirements: SkillRequirements {
                            strength: 2,
                            agility: 0,
                            intellect: 0,
                        },
                        cost: 35,
                    },
                ),
                (
                    "greatsword".to_owned(),
                    WeaponSpec {
                        name: "Greatsword".to_owned(),
                        damage: RollRange::new(6, 7),
                        requirements: SkillRequirements {
                            strength: 3,
                            agility: 0,
                            intellect: 2,
                        },
                        cost: 65,
                    },
                ),
            ],
            vec![
                (
                    "health-potion".to_owned(),
                    ConsumableSpec {
                        name: "Health Potion".to_owned(),
                        duration: EffectDuration::Permanent,
                        effects: StatDeltas {
                            hitpoints: 5,
                            ..StatDeltas::default()
                        },
                        cost: 5,
                    },
                ),
                (
                    "strength-potion".to_owned(),
                    ConsumableSpec {
                        name: "Strength Potion".to_owned(),
                        duration: EffectDuration::Turns(3),
                        effects: StatDeltas {
                            strength: 3,
                            ..StatDeltas::default()
                        },
                        cost: 10,
                    },
                ),
            ],
        )
        .unwrap()
    }

    fn combatant(coins: u32) -> Combatant {
        let mut fighter = Combatant::new("Fighter", &GameConfig::default());
        fighter.coins = coins;
        fighter
    }

    #[test]
    fn attack_damage_stays_within_the_weapon_range() {
        use rand::{Rng, SeedableRng, rngs::SmallRng};

        struct DevRng(SmallRng);
        impl RngOracle for DevRng {
            fn draw(&mut self, min: u32, max: u32) -> u32 {
                self.0.gen_range(min..=max)
            }
        }

        let mut rng = DevRng(SmallRng::seed_from_u64(7));
        let mut attacker = combatant(0);
        attacker.weapon = catalog().weapon("greatsword").unwrap().clone();

        for _ in 0..200 {
            let mut defender = combatant(0);
            let outcome = attack(&attacker, &mut defender, &mut rng);
            let ActionOutcome::Attacked { damage, .. } = outcome else {
                panic!("attack must report Attacked");
            };
            assert!(attacker.weapon.damage.contains(damage));
            assert_eq!(defender.hitpoints, 30 - damage as i32);
        }
    }

    #[test]
    fn lethal_attack_reports_the_defeat() {
        let mut rng = ScriptedRng::new(vec![5]);
        let mut attacker = combatant(0);
        attacker.weapon = catalog().weapon("sword").unwrap().clone();
        let mut defender = combatant(0);
        defender.hitpoints = 1;

        let outcome = attack(&attacker, &mut defender, &mut rng);
        assert!(matches!(
            outcome,
            ActionOutcome::Attacked { defeated: true, .. }
        ));
        assert!(!defender.is_alive());
    }

    #[test]
    fn purchase_of_unknown_key_fails_clean() {
        let catalog = catalog();
        let mut buyer = combatant(100);

        let result = purchase(&mut buyer, &catalog, ItemClass::Weapon, "axe");
        assert_eq!(result, Err(ActionError::ItemNotFound));
        assert_eq!(buyer.coins, 100);
        assert_eq!(buyer.weapon, WeaponSpec::unarmed());
    }

    #[test]
    fn purchase_without_funds_changes_nothing() {
        let catalog = catalog();
        let mut buyer = combatant(4);

        let result = purchase(&mut buyer, &catalog, ItemClass::Consumable, "health-potion");
        assert_eq!(
            result,
            Err(ActionError::InsufficientFunds {
                needed: 5,
                available: 4,
            })
        );
        assert_eq!(buyer.coins, 4);
        assert!(buyer.inventory.is_empty());
    }

    #[test]
    fn weapon_gate_accepts_sword_and_rejects_greatsword_at_strength_two() {
        let catalog = catalog();
        let mut buyer = combatant(200);
        buyer.strength = 2;

        let sword = purchase(&mut buyer, &catalog, ItemClass::Weapon, "sword");
        assert!(sword.is_ok());
        assert_eq!(buyer.weapon.name, "Sword");
        assert_eq!(buyer.coins, 165);

        let greatsword = purchase(&mut buyer, &catalog, ItemClass::Weapon, "greatsword");
        assert_eq!(greatsword, Err(ActionError::InsufficientSkill));
        assert_eq!(buyer.weapon.name, "Sword");
        assert_eq!(buyer.coins, 165);
    }

    #[test]
    fn consumable_purchase_stocks_the_inventory() {
        let catalog = catalog();
        let mut buyer = combatant(20);

        purchase(&mut buyer, &catalog, ItemClass::Consumable, "health-potion").unwrap();
        purchase(&mut buyer, &catalog, ItemClass::Consumable, "health-potion").unwrap();

        assert_eq!(buyer.coins, 10);
        assert_eq!(buyer.inventory.quantity("health-potion"), 2);
    }

    #[test]
    fn using_an_unowned_item_fails_clean() {
        let catalog = catalog();
        let mut user = combatant(0);

        let result = use_item(&mut user, &catalog, "strength-potion");
        assert_eq!(result, Err(ActionError::ItemNotFound));
        assert_eq!(user.strength, 0);
        assert!(user.active_effects.is_empty());
    }

    #[test]
    fn using_a_potion_applies_deltas_and_registers_the_effect() {
        let catalog = catalog();
        let mut user = combatant(10);
        purchase(&mut user, &catalog, ItemClass::Consumable, "strength-potion").unwrap();

        use_item(&mut user, &catalog, "strength-potion").unwrap();

        assert_eq!(user.strength, 3);
        assert_eq!(user.inventory.quantity("strength-potion"), 0);
        assert_eq!(user.active_effects.len(), 1);
        assert_eq!(user.active_effects[0].name, "Strength Potion");
    }

    #[test]
    fn training_costs_five_and_gains_two() {
        let config = GameConfig::default();
        let mut trainer = combatant(5);

        train(&mut trainer, &config, Skill::Intellect).unwrap();
        assert_eq!(trainer.intellect, 2);
        assert_eq!(trainer.coins, 0);

        let broke = train(&mut trainer, &config, Skill::Strength);
        assert_eq!(
            broke,
            Err(ActionError::InsufficientFunds {
                needed: 5,
                available: 0,
            })
        );
        assert_eq!(trainer.strength, 0);
    }

    #[test]
    fn work_pays_within_the_configured_range() {
        let config = GameConfig::default();
        let mut rng = ScriptedRng::new(vec![0, 11, 99]);
        let mut worker = combatant(0);

        for _ in 0..3 {
            let before = worker.coins;
            let ActionOutcome::Worked { earned, .. } = work(&mut worker, &config, &mut rng) else {
                panic!("work must report Worked");
            };
            assert!(config.work_payout.contains(earned));
            assert_eq!(worker.coins, before + earned);
        }
    }
}

//! Status and outcome rendering.
//!
//! All match output goes to stdout; log lines go to stderr via `tracing`
//! so they never interleave with the menus.

use duel_core::{ActionOutcome, Catalog, Combatant, ExpiredEffect, ItemClass, StatDeltas};

/// Prints a combatant's status block: stats, coins, equipment, inventory.
pub fn print_status(combatant: &Combatant, catalog: &Catalog) {
    println!("{}:", combatant.name);
    println!("Hitpoints: {}", combatant.hitpoints);
    println!("Strength: {}", combatant.strength);
    println!("Agility: {}", combatant.agility);
    println!("Intellect: {}", combatant.intellect);
    println!("Coins: {}", combatant.coins);
    println!("Equipped Weapon: {}", combatant.weapon.name);
    println!("Inventory:");
    for slot in combatant.inventory.iter() {
        let name = catalog
            .consumable(&slot.key)
            .map_or(slot.key.as_str(), |spec| spec.name.as_str());
        println!("{}: {}", name, slot.quantity);
    }
    println!();
}

/// Prints one expiry report from turn upkeep.
pub fn print_expiry(owner: &Combatant, expired: &ExpiredEffect) {
    println!(
        "{} duration expired and {} lost the following effects:",
        expired.name, owner.name
    );
    print_deltas(&expired.reversed, "-");
}

/// Prints the result of a successfully resolved action.
pub fn print_outcome(outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Attacked {
            attacker,
            defender,
            damage,
            defeated,
        } => {
            println!("{attacker} attacks {defender} for {damage} damage!");
            if *defeated {
                println!("{defender} is dead. {attacker} wins!");
            }
        }
        ActionOutcome::Purchased {
            buyer,
            item,
            cost,
            class,
        } => match class {
            ItemClass::Weapon => {
                println!("{buyer} bought {item} for {cost} gold and equipped it");
            }
            ItemClass::Consumable => println!("{buyer} bought {item} for {cost} gold"),
        },
        ActionOutcome::ItemUsed { user, item, gained } => {
            println!("{user} used {item} and gained the following effects:");
            print_deltas(gained, "+");
        }
        ActionOutcome::Trained {
            trainer,
            skill,
            gained,
            ..
        } => println!("{trainer} trained {skill} and gained {gained} points."),
        ActionOutcome::Worked { worker, earned } => {
            println!("{worker} worked and earned {earned} coins.");
        }
        ActionOutcome::Forfeited { player } => println!("{player} forfeits the game."),
    }
}

fn print_deltas(deltas: &StatDeltas, sign: &str) {
    println!("Hitpoints: {sign}{}", deltas.hitpoints);
    println!("Strength: {sign}{}", deltas.strength);
    println!("Agility: {sign}{}", deltas.agility);
    println!("Intellect: {sign}{}", deltas.intellect);
}

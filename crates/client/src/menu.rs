//! Menu prompts and selection parsing.
//!
//! Translates numbered stdin selections into core [`Action`] values. Every
//! out-of-range or unparsable selector becomes an [`ActionError`] so the
//! driver treats it exactly like a failed resolution: report and
//! re-solicit the same player without consuming the turn.

use std::io::{self, BufRead, Write};

use duel_core::{Action, ActionError, Catalog, Combatant, ItemClass, Skill};

/// Solicits one action selection for the active combatant.
///
/// The outer `io::Result` carries real input failures (closed stdin); the
/// inner result is the selection itself, with invalid input mapped to the
/// matching [`ActionError`].
pub fn solicit_action<R: BufRead>(
    input: &mut R,
    player: &Combatant,
    catalog: &Catalog,
) -> io::Result<Result<Action, ActionError>> {
    println!("\n{}", player.name);
    println!("\nActions:");
    println!("1. Attack");
    println!("2. Buy");
    println!("3. Use");
    println!("4. Work");
    println!("5. Train");
    println!("6. Forfeit");
    prompt("Enter your choice (1-6): ")?;

    let Some(choice) = read_selector(input)? else {
        return Ok(Err(ActionError::InvalidSelection));
    };

    match choice {
        1 => Ok(Ok(Action::Attack)),
        2 => solicit_purchase(input, catalog),
        3 => solicit_use(input, player, catalog),
        4 => Ok(Ok(Action::Work)),
        5 => solicit_training(input),
        6 => Ok(Ok(Action::Forfeit)),
        _ => Ok(Err(ActionError::InvalidSelection)),
    }
}

fn solicit_purchase<R: BufRead>(
    input: &mut R,
    catalog: &Catalog,
) -> io::Result<Result<Action, ActionError>> {
    println!("\nBuy Items:");
    println!("1. Consumables");
    println!("2. Weapons");
    prompt("Enter your choice (1-2): ")?;

    let class = match read_selector(input)? {
        Some(1) => ItemClass::Consumable,
        Some(2) => ItemClass::Weapon,
        _ => return Ok(Err(ActionError::InvalidSelection)),
    };

    let key = match class {
        ItemClass::Consumable => {
            println!("\nBuy Consumables:");
            for (index, (_, spec)) in catalog.consumables().enumerate() {
                println!("{}. {} ({} gold)", index + 1, spec.name, spec.cost);
            }
            prompt("Enter the number of the consumable you want to buy: ")?;
            match read_selector(input)? {
                Some(choice) if choice >= 1 => catalog.consumable_key_at(choice - 1),
                _ => None,
            }
        }
        ItemClass::Weapon => {
            println!("\nBuy Weapons:");
            for (index, (_, spec)) in catalog.weapons().enumerate() {
                println!("{}. {} ({} gold)", index + 1, spec.name, spec.cost);
            }
            prompt("Enter the number of the weapon you want to buy: ")?;
            match read_selector(input)? {
                Some(choice) if choice >= 1 => catalog.weapon_key_at(choice - 1),
                _ => None,
            }
        }
    };

    Ok(match key {
        Some(key) => Ok(Action::Purchase {
            class,
            key: key.to_owned(),
        }),
        None => Err(ActionError::InvalidSelection),
    })
}

fn solicit_use<R: BufRead>(
    input: &mut R,
    player: &Combatant,
    catalog: &Catalog,
) -> io::Result<Result<Action, ActionError>> {
    if player.inventory.is_empty() {
        return Ok(Err(ActionError::ItemNotFound));
    }

    println!("\nSelect an item to use:");
    for (index, slot) in player.inventory.iter().enumerate() {
        let name = catalog
            .consumable(&slot.key)
            .map_or(slot.key.as_str(), |spec| spec.name.as_str());
        println!("{}. {} (x{})", index + 1, name, slot.quantity);
    }
    prompt("Enter the number of the item you want to use: ")?;

    let selected = match read_selector(input)? {
        Some(choice) if choice >= 1 => player.inventory.iter().nth(choice - 1),
        _ => None,
    };

    Ok(match selected {
        Some(slot) => Ok(Action::UseItem {
            key: slot.key.clone(),
        }),
        None => Err(ActionError::InvalidSelection),
    })
}

fn solicit_training<R: BufRead>(input: &mut R) -> io::Result<Result<Action, ActionError>> {
    println!("\nTrain Skill:");
    println!("1. Strength");
    println!("2. Agility");
    println!("3. Intellect");
    prompt("Enter the number of the skill you want to train (1-3): ")?;

    let skill = match read_selector(input)? {
        Some(1) => Skill::Strength,
        Some(2) => Skill::Agility,
        Some(3) => Skill::Intellect,
        _ => return Ok(Err(ActionError::InvalidSkill)),
    };

    Ok(Ok(Action::Train { skill }))
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{text}");
    io::stdout().flush()
}

/// Reads one line and parses it as a menu selector. `Ok(None)` means the
/// line was not a number; a closed stdin is a real error.
fn read_selector<R: BufRead>(input: &mut R) -> io::Result<Option<usize>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while a selection was pending",
        ));
    }
    Ok(line.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::GameConfig;
    use std::io::Cursor;

    fn player() -> Combatant {
        Combatant::new("Gopher 1", &GameConfig::default())
    }

    #[test]
    fn attack_selection_maps_directly() {
        let catalog = duel_content::builtin_catalog();
        let mut input = Cursor::new("1\n");
        let action = solicit_action(&mut input, &player(), &catalog).unwrap();
        assert_eq!(action, Ok(Action::Attack));
    }

    #[test]
    fn weapon_purchase_uses_catalog_menu_order() {
        let catalog = duel_content::builtin_catalog();
        // Buy -> Weapons -> third entry (sword).
        let mut input = Cursor::new("2\n2\n3\n");
        let action = solicit_action(&mut input, &player(), &catalog).unwrap();
        assert_eq!(
            action,
            Ok(Action::Purchase {
                class: ItemClass::Weapon,
                key: "sword".to_owned(),
            })
        );
    }

    #[test]
    fn out_of_range_selectors_do_not_produce_actions() {
        let catalog = duel_content::builtin_catalog();

        let mut input = Cursor::new("9\n");
        let action = solicit_action(&mut input, &player(), &catalog).unwrap();
        assert_eq!(action, Err(ActionError::InvalidSelection));

        // Buy -> Consumables -> index past the menu.
        let mut input = Cursor::new("2\n1\n99\n");
        let action = solicit_action(&mut input, &player(), &catalog).unwrap();
        assert_eq!(action, Err(ActionError::InvalidSelection));

        // Train -> no such skill.
        let mut input = Cursor::new("5\n4\n");
        let action = solicit_action(&mut input, &player(), &catalog).unwrap();
        assert_eq!(action, Err(ActionError::InvalidSkill));
    }

    #[test]
    fn use_menu_lists_only_owned_items() {
        let catalog = duel_content::builtin_catalog();
        let mut owner = player();
        assert!(owner.inventory.add_one("health-potion"));

        let mut input = Cursor::new("3\n1\n");
        let action = solicit_action(&mut input, &mut owner, &catalog).unwrap();
        assert_eq!(
            action,
            Ok(Action::UseItem {
                key: "health-potion".to_owned(),
            })
        );

        // Empty inventory short-circuits to a resolver-style failure.
        let mut input = Cursor::new("3\n");
        let action = solicit_action(&mut input, &player(), &catalog).unwrap();
        assert_eq!(action, Err(ActionError::ItemNotFound));
    }
}

use std::collections::{HashMap, HashSet};

use super::model::World;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.rooms().next().is_none() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    // The player must start somewhere real
    let start = world.player.current_room();
    if world.room(start).is_none() {
        errors.push(ValidationError::new(format!(
            "start room '{}' not found among rooms",
            start
        )));
    }

    // Validate connections
    let mut rooms: Vec<_> = world.rooms().collect();
    rooms.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));

    for room in &rooms {
        let mut exits: Vec<_> = room.connections().collect();
        exits.sort_by(|a, b| a.0.cmp(b.0));

        for (direction, target) in exits {
            if world.room(target).is_none() {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room.id, direction, target
                )));
            }
        }
    }

    // An item name may only have one owner. Repeats inside one owner are
    // fine: lookups take the first match.
    let mut owners: HashMap<String, String> = HashMap::new();
    let mut reported: HashSet<(String, String)> = HashSet::new();
    let held = world
        .player
        .inventory()
        .iter()
        .map(|item| (item.name.as_str(), "inventory".to_string()));
    let placed = rooms.iter().flat_map(|room| {
        room.items()
            .iter()
            .map(move |item| (item.name.as_str(), format!("room '{}'", room.id)))
    });

    for (name, owner) in held.chain(placed) {
        let key = name.to_lowercase();
        match owners.get(&key) {
            Some(first) if *first == owner => {}
            Some(first) => {
                if reported.insert((key.clone(), owner.clone())) {
                    errors.push(ValidationError::new(format!(
                        "item '{}' appears in both {} and {}",
                        name, first, owner
                    )));
                }
            }
            None => {
                owners.insert(key, owner);
            }
        }
    }

    errors
}

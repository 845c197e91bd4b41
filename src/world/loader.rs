use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info};

use super::model::{Item, Player, Room, RoomId, World};
use super::validator::validate_world;
use crate::error::WorldError;

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    start_room: String,
    #[serde(default = "default_player")]
    player: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
    #[serde(default)]
    item: Vec<ItemConfig>, // [[room.item]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Deserialize)]
struct ItemConfig {
    name: String,
    #[serde(default)]
    desc: String,
}

// Helper for serde default
fn default_player() -> String {
    "Warrior".to_string()
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldError> {
    let contents = fs::read_to_string(path)?;
    let world = load_world_from_str(&contents)?;
    info!("loaded world from {}", path.display());
    Ok(world)
}

/// Public API: load a world from TOML text.
pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    if world_file.world.start_room.trim().is_empty() {
        return Err(WorldError::Invalid(
            "world.start_room may not be empty".to_string(),
        ));
    }
    if world_file.world.player.trim().is_empty() {
        return Err(WorldError::Invalid(
            "world.player may not be empty".to_string(),
        ));
    }

    let player = Player::new(
        world_file.world.player.trim(),
        RoomId::new(world_file.world.start_room.trim()),
    );
    let mut world = World::new(player);
    let mut seen: HashSet<String> = HashSet::new();

    for room_cfg in world_file.room {
        if !seen.insert(room_cfg.id.clone()) {
            return Err(WorldError::DuplicateRoom(room_cfg.id));
        }

        let mut room = Room::new(
            RoomId::new(room_cfg.id),
            room_cfg.name,
            normalize_multiline_desc(&room_cfg.desc),
        );

        // Directions are matched against lower-cased input.
        for exit in room_cfg.exit {
            room.add_connection(
                exit.direction.trim().to_lowercase(),
                RoomId::new(exit.target.trim()),
            );
        }

        for item in room_cfg.item {
            room.add_item(Item::new(
                item.name.trim(),
                normalize_multiline_desc(&item.desc),
            ));
        }

        debug!(
            "room '{}' with {} item(s)",
            room.id,
            room.items().len()
        );
        world.add_room(room);
    }

    let errors = validate_world(&world);
    if !errors.is_empty() {
        return Err(WorldError::Validation(errors));
    }

    Ok(world)
}

fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;
    let mut first_text_seen = false;

    for line in raw.lines() {
        // Indentation in TOML never reaches the player.
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !first_text_seen {
            result.push_str(trimmed);
            first_text_seen = true;
        } else {
            match pending_blank_lines {
                // Wrapped line: single newline in TOML becomes a space
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
            result.push_str(trimmed);
        }

        pending_blank_lines = 0;
    }

    result
}

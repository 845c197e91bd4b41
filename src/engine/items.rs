use log::{info, trace};

use crate::engine::output::Output;
use crate::logutil::escape_log;
use crate::world::{self, TakeError};

pub fn handle_inventory(out: &mut Output, world: &world::World) {
    let carried = world.player.inventory();

    if carried.is_empty() {
        out.say("Your inventory is empty.");
        return;
    }

    // Pickup order, not alphabetical.
    out.say("You are carrying:");
    for item in carried {
        out.say(format!("- {}", item.name));
    }
}

pub fn handle_pick_up(out: &mut Output, world: &mut world::World, target_name: &str) {
    match world.take_item(target_name) {
        Ok(item) => {
            info!("picked up '{}'", escape_log(&item.name));
            out.say(format!("You picked up {}.", item.name));
        }
        Err(TakeError::NotHere { name }) => {
            trace!("no item '{}' in room", escape_log(&name));
            out.reject(format!("No item named {} here!", name));
        }
    }
}

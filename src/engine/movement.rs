use log::{info, trace, warn};

use crate::engine::output::Output;
use crate::engine::render::render_room;
use crate::logutil::escape_log;
use crate::world::{self, MoveError};

pub const CANT_GO: &str = "You can't go that way!";

/// Moves the player along the exit named `direction`, then describes the new room.
pub fn handle_move(out: &mut Output, world: &mut world::World, direction: &str) {
    match world.move_player(direction) {
        Ok(room) => {
            info!("player moved {} to '{}'", escape_log(direction), room.id);
            out.say(format!("You moved to: {}", room.name));
            render_room(out, room);
        }
        Err(MoveError::NoExit { direction }) => {
            trace!("no exit '{}'", escape_log(&direction));
            out.reject(CANT_GO);
        }
        Err(err @ MoveError::MissingRoom { .. }) => {
            warn!("{err}");
            out.reject(CANT_GO);
        }
    }
}

pub mod bootstrap;
mod loader;
mod model;
mod validator;

pub use bootstrap::cave_world;
pub use loader::{load_world_from_file, load_world_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Item, MoveError, Player, Room, RoomId, TakeError, World, find_item_index};
pub use validator::{ValidationError, validate_world};

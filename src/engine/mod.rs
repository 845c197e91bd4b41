mod command;
mod help;
mod items;
mod movement;
mod output;
mod render;

pub use command::{Command, parse_command};
pub use help::show_help;
pub use items::{handle_inventory, handle_pick_up};
pub use movement::{CANT_GO, handle_move};
pub use output::{Output, OutputBlock};
pub use render::render_room;

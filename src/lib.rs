pub mod engine;
pub mod error;
pub mod logutil;
pub mod world;

use std::io::{self, BufRead};

use log::debug;

use engine::{
    Command, Output, handle_inventory, handle_move, handle_pick_up, parse_command, render_room,
    show_help,
};
use world::World;

pub use error::WorldError;
pub use world::{cave_world, load_world_from_file, load_world_from_str};

pub const WELCOME: &str = "Welcome to the game! Type 'help' for commands.";
pub const PROMPT: &str = "> ";
pub const GOODBYE: &str = "Goodbye!";
pub const UNKNOWN_COMMAND: &str = "Unknown command! Type 'help' for a list of commands.";
pub const INVALID_PICK: &str = "Invalid command! Use 'pick up <item>'.";

/// Reads one line of raw input. Bytes that are not UTF-8 become U+FFFD so a
/// bad line is just an unknown command. `None` means the input is exhausted.
pub fn read_input_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Whether the game loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Running,
    Stopped,
}

pub struct GameState {
    pub world: World,
}

impl GameState {
    pub fn new(world: World) -> Self {
        GameState { world }
    }

    /// Process a single player input; returns the output and whether to keep going.
    pub fn step(&mut self, input: &str) -> (Output, Flow) {
        let mut out = Output::new();
        let command = parse_command(input);
        debug!("dispatching {:?}", command);

        let flow = match command {
            Command::Look => {
                match self.world.current_room() {
                    Some(room) => render_room(&mut out, room),
                    None => out.reject(format!(
                        "Error: you are in an unknown room '{}'",
                        self.world.player.current_room()
                    )),
                }
                Flow::Running
            }
            Command::Move(direction) => {
                handle_move(&mut out, &mut self.world, &direction);
                Flow::Running
            }
            Command::PickUp(name) => {
                handle_pick_up(&mut out, &mut self.world, &name);
                Flow::Running
            }
            Command::InvalidPick => {
                out.reject(INVALID_PICK);
                Flow::Running
            }
            Command::Inventory => {
                handle_inventory(&mut out, &self.world);
                Flow::Running
            }
            Command::Help => {
                show_help(&mut out);
                Flow::Running
            }
            Command::Quit => {
                out.say(GOODBYE);
                Flow::Stopped
            }
            Command::Unknown(_) => {
                out.reject(UNKNOWN_COMMAND);
                Flow::Running
            }
        };

        (out, flow)
    }

    /// Input ran out: treated as an implicit quit.
    pub fn end_of_input(&mut self) -> (Output, Flow) {
        debug!("end of input");
        let mut out = Output::new();
        out.say(GOODBYE);
        (out, Flow::Stopped)
    }
}

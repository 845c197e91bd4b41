use crate::engine::output::Output;

const HELP_LINES: &[&str] = &[
    "Available commands:",
    "look - Describe the current room.",
    "move <direction> - Move in a direction (forward, back, left, right).",
    "pick up <item> - Pick up an item.",
    "inventory - Show items in your inventory.",
    "help - Show this help menu.",
    "quit / exit - End the game.",
];

pub fn show_help(out: &mut Output) {
    for line in HELP_LINES {
        out.say(*line);
    }
}

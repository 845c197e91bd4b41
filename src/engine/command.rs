/// One parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Look,
    Move(String),
    PickUp(String),
    /// `pick` without a following `up <item>`.
    InvalidPick,
    Inventory,
    Help,
    Quit,
    Unknown(String),
}

/// Splits on the first whitespace run. The remainder keeps its inner spacing.
fn split_first_word(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], s[idx..].trim_start()),
        None => (s, ""),
    }
}

/// Normalizes a raw input line (trim, lower-case) and maps it to a command.
pub fn parse_command(line: &str) -> Command {
    let input = line.trim().to_lowercase();
    let (verb, rest) = split_first_word(&input);

    match verb {
        "look" => Command::Look,
        "move" => Command::Move(rest.to_string()),
        "pick" => match split_first_word(rest) {
            ("up", item) if !item.is_empty() => Command::PickUp(item.to_string()),
            _ => Command::InvalidPick,
        },
        "inventory" => Command::Inventory,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(verb.to_string()),
    }
}

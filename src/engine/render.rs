use crate::engine::output::Output;
use crate::world;

pub fn render_room(out: &mut Output, room: &world::Room) {
    out.say(format!("Room: {}", room.name));
    // The description line is printed even when empty.
    out.line(room.description.trim());
    out.say(format!("Items here: {}", room.list_items()));
}

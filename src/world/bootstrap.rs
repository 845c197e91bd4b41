use super::model::{Item, Player, Room, RoomId, World};

pub const CAVE_ENTRANCE: &str = "cave_entrance";
pub const DARK_TUNNEL: &str = "dark_tunnel";

/// The built-in two-room cave used when no world file is given.
pub fn cave_world() -> World {
    let entrance = RoomId::new(CAVE_ENTRANCE);
    let tunnel = RoomId::new(DARK_TUNNEL);

    let mut world = World::new(Player::new("Warrior", entrance.clone()));

    world.add_room(Room::new(
        entrance.clone(),
        "Cave Entrance",
        "A gloomy entrance to an underground cave.",
    ));
    world.add_room(Room::new(
        tunnel.clone(),
        "Dark Tunnel",
        "A narrow tunnel with eerie echoes.",
    ));

    world.connect(&entrance, "forward", &tunnel);
    world.connect(&tunnel, "back", &entrance);

    world.place_item(
        &entrance,
        Item::new("axe", "A heavy battle axe with a sharp edge."),
    );
    world.place_item(
        &tunnel,
        Item::new("helmet", "A reinforced iron helmet, slightly dented."),
    );

    world
}

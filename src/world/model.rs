use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Key of a room in the world's room table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        RoomId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub description: String,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Item {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    connections: HashMap<String, RoomId>,
    items: Vec<Item>,
}

impl Room {
    pub fn new(id: RoomId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Room {
            id,
            name: name.into(),
            description: description.into(),
            connections: HashMap::new(),
            items: Vec::new(),
        }
    }

    /// Adds (or replaces) the one-way passage leaving this room by `direction`.
    pub fn add_connection(&mut self, direction: impl Into<String>, target: RoomId) {
        self.connections.insert(direction.into(), target);
    }

    pub fn connection(&self, direction: &str) -> Option<&RoomId> {
        self.connections.get(direction)
    }

    pub fn connections(&self) -> impl Iterator<Item = (&str, &RoomId)> {
        self.connections.iter().map(|(d, t)| (d.as_str(), t))
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Case-insensitive lookup; the first match wins.
    pub fn item(&self, name: &str) -> Option<&Item> {
        find_item_index(&self.items, name).map(|idx| &self.items[idx])
    }

    fn remove_item(&mut self, name: &str) -> Option<Item> {
        find_item_index(&self.items, name).map(|idx| self.items.remove(idx))
    }

    /// Item names joined with ", ", or "No items." for an empty room.
    pub fn list_items(&self) -> String {
        if self.items.is_empty() {
            return "No items.".to_string();
        }
        self.items
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

#[derive(Debug)]
pub struct Player {
    pub name: String,
    current_room: RoomId,
    inventory: Vec<Item>,
}

impl Player {
    pub fn new(name: impl Into<String>, start_room: RoomId) -> Self {
        Player {
            name: name.into(),
            current_room: start_room,
            inventory: Vec::new(),
        }
    }

    pub fn current_room(&self) -> &RoomId {
        &self.current_room
    }

    /// Held items in pickup order.
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }
}

/// Index of the first item whose name equals `name`, ignoring case.
pub fn find_item_index(items: &[Item], name: &str) -> Option<usize> {
    let wanted = name.to_lowercase();
    items.iter().position(|i| i.name.to_lowercase() == wanted)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no exit '{direction}' here")]
    NoExit { direction: String },

    #[error("exit leads to unknown room '{target}'")]
    MissingRoom { target: RoomId },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TakeError {
    #[error("no item named '{name}' here")]
    NotHere { name: String },
}

/// Runtime world: every room plus the one player walking through them.
#[derive(Debug)]
pub struct World {
    rooms: HashMap<RoomId, Room>,
    pub player: Player,
}

impl World {
    pub fn new(player: Player) -> Self {
        World {
            rooms: HashMap::new(),
            player,
        }
    }

    /// Inserts a room, returning the room it replaced if the id was taken.
    pub fn add_room(&mut self, room: Room) -> Option<Room> {
        self.rooms.insert(room.id.clone(), room)
    }

    /// Wires a one-way passage. Returns false if `from` is not a known room.
    pub fn connect(&mut self, from: &RoomId, direction: impl Into<String>, to: &RoomId) -> bool {
        match self.rooms.get_mut(from) {
            Some(room) => {
                room.add_connection(direction, to.clone());
                true
            }
            None => false,
        }
    }

    /// Drops an item into a room. Returns false if the room is unknown.
    pub fn place_item(&mut self, room_id: &RoomId, item: Item) -> bool {
        match self.rooms.get_mut(room_id) {
            Some(room) => {
                room.add_item(item);
                true
            }
            None => false,
        }
    }

    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.rooms.get(&self.player.current_room)
    }

    /// Follows the current room's exit named `direction` exactly.
    /// The player only moves if the target room exists.
    pub fn move_player(&mut self, direction: &str) -> Result<&Room, MoveError> {
        let target = self
            .current_room()
            .and_then(|room| room.connection(direction))
            .cloned()
            .ok_or_else(|| MoveError::NoExit {
                direction: direction.to_string(),
            })?;

        if !self.rooms.contains_key(&target) {
            return Err(MoveError::MissingRoom { target });
        }

        self.player.current_room = target;
        self.current_room()
            .ok_or_else(|| MoveError::MissingRoom {
                target: self.player.current_room.clone(),
            })
    }

    /// Moves the named item from the current room to the end of the inventory.
    pub fn take_item(&mut self, name: &str) -> Result<&Item, TakeError> {
        let not_here = || TakeError::NotHere {
            name: name.to_string(),
        };

        let item = self
            .rooms
            .get_mut(&self.player.current_room)
            .and_then(|room| room.remove_item(name))
            .ok_or_else(not_here)?;

        self.player.add_item(item);
        self.player.inventory.last().ok_or_else(not_here)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> World {
        let a = RoomId::new("a");
        let b = RoomId::new("b");
        let mut world = World::new(Player::new("Tester", a.clone()));
        world.add_room(Room::new(a.clone(), "Room A", "First."));
        world.add_room(Room::new(b.clone(), "Room B", "Second."));
        world.connect(&a, "north", &b);
        world.place_item(&a, Item::new("Lantern", "Brass and dented."));
        world.place_item(&a, Item::new("rope", "Coiled."));
        world
    }

    #[test]
    fn find_item_ignores_case_and_prefers_first() {
        let items = vec![
            Item::new("Key", "one"),
            Item::new("key", "two"),
            Item::new("coin", "three"),
        ];
        assert_eq!(find_item_index(&items, "KEY"), Some(0));
        assert_eq!(find_item_index(&items, "coin"), Some(2));
        assert_eq!(find_item_index(&items, "sword"), None);
    }

    #[test]
    fn list_items_joins_names_or_reports_empty() {
        let mut room = Room::new(RoomId::new("r"), "R", "d");
        assert_eq!(room.list_items(), "No items.");
        room.add_item(Item::new("axe", "sharp"));
        room.add_item(Item::new("Shield", "round"));
        assert_eq!(room.list_items(), "axe, Shield");
    }

    #[test]
    fn one_way_connections_are_allowed() {
        let mut world = two_rooms();
        assert!(world.move_player("north").is_ok());
        assert_eq!(
            world.move_player("south").err(),
            Some(MoveError::NoExit {
                direction: "south".into()
            })
        );
        assert_eq!(world.player.current_room().as_str(), "b");
    }

    #[test]
    fn direction_lookup_is_exact() {
        let mut world = two_rooms();
        assert!(world.move_player("North").is_err());
        assert!(world.move_player("north ").is_err());
        assert_eq!(world.player.current_room().as_str(), "a");
    }

    #[test]
    fn dangling_exit_leaves_player_in_place() {
        let mut world = two_rooms();
        let a = RoomId::new("a");
        world.connect(&a, "down", &RoomId::new("nowhere"));
        assert_eq!(
            world.move_player("down").err(),
            Some(MoveError::MissingRoom {
                target: RoomId::new("nowhere")
            })
        );
        assert_eq!(world.player.current_room(), &a);
    }

    #[test]
    fn take_item_transfers_ownership() {
        let mut world = two_rooms();
        let taken = world.take_item("lantern").unwrap().name.clone();
        assert_eq!(taken, "Lantern");

        let room = world.current_room().unwrap();
        assert!(room.item("lantern").is_none());
        assert_eq!(room.list_items(), "rope");
        assert_eq!(world.player.inventory().len(), 1);
    }

    #[test]
    fn failed_take_changes_nothing() {
        let mut world = two_rooms();
        assert_eq!(
            world.take_item("sword"),
            Err(TakeError::NotHere {
                name: "sword".into()
            })
        );
        assert_eq!(world.current_room().unwrap().items().len(), 2);
        assert!(world.player.inventory().is_empty());
    }

    #[test]
    fn connect_and_place_reject_unknown_rooms() {
        let mut world = two_rooms();
        let ghost = RoomId::new("ghost");
        assert!(!world.connect(&ghost, "up", &RoomId::new("a")));
        assert!(!world.place_item(&ghost, Item::new("x", "y")));
    }
}

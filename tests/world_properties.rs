//! Property tests for movement and item transfer invariants.
use cave_crawl::engine::CANT_GO;
use cave_crawl::world::{Item, Player, Room, RoomId, World};
use cave_crawl::{Flow, GameState, cave_world};
use proptest::prelude::*;

fn storeroom(names: &[String]) -> World {
    let id = RoomId::new("store");
    let mut world = World::new(Player::new("Keeper", id.clone()));
    world.add_room(Room::new(id.clone(), "Storeroom", "Crates everywhere."));
    for name in names {
        world.place_item(&id, Item::new(name.clone(), "A thing."));
    }
    world
}

/// Flips the case of every other character.
fn scramble_case(s: &str) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn unknown_directions_never_move_the_player(dir in "[a-z]{1,10}") {
        prop_assume!(dir != "forward");
        let mut state = GameState::new(cave_world());
        let before = state.world.player.current_room().clone();

        let (out, flow) = state.step(&format!("move {}", dir));
        prop_assert_eq!(out.lines(), vec![CANT_GO]);
        prop_assert_eq!(flow, Flow::Running);
        prop_assert_eq!(state.world.player.current_room(), &before);
    }

    #[test]
    fn inventory_order_is_pickup_order(
        names in proptest::collection::hash_set("[a-z]{3,8}", 1..8),
        seed in any::<u64>(),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        // Pick them up in a rotated order so it differs from placement order.
        let shift = (seed as usize) % names.len();
        let mut order = names.clone();
        order.rotate_left(shift);

        let mut state = GameState::new(storeroom(&names));
        for name in &order {
            let (out, _) = state.step(&format!("pick up {}", scramble_case(name)));
            let expected = format!("You picked up {}.", name);
            prop_assert_eq!(out.lines(), vec![expected.as_str()]);
        }

        let held: Vec<&str> = state
            .world
            .player
            .inventory()
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        let wanted: Vec<&str> = order.iter().map(String::as_str).collect();
        prop_assert_eq!(held, wanted);

        let (out, _) = state.step("inventory");
        let listed: Vec<String> = out.lines().into_iter().skip(1).map(String::from).collect();
        let expected: Vec<String> = order.iter().map(|n| format!("- {}", n)).collect();
        prop_assert_eq!(listed, expected);

        prop_assert!(state.world.current_room().unwrap().items().is_empty());
    }

    #[test]
    fn items_live_in_exactly_one_place(
        names in proptest::collection::hash_set("[a-z]{3,8}", 1..6),
        take in proptest::collection::vec(any::<bool>(), 6),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let mut state = GameState::new(storeroom(&names));

        for (name, &grab) in names.iter().zip(take.iter()) {
            if grab {
                state.step(&format!("pick up {}", name));
            }
        }

        let room = state.world.current_room().unwrap();
        for name in &names {
            let in_room = room.item(name).is_some();
            let held = state
                .world
                .player
                .inventory()
                .iter()
                .any(|i| &i.name == name);
            prop_assert!(in_room != held, "item {} in room={} held={}", name, in_room, held);
        }
    }

    #[test]
    fn quit_always_stops(history in proptest::collection::vec(
        prop_oneof![
            Just("look"),
            Just("move forward"),
            Just("move back"),
            Just("pick up axe"),
            Just("pick up helmet"),
            Just("inventory"),
            Just("help"),
            Just("dance"),
        ],
        0..12,
    ), word in prop_oneof![Just("quit"), Just("exit")]) {
        let mut state = GameState::new(cave_world());
        for input in history {
            let (_, flow) = state.step(input);
            prop_assert_eq!(flow, Flow::Running);
        }
        let (out, flow) = state.step(word);
        prop_assert_eq!(out.lines(), vec!["Goodbye!"]);
        prop_assert_eq!(flow, Flow::Stopped);
    }
}

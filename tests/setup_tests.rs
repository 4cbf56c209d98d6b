use battleship::setup::{place_fleet_randomly, place_items, populate_player_items};
use battleship::{
    attempt_place, Board, BoardError, FleetSetup, MatchConfig, Orientation, PlacementError,
    SetupProgress, Ship, ShipKind, FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_attempt_place_uses_requested_orientation() {
    let mut board = Board::new();
    let ship = Ship::vessel(3, Orientation::Horizontal).unwrap();
    assert!(attempt_place(&mut board, ship, 9, 0, Orientation::Vertical));
    let (origin, placed) = board.ships().next().unwrap();
    assert_eq!(origin, (9, 0));
    assert_eq!(placed.orientation(), Orientation::Vertical);
    assert!(board.cell(9, 2).unwrap().occupant != battleship::Occupant::Empty);
}

#[test]
fn test_attempt_place_refuses_silently() {
    let mut board = Board::new();
    let ship = Ship::vessel(4, Orientation::Vertical).unwrap();
    assert!(!attempt_place(&mut board, ship, 8, 0, Orientation::Horizontal));
    assert!(attempt_place(&mut board, ship, 0, 0, Orientation::Horizontal));
    assert!(!attempt_place(&mut board, ship, 0, 1, Orientation::Horizontal));
    assert_eq!(board.ships().count(), 1);
}

#[test]
fn test_fleet_setup_progression() {
    let mut board = Board::new();
    let mut setup = FleetSetup::new();
    assert_eq!(setup.next_length(), Some(5));

    let err = setup
        .place_next(&mut board, 7, 0, Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, BoardError::Placement(PlacementError::OutOfBounds));
    assert_eq!(setup.placed(), 0);

    for (i, y) in [0, 2, 4, 6].into_iter().enumerate() {
        assert_eq!(
            setup.place_next(&mut board, 0, y, Orientation::Horizontal),
            Ok(SetupProgress::Next(FLEET[i + 1]))
        );
    }
    assert!(!setup.is_complete());
    assert_eq!(
        setup.place_next(&mut board, 9, 9, Orientation::Vertical),
        Ok(SetupProgress::Complete)
    );
    assert!(setup.is_complete());
    assert_eq!(setup.next_length(), None);
    assert_eq!(board.ships_remaining(), 5);
}

#[test]
fn test_random_fleet_is_complete() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut board = Board::new();
    place_fleet_randomly(&mut rng, &mut board).unwrap();
    let mut lengths: Vec<usize> = board.ships().map(|(_, s)| s.length()).collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(lengths, FLEET.to_vec());
    assert_eq!(board.ships_remaining(), 5);
}

#[test]
fn test_player_board_gets_power_ups_only() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new();
    place_fleet_randomly(&mut rng, &mut board).unwrap();
    populate_player_items(&mut rng, &mut board, &MatchConfig::default()).unwrap();
    assert_eq!(board.count_kind(ShipKind::PowerUp), 3);
    assert_eq!(board.count_kind(ShipKind::Bomb), 0);
    assert_eq!(board.ships_remaining(), 5);
}

#[test]
fn test_uneven_item_counts() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut board = Board::new();
    place_items(&mut rng, &mut board, 1, 4).unwrap();
    assert_eq!(board.count_kind(ShipKind::Bomb), 1);
    assert_eq!(board.count_kind(ShipKind::PowerUp), 4);
    assert_eq!(board.ships_remaining(), 0);
}

#[test]
fn test_overcrowded_board_gives_up() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut board = Board::new();
    // a checkerboard of 50 single cells leaves no legal spot for anything
    for y in 0..10 {
        for x in 0..10 {
            if (x + y) % 2 == 0 {
                board.place(Ship::power_up(), x, y).unwrap();
            }
        }
    }
    assert_eq!(
        place_items(&mut rng, &mut board, 1, 0),
        Err(BoardError::UnableToPlace)
    );
}

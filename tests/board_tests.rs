use battleship::{
    Board, BoardError, Occupant, Orientation, PlacementError, Ship, ShipKind, ShotResult,
};

fn board_with_cruiser() -> Board {
    let mut board = Board::new();
    let ship = Ship::vessel(3, Orientation::Horizontal).unwrap();
    board.place(ship, 0, 0).unwrap();
    board
}

#[test]
fn test_place_occupies_contiguous_run() {
    let board = board_with_cruiser();
    for x in 0..3 {
        assert_eq!(
            board.cell(x, 0).unwrap().occupant,
            Occupant::ShipSegment(0)
        );
    }
    assert_eq!(board.cell(3, 0).unwrap().occupant, Occupant::Empty);
    assert_eq!(board.cell(0, 1).unwrap().occupant, Occupant::Empty);
    assert_eq!(board.ships_remaining(), 1);
}

#[test]
fn test_adjacent_placement_refused() {
    let board = board_with_cruiser();
    let destroyer = Ship::vessel(2, Orientation::Horizontal).unwrap();
    // overlapping the cruiser's last segment
    assert!(!board.can_place(&destroyer, 2, 0));
    // touching its end
    assert!(!board.can_place(&destroyer, 3, 0));
    // touching its side
    assert_eq!(
        board.check_placement(&destroyer, 1, 1),
        Err(PlacementError::Overlap)
    );
    // one cell of water in between is fine
    assert!(board.can_place(&destroyer, 4, 0));
}

#[test]
fn test_diagonal_contact_allowed() {
    let mut board = board_with_cruiser();
    let single = Ship::vessel(1, Orientation::Vertical).unwrap();
    assert!(board.can_place(&single, 3, 1));
    assert!(board.place(single, 3, 1).is_ok());
}

#[test]
fn test_out_of_bounds_placement() {
    let board = Board::new();
    let carrier = Ship::vessel(5, Orientation::Vertical).unwrap();
    assert_eq!(
        board.check_placement(&carrier, 0, 6),
        Err(PlacementError::OutOfBounds)
    );
    assert!(board.can_place(&carrier, 0, 5));
    assert_eq!(
        board.check_placement(&carrier, 10, 0),
        Err(PlacementError::OutOfBounds)
    );
}

#[test]
fn test_refused_place_leaves_board_unchanged() {
    let mut board = board_with_cruiser();
    let destroyer = Ship::vessel(2, Orientation::Vertical).unwrap();
    assert_eq!(board.place(destroyer, 1, 1), Err(PlacementError::Overlap));
    assert_eq!(board.cell(1, 2).unwrap().occupant, Occupant::Empty);
    assert_eq!(board.ships().count(), 1);
    assert_eq!(board.ships_remaining(), 1);
}

#[test]
fn test_manual_place_and_fire_sink() {
    let mut board = board_with_cruiser();
    assert_eq!(board.fire(0, 0).unwrap(), ShotResult::Hit);
    assert_eq!(board.fire(1, 0).unwrap(), ShotResult::Hit);
    assert_eq!(board.ships_remaining(), 1);
    assert_eq!(board.fire(2, 0).unwrap(), ShotResult::Sunk);
    assert_eq!(board.ships_remaining(), 0);
    assert!(board.ship(0).unwrap().is_sunk());
}

#[test]
fn test_repeat_fire_is_rejected_without_damage() {
    let mut board = board_with_cruiser();
    assert_eq!(board.fire(0, 0).unwrap(), ShotResult::Hit);
    assert_eq!(
        board.fire(0, 0).unwrap_err(),
        BoardError::AlreadyFired { x: 0, y: 0 }
    );
    assert_eq!(board.ship(0).unwrap().remaining_hits(), 2);
    assert_eq!(board.ships_remaining(), 1);
}

#[test]
fn test_miss_then_repeat() {
    let mut board = board_with_cruiser();
    assert!(!board.cell(5, 5).unwrap().was_fired);
    assert_eq!(board.fire(5, 5).unwrap(), ShotResult::Miss);
    assert!(board.cell(5, 5).unwrap().was_fired);
    let unfired = board.unfired_count();
    assert!(matches!(
        board.fire(5, 5),
        Err(BoardError::AlreadyFired { x: 5, y: 5 })
    ));
    assert_eq!(board.unfired_count(), unfired);
    assert!(board.cell(5, 5).unwrap().was_fired);
}

#[test]
fn test_fire_off_grid() {
    let mut board = Board::new();
    assert_eq!(
        board.fire(10, 3).unwrap_err(),
        BoardError::InvalidCoordinate { x: 10, y: 3 }
    );
    assert_eq!(board.unfired_count(), 100);
}

#[test]
fn test_items_resolve_without_damage() {
    let mut board = board_with_cruiser();
    board.place(Ship::bomb(), 5, 5).unwrap();
    board.place(Ship::power_up(), 7, 7).unwrap();
    assert_eq!(board.ships_remaining(), 1);
    assert_eq!(board.count_kind(ShipKind::Bomb), 1);
    assert_eq!(board.count_kind(ShipKind::PowerUp), 1);

    assert_eq!(board.fire(5, 5).unwrap(), ShotResult::Bomb);
    assert_eq!(board.fire(7, 7).unwrap(), ShotResult::PowerUp);
    assert_eq!(board.ships_remaining(), 1);
}

#[test]
fn test_items_block_neighbouring_ships() {
    let mut board = Board::new();
    board.place(Ship::power_up(), 4, 4).unwrap();
    let ship = Ship::vessel(3, Orientation::Vertical).unwrap();
    assert!(!board.can_place(&ship, 4, 5));
    assert!(!board.can_place(&ship, 3, 2));
    assert!(board.can_place(&ship, 3, 5));
}

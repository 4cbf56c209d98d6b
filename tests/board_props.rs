use battleship::setup::populate_opponent_board;
use battleship::{Board, BoardError, MatchConfig, Orientation, Ship, ShipKind, BOARD_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

const N: usize = BOARD_SIZE as usize;

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    populate_opponent_board(&mut rng, &mut board, &MatchConfig::default()).unwrap();
    board
}

fn afloat_vessels(board: &Board) -> usize {
    board
        .ships()
        .filter(|(_, s)| s.kind() == ShipKind::Vessel && s.remaining_hits() > 0)
        .count()
}

fn touches(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1) <= 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ships_remaining_tracks_afloat_vessels(
        seed in any::<u64>(),
        shots in prop::collection::vec((0..N, 0..N), 0..150),
    ) {
        let mut board = random_board(seed);
        prop_assert_eq!(board.ships_remaining(), 5);
        let mut last = board.ships_remaining();
        for (x, y) in shots {
            let _ = board.fire(x, y);
            let now = board.ships_remaining();
            prop_assert!(now <= last);
            prop_assert_eq!(now, afloat_vessels(&board));
            last = now;
        }
    }

    #[test]
    fn can_place_implies_place(
        seed in any::<u64>(),
        len in 1..=5usize,
        x in 0..N,
        y in 0..N,
        horizontal in any::<bool>(),
    ) {
        let mut board = random_board(seed);
        let orientation = if horizontal { Orientation::Horizontal } else { Orientation::Vertical };
        let ship = Ship::vessel(len, orientation).unwrap();
        if board.can_place(&ship, x, y) {
            prop_assert!(board.place(ship, x, y).is_ok());
        } else {
            let before = board.ships().count();
            prop_assert!(board.place(ship, x, y).is_err());
            prop_assert_eq!(board.ships().count(), before);
        }
    }

    #[test]
    fn placed_items_never_touch(seed in any::<u64>()) {
        let board = random_board(seed);
        let cells: Vec<Vec<(usize, usize)>> = board
            .ships()
            .map(|((x, y), ship)| ship.cells(x, y).collect())
            .collect();
        for (i, a) in cells.iter().enumerate() {
            for b in cells.iter().skip(i + 1) {
                for &ca in a {
                    for &cb in b {
                        prop_assert!(!touches(ca, cb), "{:?} touches {:?}", ca, cb);
                    }
                }
            }
        }
    }

    #[test]
    fn repeat_fire_never_double_damages(seed in any::<u64>(), x in 0..N, y in 0..N) {
        let mut board = random_board(seed);
        board.fire(x, y).unwrap();
        let hits_after: Vec<usize> = board.ships().map(|(_, s)| s.remaining_hits()).collect();
        let remaining = board.ships_remaining();
        prop_assert_eq!(board.fire(x, y).unwrap_err(), BoardError::AlreadyFired { x, y });
        let hits_again: Vec<usize> = board.ships().map(|(_, s)| s.remaining_hits()).collect();
        prop_assert_eq!(hits_after, hits_again);
        prop_assert_eq!(board.ships_remaining(), remaining);
    }
}

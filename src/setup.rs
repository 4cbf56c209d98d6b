//! Fleet placement for both sides.
//!
//! The player places [`FLEET`] one ship at a time, longest first. The
//! opponent's fleet and both boards' items are scattered at random once the
//! player is done.

use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{MatchConfig, FLEET, NUM_SHIPS};
use crate::ship::{Orientation, Ship};

/// Try to place `ship` at (`x`, `y`) with `orientation`; `true` on success.
pub fn attempt_place(
    board: &mut Board,
    ship: Ship,
    x: usize,
    y: usize,
    orientation: Orientation,
) -> bool {
    let ship = match Ship::new(ship.length(), orientation, ship.kind()) {
        Ok(ship) => ship,
        Err(_) => return false,
    };
    board.place(ship, x, y).is_ok()
}

/// Where the player's fleet placement stands after a successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupProgress {
    /// More ships to go; carries the next length.
    Next(usize),
    Complete,
}

/// Countdown over the fleet lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleetSetup {
    placed: usize,
}

impl FleetSetup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the next ship to place, or `None` once the fleet is down.
    pub fn next_length(&self) -> Option<usize> {
        FLEET.get(self.placed).copied()
    }

    pub fn placed(&self) -> usize {
        self.placed
    }

    pub fn is_complete(&self) -> bool {
        self.placed >= NUM_SHIPS
    }

    /// Place the next fleet ship. A refused placement leaves the countdown
    /// where it was.
    pub fn place_next(
        &mut self,
        board: &mut Board,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<SetupProgress, BoardError> {
        let Some(length) = self.next_length() else {
            return Ok(SetupProgress::Complete);
        };
        let ship = Ship::vessel(length, orientation)?;
        board.place(ship, x, y)?;
        self.placed += 1;
        Ok(match self.next_length() {
            Some(next) => SetupProgress::Next(next),
            None => SetupProgress::Complete,
        })
    }
}

fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Place the whole fleet at random legal positions with random orientation.
pub fn place_fleet_randomly<R: Rng + ?Sized>(rng: &mut R, board: &mut Board) -> Result<(), BoardError> {
    for &length in FLEET.iter() {
        let ship = Ship::vessel(length, random_orientation(rng))?;
        place_randomly(rng, board, ship)?;
    }
    Ok(())
}

fn place_randomly<R: Rng + ?Sized>(rng: &mut R, board: &mut Board, ship: Ship) -> Result<(), BoardError> {
    let (x, y) = board.random_placement(rng, &ship)?;
    board.place(ship, x, y)?;
    Ok(())
}

/// Scatter `bombs` bombs and `power_ups` power-ups, alternating kinds.
pub fn place_items<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    bombs: usize,
    power_ups: usize,
) -> Result<(), BoardError> {
    for i in 0..bombs.max(power_ups) {
        if i < bombs {
            place_randomly(rng, board, Ship::bomb())?;
        }
        if i < power_ups {
            place_randomly(rng, board, Ship::power_up())?;
        }
    }
    Ok(())
}

/// Populate the opponent's board: fleet first, then bombs and power-ups.
pub fn populate_opponent_board<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    config: &MatchConfig,
) -> Result<(), BoardError> {
    place_fleet_randomly(rng, board)?;
    place_items(rng, board, config.opponent_bombs, config.opponent_power_ups)?;
    log::debug!(
        "opponent board populated: {} vessels, {} bombs, {} power-ups",
        NUM_SHIPS,
        config.opponent_bombs,
        config.opponent_power_ups
    );
    Ok(())
}

/// Add power-ups to the player's board. No bombs are ever placed there.
pub fn populate_player_items<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    config: &MatchConfig,
) -> Result<(), BoardError> {
    place_items(rng, board, 0, config.player_power_ups)
}

//! Game board state: cell occupants, placed ships and the fired mask.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, PlacementError, ShotResult};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Ship, ShipKind};

const GRID_SIZE: usize = BOARD_SIZE as usize;

type BB = BitBoard<u128, GRID_SIZE>;

/// Index of a ship in the order it was placed on its board.
pub type ShipId = usize;

/// Content of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    #[default]
    Empty,
    /// A segment of the vessel with the given id.
    ShipSegment(ShipId),
    Bomb,
    PowerUp,
}

/// Read-only view of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub occupant: Occupant,
    pub was_fired: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PlacedShip {
    ship: Ship,
    origin: (usize, usize),
}

/// A 10×10 board. Cells are addressed as `(x, y)`, `x` being the column.
#[derive(Clone)]
pub struct Board {
    occupants: [[Occupant; GRID_SIZE]; GRID_SIZE],
    ships: Vec<PlacedShip>,
    fired: BB,
    ships_remaining: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with nothing placed and nothing fired.
    pub fn new() -> Self {
        Board {
            occupants: [[Occupant::Empty; GRID_SIZE]; GRID_SIZE],
            ships: Vec::new(),
            fired: BB::default(),
            ships_remaining: 0,
        }
    }

    /// Side length of the grid.
    pub const fn size() -> usize {
        GRID_SIZE
    }

    pub fn in_bounds(x: usize, y: usize) -> bool {
        x < GRID_SIZE && y < GRID_SIZE
    }

    fn check_coordinate(x: usize, y: usize) -> Result<(), BoardError> {
        if Self::in_bounds(x, y) {
            Ok(())
        } else {
            Err(BoardError::InvalidCoordinate { x, y })
        }
    }

    fn occupant(&self, x: usize, y: usize) -> Occupant {
        self.occupants[y][x]
    }

    /// Orthogonal neighbours of (`x`, `y`) that lie on the grid.
    fn neighbors(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        let left = x.checked_sub(1).map(|nx| (nx, y));
        let right = Some((x + 1, y));
        let up = y.checked_sub(1).map(|ny| (x, ny));
        let down = Some((x, y + 1));
        [left, right, up, down]
            .into_iter()
            .flatten()
            .filter(|&(nx, ny)| Self::in_bounds(nx, ny))
    }

    /// Validate a placement without touching the board.
    ///
    /// Every covered cell must be on the grid and empty, and every orthogonal
    /// neighbour of a covered cell must be empty too. Diagonal contact is allowed.
    pub fn check_placement(&self, ship: &Ship, x: usize, y: usize) -> Result<(), PlacementError> {
        for (cx, cy) in ship.cells(x, y) {
            if !Self::in_bounds(cx, cy) {
                return Err(PlacementError::OutOfBounds);
            }
            if self.occupant(cx, cy) != Occupant::Empty {
                return Err(PlacementError::Overlap);
            }
            if Self::neighbors(cx, cy).any(|(nx, ny)| self.occupant(nx, ny) != Occupant::Empty) {
                return Err(PlacementError::Overlap);
            }
        }
        Ok(())
    }

    /// Whether `ship` may be placed with its origin at (`x`, `y`).
    pub fn can_place(&self, ship: &Ship, x: usize, y: usize) -> bool {
        self.check_placement(ship, x, y).is_ok()
    }

    /// Place `ship` with its origin at (`x`, `y`). Nothing is written on failure.
    pub fn place(&mut self, ship: Ship, x: usize, y: usize) -> Result<ShipId, PlacementError> {
        self.check_placement(&ship, x, y)?;
        let id = self.ships.len();
        let occupant = match ship.kind() {
            ShipKind::Vessel => Occupant::ShipSegment(id),
            ShipKind::Bomb => Occupant::Bomb,
            ShipKind::PowerUp => Occupant::PowerUp,
        };
        for (cx, cy) in ship.cells(x, y) {
            self.occupants[cy][cx] = occupant;
        }
        if ship.kind() == ShipKind::Vessel && !ship.is_sunk() {
            self.ships_remaining += 1;
        }
        self.ships.push(PlacedShip {
            ship,
            origin: (x, y),
        });
        log::debug!("placed {:?} at ({}, {})", ship, x, y);
        Ok(id)
    }

    /// Returns a random legal origin for `ship`, trying at most
    /// `MAX_PLACEMENT_ATTEMPTS` uniformly chosen cells.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship: &Ship,
    ) -> Result<(usize, usize), BoardError> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let x = rng.random_range(0..GRID_SIZE);
            let y = rng.random_range(0..GRID_SIZE);
            if self.can_place(ship, x, y) {
                return Ok((x, y));
            }
        }
        Err(BoardError::UnableToPlace)
    }

    /// Fire at (`x`, `y`).
    ///
    /// A cell can be fired upon once; repeat shots return
    /// [`BoardError::AlreadyFired`] and change nothing.
    pub fn fire(&mut self, x: usize, y: usize) -> Result<ShotResult, BoardError> {
        Self::check_coordinate(x, y)?;
        if self.fired.get(x, y)? {
            return Err(BoardError::AlreadyFired { x, y });
        }
        self.fired.set(x, y)?;
        let result = match self.occupant(x, y) {
            Occupant::Empty => ShotResult::Miss,
            Occupant::Bomb => ShotResult::Bomb,
            Occupant::PowerUp => ShotResult::PowerUp,
            Occupant::ShipSegment(id) => {
                let placed = &mut self.ships[id];
                if placed.ship.register_hit() {
                    self.ships_remaining = self.ships_remaining.saturating_sub(1);
                    ShotResult::Sunk
                } else {
                    ShotResult::Hit
                }
            }
        };
        log::debug!("shot at ({}, {}) -> {:?}", x, y, result);
        Ok(result)
    }

    /// Vessels placed on this board that are still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    /// Read a single cell.
    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, BoardError> {
        Self::check_coordinate(x, y)?;
        Ok(Cell {
            occupant: self.occupant(x, y),
            was_fired: self.fired.get(x, y)?,
        })
    }

    pub fn was_fired(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        Ok(self.fired.get(x, y)?)
    }

    /// Mask of every cell fired upon so far.
    pub fn fired(&self) -> BB {
        self.fired
    }

    /// Number of cells not yet fired upon.
    pub fn unfired_count(&self) -> usize {
        (!self.fired).count_ones()
    }

    /// Ship with the given id, if one was placed.
    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id).map(|p| &p.ship)
    }

    /// Every placed entity with its origin, in placement order.
    pub fn ships(&self) -> impl Iterator<Item = ((usize, usize), &Ship)> {
        self.ships.iter().map(|p| (p.origin, &p.ship))
    }

    /// Number of placed entities of `kind`.
    pub fn count_kind(&self, kind: ShipKind) -> usize {
        self.ships.iter().filter(|p| p.ship.kind() == kind).count()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ships_remaining: {},\n  fired: {:?},\n  ships: {:?}\n}}",
            self.ships_remaining, self.fired, self.ships
        )
    }
}

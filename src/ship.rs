//! Ship definitions: vessels plus the single-cell bomb and power-up items.

use core::fmt;

use crate::common::BoardError;
use crate::config::MAX_SHIP_LENGTH;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends toward increasing `x`.
    Horizontal,
    /// Extends toward increasing `y`.
    #[default]
    Vertical,
}

/// What a placed entity is. Bombs and power-ups are length-1 ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Vessel,
    Bomb,
    PowerUp,
}

/// A ship with its damage state. Position is owned by the board it sits on.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Ship {
    /// Create a ship of the given length, rejecting lengths outside `1..=MAX_SHIP_LENGTH`.
    pub fn new(length: usize, orientation: Orientation, kind: ShipKind) -> Result<Self, BoardError> {
        if length == 0 || length > MAX_SHIP_LENGTH {
            return Err(BoardError::InvalidShipLength(length));
        }
        Ok(Ship {
            kind,
            length,
            orientation,
            remaining_hits: length,
        })
    }

    /// A vessel, the only kind that counts toward ships remaining.
    pub fn vessel(length: usize, orientation: Orientation) -> Result<Self, BoardError> {
        Self::new(length, orientation, ShipKind::Vessel)
    }

    pub fn bomb() -> Self {
        Ship {
            kind: ShipKind::Bomb,
            length: 1,
            orientation: Orientation::Vertical,
            remaining_hits: 1,
        }
    }

    pub fn power_up() -> Self {
        Ship {
            kind: ShipKind::PowerUp,
            length: 1,
            orientation: Orientation::Vertical,
            remaining_hits: 1,
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    /// Check if the ship is sunk (every segment hit).
    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    /// Record one hit. Returns `true` when this hit sank the ship.
    pub fn register_hit(&mut self) -> bool {
        if self.remaining_hits == 0 {
            return false;
        }
        self.remaining_hits -= 1;
        self.remaining_hits == 0
    }

    /// Cells covered when the ship's origin is at (`x`, `y`). Coordinates may
    /// run past the board edge; bounds are the board's concern.
    pub fn cells(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        let orientation = self.orientation;
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => (x + i, y),
            Orientation::Vertical => (x, y + i),
        })
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {:?}, length: {}, orientation: {:?}, remaining_hits: {} }}",
            self.kind, self.length, self.orientation, self.remaining_hits,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_lengths() {
        assert_eq!(
            Ship::vessel(0, Orientation::Horizontal),
            Err(BoardError::InvalidShipLength(0))
        );
        assert_eq!(
            Ship::vessel(6, Orientation::Vertical),
            Err(BoardError::InvalidShipLength(6))
        );
    }

    #[test]
    fn sinks_after_length_hits() {
        let mut ship = Ship::vessel(2, Orientation::Horizontal).unwrap();
        assert!(!ship.register_hit());
        assert!(!ship.is_sunk());
        assert!(ship.register_hit());
        assert!(ship.is_sunk());
        assert!(!ship.register_hit());
        assert_eq!(ship.remaining_hits(), 0);
    }

    #[test]
    fn cells_follow_orientation() {
        let h = Ship::vessel(3, Orientation::Horizontal).unwrap();
        assert!(h.cells(1, 4).eq([(1, 4), (2, 4), (3, 4)]));
        let v = Ship::vessel(2, Orientation::Vertical).unwrap();
        assert!(v.cells(1, 4).eq([(1, 4), (1, 5)]));
    }
}

//! Common types for Battleship: sides, shot results and errors.

use crate::bitboard::BitBoardError;

/// One of the two participants in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Opponent,
}

/// Outcome of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Nothing was there.
    Miss,
    /// Struck a vessel that is still afloat.
    Hit,
    /// Struck the last intact segment of a vessel.
    Sunk,
    /// Struck a bomb.
    Bomb,
    /// Struck a power-up.
    PowerUp,
}

/// Reasons a ship cannot go where it was asked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Part of the ship would fall off the grid.
    OutOfBounds,
    /// The ship would overlap or touch something already placed.
    Overlap,
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlap => {
                write!(f, "Ship placement overlaps or touches another item")
            }
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
    /// Coordinate lies outside the grid.
    InvalidCoordinate { x: usize, y: usize },
    /// The cell has already been fired upon.
    AlreadyFired { x: usize, y: usize },
    /// Placement was refused.
    Placement(PlacementError),
    /// Ship length outside 1..=MAX_SHIP_LENGTH.
    InvalidShipLength(usize),
    /// Random placement gave up after too many attempts.
    UnableToPlace,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl From<PlacementError> for BoardError {
    fn from(err: PlacementError) -> Self {
        BoardError::Placement(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidCoordinate { x, y } => {
                write!(f, "Coordinate ({}, {}) is off the board", x, y)
            }
            BoardError::AlreadyFired { x, y } => {
                write!(f, "Cell ({}, {}) was already fired upon", x, y)
            }
            BoardError::Placement(e) => write!(f, "{}", e),
            BoardError::InvalidShipLength(len) => write!(f, "Invalid ship length {}", len),
            BoardError::UnableToPlace => write!(f, "Unable to find a legal placement"),
        }
    }
}

/// Errors returned by the match controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The operation is not allowed in the current phase.
    WrongPhase {
        expected: crate::game::Phase,
        actual: crate::game::Phase,
    },
    /// The player tried to fire while the opponent holds the turn.
    NotYourTurn,
    /// A board operation failed.
    Board(BoardError),
}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        MatchError::Board(err)
    }
}

impl From<PlacementError> for MatchError {
    fn from(err: PlacementError) -> Self {
        MatchError::Board(BoardError::Placement(err))
    }
}

impl core::fmt::Display for MatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatchError::WrongPhase { expected, actual } => {
                write!(f, "Expected phase {:?} but match is {:?}", expected, actual)
            }
            MatchError::NotYourTurn => write!(f, "It is not the player's turn"),
            MatchError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for MatchError {}

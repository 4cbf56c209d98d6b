//! Turn continuation rules shared by both sides.
//!
//! A power-up grants another shot that is itself subject to the same rule.
//! A bomb grants exactly one bonus shot, and whatever that bonus shot hits,
//! the turn ends afterwards.

use alloc::vec::Vec;

use crate::common::{ShotResult, Side};

/// Whether the shooter keeps firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    FireAgain,
    EndTurn,
}

/// Tracks the chaining state of a single turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnChain {
    bonus_pending: bool,
}

impl TurnChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the next shot is the one-off bonus owed by a bomb.
    pub fn bonus_pending(&self) -> bool {
        self.bonus_pending
    }

    /// Feed the result of the shot just fired and learn whether to continue.
    pub fn after_shot(&mut self, result: ShotResult) -> Continuation {
        if self.bonus_pending {
            self.bonus_pending = false;
            return Continuation::EndTurn;
        }
        match result {
            ShotResult::PowerUp => Continuation::FireAgain,
            ShotResult::Bomb => {
                self.bonus_pending = true;
                Continuation::FireAgain
            }
            ShotResult::Miss | ShotResult::Hit | ShotResult::Sunk => Continuation::EndTurn,
        }
    }
}

/// One resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub x: usize,
    pub y: usize,
    pub result: ShotResult,
}

/// Shots fired by one side before it yielded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub side: Side,
    pub shots: Vec<Shot>,
}

impl TurnReport {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            shots: Vec::new(),
        }
    }

    pub fn results(&self) -> impl Iterator<Item = ShotResult> + '_ {
        self.shots.iter().map(|s| s.result)
    }
}

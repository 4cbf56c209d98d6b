//! Opponent auto-play: uniform random targeting with the turn chaining rule.

use alloc::boxed::Box;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::Side;
use crate::turn::{Continuation, Shot, TurnChain, TurnReport};

/// Chooses where to fire next.
pub trait Targeter: Send {
    /// Pick an in-bounds cell of `board` that has not been fired upon, or
    /// `None` when every cell has been fired.
    fn select_target(&mut self, rng: &mut SmallRng, board: &Board) -> Option<(usize, usize)>;
}

/// Uniform random targeting by rejection sampling.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTargeter;

impl RandomTargeter {
    pub fn new() -> Self {
        Self
    }
}

/// Draw uniformly random cells until one that was never fired comes up.
pub fn random_unfired<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Option<(usize, usize)> {
    if board.unfired_count() == 0 {
        return None;
    }
    let size = Board::size();
    loop {
        let x = rng.random_range(0..size);
        let y = rng.random_range(0..size);
        if !board.was_fired(x, y).unwrap_or(true) {
            return Some((x, y));
        }
    }
}

impl Targeter for RandomTargeter {
    fn select_target(&mut self, rng: &mut SmallRng, board: &Board) -> Option<(usize, usize)> {
        random_unfired(rng, board)
    }
}

/// Plays the opponent's turns against the player's board.
pub struct AiPolicy {
    targeter: Box<dyn Targeter>,
}

impl Default for AiPolicy {
    fn default() -> Self {
        Self::new(Box::new(RandomTargeter::new()))
    }
}

impl AiPolicy {
    pub fn new(targeter: Box<dyn Targeter>) -> Self {
        Self { targeter }
    }

    /// Fire at `board` until the chaining rule yields the turn, the board has
    /// no vessels left, or no unfired cell remains.
    pub fn take_turn(&mut self, rng: &mut SmallRng, board: &mut Board) -> TurnReport {
        self.take_turns(rng, board, 1)
    }

    /// Play `turns` consecutive turns, each with its own chain, recording
    /// every shot in one report.
    pub fn take_turns(&mut self, rng: &mut SmallRng, board: &mut Board, turns: usize) -> TurnReport {
        let mut report = TurnReport::new(Side::Opponent);
        for _ in 0..turns {
            let mut chain = TurnChain::new();
            loop {
                if board.ships_remaining() == 0 {
                    return report;
                }
                let Some((x, y)) = self.targeter.select_target(rng, board) else {
                    return report;
                };
                let result = match board.fire(x, y) {
                    Ok(result) => result,
                    Err(e) => {
                        // A targeter that repeats itself forfeits the rest of the turn.
                        log::warn!("AI target ({}, {}) rejected: {}", x, y, e);
                        break;
                    }
                };
                report.shots.push(Shot { x, y, result });
                if chain.after_shot(result) == Continuation::EndTurn {
                    break;
                }
            }
        }
        report
    }
}

//! Board dimensions, fleet layout and per-match tunables.

pub const BOARD_SIZE: u8 = 10;

/// Longest ship the board accepts.
pub const MAX_SHIP_LENGTH: usize = 5;

/// Ship lengths placed by each side, in placement order.
pub const FLEET: [usize; 5] = [5, 4, 3, 2, 1];

/// Number of vessels each side places.
pub const NUM_SHIPS: usize = FLEET.len();

/// Default count of each single-cell item kind seeded onto a board.
pub const ITEMS_PER_BOARD: usize = 3;

/// Most items of one kind the command line accepts per board.
pub const MAX_ITEMS_PER_BOARD: usize = 10;

/// Upper bound on random placement retries before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// What happens when the human player's shot lands on a bomb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum BombRule {
    /// The player gets one extra shot that never chains further, same as the AI.
    #[default]
    BonusShot,
    /// The player loses their next turn: the opponent takes two full turns.
    ExtraOpponentTurn,
}

/// Runtime settings for a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    pub opponent_bombs: usize,
    pub opponent_power_ups: usize,
    /// Only power-ups go on the player's board; bombs stay on the opponent side.
    pub player_power_ups: usize,
    pub player_bomb_rule: BombRule,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            opponent_bombs: ITEMS_PER_BOARD,
            opponent_power_ups: ITEMS_PER_BOARD,
            player_power_ups: ITEMS_PER_BOARD,
            player_bomb_rule: BombRule::default(),
        }
    }
}

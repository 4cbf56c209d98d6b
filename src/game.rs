//! Match controller: phases, turn order and game-over detection.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ai::AiPolicy;
use crate::board::Board;
use crate::common::{MatchError, ShotResult, Side};
use crate::config::{BombRule, MatchConfig};
use crate::setup::{self, FleetSetup, SetupProgress};
use crate::ship::{Orientation, Ship};
use crate::turn::{Continuation, Shot, TurnChain, TurnReport};

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The player is placing their fleet.
    Setup,
    InProgress,
    Finished,
}

/// Hook run between the player's turn ending and the opponent replying.
pub trait Pacer {
    fn pause(&mut self);
}

/// Replies immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self) {}
}

impl<F: FnMut()> Pacer for F {
    fn pause(&mut self) {
        self()
    }
}

/// Sleeps the current thread for a fixed duration.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub std::time::Duration);

#[cfg(feature = "std")]
impl Pacer for FixedDelay {
    fn pause(&mut self) {
        std::thread::sleep(self.0);
    }
}

/// Vessels still afloat on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoreboard {
    pub player_ships: usize,
    pub opponent_ships: usize,
}

/// Everything that happened in response to one player shot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    pub player: TurnReport,
    /// Present when the player's turn ended and the opponent replied.
    pub opponent: Option<TurnReport>,
    /// Whose turn it is now.
    pub turn: Side,
    pub winner: Option<Side>,
}

/// Owns both boards and all turn state for a single game.
pub struct Match {
    player_board: Board,
    opponent_board: Board,
    phase: Phase,
    turn: Side,
    winner: Option<Side>,
    setup: FleetSetup,
    chain: TurnChain,
    config: MatchConfig,
    rng: SmallRng,
    ai: AiPolicy,
}

impl Match {
    /// Create a match in the setup phase with the random opponent.
    pub fn new(config: MatchConfig, rng: SmallRng) -> Self {
        Self {
            player_board: Board::new(),
            opponent_board: Board::new(),
            phase: Phase::Setup,
            turn: Side::Player,
            winner: None,
            setup: FleetSetup::new(),
            chain: TurnChain::new(),
            config,
            rng,
            ai: AiPolicy::default(),
        }
    }

    /// Create a reproducible match from a fixed seed.
    pub fn seeded(config: MatchConfig, seed: u64) -> Self {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }

    /// Replace the opponent's policy.
    pub fn with_ai(mut self, ai: AiPolicy) -> Self {
        self.ai = ai;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn opponent_board(&self) -> &Board {
        &self.opponent_board
    }

    /// Length of the next ship the player must place, while in setup.
    pub fn next_ship_length(&self) -> Option<usize> {
        match self.phase {
            Phase::Setup => self.setup.next_length(),
            _ => None,
        }
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            player_ships: self.player_board.ships_remaining(),
            opponent_ships: self.opponent_board.ships_remaining(),
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), MatchError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(MatchError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Place the player's next ship. Placing the last one populates both
    /// boards and starts the match.
    pub fn place_player_ship(
        &mut self,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<SetupProgress, MatchError> {
        self.expect_phase(Phase::Setup)?;
        let mut setup = self.setup;
        let mut player_board = self.player_board.clone();
        let progress = setup.place_next(&mut player_board, x, y, orientation)?;
        if progress == SetupProgress::Complete {
            self.start(player_board)?;
        } else {
            self.player_board = player_board;
        }
        self.setup = setup;
        Ok(progress)
    }

    /// Place the player's remaining ships at random and start the match.
    pub fn auto_place_player_fleet(&mut self) -> Result<(), MatchError> {
        self.expect_phase(Phase::Setup)?;
        while let Some(length) = self.setup.next_length() {
            let orientation = if self.rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let ship = Ship::vessel(length, orientation)?;
            let (x, y) = self.player_board.random_placement(&mut self.rng, &ship)?;
            self.place_player_ship(x, y, orientation)?;
        }
        Ok(())
    }

    /// Populate both boards and begin play. Nothing is committed unless
    /// every item finds a legal spot.
    fn start(&mut self, mut player_board: Board) -> Result<(), MatchError> {
        let mut opponent_board = Board::new();
        setup::populate_opponent_board(&mut self.rng, &mut opponent_board, &self.config)?;
        setup::populate_player_items(&mut self.rng, &mut player_board, &self.config)?;
        self.player_board = player_board;
        self.opponent_board = opponent_board;
        self.phase = Phase::InProgress;
        self.turn = Side::Player;
        log::info!("match started");
        Ok(())
    }

    /// Finish the match if either board has no vessels left.
    fn check_game_over(&mut self) -> bool {
        let winner = if self.opponent_board.ships_remaining() == 0 {
            Side::Player
        } else if self.player_board.ships_remaining() == 0 {
            Side::Opponent
        } else {
            return false;
        };
        self.phase = Phase::Finished;
        self.winner = Some(winner);
        log::info!("match finished, winner: {:?}", winner);
        true
    }

    fn report(&self, player: TurnReport, opponent: Option<TurnReport>) -> RoundReport {
        RoundReport {
            player,
            opponent,
            turn: self.turn,
            winner: self.winner,
        }
    }

    /// Fire the player's shot at (`x`, `y`) on the opponent's board.
    ///
    /// If the shot ends the player's turn, `pacer` runs once and the opponent
    /// plays its reply before this returns. A rejected shot changes nothing.
    pub fn player_fire<P: Pacer + ?Sized>(
        &mut self,
        x: usize,
        y: usize,
        pacer: &mut P,
    ) -> Result<RoundReport, MatchError> {
        self.expect_phase(Phase::InProgress)?;
        if self.turn != Side::Player {
            return Err(MatchError::NotYourTurn);
        }
        let result = self.opponent_board.fire(x, y)?;
        let mut player = TurnReport::new(Side::Player);
        player.shots.push(Shot { x, y, result });

        if self.check_game_over() {
            return Ok(self.report(player, None));
        }

        let opponent_turns = match (result, self.config.player_bomb_rule) {
            (ShotResult::Bomb, BombRule::ExtraOpponentTurn) => 2,
            _ => match self.chain.after_shot(result) {
                Continuation::FireAgain => return Ok(self.report(player, None)),
                Continuation::EndTurn => 1,
            },
        };

        self.chain = TurnChain::new();
        self.turn = Side::Opponent;
        pacer.pause();
        let opponent = self
            .ai
            .take_turns(&mut self.rng, &mut self.player_board, opponent_turns);
        if !self.check_game_over() {
            self.turn = Side::Player;
        }
        Ok(self.report(player, Some(opponent)))
    }
}

//! Headless matches: the player's side is played at random too.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::ai::random_unfired;
use crate::common::{MatchError, Side};
use crate::config::MatchConfig;
use crate::game::{Match, NoDelay, Phase, Scoreboard};

/// Outcome of a simulated match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SimSummary {
    pub seed: u64,
    pub winner: Option<Side>,
    pub rounds: usize,
    pub player_shots: usize,
    pub opponent_shots: usize,
    pub scoreboard: Scoreboard,
}

/// Play a full match from `seed`, placing and firing for the player at random.
pub fn simulate(config: MatchConfig, seed: u64) -> Result<SimSummary, MatchError> {
    let mut game = Match::seeded(config, seed);
    let mut shooter = SmallRng::seed_from_u64(seed.wrapping_add(1));
    game.auto_place_player_fleet()?;

    let mut summary = SimSummary {
        seed,
        winner: None,
        rounds: 0,
        player_shots: 0,
        opponent_shots: 0,
        scoreboard: game.scoreboard(),
    };
    while game.phase() == Phase::InProgress {
        let Some((x, y)) = random_unfired(&mut shooter, game.opponent_board()) else {
            break;
        };
        let report = game.player_fire(x, y, &mut NoDelay)?;
        summary.rounds += 1;
        summary.player_shots += report.player.shots.len();
        summary.opponent_shots += report.opponent.map_or(0, |t| t.shots.len());
    }
    summary.winner = game.winner();
    summary.scoreboard = game.scoreboard();
    log::info!(
        "simulated seed {} in {} rounds, winner {:?}",
        seed,
        summary.rounds,
        summary.winner
    );
    Ok(summary)
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship::{
    init_logging, run_interactive, simulate, BombRule, FixedDelay, Match,
    MatchConfig, MAX_ITEMS_PER_BOARD,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::Rng;
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Copy)]
#[cfg(feature = "std")]
struct MatchArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(0..=MAX_ITEMS_PER_BOARD as i64),
        help = "Bombs on the opponent's board"
    )]
    bombs: u8,
    #[arg(
        long,
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(0..=MAX_ITEMS_PER_BOARD as i64),
        help = "Power-ups on each board"
    )]
    power_ups: u8,
    #[arg(long, value_enum, default_value_t = BombRule::BonusShot)]
    bomb_rule: BombRule,
}

#[cfg(feature = "std")]
impl MatchArgs {
    fn config(&self) -> MatchConfig {
        MatchConfig {
            opponent_bombs: usize::from(self.bombs),
            opponent_power_ups: usize::from(self.power_ups),
            player_power_ups: usize::from(self.power_ups),
            player_bomb_rule: self.bomb_rule,
        }
    }

    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[command(flatten)]
        args: MatchArgs,
        #[arg(long, default_value_t = 1000, help = "Pause before the opponent replies")]
        delay_ms: u64,
    },
    /// Play a match with both sides firing at random and print a JSON summary.
    Sim {
        #[command(flatten)]
        args: MatchArgs,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { args, delay_ms } => {
            let seed = args.seed();
            if args.seed.is_some() {
                println!("Using fixed seed: {} (game will be reproducible)", seed);
            }
            let mut game = Match::seeded(args.config(), seed);
            let mut pacer = FixedDelay(Duration::from_millis(delay_ms));
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            if run_interactive(&mut game, &mut input, &mut output, &mut pacer)?.is_none() {
                println!("\nGame abandoned.");
            }
        }
        Commands::Sim { args } => {
            let summary = simulate(args.config(), args.seed())?;
            println!("{}", serde_json::to_string(&summary)?);
        }
    }
    Ok(())
}

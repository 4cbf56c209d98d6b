#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
pub mod setup;
mod ship;
mod sim;
mod turn;

pub use ai::{random_unfired, AiPolicy, RandomTargeter, Targeter};
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
#[cfg(feature = "std")]
pub use player_cli::*;
pub use setup::{attempt_place, FleetSetup, SetupProgress};
pub use ship::*;
pub use sim::{simulate, SimSummary};
pub use turn::*;

#![cfg(feature = "std")]

//! Terminal front end: board rendering, input parsing and the interactive loop.

use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::string::String;

use crate::board::{Board, Occupant};
use crate::common::{ShotResult, Side};
use crate::config::BOARD_SIZE;
use crate::game::{Match, Pacer, Phase, RoundReport};
use crate::setup::SetupProgress;
use crate::ship::Orientation;

pub const INSTRUCTIONS: &str = "\
1. Place 5 ships on your board, longest first (e.g. `A5 H` or `C2 V`).
   Press enter to place the remaining ships at random.
2. Fire at the opponent's board by naming a cell (e.g. `B7`).
3. Hitting a power-up (+) gives an extra shot; hitting a bomb (*) costs you.
4. Keep firing until one side has sunk every opposing ship.
Note: both boards hold three power-ups, but bombs sit only on the
opponent's board to even the odds for the computer.";

/// Format (`x`, `y`) as a column letter and a 1-based row, e.g. `(1, 6)` is `B7`.
pub fn coord_to_string(x: usize, y: usize) -> String {
    let col = (b'A' + x as u8) as char;
    format!("{}{}", col, y + 1)
}

/// Parse a cell name such as `B7` into `(x, y)`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Need a column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let x = (col_ch as u8 - b'A') as usize;
    if x >= BOARD_SIZE as usize {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE as usize {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((x, row - 1))
}

/// Parse a placement such as `A5 H`. Orientation defaults to vertical.
pub fn parse_placement(input: &str) -> Result<(usize, usize, Orientation), String> {
    let mut parts = input.split_whitespace();
    let (x, y) = parse_coord(parts.next().unwrap_or(""))?;
    let orientation = match parts.next().map(|p| p.to_ascii_uppercase()) {
        None => Orientation::Vertical,
        Some(o) if o.starts_with('H') => Orientation::Horizontal,
        Some(o) if o.starts_with('V') => Orientation::Vertical,
        Some(o) => return Err(format!("Unknown orientation '{}' - use H or V", o)),
    };
    Ok((x, y, orientation))
}

fn cell_char(board: &Board, x: usize, y: usize, reveal: bool) -> char {
    let Ok(cell) = board.cell(x, y) else {
        return '?';
    };
    match (cell.occupant, cell.was_fired) {
        (Occupant::Empty, true) => 'o',
        (Occupant::ShipSegment(_), true) => 'X',
        (Occupant::Bomb, true) => '*',
        (Occupant::PowerUp, true) => '+',
        (_, false) if !reveal => '.',
        (Occupant::Empty, false) => '.',
        (Occupant::ShipSegment(_), false) => 'S',
        (Occupant::Bomb, false) => 'b',
        (Occupant::PowerUp, false) => 'p',
    }
}

/// Render a board as text. With `reveal` unset, unfired cells hide their contents.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::from("   ");
    for x in 0..Board::size() {
        let _ = write!(out, " {}", (b'A' + x as u8) as char);
    }
    out.push('\n');
    for y in 0..Board::size() {
        let _ = write!(out, "{:2} ", y + 1);
        for x in 0..Board::size() {
            let _ = write!(out, " {}", cell_char(board, x, y, reveal));
        }
        out.push('\n');
    }
    out
}

/// Opponent board (top) over the player's board (bottom), then the scores.
pub fn render_player_view(game: &Match) -> String {
    let score = game.scoreboard();
    format!(
        "Opponent board:\n{}\nYour board:\n{}\nOpponent ships remaining: {}\nPlayer ships remaining: {}\n",
        render_board(game.opponent_board(), false),
        render_board(game.player_board(), true),
        score.opponent_ships,
        score.player_ships,
    )
}

pub fn describe_result(result: ShotResult) -> &'static str {
    match result {
        ShotResult::Miss => "miss",
        ShotResult::Hit => "hit!",
        ShotResult::Sunk => "hit and sunk!",
        ShotResult::Bomb => "a bomb!",
        ShotResult::PowerUp => "a power-up!",
    }
}

fn describe_round<W: Write>(out: &mut W, report: &RoundReport) -> std::io::Result<()> {
    for shot in &report.player.shots {
        writeln!(
            out,
            "You fire at {}: {}",
            coord_to_string(shot.x, shot.y),
            describe_result(shot.result)
        )?;
    }
    if let Some(opponent) = &report.opponent {
        for shot in &opponent.shots {
            writeln!(
                out,
                "Opponent fires at {}: {}",
                coord_to_string(shot.x, shot.y),
                describe_result(shot.result)
            )?;
        }
    }
    Ok(())
}

/// Announcement for the end of the match.
pub fn winner_text(winner: Side) -> &'static str {
    match winner {
        Side::Player => "You win!",
        Side::Opponent => "You lose!",
    }
}

/// Drive a whole match from line-based `input`, writing prompts to `output`.
///
/// Returns the winner, or `None` if input ran out first.
pub fn run_interactive<R, W, P>(
    game: &mut Match,
    input: &mut R,
    output: &mut W,
    pacer: &mut P,
) -> anyhow::Result<Option<Side>>
where
    R: BufRead,
    W: Write,
    P: Pacer + ?Sized,
{
    writeln!(output, "{}\n", INSTRUCTIONS)?;
    let mut line = String::new();

    while let Some(length) = game.next_ship_length() {
        write!(
            output,
            "{}\nPlace ship of length {}: ",
            render_board(game.player_board(), true),
            length
        )?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.trim().is_empty() {
            game.auto_place_player_fleet()?;
            break;
        }
        match parse_placement(&line) {
            Ok((x, y, orientation)) => match game.place_player_ship(x, y, orientation) {
                Ok(SetupProgress::Complete) => break,
                Ok(SetupProgress::Next(_)) => {}
                Err(e) => writeln!(output, "Cannot place there: {}", e)?,
            },
            Err(e) => writeln!(output, "{}", e)?,
        }
    }

    while game.phase() == Phase::InProgress {
        write!(output, "{}\nFire at: ", render_player_view(game))?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let (x, y) = match parse_coord(&line) {
            Ok(coord) => coord,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };
        match game.player_fire(x, y, pacer) {
            Ok(report) => describe_round(output, &report)?,
            Err(e) => writeln!(output, "{}", e)?,
        }
    }

    write!(output, "{}", render_player_view(game))?;
    if let Some(winner) = game.winner() {
        writeln!(output, "{}", winner_text(winner))?;
    }
    Ok(game.winner())
}

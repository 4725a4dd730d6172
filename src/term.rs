use std::io::{BufRead, Stdin, Stdout, Write, stdin, stdout};

use crossterm::{cursor, queue, style, terminal};
use crossterm::terminal::ClearType;
use log::debug;

use crate::error::TermError;
use crate::game::GameState;
use crate::grid::Cell;
use crate::snake::Direction;

const PROMPT: &str = "Input direction and hit enter: ";
const CONTROLS: &str = "Controls: W: up |A: left |S: down |D: right |other/nothing: move on same heading";

pub struct TermManager {
    stdout: Stdout,
    stdin: Stdin,
    // Shown above the first frame only
    notice: Option<String>,
}

impl TermManager {
    pub fn new(notice: String) -> Self {
        TermManager { stdout: stdout(), stdin: stdin(), notice: Some(notice) }
    }

    /// Clears the screen and draws the board from the top-left corner.
    pub fn draw(&mut self, state: &GameState) -> Result<(), TermError> {
        let frame = self.next_frame(state);
        queue!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            style::Print(frame)
        )?;
        self.flush()
    }

    /// The text drawn after clearing the screen: the board, preceded by the
    /// startup notice the first time round.
    pub fn next_frame(&mut self, state: &GameState) -> String {
        match self.notice.take() {
            Some(notice) => format!("{}\n{}", notice, render(state)),
            None => render(state),
        }
    }

    /// Blocks until the player enters a line. End of input counts as no
    /// input at all.
    pub fn read_move(&mut self) -> Result<Option<Direction>, TermError> {
        queue!(self.stdout, style::Print(PROMPT))?;
        self.flush()?;

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            debug!("stdin closed, keeping heading");
            return Ok(None);
        }

        Ok(Direction::from_input(&line))
    }

    pub fn show_final_score(&mut self, score: u64) -> Result<(), TermError> {
        queue!(self.stdout, style::Print(format!("GAME OVER! Final Score: {}\n", score)))?;
        self.flush()
    }

    pub fn flush(&mut self) -> Result<(), TermError> {
        self.stdout.flush()?;
        Ok(())
    }
}

/// Text form of the board: underscores on top, asterisks below, `|` on both
/// sides, with the round, score and controls next to the first rows.
pub fn render(state: &GameState) -> String {
    let width = state.width();
    let mut out = format!(" {} \n", "_".repeat(width));

    for (i, row) in state.grid().rows().enumerate() {
        out.push('|');
        out.extend(row.iter().map(|cell| glyph(*cell)));
        out.push('|');

        match i {
            0 => out.push_str(&format!("\tRound: {}", state.round())),
            1 => out.push_str(&format!("\tScore: {}", state.score())),
            2 => out.push_str(&format!("\t{}", CONTROLS)),
            _ => {},
        }
        out.push('\n');
    }

    out.push_str(&format!(" {} \n", "*".repeat(width)));
    out
}

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Body => '#',
        Cell::Food => 'o',
        Cell::Head => '@',
        Cell::DeadHead => 'X',
    }
}

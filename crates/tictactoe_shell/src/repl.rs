//! Text front end: turns lines of input into engine calls and renders the result.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tictactoe_engine::{GameEngine, Position, PositionError};
use tracing::{debug, instrument};

const HELP: &str = "Commands: \"row col\" (0-2 each) to move, \"new\" for a new game, \"quit\" to exit.";

/// A single line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Claim a cell.
    Place(Position),
    /// Start over.
    NewGame,
    /// Show usage.
    Help,
    /// Leave the shell.
    Quit,
}

impl FromStr for Command {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" | "n" | "again" => Ok(Command::NewGame),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => other.parse().map(Command::Place),
        }
    }
}

/// Shell state: the engine plus rendering options.
pub struct Shell<W: Write> {
    engine: GameEngine,
    out: W,
    quiet: bool,
}

impl<W: Write> Shell<W> {
    /// Creates a shell around a fresh game.
    pub fn new(out: W, quiet: bool) -> Self {
        Self {
            engine: GameEngine::new(),
            out,
            quiet,
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Prints the board (unless quiet) and the status line.
    pub fn render(&mut self) -> Result<()> {
        if !self.quiet {
            writeln!(self.out, "{}", self.engine.board())?;
        }
        writeln!(self.out, "{}", self.engine.status_line())?;
        Ok(())
    }

    /// Applies one move and renders the outcome.
    ///
    /// Refused moves print their message; they are not errors for the shell.
    #[instrument(skip(self))]
    pub fn place(&mut self, position: Position) -> Result<()> {
        match self.engine.apply_move(position) {
            Ok(result) => {
                debug!(%result, "Move accepted");
                self.render()
            }
            Err(err) => {
                writeln!(self.out, "{err}")?;
                Ok(())
            }
        }
    }

    /// Handles one command. Returns `false` when the shell should exit.
    pub fn handle(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Place(position) => self.place(position)?,
            Command::NewGame => {
                self.engine.new_game();
                self.render()?;
            }
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Plays a fixed list of moves.
    pub fn run_script(&mut self, moves: &[Position]) -> Result<()> {
        self.render()?;
        for position in moves {
            self.place(*position)?;
        }
        Ok(())
    }

    /// Reads commands line by line until `quit` or end of input.
    pub fn run_interactive<R: BufRead>(&mut self, input: R) -> Result<()> {
        writeln!(self.out, "{HELP}")?;
        self.render()?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if !self.handle(command)? {
                        break;
                    }
                }
                Err(err) => writeln!(self.out, "{err}")?,
            }
            self.out.flush()?;
        }
        Ok(())
    }
}

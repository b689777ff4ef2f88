//! Line-oriented game session.
//!
//! Reads one command per line, applies it to the current board and writes
//! plain text back. Rejected commands are reported as `error: ...` and the
//! session carries on.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use hexmate_core::{Board, BoardRadius, Color, GameStatus, HexCoord};
use hexmate_engine::evaluate_breakdown;

use crate::command::{Command, SessionOption, parse_command};
use crate::error::CliError;

const HELP: &str = "\
commands:
  new [4|5]                 start a new game
  move <q,r,s> <q,r,s>      move a piece (the word move is optional)
  moves <q,r,s>             legal destinations of a piece
  board                     print the board
  status                    whose turn it is, check and mate
  eval [white|black]        static evaluation
  history                   moves played so far
  hint [n]                  first n legal moves
  set board on|off          print the board after each move
  set eval on|off           print the evaluation after each move
  set radius 4|5            radius for the next new game
  help                      this text
  quit                      leave";

/// Settings adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Radius of the board created by `new`.
    pub radius: BoardRadius,
    /// Print the board after every move.
    pub show_board_after_move: bool,
    /// Print the evaluation after every move.
    pub show_eval: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            radius: BoardRadius::Five,
            show_board_after_move: true,
            show_eval: false,
        }
    }
}

/// Whether the loop should keep reading.
enum Flow {
    Continue,
    Quit,
}

/// One game at a time, driven by text commands.
pub struct Session {
    board: Board,
    config: SessionConfig,
}

impl Session {
    /// Create a session with a fresh game on the configured radius.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            board: Board::new_game(config.radius),
            config,
        }
    }

    /// The current game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Run the session until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures end the session with an error; rejected commands
    /// are reported on `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), CliError> {
        info!(radius = %self.config.radius, "session started");
        self.show_position(&mut output)?;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                debug!(cmd = %trimmed, "received command");
            }

            let result = parse_command(trimmed).and_then(|cmd| self.execute(cmd, &mut output));
            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e @ CliError::Io { .. }) => return Err(e),
                Err(e) => {
                    warn!(error = %e, "command rejected");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }

        info!("session ended");
        writeln!(output, "bye")?;
        output.flush()?;
        Ok(())
    }

    /// Execute one parsed command.
    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, CliError> {
        match command {
            Command::Empty => {}
            Command::New(radius) => {
                if let Some(radius) = radius {
                    self.config.radius = radius;
                }
                self.board = Board::new_game(self.config.radius);
                info!(radius = %self.config.radius, "new game");
                self.show_position(out)?;
            }
            Command::Move { from, to } => self.handle_move(from, to, out)?,
            Command::Moves(at) => self.handle_moves(at, out)?,
            Command::Board => writeln!(out, "{}", self.board.pretty())?,
            Command::Status => {
                writeln!(out, "{}", self.board.turn_info())?;
                writeln!(out, "{}", self.board.status())?;
            }
            Command::Eval(color) => {
                let perspective = color.unwrap_or(self.board.side_to_move());
                self.print_eval(perspective, out)?;
            }
            Command::History => self.handle_history(out)?,
            Command::Hint(count) => self.handle_hint(count, out)?,
            Command::Set(option) => self.handle_set(option, out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn handle_move<W: Write>(
        &mut self,
        from: HexCoord,
        to: HexCoord,
        out: &mut W,
    ) -> Result<(), CliError> {
        let record = self.board.play(from, to)?;
        writeln!(out, "{record}")?;
        if self.config.show_board_after_move {
            writeln!(out, "{}", self.board.pretty())?;
        }
        if self.config.show_eval {
            self.print_eval(self.board.side_to_move(), out)?;
        }

        match self.board.status() {
            GameStatus::Checkmate { winner } => {
                info!(%winner, "checkmate");
                writeln!(out, "Checkmate! {winner} wins!")?;
            }
            GameStatus::Stalemate(color) => {
                info!(%color, "stalemate");
                writeln!(out, "Stalemate! {color} has no legal move.")?;
            }
            GameStatus::Check(_) => {
                writeln!(out, "Check!")?;
                writeln!(out, "{}", self.board.turn_info())?;
            }
            GameStatus::Ongoing => writeln!(out, "{}", self.board.turn_info())?,
        }
        Ok(())
    }

    fn handle_moves<W: Write>(&self, at: HexCoord, out: &mut W) -> Result<(), CliError> {
        let mut moves: Vec<HexCoord> = self.board.legal_moves(at).into_iter().collect();
        moves.sort_unstable();
        if moves.is_empty() {
            writeln!(out, "no legal moves from {at}")?;
            return Ok(());
        }
        let radius = self.board.radius().value();
        let listed: Vec<String> = moves
            .iter()
            .map(|to| format!("{to} [{}]", to.label(radius)))
            .collect();
        writeln!(out, "{}", listed.join(" | "))?;
        Ok(())
    }

    fn handle_history<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        if self.board.history().is_empty() {
            writeln!(out, "no moves yet")?;
        }
        for (index, record) in self.board.history().iter().enumerate() {
            writeln!(out, "{:>3}. {record}", index + 1)?;
        }
        Ok(())
    }

    fn handle_hint<W: Write>(&self, count: usize, out: &mut W) -> Result<(), CliError> {
        let moves = self.board.all_legal_moves();
        if moves.is_empty() {
            writeln!(out, "no legal moves")?;
            return Ok(());
        }
        let hints: Vec<String> = moves
            .iter()
            .take(count)
            .filter_map(|&(from, to)| {
                let piece = self.board.piece_at(from)?;
                Some(format!("{} ({from} {to})", piece.kind()))
            })
            .collect();
        writeln!(out, "{}", hints.join(" | "))?;
        Ok(())
    }

    fn handle_set<W: Write>(&mut self, option: SessionOption, out: &mut W) -> Result<(), CliError> {
        match option {
            SessionOption::ShowBoard(on) => {
                self.config.show_board_after_move = on;
                writeln!(out, "board after move: {}", on_off(on))?;
            }
            SessionOption::ShowEval(on) => {
                self.config.show_eval = on;
                writeln!(out, "eval after move: {}", on_off(on))?;
            }
            SessionOption::Radius(radius) => {
                self.config.radius = radius;
                writeln!(out, "radius {radius} applies from the next new game")?;
            }
        }
        debug!(?option, "option set");
        Ok(())
    }

    fn print_eval<W: Write>(&self, perspective: Color, out: &mut W) -> Result<(), CliError> {
        let eval = evaluate_breakdown(&self.board, perspective);
        writeln!(out, "eval {perspective}: {eval}")?;
        Ok(())
    }

    fn show_position<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        if self.config.show_board_after_move {
            writeln!(out, "{}", self.board.pretty())?;
        }
        writeln!(out, "{}", self.board.turn_info())?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

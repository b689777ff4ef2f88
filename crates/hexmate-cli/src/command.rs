//! Session command parsing.

use hexmate_core::{BoardRadius, Color, HexCoord};

use crate::error::CliError;

/// Number of suggestions `hint` prints when no count is given.
pub const DEFAULT_HINT_COUNT: usize = 5;

/// A setting changed with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// `set board on|off` -- print the board after every move.
    ShowBoard(bool),
    /// `set eval on|off` -- print the evaluation after every move.
    ShowEval(bool),
    /// `set radius 4|5` -- radius used by the next `new`.
    Radius(BoardRadius),
}

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new [4|5]` -- start a new game, optionally on another radius.
    New(Option<BoardRadius>),
    /// `move <q,r,s> <q,r,s>` or just the two coordinates.
    Move { from: HexCoord, to: HexCoord },
    /// `moves <q,r,s>` -- legal destinations of one piece.
    Moves(HexCoord),
    /// `board` -- print the board.
    Board,
    /// `status` -- turn, check and game-over state.
    Status,
    /// `eval [white|black]` -- static evaluation, default side to move.
    Eval(Option<Color>),
    /// `history` -- moves played so far.
    History,
    /// `hint [n]` -- first `n` legal moves of the side to move.
    Hint(usize),
    /// `set <option> <value>`.
    Set(SessionOption),
    /// `help` -- list commands.
    Help,
    /// `quit` -- end the session.
    Quit,
    /// Blank line.
    Empty,
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(Command::Empty);
    };

    match name.to_ascii_lowercase().as_str() {
        "new" => parse_new(args),
        "move" | "mv" => parse_move(args),
        "moves" => match args {
            [coord] => Ok(Command::Moves(parse_coord(coord)?)),
            _ => Err(malformed("moves", "moves <q,r,s>")),
        },
        "board" => no_args(args, "board", Command::Board),
        "status" => no_args(args, "status", Command::Status),
        "eval" => parse_eval(args),
        "history" => no_args(args, "history", Command::History),
        "hint" => parse_hint(args),
        "set" => parse_set(args),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ if name.contains(',') => parse_move(&tokens),
        _ => Err(CliError::UnknownCommand {
            name: name.to_string(),
        }),
    }
}

/// Parse a `q,r,s` triple, checking the cubic constraint.
pub fn parse_coord(text: &str) -> Result<HexCoord, CliError> {
    let malformed = || CliError::MalformedCoordinate {
        text: text.to_string(),
    };
    let inner = text.trim_start_matches('(').trim_end_matches(')');
    let parts: Vec<i32> = inner
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<_, _>>()
        .map_err(|_| malformed())?;
    match parts[..] {
        [q, r, s] => Ok(HexCoord::new(q, r, s)?),
        _ => Err(malformed()),
    }
}

fn malformed(command: &'static str, usage: &'static str) -> CliError {
    CliError::MalformedCommand { command, usage }
}

fn no_args(args: &[&str], command: &'static str, parsed: Command) -> Result<Command, CliError> {
    if args.is_empty() {
        Ok(parsed)
    } else {
        Err(malformed(command, command))
    }
}

fn parse_radius(text: &str) -> Result<BoardRadius, CliError> {
    let value: i32 = text.parse().map_err(|_| CliError::InvalidRadius {
        value: text.to_string(),
    })?;
    Ok(BoardRadius::try_from(value)?)
}

fn parse_new(args: &[&str]) -> Result<Command, CliError> {
    match args {
        [] => Ok(Command::New(None)),
        [radius] => Ok(Command::New(Some(parse_radius(radius)?))),
        _ => Err(malformed("new", "new [4|5]")),
    }
}

fn parse_move(args: &[&str]) -> Result<Command, CliError> {
    match args {
        [from, to] => Ok(Command::Move {
            from: parse_coord(from)?,
            to: parse_coord(to)?,
        }),
        _ => Err(malformed("move", "move <q,r,s> <q,r,s>")),
    }
}

fn parse_eval(args: &[&str]) -> Result<Command, CliError> {
    match args {
        [] => Ok(Command::Eval(None)),
        [name] => match Color::from_name(name) {
            Some(color) => Ok(Command::Eval(Some(color))),
            None => Err(malformed("eval", "eval [white|black]")),
        },
        _ => Err(malformed("eval", "eval [white|black]")),
    }
}

fn parse_hint(args: &[&str]) -> Result<Command, CliError> {
    match args {
        [] => Ok(Command::Hint(DEFAULT_HINT_COUNT)),
        [count] => count
            .parse()
            .map(Command::Hint)
            .map_err(|_| malformed("hint", "hint [n]")),
        _ => Err(malformed("hint", "hint [n]")),
    }
}

fn parse_switch(name: &'static str, value: &str) -> Result<bool, CliError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(CliError::InvalidOptionValue {
            name,
            value: value.to_string(),
        }),
    }
}

fn parse_set(args: &[&str]) -> Result<Command, CliError> {
    let [name, value] = args else {
        return Err(malformed("set", "set <board|eval|radius> <value>"));
    };
    let option = match name.to_ascii_lowercase().as_str() {
        "board" => SessionOption::ShowBoard(parse_switch("board", value)?),
        "eval" => SessionOption::ShowEval(parse_switch("eval", value)?),
        "radius" => SessionOption::Radius(parse_radius(value)?),
        _ => {
            return Err(CliError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::Set(option))
}

#[cfg(test)]
mod tests {
    use hexmate_core::{BoardError, CoordError};

    use super::*;

    fn coord(q: i32, r: i32, s: i32) -> HexCoord {
        HexCoord::new(q, r, s).unwrap()
    }

    #[test]
    fn parse_empty_line() {
        assert_eq!(parse_command("   ").unwrap(), Command::Empty);
    }

    #[test]
    fn parse_move_with_keyword() {
        let cmd = parse_command("move 0,-1,1 0,0,0").unwrap();
        assert_eq!(
            cmd,
            Command::Move {
                from: coord(0, -1, 1),
                to: coord(0, 0, 0)
            }
        );
    }

    #[test]
    fn parse_bare_move() {
        let cmd = parse_command("0,-1,1 0,1,-1").unwrap();
        assert_eq!(
            cmd,
            Command::Move {
                from: coord(0, -1, 1),
                to: coord(0, 1, -1)
            }
        );
    }

    #[test]
    fn parse_coord_accepts_parentheses_and_spaces() {
        assert_eq!(parse_coord("(1,-5,4)").unwrap(), coord(1, -5, 4));
        assert_eq!(parse_coord("1, -5, 4").unwrap(), coord(1, -5, 4));
    }

    #[test]
    fn parse_coord_rejects_bad_triples() {
        assert!(matches!(
            parse_coord("1,2").unwrap_err(),
            CliError::MalformedCoordinate { .. }
        ));
        assert!(matches!(
            parse_coord("a,b,c").unwrap_err(),
            CliError::MalformedCoordinate { .. }
        ));
        assert!(matches!(
            parse_coord("1,1,1").unwrap_err(),
            CliError::Coord(CoordError::InvalidCoordinate { q: 1, r: 1, s: 1 })
        ));
        assert!(matches!(
            parse_command("move 2147483647,2147483647,2 0,0,0").unwrap_err(),
            CliError::Coord(CoordError::InvalidCoordinate { s: 2, .. })
        ));
    }

    #[test]
    fn parse_new_with_radius() {
        assert_eq!(parse_command("new").unwrap(), Command::New(None));
        assert_eq!(
            parse_command("new 4").unwrap(),
            Command::New(Some(BoardRadius::Four))
        );
        assert!(matches!(
            parse_command("new 7").unwrap_err(),
            CliError::Board(BoardError::InvalidRadius { radius: 7 })
        ));
        assert!(matches!(
            parse_command("new big").unwrap_err(),
            CliError::InvalidRadius { .. }
        ));
    }

    #[test]
    fn parse_eval_and_hint() {
        assert_eq!(parse_command("eval").unwrap(), Command::Eval(None));
        assert_eq!(
            parse_command("eval Black").unwrap(),
            Command::Eval(Some(Color::Black))
        );
        assert_eq!(
            parse_command("hint").unwrap(),
            Command::Hint(DEFAULT_HINT_COUNT)
        );
        assert_eq!(parse_command("hint 2").unwrap(), Command::Hint(2));
        assert!(parse_command("hint -1").is_err());
    }

    #[test]
    fn parse_set_options() {
        assert_eq!(
            parse_command("set board off").unwrap(),
            Command::Set(SessionOption::ShowBoard(false))
        );
        assert_eq!(
            parse_command("set eval on").unwrap(),
            Command::Set(SessionOption::ShowEval(true))
        );
        assert_eq!(
            parse_command("set radius 4").unwrap(),
            Command::Set(SessionOption::Radius(BoardRadius::Four))
        );
        assert!(matches!(
            parse_command("set colour red").unwrap_err(),
            CliError::UnknownOption { .. }
        ));
        assert!(matches!(
            parse_command("set board maybe").unwrap_err(),
            CliError::InvalidOptionValue { name: "board", .. }
        ));
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("board").unwrap(), Command::Board);
        assert_eq!(parse_command("STATUS").unwrap(), Command::Status);
        assert_eq!(parse_command("history").unwrap(), Command::History);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert!(parse_command("board now").is_err());
    }

    #[test]
    fn parse_unknown_command() {
        assert!(matches!(
            parse_command("castle").unwrap_err(),
            CliError::UnknownCommand { .. }
        ));
    }

    #[test]
    fn parse_move_wrong_arity() {
        assert!(matches!(
            parse_command("move 0,-1,1").unwrap_err(),
            CliError::MalformedCommand { command: "move", .. }
        ));
    }
}

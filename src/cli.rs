//! Terminal front end: prompts, input parsing, and board printing.
//!
//! The session is generic over its input and output streams, so a complete
//! game can be driven from a scripted reader in tests. All user mistakes
//! (bad names, malformed or illegal moves) are recovered by re-prompting;
//! only stream failures end the session early.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::config::PlayerTokens;
use crate::game::{Board, GameOutcome, GameState, Player, PlayerName, PlayerProfile};

/// One interactive game over a pair of byte streams.
pub struct GameSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        GameSession { input, output }
    }

    /// Run a complete game: banner, name entry, then the turn loop until a
    /// win or a full board.
    pub fn run(&mut self, mut state: GameState, tokens: &PlayerTokens) -> io::Result<GameOutcome> {
        let rows = state.board().rows();
        let cols = state.board().cols();
        writeln!(self.output, "Welcome to Connect 4 ({rows}x{cols} Grid)")?;
        writeln!(
            self.output,
            "Instructions: The first player to align four of their tokens vertically or horizontally wins the game!"
        )?;

        let one = PlayerProfile::new(self.read_player_name(Player::One)?, tokens.player_one);
        let two = PlayerProfile::new(self.read_player_name(Player::Two)?, tokens.player_two);
        info!(player_one = %one.name(), player_two = %two.name(), "starting game");

        loop {
            self.print_board(state.board(), &one, &two)?;

            let profile = match state.current_player() {
                Player::One => &one,
                Player::Two => &two,
            };

            let Some((row, col)) = self.read_move(profile)? else {
                warn!("malformed move input");
                writeln!(self.output, "Invalid move. Try again.")?;
                continue;
            };

            if let Err(err) = state.apply_move(row, col) {
                warn!(row, col, %err, "rejected move");
                writeln!(self.output, "Invalid move. Try again.")?;
                continue;
            }
            debug!(row, col, "move accepted");

            if let Some(outcome) = state.outcome() {
                self.print_board(state.board(), &one, &two)?;
                match outcome {
                    GameOutcome::Winner(winner) => {
                        let name = match winner {
                            Player::One => one.name(),
                            Player::Two => two.name(),
                        };
                        info!(winner = %name, "game over");
                        writeln!(self.output, "{name} wins!")?;
                    }
                    GameOutcome::Draw => {
                        info!("game over: draw");
                        writeln!(self.output, "The board is full. It's a draw!")?;
                    }
                }
                return Ok(outcome);
            }
        }
    }

    /// Prompt for a player's name until a valid one is entered.
    fn read_player_name(&mut self, player: Player) -> io::Result<PlayerName> {
        loop {
            write!(self.output, "Enter Player {}'s name: ", player.ordinal())?;
            self.output.flush()?;
            let line = self.read_line()?;
            match line.trim_end_matches(['\r', '\n']).parse::<PlayerName>() {
                Ok(name) => return Ok(name),
                Err(err) => {
                    warn!(%err, "rejected player name");
                    writeln!(
                        self.output,
                        "Invalid name. Please enter a valid name with only letters."
                    )?;
                }
            }
        }
    }

    /// Prompt the active player and parse their move. Returns `None` when
    /// the line is not two integers; malformed input never aborts the
    /// session.
    fn read_move(&mut self, profile: &PlayerProfile) -> io::Result<Option<(usize, usize)>> {
        write!(self.output, "{}, enter your move (row col): ", profile.name())?;
        self.output.flush()?;
        let line = self.read_line()?;
        Ok(parse_move(&line))
    }

    /// Read one line. A closed input stream is unrecoverable.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line)
    }

    fn print_board(
        &mut self,
        board: &Board,
        one: &PlayerProfile,
        two: &PlayerProfile,
    ) -> io::Result<()> {
        for line in board.render_lines(one.token(), two.token()) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }
}

/// Parse a move line as exactly two whitespace-separated 0-indexed
/// coordinates.
fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse::<usize>().ok()?;
    let col = parts.next()?.parse::<usize>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str, rows: usize, cols: usize) -> (io::Result<GameOutcome>, String) {
        let tokens = PlayerTokens::default();
        let state = GameState::with_dimensions(rows, cols).unwrap();
        let mut output = Vec::new();
        let result = GameSession::new(Cursor::new(script.to_string()), &mut output)
            .run(state, &tokens);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("2 3\n"), Some((2, 3)));
        assert_eq!(parse_move("  0   4  "), Some((0, 4)));
        assert_eq!(parse_move("2\n"), None);
        assert_eq!(parse_move("a b\n"), None);
        assert_eq!(parse_move("-1 2\n"), None);
        assert_eq!(parse_move("1 2 3\n"), None);
        assert_eq!(parse_move("\n"), None);
    }

    #[test]
    fn test_full_game_player_one_wins() {
        let script = "\
Alice
Bob
0 0
4 0
0 1
4 1
0 2
4 2
0 3
";
        let (result, output) = run_session(script, 5, 5);
        assert_eq!(result.unwrap(), GameOutcome::Winner(Player::One));
        assert!(output.contains("Welcome to Connect 4 (5x5 Grid)"));
        assert!(output.contains("Alice, enter your move (row col): "));
        assert!(output.contains("Bob, enter your move (row col): "));
        assert!(output.ends_with("Alice wins!\n"));
    }

    #[test]
    fn test_invalid_name_reprompts() {
        let script = "\
Ann3
Ann Lee
Bob
0 0
4 0
0 1
4 1
0 2
4 2
0 3
";
        let (result, output) = run_session(script, 5, 5);
        assert_eq!(result.unwrap(), GameOutcome::Winner(Player::One));
        assert!(output.contains("Invalid name. Please enter a valid name with only letters."));
        assert!(output.contains("Ann Lee, enter your move (row col): "));
        assert!(output.ends_with("Ann Lee wins!\n"));
    }

    #[test]
    fn test_occupied_cell_reprompts_same_player() {
        // Bob tries Alice's cell; the retry stays with Bob, and Alice still
        // completes her run first.
        let script = "\
Alice
Bob
0 0
0 0
4 0
0 1
4 1
0 2
4 2
0 3
";
        let (result, output) = run_session(script, 5, 5);
        assert_eq!(result.unwrap(), GameOutcome::Winner(Player::One));
        assert!(output.contains("Invalid move. Try again."));
        assert!(output.ends_with("Alice wins!\n"));
    }

    #[test]
    fn test_malformed_input_reprompts_same_player() {
        let script = "\
Alice
Bob
zero zero
9 9
0 0
4 0
0 1
4 1
0 2
4 2
0 3
";
        let (result, output) = run_session(script, 5, 5);
        assert_eq!(result.unwrap(), GameOutcome::Winner(Player::One));
        // Both the unparsable line and the out-of-bounds coordinate are
        // surfaced the same way.
        assert_eq!(output.matches("Invalid move. Try again.").count(), 2);
        assert!(output.ends_with("Alice wins!\n"));
    }

    #[test]
    fn test_full_board_reports_draw() {
        let script = "\
Alice
Bob
0 0
0 1
1 0
1 1
";
        let (result, output) = run_session(script, 2, 2);
        assert_eq!(result.unwrap(), GameOutcome::Draw);
        assert!(output.ends_with("The board is full. It's a draw!\n"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (result, _) = run_session("Alice\nBob\n0 0\n", 5, 5);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_board_rendered_between_turns() {
        let script = "\
Alice
Bob
0 0
4 0
0 1
4 1
0 2
4 2
0 3
";
        let (_, output) = run_session(script, 5, 5);
        // Empty 5x5 row, then the separator, printed before the first move.
        assert!(output.contains(" |   |   |   |   |   |\n-------------------"));
        // Final render shows Alice's completed run.
        assert!(output.contains(" | O | O | O | O |   |"));
    }
}

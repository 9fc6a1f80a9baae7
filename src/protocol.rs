//! Line-oriented text protocol for playing a tour from a terminal or a
//! front end.
//!
//! The framing follows the Go Text Protocol: each line holds an optional
//! numeric id, a command and its arguments. Successful responses start with
//! `=`, failures with `?`, and every response ends with a blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `board` / `showboard` - Render the board
//! - `status` - Progress line (`Now playing: Move 3`)
//! - `move <square>` or `move <row> <col>` - Jump the knight
//! - `moves` - List the squares the knight may jump to
//! - `history` - List the squares played so far
//! - `undo` - Take back the last move
//! - `restart` - Return to the starting board
//!
//! A rejected `move` or `undo` answers with `?` but leaves the game
//! untouched.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::board::{parse_coord, str_coord};
use crate::game::Game;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "board",
    "history",
    "known_command",
    "list_commands",
    "move",
    "moves",
    "name",
    "protocol_version",
    "quit",
    "restart",
    "showboard",
    "status",
    "undo",
    "version",
];

/// Protocol front end wrapping a single game.
pub struct Session {
    game: Game,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            debug!(%command, success, "command executed");

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }

        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "board" | "showboard" => {
                let text = format!("\n{}", self.game.board());
                (true, text.trim_end().to_string())
            }

            "status" => (true, self.game.status().to_string()),

            "move" => {
                let Some((row, col)) = Self::parse_target(args) else {
                    return (false, "invalid square".to_string());
                };
                if self.game.play(row, col) {
                    (true, self.game.status().to_string())
                } else {
                    (false, "illegal move".to_string())
                }
            }

            "moves" => {
                let moves: Vec<String> = self
                    .game
                    .legal_moves()
                    .into_iter()
                    .map(str_coord)
                    .collect();
                (true, moves.join(" "))
            }

            "history" => {
                let moves: Vec<String> = self.game.moves().into_iter().map(str_coord).collect();
                (true, moves.join(" "))
            }

            "undo" => {
                if self.game.undo() {
                    (true, self.game.status().to_string())
                } else {
                    (false, "nothing to undo".to_string())
                }
            }

            "restart" => {
                self.game.restart();
                (true, self.game.status().to_string())
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Parse `move` arguments: one square in chess notation, or a raw
    /// row and column. Raw numbers are passed through unchecked so that
    /// off-board requests reach the game and are ignored there.
    fn parse_target(args: &[&str]) -> Option<(i32, i32)> {
        match args {
            [square] => parse_coord(square).map(|(r, c)| (r as i32, c as i32)),
            [row, col] => Some((row.parse().ok()?, col.parse().ok()?)),
            _ => None,
        }
    }
}

use std::fmt;
use std::str::FromStr;

use super::board::Cell;
use crate::error::NameError;

/// Which side is moving. Player One always opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player.
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to the cell they mark the board with.
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// Ordinal used in prompts ("Player 1", "Player 2").
    pub fn ordinal(self) -> usize {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// A validated player name: non-empty, letters and spaces only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PlayerName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, NameError> {
        if s.is_empty() {
            return Err(NameError::Empty);
        }
        if let Some(bad) = s.chars().find(|c| !c.is_alphabetic() && *c != ' ') {
            return Err(NameError::InvalidCharacter(bad));
        }
        Ok(PlayerName(s.to_string()))
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A participant: validated name plus the character their tokens render as.
/// Two profiles exist per game and stay fixed for its duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    name: PlayerName,
    token: char,
}

impl PlayerProfile {
    pub fn new(name: PlayerName, token: char) -> Self {
        PlayerProfile { name, token }
    }

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    pub fn token(&self) -> char {
        self.token
    }
}

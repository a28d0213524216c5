use std::fmt;

use serde::Serialize;

use crate::error::EngineError;

pub const BOARD_SIZE: usize = 8;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// A validated board coordinate. `x` selects the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Result<Self, EngineError> {
        if !in_bounds(x, y) {
            return Err(EngineError::InvalidCoordinate { x, y });
        }
        Ok(Self {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Flat index `x * 8 + y`, matching the `[x][y]` layout of snapshots.
    pub fn index(self) -> usize {
        self.x as usize * BOARD_SIZE + self.y as usize
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        debug_assert!(idx < NUM_CELLS);
        Self {
            x: (idx / BOARD_SIZE) as u8,
            y: (idx % BOARD_SIZE) as u8,
        }
    }

    /// Steps `distance` cells along `(dx, dy)`; `None` once off the board.
    pub(crate) fn offset(self, dx: i32, dy: i32, distance: i32) -> Option<Self> {
        let x = self.x as i32 + dx * distance;
        let y = self.y as i32 + dy * distance;
        Position::new(x, y).ok()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

fn in_bounds(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
}

/// A player's disk color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What sits on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupant {
    #[default]
    Empty,
    Black,
    White,
}

impl Occupant {
    /// Wire code used by the UI: 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Occupant::Empty => 0,
            Occupant::Black => 1,
            Occupant::White => 2,
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Occupant::Empty => None,
            Occupant::Black => Some(Color::Black),
            Occupant::White => Some(Color::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }
}

impl From<Color> for Occupant {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Occupant::Black,
            Color::White => Occupant::White,
        }
    }
}

/// Derived game status. Ties on a full board resolve to black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "winner", rename_all = "camelCase")]
pub enum GameResult {
    InProgress,
    Winner(Color),
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameResult::Winner(_))
    }
}

/// Disk counts on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    pub fn total(self) -> u8 {
        self.black + self.white
    }

    pub fn empty(self) -> u8 {
        NUM_CELLS as u8 - self.total()
    }
}

/// A cell whose occupant changed during a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChangedCell {
    pub x: u8,
    pub y: u8,
    pub color: Color,
}

/// Result of a placement.
/// Contract:
/// - Accepted move: `changed_cells[0]` is the placed disk, followed by flips.
/// - Declined move (cell occupied): `changed_cells` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOutcome {
    pub result: GameResult,
    pub changed_cells: Vec<ChangedCell>,
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        !self.changed_cells.is_empty()
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Occupant codes, indexed `x * 8 + y`.
    pub board: Vec<u8>,
    pub current_turn: Color,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    pub winner: Option<Color>,
    pub status_text: String,
}

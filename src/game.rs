use crate::board::{Board, DIRECTIONS, mask_to_positions};
use crate::error::EngineError;
use crate::types::{
    ChangedCell, Color, GameResult, GameState, MoveOutcome, NUM_CELLS, Occupant, Position, Score,
};

/// One game between two players sharing the board. Black moves first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current_turn: Color,
}

impl GameSession {
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::Black)
    }

    /// Starts a session from an arbitrary position.
    pub fn from_board(board: Board, current_turn: Color) -> Self {
        Self {
            board,
            current_turn,
        }
    }

    /// Discards the current game and starts over with black to move.
    pub fn reset(&mut self) {
        self.board.initialize();
        self.current_turn = Color::Black;
    }

    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_snapshot(&self) -> [[Occupant; 8]; 8] {
        self.board.snapshot()
    }

    pub fn score(&self) -> Score {
        self.board.count_occupied()
    }

    /// Winner once all 64 cells are filled; black takes ties.
    pub fn result(&self) -> GameResult {
        let score = self.score();
        if score.total() as usize != NUM_CELLS {
            GameResult::InProgress
        } else if score.white > score.black {
            GameResult::Winner(Color::White)
        } else {
            GameResult::Winner(Color::Black)
        }
    }

    /// Places a disk for the player to move.
    ///
    /// An occupied target is declined silently: nothing changes and the
    /// returned outcome carries no changed cells.
    pub fn place_disk(&mut self, x: i32, y: i32) -> Result<MoveOutcome, EngineError> {
        let anchor = Position::new(x, y)?;
        if !self.board.at(anchor).is_empty() {
            return Ok(MoveOutcome {
                result: self.result(),
                changed_cells: Vec::new(),
            });
        }

        let mover = self.current_turn;
        self.board.set_at(anchor, mover.into());
        let flips = self.resolve_captures(anchor, mover);

        let mut changed_cells = Vec::with_capacity(flips.len() + 1);
        changed_cells.push(changed(anchor, mover));
        changed_cells.extend(flips.into_iter().map(|pos| changed(pos, mover)));

        let result = self.result();
        if !result.is_terminal() {
            self.current_turn = mover.opponent();
        }

        Ok(MoveOutcome {
            result,
            changed_cells,
        })
    }

    /// Every position sharing a row, column or diagonal with `(x, y)`,
    /// the reference cell included, regardless of occupant.
    pub fn moves_aligned_with(&self, x: i32, y: i32) -> Result<Vec<Position>, EngineError> {
        let pos = Position::new(x, y)?;
        Ok(mask_to_positions(Board::alignment_mask(pos)))
    }

    /// Aligned positions that are still empty, i.e. the cells to highlight.
    pub fn highlighted_cells(&self, x: i32, y: i32) -> Result<Vec<Position>, EngineError> {
        let pos = Position::new(x, y)?;
        Ok(mask_to_positions(
            Board::alignment_mask(pos) & self.board.empty_mask(),
        ))
    }

    /// Text shown under the board: the color to move, or the winner.
    pub fn status_text(&self) -> String {
        match self.result() {
            GameResult::InProgress => self.current_turn.name().to_string(),
            GameResult::Winner(Color::Black) => "Black wins".to_string(),
            GameResult::Winner(Color::White) => "White wins".to_string(),
        }
    }

    pub fn to_game_state(&self) -> GameState {
        let score = self.score();
        let winner = match self.result() {
            GameResult::InProgress => None,
            GameResult::Winner(color) => Some(color),
        };
        GameState {
            board: self.board.to_array().to_vec(),
            current_turn: self.current_turn,
            black_count: score.black,
            white_count: score.white,
            is_game_over: winner.is_some(),
            winner,
            status_text: self.status_text(),
        }
    }

    /// Flips every opponent run bracketed by the anchor and another disk of
    /// `mover`. Returns the flipped positions in direction order.
    fn resolve_captures(&mut self, anchor: Position, mover: Color) -> Vec<Position> {
        let own: Occupant = mover.into();
        let mut captured = Vec::new();

        for (dx, dy) in DIRECTIONS {
            let mut pending = Vec::new();
            let mut step = 0;

            while let Some(pos) = anchor.offset(dx, dy, step) {
                step += 1;
                let occupant = self.board.at(pos);
                if occupant.is_empty() {
                    break;
                }
                if occupant != own {
                    pending.push(pos);
                } else if pos != anchor {
                    captured.append(&mut pending);
                    break;
                }
            }
        }

        for &pos in &captured {
            self.board.set_at(pos, own);
        }
        captured
    }

    #[cfg(test)]
    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

fn changed(pos: Position, color: Color) -> ChangedCell {
    ChangedCell {
        x: pos.x,
        y: pos.y,
        color,
    }
}

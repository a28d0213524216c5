use once_cell::sync::Lazy;

use crate::error::EngineError;
use crate::types::{BOARD_SIZE, NUM_CELLS, Occupant, Position, Score};

pub(crate) const DIRECTIONS: [(i32, i32); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Per-cell masks of every cell sharing a row, column or diagonal with it.
static ALIGNMENT: Lazy<[u64; NUM_CELLS]> = Lazy::new(|| {
    let mut masks = [0u64; NUM_CELLS];
    for (idx, mask) in masks.iter_mut().enumerate() {
        let origin = Position::from_index(idx);
        for other in 0..NUM_CELLS {
            if is_aligned(origin, Position::from_index(other)) {
                *mask |= bit(other);
            }
        }
    }
    masks
});

/// One square of the board. Position is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    pub occupant: Occupant,
}

impl Cell {
    fn empty(position: Position) -> Self {
        Self {
            position,
            occupant: Occupant::Empty,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// 8x8 grid of cells stored in `x * 8 + y` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|idx| Cell::empty(Position::from_index(idx))),
        }
    }

    /// Replaces every cell with a fresh empty one.
    pub fn initialize(&mut self) {
        *self = Self::new();
    }

    pub fn get(&self, x: i32, y: i32) -> Result<Cell, EngineError> {
        let pos = Position::new(x, y)?;
        Ok(self.cells[pos.index()])
    }

    pub fn set(&mut self, x: i32, y: i32, occupant: Occupant) -> Result<(), EngineError> {
        let pos = Position::new(x, y)?;
        self.set_at(pos, occupant);
        Ok(())
    }

    pub fn at(&self, pos: Position) -> Occupant {
        self.cells[pos.index()].occupant
    }

    pub fn set_at(&mut self, pos: Position, occupant: Occupant) {
        self.cells[pos.index()].occupant = occupant;
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Returns black and white disk counts.
    pub fn count_occupied(&self) -> Score {
        self.cells
            .iter()
            .fold(Score::default(), |mut score, cell| {
                match cell.occupant {
                    Occupant::Black => score.black += 1,
                    Occupant::White => score.white += 1,
                    Occupant::Empty => {}
                }
                score
            })
    }

    /// Occupants laid out as `[x][y]`.
    pub fn snapshot(&self) -> [[Occupant; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[Occupant::Empty; BOARD_SIZE]; BOARD_SIZE];
        for cell in &self.cells {
            let pos = cell.position;
            grid[pos.x as usize][pos.y as usize] = cell.occupant;
        }
        grid
    }

    /// Converts board to `[u8; 64]` occupant codes.
    pub fn to_array(&self) -> [u8; NUM_CELLS] {
        std::array::from_fn(|idx| self.cells[idx].occupant.code())
    }

    /// Bit mask of every cell aligned with `pos`, `pos` included.
    pub fn alignment_mask(pos: Position) -> u64 {
        ALIGNMENT[pos.index()]
    }

    /// Bit mask of the empty cells.
    pub fn empty_mask(&self) -> u64 {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.occupant.is_empty())
            .fold(0u64, |mask, (idx, _)| mask | bit(idx))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn is_aligned(origin: Position, other: Position) -> bool {
    let dx = other.x as i32 - origin.x as i32;
    let dy = other.y as i32 - origin.y as i32;
    dx == 0 || dy == 0 || dx == dy || dx == -dy
}

fn bit(idx: usize) -> u64 {
    if idx < NUM_CELLS { 1u64 << idx } else { 0 }
}

pub(crate) fn mask_to_positions(mask: u64) -> Vec<Position> {
    let mut bits = mask;
    let mut out = Vec::with_capacity(bits.count_ones() as usize);

    while bits != 0 {
        out.push(Position::from_index(bits.trailing_zeros() as usize));
        bits &= bits - 1;
    }

    out
}

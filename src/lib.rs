use wasm_bindgen::prelude::*;

pub mod board;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use board::{Board, Cell};
pub use error::EngineError;
pub use game::GameSession;
pub use types::{ChangedCell, Color, GameResult, GameState, MoveOutcome, Occupant, Position, Score};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

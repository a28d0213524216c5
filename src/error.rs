use thiserror::Error;

/// Errors raised by board and engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("coordinate ({x}, {y}) is outside the 8x8 board")]
    InvalidCoordinate { x: i32, y: i32 },
}

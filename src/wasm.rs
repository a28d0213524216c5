//! JavaScript-facing wrapper around [`GameSession`].
//!
//! The page owns one `OthelloGame`, forwards tile clicks to `placeDisk` and
//! hovers to `highlightedCells`, and redraws from `boardSnapshot`.

use wasm_bindgen::prelude::*;

use crate::error::EngineError;
use crate::game::GameSession;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(message: &str);
}

#[cfg(not(target_arch = "wasm32"))]
fn log(_message: &str) {}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsError::new(&err.to_string()).into()
    }
}

#[wasm_bindgen]
pub struct OthelloGame {
    session: GameSession,
}

#[wasm_bindgen]
impl OthelloGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> OthelloGame {
        log("Started");
        OthelloGame {
            session: GameSession::new(),
        }
    }

    pub fn reset(&mut self) {
        self.session.reset();
        log("Board reset");
    }

    /// Returns `{ result, changedCells }`. Throws on an off-board coordinate.
    #[wasm_bindgen(js_name = placeDisk)]
    pub fn place_disk(&mut self, x: i32, y: i32) -> Result<JsValue, JsValue> {
        let outcome = self.session.place_disk(x, y)?;
        if !outcome.is_accepted() {
            log(&format!("cell ({x}, {y}) is already occupied"));
        }
        Ok(serde_wasm_bindgen::to_value(&outcome)?)
    }

    /// Every `{x, y}` aligned with the reference cell.
    #[wasm_bindgen(js_name = movesAlignedWith)]
    pub fn moves_aligned_with(&self, x: i32, y: i32) -> Result<JsValue, JsValue> {
        let positions = self.session.moves_aligned_with(x, y)?;
        Ok(serde_wasm_bindgen::to_value(&positions)?)
    }

    #[wasm_bindgen(js_name = highlightedCells)]
    pub fn highlighted_cells(&self, x: i32, y: i32) -> Result<JsValue, JsValue> {
        let positions = self.session.highlighted_cells(x, y)?;
        Ok(serde_wasm_bindgen::to_value(&positions)?)
    }

    #[wasm_bindgen(js_name = currentTurn)]
    pub fn current_turn(&self) -> String {
        self.session.current_turn().name().to_string()
    }

    #[wasm_bindgen(js_name = statusText)]
    pub fn status_text(&self) -> String {
        self.session.status_text()
    }

    /// Occupant codes as `number[x][y]`: 0=empty, 1=black, 2=white.
    #[wasm_bindgen(js_name = boardSnapshot)]
    pub fn board_snapshot(&self) -> Result<JsValue, JsValue> {
        let grid: Vec<Vec<u8>> = self
            .session
            .board_snapshot()
            .iter()
            .map(|column| column.iter().map(|occupant| occupant.code()).collect())
            .collect();
        Ok(serde_wasm_bindgen::to_value(&grid)?)
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.session.to_game_state())?)
    }
}

impl Default for OthelloGame {
    fn default() -> Self {
        Self::new()
    }
}

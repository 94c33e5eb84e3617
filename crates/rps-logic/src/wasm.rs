//! WASM bindings for the browser frontend.

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::error::GameError;
use crate::random::UniformDraw;
use crate::rules::Move;
use crate::session::GameSession;

/// A playable session exported to JavaScript.
///
/// The session is the single owner of game state; the frontend re-renders
/// from the snapshot returned by each call.
#[wasm_bindgen]
pub struct WasmSession {
    inner: GameSession<UniformDraw>,
}

#[wasm_bindgen]
impl WasmSession {
    /// Create a session with a caller-provided seed (reproducible).
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> WasmSession {
        WasmSession {
            inner: GameSession::from_seed(seed),
        }
    }

    /// Create a session seeded from the host page's `Math.random`.
    #[wasm_bindgen(js_name = withPageEntropy)]
    pub fn with_page_entropy() -> WasmSession {
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        WasmSession::new(seed)
    }

    /// Play one round.
    ///
    /// `player` is one of "rock", "paper", "scissors"; anything else is a
    /// `JsError` and leaves the session untouched.
    ///
    /// # Returns
    /// The serialized round summary: `{record: {player, opponent, outcome},
    /// stats: {played, wins, losses, draws}}`.
    pub fn play(&mut self, player: &str) -> Result<JsValue, JsError> {
        let mv: Move = player
            .parse()
            .map_err(|e: GameError| JsError::new(&e.to_string()))?;
        to_js(&self.inner.play_round(mv))
    }

    /// Reset to the initial state and return the zeroed summary.
    pub fn reset(&mut self) -> Result<JsValue, JsError> {
        to_js(&self.inner.reset())
    }

    /// Cumulative counters for this session.
    pub fn stats(&self) -> Result<JsValue, JsError> {
        to_js(self.inner.stats())
    }

    /// The most recently completed round, or `null` before the first one.
    #[wasm_bindgen(js_name = lastRound)]
    pub fn last_round(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.last_round())
    }

    /// Current state without playing or resetting.
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.snapshot())
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(serde::Serialize)]
struct MoveInfo {
    id: String,
    name: String,
    description: String,
}

/// Catalog of the three moves, for rendering the choice buttons.
#[wasm_bindgen(js_name = moveCatalog)]
pub fn move_catalog() -> Result<JsValue, JsError> {
    let moves = vec![
        MoveInfo {
            id: "rock".to_string(),
            name: "Rock".to_string(),
            description: "Beats scissors, loses to paper.".to_string(),
        },
        MoveInfo {
            id: "paper".to_string(),
            name: "Paper".to_string(),
            description: "Beats rock, loses to scissors.".to_string(),
        },
        MoveInfo {
            id: "scissors".to_string(),
            name: "Scissors".to_string(),
            description: "Beats paper, loses to rock.".to_string(),
        },
    ];

    to_js(&moves)
}

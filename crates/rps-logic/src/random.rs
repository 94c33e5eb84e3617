//! Opponent move generation.
//!
//! Randomness is an injected dependency: the session accepts anything
//! implementing [`MoveSource`], so tests can script exact opponent moves
//! while production play draws uniformly from a general-purpose PRNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::rules::Move;

/// Source of opponent moves, one per round.
pub trait MoveSource {
    /// Produce the opponent's move for the next round.
    fn draw(&mut self) -> Move;
}

/// Uniform draw over the three moves.
///
/// Backed by [`StdRng`]; not cryptographic, independent across calls.
#[derive(Clone, Debug)]
pub struct UniformDraw {
    rng: StdRng,
}

impl UniformDraw {
    /// Fresh OS-seeded source. Nothing is persisted between sessions.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible source for a known seed.
    ///
    /// The WASM layer uses this, seeding from the host page.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for UniformDraw {
    fn draw(&mut self) -> Move {
        Move::ALL[self.rng.random_range(0..Move::ALL.len())]
    }
}

/// Replays a fixed move sequence, cycling once exhausted.
///
/// Deterministic stand-in for [`UniformDraw`] so tests can assert exact
/// outcomes instead of statistical ones.
#[derive(Clone, Debug)]
pub struct ScriptedMoves {
    moves: Vec<Move>,
    next: usize,
}

impl ScriptedMoves {
    /// Create from a non-empty move sequence.
    ///
    /// # Panics
    /// Panics if `moves` is empty.
    pub fn new(moves: impl Into<Vec<Move>>) -> Self {
        let moves = moves.into();
        assert!(!moves.is_empty(), "ScriptedMoves needs at least one move");
        Self { moves, next: 0 }
    }
}

impl MoveSource for ScriptedMoves {
    fn draw(&mut self) -> Move {
        let m = self.moves[self.next % self.moves.len()];
        self.next += 1;
        m
    }
}

//! Session state: the current round and cumulative score bookkeeping.

use serde::{Deserialize, Serialize};

use crate::random::{MoveSource, UniformDraw};
use crate::rules::{resolve, Move, Outcome};

/// The most recently completed round.
///
/// Overwritten wholesale on each new round, cleared on reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub player: Move,
    pub opponent: Move,
    pub outcome: Outcome,
}

/// Cumulative session counters.
///
/// Invariant: `played == wins + losses + draws`. Each round increments
/// `played` and exactly one of the other three.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl SessionStats {
    fn record(&mut self, outcome: Outcome) {
        self.played += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Fraction of played rounds won, 0.0 for a fresh session.
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.played)
        }
    }
}

/// Immutable snapshot handed to the presentation layer after each
/// transition. `record` is `None` until the first round is played and
/// again after a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub record: Option<RoundRecord>,
    pub stats: SessionStats,
}

/// A running game session: last round, counters, and the opponent's
/// move source.
///
/// Single writer; each transition runs to completion, so the counter
/// invariant holds at every observable point. Lives for the lifetime of
/// the hosting process or page, with no terminal state.
#[derive(Clone, Debug)]
pub struct GameSession<S = UniformDraw> {
    source: S,
    record: Option<RoundRecord>,
    stats: SessionStats,
}

impl GameSession<UniformDraw> {
    /// New session with a fresh OS-seeded opponent.
    pub fn new() -> Self {
        Self::with_source(UniformDraw::from_entropy())
    }

    /// New session with a reproducible opponent for the given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_source(UniformDraw::from_seed(seed))
    }
}

impl Default for GameSession<UniformDraw> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MoveSource> GameSession<S> {
    /// New session with a caller-provided move source.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            record: None,
            stats: SessionStats::default(),
        }
    }

    /// Play one round with the given player move.
    ///
    /// Draws the opponent's move, resolves the outcome, then applies a
    /// single atomic update: replace the round record, bump `played`, and
    /// bump exactly one of wins/losses/draws. Valid in any state.
    pub fn play_round(&mut self, player: Move) -> RoundSummary {
        let opponent = self.source.draw();
        let outcome = resolve(player, opponent);
        self.record = Some(RoundRecord {
            player,
            opponent,
            outcome,
        });
        self.stats.record(outcome);
        self.snapshot()
    }

    /// Return to the initial state: zeroed counters, no round on record.
    ///
    /// Idempotent and always succeeds.
    pub fn reset(&mut self) -> RoundSummary {
        self.record = None;
        self.stats = SessionStats::default();
        self.snapshot()
    }

    /// The most recently completed round, if any.
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.record.as_ref()
    }

    /// Cumulative counters for this session.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Current state as an immutable snapshot.
    pub fn snapshot(&self) -> RoundSummary {
        RoundSummary {
            record: self.record,
            stats: self.stats,
        }
    }
}

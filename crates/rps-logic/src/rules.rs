//! Move definitions and the round-resolution rule table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// A move in Rock-Paper-Scissors.
///
/// Serializes to the lowercase names the frontend uses ("rock", "paper",
/// "scissors").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All three moves, in canonical order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// `true` iff `self` beats `other` under the fixed cycle:
    /// Rock > Scissors, Scissors > Paper, Paper > Rock.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }

    /// Lowercase wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, GameError> {
        match s {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(GameError::InvalidMove(s.to_string())),
        }
    }
}

/// Result of a round from the player's perspective.
///
/// "No round played yet" is modeled as the absence of a
/// [`RoundRecord`](crate::session::RoundRecord), not as a fourth variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
            Outcome::Draw => "draw",
        };
        f.write_str(s)
    }
}

/// Resolve one round.
///
/// Total over the three-valued domain: equal moves draw, otherwise the
/// outcome follows [`Move::beats`]. No side effects.
pub fn resolve(player: Move, opponent: Move) -> Outcome {
    if player == opponent {
        Outcome::Draw
    } else if player.beats(opponent) {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cyclic_wins() {
        assert_eq!(resolve(Move::Rock, Move::Scissors), Outcome::Win);
        assert_eq!(resolve(Move::Scissors, Move::Paper), Outcome::Win);
        assert_eq!(resolve(Move::Paper, Move::Rock), Outcome::Win);
    }

    #[test]
    fn cyclic_losses() {
        assert_eq!(resolve(Move::Scissors, Move::Rock), Outcome::Loss);
        assert_eq!(resolve(Move::Paper, Move::Scissors), Outcome::Loss);
        assert_eq!(resolve(Move::Rock, Move::Paper), Outcome::Loss);
    }

    #[test]
    fn draw_iff_equal() {
        for a in Move::ALL {
            for b in Move::ALL {
                assert_eq!(resolve(a, b) == Outcome::Draw, a == b, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn three_wins_three_losses() {
        let mut wins = 0;
        let mut losses = 0;
        for a in Move::ALL {
            for b in Move::ALL {
                match resolve(a, b) {
                    Outcome::Win => wins += 1,
                    Outcome::Loss => losses += 1,
                    Outcome::Draw => {}
                }
            }
        }
        assert_eq!(wins, 3);
        assert_eq!(losses, 3);
    }

    #[test]
    fn parse_wire_names() {
        assert_eq!("rock".parse::<Move>().unwrap(), Move::Rock);
        assert_eq!("paper".parse::<Move>().unwrap(), Move::Paper);
        assert_eq!("scissors".parse::<Move>().unwrap(), Move::Scissors);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "spock".parse::<Move>().unwrap_err();
        assert_eq!(err, GameError::InvalidMove("spock".to_string()));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Move::Rock).unwrap(), "\"rock\"");
        assert_eq!(serde_json::to_string(&Outcome::Draw).unwrap(), "\"draw\"");
        let back: Move = serde_json::from_str("\"scissors\"").unwrap();
        assert_eq!(back, Move::Scissors);
    }

    fn any_move() -> impl Strategy<Value = Move> {
        (0usize..3).prop_map(|i| Move::ALL[i])
    }

    proptest! {
        // Exactly one side wins any non-equal pair, and the loser's view
        // mirrors the winner's.
        #[test]
        fn antisymmetric_over_unequal_pairs(a in any_move(), b in any_move()) {
            prop_assume!(a != b);
            let forward = resolve(a, b);
            let reverse = resolve(b, a);
            prop_assert_ne!(forward, Outcome::Draw);
            prop_assert_ne!(reverse, Outcome::Draw);
            prop_assert_eq!(forward == Outcome::Win, reverse == Outcome::Loss);
            prop_assert_eq!(forward == Outcome::Loss, reverse == Outcome::Win);
        }
    }
}

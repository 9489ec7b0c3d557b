//! Hand (yaku) classification.
//!
//! The three dice are sorted ascending and matched against a fixed rule
//! cascade; the first matching rule wins:
//! 1. **All ones** (1-1-1): the top hand.
//! 2. **Triple** (n-n-n, n > 1): a win.
//! 3. **Four-five-six**: a win.
//! 4. **One-two-three**: an instant loss.
//! 5. **Pair**: two dice match; the odd die is the point.
//! 6. **No hand**: anything else loses.

pub mod hand;

pub use hand::{Hand, classify};

use serde::{Deserialize, Serialize};

use crate::dice::{Pip, Triplet};

/// Whether a hand wins, loses, or leaves the round open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The thrower wins outright.
    Win,
    /// The thrower loses outright.
    Lose,
    /// A pair hand, settled by comparing points.
    Neutral,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Lose => write!(f, "lose"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Where the odd die of a pair hand sits relative to the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// The odd die is higher than the pair.
    SoloAbove,
    /// The odd die is lower than the pair.
    SoloBelow,
}

impl Relation {
    fn between(pair: Pip, solo: Pip) -> Self {
        if solo > pair {
            Self::SoloAbove
        } else {
            Self::SoloBelow
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SoloAbove => write!(f, "solo above pair"),
            Self::SoloBelow => write!(f, "solo below pair"),
        }
    }
}

/// A recognised hand pattern, in rule priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Yaku {
    /// 1-1-1.
    AllOnes,
    /// Three of the same face other than one.
    Triple(Pip),
    /// 4-5-6.
    StraightHigh,
    /// 1-2-3.
    StraightLow,
    /// Exactly two dice match.
    Pair {
        /// The face shown twice.
        pair: Pip,
        /// The odd die, which is the hand's point.
        solo: Pip,
    },
    /// Three distinct faces that form no straight. Holds the sorted dice.
    NoMatch([Pip; 3]),
}

impl Yaku {
    /// Match a triplet against the rule cascade.
    pub fn from_triplet(triplet: &Triplet) -> Self {
        let [a, b, c] = triplet.sorted();
        match (a.value(), b.value(), c.value()) {
            (1, 1, 1) => Self::AllOnes,
            _ if a == b && b == c => Self::Triple(a),
            (4, 5, 6) => Self::StraightHigh,
            (1, 2, 3) => Self::StraightLow,
            // Sorted, so a pair is always adjacent.
            _ if a == b => Self::Pair { pair: a, solo: c },
            _ if b == c => Self::Pair { pair: b, solo: a },
            _ => Self::NoMatch([a, b, c]),
        }
    }

    /// The outcome category of this hand.
    pub fn outcome(&self) -> Outcome {
        match self {
            Self::AllOnes | Self::Triple(_) | Self::StraightHigh => Outcome::Win,
            Self::StraightLow | Self::NoMatch(_) => Outcome::Lose,
            Self::Pair { .. } => Outcome::Neutral,
        }
    }

    /// Short identifier, e.g. `"triple of 3"`.
    pub fn name(&self) -> String {
        match self {
            Self::AllOnes => "all ones".to_string(),
            Self::Triple(n) => format!("triple of {n}"),
            Self::StraightHigh => "four-five-six".to_string(),
            Self::StraightLow => "one-two-three".to_string(),
            Self::Pair { pair, .. } => format!("pair of {pair}"),
            Self::NoMatch(_) => "no hand".to_string(),
        }
    }

    /// The name the hand goes by at a chinchiro table.
    pub fn traditional_name(&self) -> &'static str {
        match self {
            Self::AllOnes => "pinzoro",
            Self::Triple(_) => "zorome",
            Self::StraightHigh => "shigoro",
            Self::StraightLow => "hifumi",
            Self::Pair { .. } => "me",
            Self::NoMatch(_) => "menashi",
        }
    }

    /// Human-readable description showing the dice.
    pub fn description(&self) -> String {
        match self {
            Self::AllOnes => "1-1-1, highest hand".to_string(),
            Self::Triple(n) => format!("{n}-{n}-{n}, storm"),
            Self::StraightHigh => "4-5-6, strong hand".to_string(),
            Self::StraightLow => "1-2-3, instant loss".to_string(),
            Self::Pair { pair, solo } => {
                let relation = Relation::between(*pair, *solo);
                format!("{pair}-{pair}-{solo}, point {solo} ({relation})")
            }
            Self::NoMatch([a, b, c]) => format!("{a}-{b}-{c}, loss"),
        }
    }

    /// For a pair hand, where the odd die sits relative to the pair.
    pub fn relation(&self) -> Option<Relation> {
        match self {
            Self::Pair { pair, solo } => Some(Relation::between(*pair, *solo)),
            _ => None,
        }
    }

    /// For a pair hand, the odd die. Callers compare two pair hands by it.
    pub fn point(&self) -> Option<Pip> {
        match self {
            Self::Pair { solo, .. } => Some(*solo),
            _ => None,
        }
    }
}

impl std::fmt::Display for Yaku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

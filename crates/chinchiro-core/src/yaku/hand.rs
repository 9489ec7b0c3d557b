//! Classified hands.

use serde::{Deserialize, Serialize};

use super::{Outcome, Yaku};
use crate::dice::Triplet;

/// The classification of one throw: which hand it is and how it ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    /// The matched pattern.
    pub yaku: Yaku,
    /// Short identifier, e.g. `"four-five-six"`.
    pub name: String,
    /// Human-readable description showing the dice.
    pub description: String,
    /// Win, lose, or neutral.
    pub outcome: Outcome,
}

impl From<Yaku> for Hand {
    fn from(yaku: Yaku) -> Self {
        Self {
            yaku,
            name: yaku.name(),
            description: yaku.description(),
            outcome: yaku.outcome(),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

/// Classify a triplet. Pure and total: every triplet yields exactly one hand.
pub fn classify(triplet: &Triplet) -> Hand {
    Hand::from(Yaku::from_triplet(triplet))
}

//! Core rules for chinchiro, the three-dice bowl game.
//!
//! Provides the die value and triplet types, a seedable die roller, and the
//! hand classifier that maps any three dice to a named hand (yaku) with a
//! win, lose, or neutral outcome.

pub mod dice;
pub mod error;
pub mod yaku;

pub use dice::{DieRoller, Pip, Triplet};
pub use error::{CoreError, CoreResult};
pub use yaku::{Hand, Outcome, Relation, Yaku, classify};

//! Die values, triplets, and rolling.
//!
//! Chinchiro is played with three ordinary six-sided dice thrown into a
//! bowl. A `Pip` is one die face, a `Triplet` is the three faces of a single
//! throw, and a `DieRoller` produces fresh throws.

pub mod roller;
pub mod triplet;

pub use roller::DieRoller;
pub use triplet::Triplet;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The number of faces on each die.
pub const FACES: u8 = 6;

/// A single die face, always in 1-6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Pip(u8);

impl Pip {
    /// Every face in ascending order.
    pub const ALL: [Pip; 6] = [Pip(1), Pip(2), Pip(3), Pip(4), Pip(5), Pip(6)];

    /// Create a pip, rejecting values outside 1-6.
    pub fn new(value: u32) -> CoreResult<Self> {
        match u8::try_from(value) {
            Ok(v @ 1..=FACES) => Ok(Self(v)),
            _ => Err(CoreError::PipOutOfRange(value)),
        }
    }

    /// The face value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for Pip {
    type Error = CoreError;

    fn try_from(value: u32) -> CoreResult<Self> {
        Self::new(value)
    }
}

impl From<Pip> for u32 {
    fn from(pip: Pip) -> Self {
        u32::from(pip.0)
    }
}

impl std::fmt::Display for Pip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! The three dice of a single throw.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Pip;
use crate::error::{CoreError, CoreResult};

/// Three dice in the order they were rolled.
///
/// Order carries no meaning for classification; `sorted` gives the
/// ascending view the hand rules are written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triplet {
    dice: [Pip; 3],
}

impl Triplet {
    /// Create a triplet from three pips.
    pub fn new(dice: [Pip; 3]) -> Self {
        Self { dice }
    }

    /// Create a triplet from raw values, rejecting any outside 1-6.
    pub fn from_values(values: [u32; 3]) -> CoreResult<Self> {
        Ok(Self::new([
            Pip::new(values[0])?,
            Pip::new(values[1])?,
            Pip::new(values[2])?,
        ]))
    }

    /// The dice in roll order.
    pub fn dice(&self) -> [Pip; 3] {
        self.dice
    }

    /// The dice in ascending order.
    pub fn sorted(&self) -> [Pip; 3] {
        let mut dice = self.dice;
        dice.sort_unstable();
        dice
    }

    /// Every ordered triplet, 6 x 6 x 6 = 216 in total.
    pub fn all() -> impl Iterator<Item = Triplet> {
        Pip::ALL.into_iter().flat_map(|a| {
            Pip::ALL
                .into_iter()
                .flat_map(move |b| Pip::ALL.into_iter().map(move |c| Triplet::new([a, b, c])))
        })
    }
}

impl FromStr for Triplet {
    type Err = CoreError;

    /// Parse `"2 2 5"`, `"2,2,5"` or `"2-2-5"`.
    fn from_str(s: &str) -> CoreResult<Self> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '-')
            .filter(|p| !p.is_empty())
            .collect();

        if parts.len() != 3 {
            return Err(CoreError::InvalidTriplet(format!(
                "expected 3 dice, found {}",
                parts.len()
            )));
        }

        let mut values = [0u32; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| CoreError::InvalidTriplet(format!("'{part}' is not a number")))?;
        }
        Self::from_values(values)
    }
}

impl std::fmt::Display for Triplet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.dice;
        write!(f, "[{a}, {b}, {c}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(a: u32, b: u32, c: u32) -> Triplet {
        Triplet::from_values([a, b, c]).unwrap()
    }

    #[test]
    fn sorted_is_ascending_and_keeps_roll_order() {
        let triplet = t(6, 1, 4);
        let sorted: Vec<u8> = triplet.sorted().iter().map(|p| p.value()).collect();
        let rolled: Vec<u8> = triplet.dice().iter().map(|p| p.value()).collect();
        assert_eq!(sorted, vec![1, 4, 6]);
        assert_eq!(rolled, vec![6, 1, 4]);
    }

    #[test]
    fn from_values_rejects_bad_die() {
        assert_eq!(
            Triplet::from_values([1, 0, 3]),
            Err(CoreError::PipOutOfRange(0))
        );
    }

    #[test]
    fn all_enumerates_every_ordered_triplet() {
        let all: Vec<Triplet> = Triplet::all().collect();
        assert_eq!(all.len(), 216);
        assert_eq!(all[0], t(1, 1, 1));
        assert_eq!(all[1], t(1, 1, 2));
        assert_eq!(all[215], t(6, 6, 6));

        let unique: std::collections::HashSet<Triplet> = all.into_iter().collect();
        assert_eq!(unique.len(), 216);
    }

    #[test]
    fn parse_separators() {
        assert_eq!("2 2 5".parse::<Triplet>(), Ok(t(2, 2, 5)));
        assert_eq!("2,2,5".parse::<Triplet>(), Ok(t(2, 2, 5)));
        assert_eq!("4-5-6".parse::<Triplet>(), Ok(t(4, 5, 6)));
        assert_eq!(" 1, 3 ,5 ".parse::<Triplet>(), Ok(t(1, 3, 5)));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "1 2".parse::<Triplet>(),
            Err(CoreError::InvalidTriplet(_))
        ));
        assert!(matches!(
            "1 two 3".parse::<Triplet>(),
            Err(CoreError::InvalidTriplet(_))
        ));
        assert_eq!("1 2 9".parse::<Triplet>(), Err(CoreError::PipOutOfRange(9)));
    }

    #[test]
    fn display() {
        assert_eq!(t(3, 1, 2).to_string(), "[3, 1, 2]");
    }
}

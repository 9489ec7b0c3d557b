//! Property tests for classification and rolling.

use std::collections::HashMap;

use proptest::prelude::*;

use chinchiro_core::{DieRoller, Outcome, Triplet, Yaku, classify};

fn triplet() -> impl Strategy<Value = Triplet> {
    [1u32..=6, 1u32..=6, 1u32..=6]
        .prop_map(|values| Triplet::from_values(values).expect("strategy yields valid pips"))
}

/// Independent statement of each rule, used to check the cascade is a partition.
fn rules_matching(t: &Triplet) -> Vec<&'static str> {
    let [a, b, c] = t.sorted().map(|p| p.value());
    let mut matched = Vec::new();
    if (a, b, c) == (1, 1, 1) {
        matched.push("all ones");
    }
    if a == b && b == c && a != 1 {
        matched.push("triple");
    }
    if (a, b, c) == (4, 5, 6) {
        matched.push("four-five-six");
    }
    if (a, b, c) == (1, 2, 3) {
        matched.push("one-two-three");
    }
    let distinct = [a, b, c]
        .iter()
        .collect::<std::collections::HashSet<_>>()
        .len();
    if distinct == 2 {
        matched.push("pair");
    }
    if distinct == 3 && (a, b, c) != (4, 5, 6) && (a, b, c) != (1, 2, 3) {
        matched.push("no hand");
    }
    matched
}

#[test]
fn every_triplet_matches_exactly_one_rule() {
    for t in Triplet::all() {
        let rules = rules_matching(&t);
        assert_eq!(rules.len(), 1, "{t} matched {rules:?}");

        let kind = match Yaku::from_triplet(&t) {
            Yaku::AllOnes => "all ones",
            Yaku::Triple(_) => "triple",
            Yaku::StraightHigh => "four-five-six",
            Yaku::StraightLow => "one-two-three",
            Yaku::Pair { .. } => "pair",
            Yaku::NoMatch(_) => "no hand",
        };
        assert_eq!(kind, rules[0], "{t}");
    }
}

#[test]
fn hand_counts_over_all_triplets() {
    let mut counts: HashMap<Outcome, usize> = HashMap::new();
    for t in Triplet::all() {
        *counts.entry(classify(&t).outcome).or_default() += 1;
    }
    // Triples 6 + straights 6 wins; pairs 6 * 5 * 3 = 90; the rest lose.
    assert_eq!(counts[&Outcome::Win], 12);
    assert_eq!(counts[&Outcome::Neutral], 90);
    assert_eq!(counts[&Outcome::Lose], 114);
}

proptest! {
    #[test]
    fn classification_ignores_order(t in triplet()) {
        let [a, b, c] = t.dice();
        let expected = classify(&t);
        for perm in [[a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
            prop_assert_eq!(classify(&Triplet::new(perm)), expected.clone());
        }
    }

    #[test]
    fn pair_point_is_the_odd_die(t in triplet()) {
        if let Yaku::Pair { pair, solo } = Yaku::from_triplet(&t) {
            prop_assert_ne!(pair, solo);
            prop_assert_eq!(t.dice().iter().filter(|&&p| p == pair).count(), 2);
            prop_assert_eq!(t.dice().iter().filter(|&&p| p == solo).count(), 1);
        }
    }

    #[test]
    fn rolls_stay_on_the_die(seed in any::<u64>()) {
        let mut roller = DieRoller::from_seed(seed);
        for _ in 0..50 {
            let v = roller.roll_one().value();
            prop_assert!((1..=6).contains(&v));
        }
    }
}

use chinchiro_core::{Triplet, classify};
use chinchiro_cup::Round;

pub fn run(dice: &[String], json: bool) -> Result<(), String> {
    let triplet: Triplet = dice.join(" ").parse::<Triplet>().map_err(|e| e.to_string())?;
    let hand = classify(&triplet);

    if json {
        super::print_json(&Round { triplet, hand })
    } else {
        super::print_round(&triplet, &hand);
        Ok(())
    }
}

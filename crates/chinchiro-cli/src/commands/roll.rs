use std::io::{self, IsTerminal};

pub fn run(seed: Option<u64>, instant: bool, json: bool) -> Result<(), String> {
    let cup = super::build_cup(seed, instant);
    let runtime = super::runtime()?;
    let animate = !json && io::stdout().is_terminal();

    let round = super::throw(&runtime, &cup, animate)?;

    if json {
        super::print_json(&round)
    } else {
        super::print_round(&round.triplet, &round.hand);
        Ok(())
    }
}

use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;

pub fn run(seed: Option<u64>, instant: bool) -> Result<(), String> {
    let cup = super::build_cup(seed, instant);
    let runtime = super::runtime()?;
    let animate = io::stdout().is_terminal();

    println!("  {} Chinchiro", "Starting".bold());
    println!("  Press Enter to throw, 'rules' for the hand table, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match line.trim().to_lowercase().as_str() {
            "" | "roll" | "r" => {
                let round = super::throw(&runtime, &cup, animate)?;
                super::print_round(&round.triplet, &round.hand);
                println!();
            }
            "rules" | "help" => {
                println!("{}\n", super::rules::table());
            }
            "quit" | "q" => break,
            other => {
                println!("{}\n", format!("unknown command: {other}").yellow());
            }
        }
    }

    Ok(())
}

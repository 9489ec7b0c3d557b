pub mod judge;
pub mod odds;
pub mod play;
pub mod roll;
pub mod rules;

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use tokio::runtime::{Builder, Runtime};

use chinchiro_core::{Hand, Outcome, Pip, Triplet, Yaku};
use chinchiro_cup::{CupConfig, DiceCup, Round};

/// Build a cup from the command-line flags.
fn build_cup(seed: Option<u64>, instant: bool) -> DiceCup {
    let mut config = CupConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if instant {
        config = config.instant();
    }
    DiceCup::new(config)
}

/// A single-threaded runtime: the cup is driven from one thread only.
fn runtime() -> Result<Runtime, String> {
    Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| format!("failed to start runtime: {e}"))
}

/// Run one throw to completion, redrawing frames in place when `animate` is set.
fn throw(runtime: &Runtime, cup: &DiceCup, animate: bool) -> Result<Round, String> {
    let round = runtime.block_on(cup.start_roll(|frame| {
        if animate {
            draw_frame(frame);
        }
    }));
    if animate {
        print!("\r{:width$}\r", "", width = 40);
    }
    round.ok_or_else(|| "the cup is already rolling".to_string())
}

fn draw_frame(frame: &Triplet) {
    print!("\r  {}  ", faces(frame).dimmed());
    // A failed flush only drops one animation frame.
    let _ = io::stdout().flush();
}

fn face(pip: Pip) -> char {
    match pip.value() {
        1 => '⚀',
        2 => '⚁',
        3 => '⚂',
        4 => '⚃',
        5 => '⚄',
        _ => '⚅',
    }
}

fn faces(triplet: &Triplet) -> String {
    let [a, b, c] = triplet.dice();
    format!("{} {} {}", face(a), face(b), face(c))
}

fn colored_name(hand: &Hand) -> ColoredString {
    match hand.outcome {
        Outcome::Win => hand.name.green().bold(),
        Outcome::Lose => hand.name.red().bold(),
        Outcome::Neutral => hand.name.yellow().bold(),
    }
}

/// Print a settled throw and its hand.
fn print_round(triplet: &Triplet, hand: &Hand) {
    println!("  {}  {triplet}", faces(triplet));
    println!(
        "  {} ({}) - {}",
        colored_name(hand),
        hand.yaku.traditional_name(),
        hand.outcome
    );
    println!("  {}", hand.description);
}

fn print_json(round: &Round) -> Result<(), String> {
    let json = serde_json::to_string_pretty(round).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

/// Hand kinds in rule priority order, for the tables.
const KINDS: [&str; 6] = [
    "all ones",
    "triple",
    "four-five-six",
    "one-two-three",
    "pair",
    "no hand",
];

fn kind_index(yaku: &Yaku) -> usize {
    match yaku {
        Yaku::AllOnes => 0,
        Yaku::Triple(_) => 1,
        Yaku::StraightHigh => 2,
        Yaku::StraightLow => 3,
        Yaku::Pair { .. } => 4,
        Yaku::NoMatch(_) => 5,
    }
}

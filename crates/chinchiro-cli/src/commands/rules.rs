use comfy_table::{ContentArrangement, Table};

use chinchiro_core::{Pip, Yaku};

/// The hand table, strongest first.
pub fn table() -> Table {
    let two = Pip::ALL[1];
    let examples = [
        (Yaku::AllOnes, "1-1-1", "The top hand"),
        (Yaku::Triple(two), "n-n-n", "Any other triple"),
        (Yaku::StraightHigh, "4-5-6", "Strong hand"),
        (Yaku::StraightLow, "1-2-3", "Loses at once"),
        (
            Yaku::Pair {
                pair: two,
                solo: Pip::ALL[4],
            },
            "p-p-s",
            "The odd die is the point",
        ),
        (
            Yaku::NoMatch([Pip::ALL[0], Pip::ALL[2], Pip::ALL[4]]),
            "a-b-c",
            "Anything else",
        ),
    ];

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Hand", "Name", "Dice", "Outcome", "Notes"]);

    for (yaku, dice, notes) in &examples {
        table.add_row(vec![
            super::KINDS[super::kind_index(yaku)].to_string(),
            yaku.traditional_name().to_string(),
            dice.to_string(),
            yaku.outcome().to_string(),
            notes.to_string(),
        ]);
    }
    table
}

pub fn run() -> Result<(), String> {
    println!("{}", table());
    Ok(())
}

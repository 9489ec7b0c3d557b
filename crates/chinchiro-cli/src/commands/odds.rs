use comfy_table::{ContentArrangement, Table};

use chinchiro_core::{Triplet, Yaku};

pub fn run() -> Result<(), String> {
    let mut counts = [0usize; 6];
    let mut seen: [Option<Yaku>; 6] = [None; 6];
    let mut total = 0usize;

    for triplet in Triplet::all() {
        let yaku = Yaku::from_triplet(&triplet);
        let index = super::kind_index(&yaku);
        counts[index] += 1;
        seen[index].get_or_insert(yaku);
        total += 1;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Hand", "Name", "Outcome", "Throws", "Chance"]);

    for (index, kind) in super::KINDS.iter().enumerate() {
        let Some(yaku) = seen[index] else {
            continue;
        };
        let chance = counts[index] as f64 / total as f64 * 100.0;
        table.add_row(vec![
            kind.to_string(),
            yaku.traditional_name().to_string(),
            yaku.outcome().to_string(),
            format!("{}/{total}", counts[index]),
            format!("{chance:.2}%"),
        ]);
    }

    println!("{table}");
    Ok(())
}

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use loto645_core::evaluator::{AggregateReport, RoundReport};
use loto645_core::models::Combination;
use loto645_core::parser::ImportSummary;
use loto645_core::tiers::Tier;

pub fn display_import_summary(summary: &ImportSummary) {
    println!("Import terminé :");
    println!("  Lignes lues      : {}", summary.total_rows);
    println!("  Tirages acceptés : {}", summary.accepted);
    if summary.dropped > 0 {
        println!("  Lignes ignorées  : {}", summary.dropped);
    }
}

pub fn display_frequencies(rows: &[(u8, u32, Tier)]) {
    println!("\n📊 Fréquences des numéros principaux (bonus exclu)\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Numéro", "Fréquence", "Groupe"]);

    for &(number, count, tier) in rows {
        let color = match tier {
            Tier::Hot => Color::Green,
            Tier::Neutral => Color::White,
            Tier::Cold => Color::Red,
        };
        table.add_row(vec![
            Cell::new(format!("{:2}", number)),
            Cell::new(count.to_string()),
            Cell::new(tier.to_string()).fg(color),
        ]);
    }
    println!("{table}");
}

pub fn display_combinations(combinations: &[Combination]) {
    if combinations.is_empty() {
        println!("Aucune combinaison générée.");
        return;
    }

    println!("\n🎲 Combinaisons générées\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Numéros"]);

    for (i, combo) in combinations.iter().enumerate() {
        table.add_row(vec![format!("{}", i + 1), join_numbers(combo)]);
    }
    println!("{table}");
}

pub fn display_round_reports(reports: &[RoundReport]) {
    if reports.is_empty() {
        println!("Aucun tirage à comparer.");
        return;
    }

    println!("\n🏆 Simulation par tirage historique\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Tirage", "Numéros gagnants", "Bonus", "Gains", "Détail", "Taux"]);

    for report in reports {
        let detail = if report.total_wins == 0 {
            "—".to_string()
        } else {
            report
                .tally
                .entries()
                .iter()
                .filter(|&&(_, count)| count > 0)
                .map(|&(rank, count)| format!("{} : {}", rank, count))
                .collect::<Vec<_>>()
                .join(", ")
        };

        // Les tirages touchant un 1er ou 2e rang sont mis en évidence
        let color = if report.tally.first > 0 {
            Some(Color::Red)
        } else if report.tally.second > 0 {
            Some(Color::DarkYellow)
        } else {
            None
        };

        let mut cells = vec![
            Cell::new(report.round.to_string()),
            Cell::new(join_numbers(&report.numbers)),
            Cell::new(format!("{:2}", report.bonus)),
            Cell::new(report.total_wins.to_string()),
            Cell::new(detail),
            Cell::new(format!("{:.2} %", report.hit_rate)),
        ];
        if let Some(c) = color {
            cells = cells.into_iter().map(|cell| cell.fg(c)).collect();
        }
        table.add_row(cells);
    }
    println!("{table}");
}

pub fn display_aggregate(report: &AggregateReport, combination_count: usize, draw_count: usize) {
    println!("\n📈 Analyse croisée\n");
    println!(
        "{} combinaisons comparées à {} tirages ({} paires) :",
        combination_count, draw_count, report.total_pairings
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Rang", "Occurrences", "Part"]);

    for &(rank, count) in &report.tally.entries() {
        table.add_row(vec![
            rank.to_string(),
            count.to_string(),
            format!("{:.2} %", report.share(u64::from(count))),
        ]);
    }
    table.add_row(vec![
        "Sans gain".to_string(),
        report.losses.to_string(),
        format!("{:.2} %", report.share(report.losses)),
    ]);
    println!("{table}");
}

fn join_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:2}", n))
        .collect::<Vec<_>>()
        .join(" - ")
}

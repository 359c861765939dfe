use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use gspanel::api::ScoredCharacter;
use gspanel::error::GsResult;
use gspanel::scorer::{Rank, ScoreBasis, Usefulness};
use serde::Serialize;
use std::io::Write;

fn rank_color(rank: Rank) -> Color {
    match rank {
        Rank::Err => Color::Red,
        Rank::Ace | Rank::AceSquared => Color::Magenta,
        Rank::S | Rank::SS | Rank::SSS => Color::Yellow,
        Rank::A | Rank::B => Color::Cyan,
        Rank::C | Rank::D => Color::White,
    }
}

fn sub_cell(text: String, usefulness: Usefulness) -> Cell {
    match usefulness {
        Usefulness::Great => Cell::new(text)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Usefulness::Useful => Cell::new(text).fg(Color::Green),
        Usefulness::Unused => Cell::new(text).fg(Color::DarkGrey),
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_character_report(character: &ScoredCharacter) {
    let profile = &character.profile;
    let best = &character.score;

    println!(
        "\n🧙 {} (Lv.{} C{}) [{}] - rule '{}'",
        profile.name, profile.level, profile.constellation, profile.element, best.rule_name
    );
    if let Some(weapon) = &profile.weapon {
        println!(
            "🗡️  {} Lv.{} R{} (base ATK {:.0})",
            weapon.name, weapon.level, weapon.refinement, weapon.base_attack
        );
    }
    for (set, pieces) in &character.set_bonuses {
        println!("   {}-piece {}", pieces, set);
    }

    // 1. Panel
    let mut panel = new_table();
    panel.add_row(vec![
        Cell::new("Stat").add_attribute(Attribute::Bold),
        Cell::new("Value"),
        Cell::new("Base + Bonus"),
        Cell::new("Weight"),
    ]);
    for line in &character.panel {
        let detail = line
            .detail
            .map(|[base, bonus]| format!("{:.0} + {:.0}", base, bonus))
            .unwrap_or_default();
        let value = if line.abnormal {
            Cell::new(format!("{} (!)", line.display_value())).fg(Color::Red)
        } else {
            Cell::new(line.display_value())
        };
        panel.add_row(vec![
            Cell::new(line.kind.short_name()),
            value,
            Cell::new(detail),
            Cell::new(line.weight),
        ]);
    }
    for i in 1..=3 {
        if let Some(col) = panel.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{}", panel);

    // 2. Items
    let mut items = new_table();
    items.add_row(vec![
        Cell::new("Slot").add_attribute(Attribute::Bold),
        Cell::new("Main"),
        Cell::new("Sub 1"),
        Cell::new("Sub 2"),
        Cell::new("Sub 3"),
        Cell::new("Sub 4"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Rank"),
    ]);
    for scored in &best.items {
        let item = &scored.item;
        let result = &scored.result;
        let mut row = vec![
            Cell::new(format!("{} +{}", item.slot, item.level)),
            Cell::new(format!(
                "{} {}",
                item.main.kind.short_name(),
                item.main.kind.format_value(item.main.value)
            )),
        ];
        for i in 0..4 {
            row.push(match result.subs.get(i) {
                Some(sub) => sub_cell(
                    format!(
                        "{} {}",
                        sub.kind.short_name(),
                        sub.kind.format_value(sub.value)
                    ),
                    sub.usefulness,
                ),
                None => Cell::new(""),
            });
        }
        row.push(Cell::new(format!("{:.1}", result.score)).fg(Color::Cyan));
        row.push(Cell::new(result.rank).fg(rank_color(result.rank)));
        items.add_row(row);
    }
    if let Some(col) = items.column_mut(6) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("{}", items);

    let rank = best
        .rank
        .map(|r| r.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("🏆 Total: {:.1} [{}]", best.total, rank);

    if best.candidates.len() > 1 {
        let others: Vec<String> = best
            .candidates
            .iter()
            .map(|(name, total)| format!("{} {:.1}", name, total))
            .collect();
        println!("   Variants: {}", others.join(" | "));
    }
}

pub fn print_basis_report(basis: &ScoreBasis) {
    println!("\n⚖️  Rule '{}'", basis.rule_name);

    let mut weights = new_table();
    weights.add_row(vec![
        Cell::new("Stat").add_attribute(Attribute::Bold),
        Cell::new("Weight"),
        Cell::new("Point Mark"),
    ]);
    for (kind, weight) in &basis.weights {
        weights.add_row(vec![
            Cell::new(kind.short_name()),
            Cell::new(weight),
            Cell::new(format!("{:.3}", basis.point_mark(*kind))),
        ]);
    }
    for i in 1..=2 {
        if let Some(col) = weights.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{}", weights);

    let mut slots = new_table();
    slots.add_row(vec![
        Cell::new("Slot").add_attribute(Attribute::Bold),
        Cell::new("Main Affix"),
        Cell::new("Max Main"),
        Cell::new("Max Total"),
    ]);
    for (i, max) in basis.max_marks.iter().enumerate() {
        slots.add_row(vec![
            Cell::new(i + 1),
            Cell::new(max.main_affix.map(|k| k.short_name()).unwrap_or("-")),
            Cell::new(format!("{:.1}", max.main)),
            Cell::new(format!("{:.1}", max.total)),
        ]);
    }
    println!("{}", slots);
}

#[derive(Serialize)]
struct ItemRow<'a> {
    character: &'a str,
    rule: &'a str,
    slot: String,
    set: &'a str,
    level: u8,
    main: &'static str,
    main_value: f64,
    score: f64,
    rank: String,
    off_stat_rolls: usize,
}

/// One CSV row per scored item.
pub fn write_items_csv<W: Write>(writer: W, characters: &[ScoredCharacter]) -> GsResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for character in characters {
        for scored in &character.score.items {
            wtr.serialize(ItemRow {
                character: &character.profile.name,
                rule: &character.score.rule_name,
                slot: scored.item.slot.to_string(),
                set: &scored.item.set_name,
                level: scored.item.level,
                main: scored.item.main.kind.into(),
                main_value: scored.item.main.value,
                score: scored.result.score,
                rank: scored.result.rank.to_string(),
                off_stat_rolls: scored.result.off_stat_rolls,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}

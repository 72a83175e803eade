use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sleep_cli::types::CleanResult;
use sleep_report::{DailyTotal, JournalReport, format_minutes};

pub fn print_clean_summary(result: &CleanResult) {
    println!("Journal: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Read"), Cell::new(stats.rows_read)]);
    table.add_row(vec![
        Cell::new("Dropped: NUIT BLANCHE"),
        count_cell(stats.filter.sentinel, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Dropped: dead day"),
        count_cell(stats.filter.dead_day, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Continuation rows filled"),
        count_cell(stats.filter.inherited, Color::Blue),
    ]);
    table.add_row(vec![
        Cell::new(format!("Years inferred (from {})", result.start_year)),
        count_cell(stats.inference.inferred, Color::Blue),
    ]);
    table.add_row(vec![
        Cell::new("Two-digit years expanded"),
        count_cell(stats.inference.expanded, Color::Blue),
    ]);
    table.add_row(vec![
        Cell::new("Years corrected"),
        count_cell(stats.years_corrected, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Resolved")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.resolved_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_report(report: &JournalReport) {
    let mut overview = Table::new();
    overview.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut overview);
    align_column(&mut overview, 1, CellAlignment::Right);
    overview.add_row(vec![Cell::new("Entries"), Cell::new(report.entries)]);
    overview.add_row(vec![Cell::new("Days"), Cell::new(report.daily.len())]);
    overview.add_row(vec![
        Cell::new("Days with several sessions"),
        Cell::new(report.multi_episode_days),
    ]);
    overview.add_row(vec![
        Cell::new("Invalid dates"),
        count_cell(report.invalid_dates.len(), Color::Red),
    ]);
    overview.add_row(vec![
        Cell::new("Unparsed durations"),
        count_cell(report.unparsed_durations, Color::Yellow),
    ]);
    let average = match report.average_daily_minutes {
        Some(minutes) => Cell::new(format_minutes(minutes.round() as u64))
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    };
    overview.add_row(vec![Cell::new("Average daily sleep"), average]);
    println!("{overview}");

    if !report.recent.is_empty() {
        println!();
        println!("Last {} day(s):", report.recent.len());
        println!("{}", daily_table(&report.recent));
    }

    if !report.long_sessions.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Row"),
            header_cell("Date"),
            header_cell("Duration"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        for session in &report.long_sessions {
            table.add_row(vec![
                dim_cell(session.row),
                Cell::new(session.date.format("%d/%m/%Y")),
                Cell::new(format_minutes(u64::from(session.minutes))).fg(Color::Yellow),
            ]);
        }
        println!();
        println!("Long sessions:");
        println!("{table}");
    }

    if !report.long_days.is_empty() {
        println!();
        println!("Days with the most sleep:");
        println!("{}", daily_table(&report.long_days));
    }

    if !report.invalid_dates.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Row"), header_cell("Value")]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        for invalid in &report.invalid_dates {
            let value = if invalid.value.is_empty() {
                dim_cell("<empty>")
            } else {
                Cell::new(&invalid.value).fg(Color::Red)
            };
            table.add_row(vec![dim_cell(invalid.row), value]);
        }
        println!();
        println!("Invalid dates:");
        println!("{table}");
    }
}

fn daily_table(days: &[DailyTotal]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Sessions"),
        header_cell("Total"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for day in days {
        table.add_row(vec![
            Cell::new(day.date.format("%d/%m/%Y")),
            Cell::new(day.episodes),
            Cell::new(format_minutes(day.minutes)),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

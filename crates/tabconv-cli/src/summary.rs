use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabconv_core::{ConversionReport, ConversionStatus, FieldClassification, FieldKind};
use tabconv_transform::CoercionStats;

/// Print the status line and, after a CSV to JSON run, the coercion table.
pub fn print_report(report: &ConversionReport) {
    match report.outcome.status {
        ConversionStatus::Success => println!("{}", report.outcome.message),
        ConversionStatus::NothingToWrite => println!("Nothing to write: {}", report.outcome.message),
        ConversionStatus::Failed => eprintln!("error: {}", report.outcome.message),
    }
    if let Some(stats) = &report.stats
        && !stats.fields().is_empty()
    {
        println!("{}", coercion_table(stats));
    }
}

/// Per-field coercion counts with a totals row.
pub fn coercion_table(stats: &CoercionStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Kind"),
        header_cell("Coerced"),
        header_cell("Unchanged"),
        header_cell("Text"),
        header_cell("Empty"),
    ]);
    apply_table_style(&mut table);
    for index in 2..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut totals = [0usize; 4];
    for field in stats.fields() {
        totals[0] += field.coerced;
        totals[1] += field.unchanged;
        totals[2] += field.text;
        totals[3] += field.absent;
        table.add_row(vec![
            Cell::new(&field.field),
            kind_cell(field.kind),
            count_cell(field.coerced, Color::Green),
            count_cell(field.unchanged, Color::Yellow),
            Cell::new(field.text),
            dim_cell(field.absent),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(totals[0], Color::Green).add_attribute(Attribute::Bold),
        count_cell(totals[1], Color::Yellow).add_attribute(Attribute::Bold),
        Cell::new(totals[2]).add_attribute(Attribute::Bold),
        dim_cell(totals[3]).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Classified field names; unlisted names are text.
pub fn fields_table(classification: &FieldClassification) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Kind")]);
    apply_table_style(&mut table);
    for (name, kind) in classification.iter() {
        table.add_row(vec![Cell::new(name), kind_cell(kind)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn kind_cell(kind: FieldKind) -> Cell {
    let cell = Cell::new(kind.as_str());
    match kind {
        FieldKind::Float | FieldKind::Integer => cell.fg(Color::Blue),
        FieldKind::Timestamp => cell.fg(Color::Magenta),
        FieldKind::Text => cell.fg(Color::DarkGrey),
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

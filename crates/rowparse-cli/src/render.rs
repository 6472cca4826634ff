//! Terminal and JSON rendering of rows and row errors.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use rowparse_ingest::{RawRow, ValidationFailure};
use rowparse_model::Issue;
use rowparse_schema::Value;

use crate::commands::{CheckOutcome, CheckReport};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    /// Pretty-printed JSON document.
    Json,
    /// One compact JSON value per line.
    Jsonl,
}

/// Table of raw rows with a 1-based row number column.
pub fn rows_table(rows: &[RawRow]) -> Table {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut table = Table::new();
    let mut header = vec![header_cell("#")];
    header.extend((1..=width).map(|i| header_cell(&i.to_string())));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);

    for (index, row) in rows.iter().enumerate() {
        let mut cells = vec![dim_cell(index + 1)];
        cells.extend(row.iter().map(|field| field_cell(field)));
        table.add_row(cells);
    }
    table
}

/// Table of validated values under the schema's column names.
pub fn values_table(columns: &[String], values: &[Vec<Value>]) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("#")];
    header.extend(columns.iter().map(|c| header_cell(c)));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);

    for (index, row) in values.iter().enumerate() {
        let mut cells = vec![dim_cell(index + 1)];
        cells.extend(row.iter().map(value_cell));
        table.add_row(cells);
    }
    table
}

/// One line per issue, grouped by row.
pub fn failure_table(failure: &ValidationFailure) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Fields"),
        header_cell("Field"),
        header_cell("Code"),
        header_cell("Expected"),
        header_cell("Found"),
        header_cell("Message"),
    ]);
    apply_failure_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    for error in failure.rows() {
        for (i, issue) in error.issues.iter().enumerate() {
            let (row_cell, raw_cell) = if i == 0 {
                (
                    Cell::new(error.row)
                        .fg(Color::Red)
                        .add_attribute(Attribute::Bold),
                    Cell::new(error.raw.join(", ")),
                )
            } else {
                (dim_cell(""), dim_cell(""))
            };
            table.add_row(vec![
                row_cell,
                raw_cell,
                issue_field_cell(issue),
                Cell::new(issue.code()).fg(Color::Yellow),
                Cell::new(issue.expected()),
                Cell::new(issue.found()),
                Cell::new(issue.message()),
            ]);
        }
    }
    table
}

/// Serialize `value` for `format`. Tables are not handled here.
pub fn to_json<T: Serialize>(value: &T, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value),
        OutputFormat::Table | OutputFormat::Jsonl => serde_json::to_string(value),
    }
}

/// Serialize each item on its own line.
pub fn to_json_lines<T: Serialize>(items: &[T]) -> serde_json::Result<String> {
    let lines = items
        .iter()
        .map(serde_json::to_string)
        .collect::<serde_json::Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}

pub fn print_rows(rows: &[RawRow], format: OutputFormat) -> serde_json::Result<()> {
    match format {
        OutputFormat::Table => println!("{}", rows_table(rows)),
        OutputFormat::Json => println!("{}", to_json(&rows, format)?),
        OutputFormat::Jsonl => print_lines(&to_json_lines(rows)?),
    }
    Ok(())
}

pub fn print_check(report: &CheckReport, format: OutputFormat) -> serde_json::Result<()> {
    match (&report.outcome, format) {
        (CheckOutcome::Valid(values), OutputFormat::Table) => {
            println!("{}", values_table(&report.columns, values));
        }
        (CheckOutcome::Valid(values), OutputFormat::Json) => {
            println!("{}", to_json(values, format)?);
        }
        (CheckOutcome::Valid(values), OutputFormat::Jsonl) => {
            print_lines(&to_json_lines(values)?);
        }
        (CheckOutcome::Invalid(failure), OutputFormat::Table) => {
            println!("{}", failure_table(failure));
            eprintln!("{failure}");
        }
        (CheckOutcome::Invalid(failure), OutputFormat::Json) => {
            println!("{}", to_json(failure, format)?);
        }
        (CheckOutcome::Invalid(failure), OutputFormat::Jsonl) => {
            print_lines(&to_json_lines(failure.rows())?);
        }
    }
    Ok(())
}

fn print_lines(text: &str) {
    if !text.is_empty() {
        println!("{text}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_failure_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn field_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn value_cell(value: &Value) -> Cell {
    match value {
        Value::Null => dim_cell("null"),
        Value::Number(_) | Value::Integer(_) => {
            Cell::new(value).set_alignment(CellAlignment::Right)
        }
        Value::Boolean(_) => Cell::new(value).fg(Color::Blue),
        Value::Text(text) => Cell::new(text),
    }
}

fn issue_field_cell(issue: &Issue) -> Cell {
    match issue.field() {
        Some(field) => Cell::new(field),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

//! Table output for option lists.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use taxonomy_model::CategoryOption;

/// Prints one cascade stage's surviving options.
pub fn print_options_table(title: &str, options: &[CategoryOption]) {
    println!();
    println!("{title}:");
    if options.is_empty() {
        println!("  (none - select a value upstream or adjust the inputs)");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Name"),
        header_cell("Associations"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for option in options {
        table.add_row(vec![
            Cell::new(&option.code),
            Cell::new(&option.name),
            Cell::new(option.associations.len()),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::MapResult;

/// Print the operator summary for a `map` run.
///
/// Goes to stdout; the caller avoids calling this when the generated
/// commands themselves went to stdout.
pub fn print_summary(result: &MapResult) {
    println!("Registry: {}", result.registry);
    if result.dry_run {
        println!("Dry run: no commands written");
    } else if let Some(path) = &result.output {
        println!("Commands written to: {}", path.display());
    }
    println!(
        "Records: {}  mapped: {}  skipped: {}",
        result.records,
        result.mapped,
        result.rejections.len()
    );

    if !result.rejections.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Field"),
            header_cell("Value"),
            header_cell("Limit"),
            header_cell("User"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 2, CellAlignment::Right);
        for rejection in &result.rejections {
            table.add_row(vec![
                Cell::new(rejection.field.description()),
                Cell::new(&rejection.value),
                Cell::new(rejection.limit),
                Cell::new(&rejection.user_name),
            ]);
        }
        println!("{table}");
    }
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

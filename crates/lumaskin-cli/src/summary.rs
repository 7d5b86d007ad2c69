use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use lumaskin_catalog::{ConditionReport, DISCLAIMER, SkinCondition, StoredProduct};
use lumaskin_cli::types::{ImportResult, InspectResult};
use lumaskin_core::ImportError;
use lumaskin_model::{CanonicalField, ColumnMap, MatchPass, ProductRecord};

pub fn print_import_summary(result: &ImportResult) {
    println!("Input: {}", result.input.display());
    println!("Encoding: {}", result.encoding);
    match (&result.store, result.inserted) {
        (Some(store), Some(inserted)) => {
            println!("Catalog: {} ({inserted} products)", store.display());
        }
        _ => println!("Catalog: unchanged (dry run)"),
    }
    print_column_table(&result.headers, &result.column_map);
    print_stats(result);
    for miss in &result.near_misses {
        println!(
            "hint: column '{}' looks like '{}' ({:.0}% similar) but was not used",
            miss.header,
            miss.field,
            miss.similarity * 100.0
        );
    }
}

fn print_stats(result: &ImportResult) {
    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Kept"), header_cell("Dropped")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(stats.rows_seen),
        Cell::new(stats.rows_kept),
        count_cell(stats.rows_dropped, Color::Yellow),
    ]);
    for column in 0..3 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    println!("{table}");
    if stats.total_degraded() > 0 {
        let parts: Vec<String> = stats
            .degraded
            .iter()
            .map(|(field, count)| format!("{field}: {count}"))
            .collect();
        println!("Defaulted values: {}", parts.join(", "));
    }
}

pub fn print_inspect(result: &InspectResult, preview: usize) {
    let outcome = &result.outcome;
    println!("Input: {}", result.input.display());
    println!("Encoding: {}", outcome.encoding);
    println!(
        "Records: {} of {} rows",
        outcome.stats.rows_kept, outcome.stats.rows_seen
    );
    print_column_table(&outcome.headers, &outcome.column_map);
    let records: Vec<&ProductRecord> = result.preview(preview).iter().collect();
    if !records.is_empty() {
        print_record_table(&records);
    }
}

fn print_column_table(headers: &[String], map: &ColumnMap) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Column"),
        header_cell("Header"),
        header_cell("Match"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for field in CanonicalField::ALL {
        let row = match map.resolution(field) {
            Some(resolution) => vec![
                field_cell(field),
                Cell::new(resolution.column),
                Cell::new(&resolution.header),
                match resolution.pass {
                    MatchPass::Exact => Cell::new("exact").fg(Color::Green),
                    MatchPass::Fuzzy => Cell::new("fuzzy").fg(Color::Yellow),
                },
            ],
            None => vec![field_cell(field), dim_cell("-"), dim_cell("-"), dim_cell("unresolved")],
        };
        table.add_row(row);
    }
    println!("{table}");

    let unused: Vec<&str> = headers
        .iter()
        .enumerate()
        .filter(|(index, header)| {
            !header.is_empty() && map.iter().all(|(_, r)| r.column != *index)
        })
        .map(|(_, header)| header.as_str())
        .collect();
    if !unused.is_empty() {
        println!("Unused columns: {}", unused.join(", "));
    }
}

pub fn print_products(products: &[StoredProduct]) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }
    let records: Vec<&ProductRecord> = products.iter().map(|stored| &stored.product).collect();
    print_record_table(&records);
    println!("{} product(s)", products.len());
}

fn print_record_table(records: &[&ProductRecord]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Brand"),
        header_cell("Price"),
        header_cell("Rating"),
        header_cell("Category"),
        header_cell("Skin Type"),
        header_cell("Ingredients"),
    ]);
    apply_product_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.name).add_attribute(Attribute::Bold),
            Cell::new(&record.brand),
            Cell::new(format!("{:.2}", record.price)),
            Cell::new(format!("{:.1}", record.rating)),
            Cell::new(&record.category),
            list_cell(&record.skin_type),
            list_cell(&record.ingredients),
        ]);
    }
    println!("{table}");
}

pub fn print_analysis(reports: &[ConditionReport]) {
    for report in reports {
        println!(
            "{} ({:.0}%)",
            report.prediction.label,
            report.prediction.confidence * 100.0
        );
        if let Some(guidance) = report.guidance {
            println!("  {}", guidance.summary);
            for line in guidance.routine.lines() {
                println!("  {line}");
            }
            println!("  Key ingredients: {}", guidance.key_ingredients);
        }
        print_products(&report.products);
    }
    println!("{DISCLAIMER}");
}

pub fn print_conditions() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Condition"), header_cell("Target ingredients")]);
    apply_table_style(&mut table);
    for condition in SkinCondition::ALL {
        table.add_row(vec![
            Cell::new(condition.as_str()),
            Cell::new(condition.target_ingredients().join(", ")),
        ]);
    }
    println!("{table}");
}

/// Prints the structured part of an import failure.
pub fn print_import_error(error: &ImportError) {
    let Some(diagnostics) = error.diagnostics() else {
        return;
    };
    eprintln!("Detected headers: {}", diagnostics.detected_headers.join(", "));
    eprintln!("First row: {}", diagnostics.sample_row.join(" | "));
    eprintln!("hint: {}", diagnostics.hint);
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_product_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(15)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ]);
    }
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

fn field_cell(field: CanonicalField) -> Cell {
    let cell = Cell::new(field.as_str());
    if field.is_mandatory() {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn list_cell(items: &[String]) -> Cell {
    if items.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(items.join(", "))
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

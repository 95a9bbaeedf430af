use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use crossterm::style::Stylize;

use crate::table::controller::TableController;
use crate::ui::table_renderer::EMPTY_MESSAGE;

/// Render the table in its current column order as plain text
pub fn render_classic<R>(table: &TableController<R>) -> String {
    let instance = table.instance();

    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(
        instance
            .headers()
            .iter()
            .map(|h| Cell::new(&h.label).add_attribute(Attribute::Bold)),
    );

    let row_model = instance.row_model();
    if row_model.is_empty() {
        out.add_row(vec![Cell::new(EMPTY_MESSAGE)]);
    }
    for row in &row_model.rows {
        out.add_row(row.visible_cells().iter().map(|c| c.text.clone()));
    }

    out.to_string()
}

pub fn print_classic<R>(table: &TableController<R>) {
    println!("{}", render_classic(table));
    let count = table.rows().len();
    if count == 0 {
        println!("\n{}", "0 rows".yellow());
    } else {
        println!("\n{}", format!("{} rows", count).green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::payment::{payment_columns, sample_payments};

    #[test]
    fn test_classic_output_follows_order() {
        let table = TableController::new(payment_columns(), sample_payments()).unwrap();
        let text = render_classic(&table);

        let id = text.find("Id").unwrap();
        let amount = text.find("Amount").unwrap();
        assert!(id < amount);
        assert!(text.contains("728ed52f"));
        assert!(text.contains("A Coruña"));
    }

    #[test]
    fn test_classic_empty_table() {
        let table = TableController::new(payment_columns(), Vec::new()).unwrap();
        assert!(render_classic(&table).contains(EMPTY_MESSAGE));
    }
}

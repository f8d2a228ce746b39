use std::io::Write;

use crate::domain::{
    metrics::{self, Totals},
    product::Product,
};

#[derive(serde::Serialize)]
/// Internal CSV output row: the stored product fields followed by the
/// derived figures, monetary values formatted to 4 decimal places.
struct ProductRow {
    id: u64,
    name: String,
    cost_price: String,
    sale_price: String,
    stock: u32,
    sold: u32,
    remaining: i64,
    revenue_sold: String,
    revenue_remaining: String,
    cost_sold: String,
    cost_remaining: String,
    profit: String,
}

#[derive(serde::Serialize)]
struct SummaryRow {
    units_sold: i64,
    units_remaining: i64,
    cost_sold: String,
    cost_remaining: String,
    revenue_sold: String,
    revenue_remaining: String,
    profit: String,
}

/// Writes the product table to a CSV writer.
///
/// The output includes a header row:
/// `id,name,cost_price,sale_price,stock,sold,remaining,revenue_sold,revenue_remaining,cost_sold,cost_remaining,profit`.
/// Rows appear in the collection's insertion order, which is the display
/// order. Monetary fields are formatted with exactly 4 decimal places.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use inventory_ledger::io::writer::write_products;
/// use inventory_ledger::domain::product::Product;
/// use inventory_ledger::common::money::Money;
///
/// let products = vec![Product {
///     id: 1,
///     name: "Widget".to_string(),
///     cost_price: Money::from_str("2.50").unwrap(),
///     sale_price: Money::from_str("5.00").unwrap(),
///     stock: 10,
///     sold: 3,
/// }];
///
/// let mut out = Vec::new();
/// write_products(&mut out, &products).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("id,name,cost_price,sale_price,stock,sold,remaining,"));
/// assert!(s.contains("1,Widget,2.5000,5.0000,10,3,7,"));
/// ```
pub fn write_products<W: Write>(writer: W, products: &[Product]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for product in products {
        let m = metrics::per_product(product);
        let row = ProductRow {
            id: product.id,
            name: product.name.clone(),
            cost_price: product.cost_price.to_string_4dp(),
            sale_price: product.sale_price.to_string_4dp(),
            stock: product.stock,
            sold: product.sold,
            remaining: m.remaining_stock,
            revenue_sold: m.revenue_sold.to_string_4dp(),
            revenue_remaining: m.revenue_remaining.to_string_4dp(),
            cost_sold: m.cost_sold.to_string_4dp(),
            cost_remaining: m.cost_remaining.to_string_4dp(),
            profit: m.profit.to_string_4dp(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the aggregate totals as a single-row CSV with the header
/// `units_sold,units_remaining,cost_sold,cost_remaining,revenue_sold,revenue_remaining,profit`.
pub fn write_summary<W: Write>(writer: W, totals: &Totals) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    wtr.serialize(SummaryRow {
        units_sold: totals.units_sold,
        units_remaining: totals.units_remaining,
        cost_sold: totals.cost_sold.to_string_4dp(),
        cost_remaining: totals.cost_remaining.to_string_4dp(),
        revenue_sold: totals.revenue_sold.to_string_4dp(),
        revenue_remaining: totals.revenue_remaining.to_string_4dp(),
        profit: totals.profit.to_string_4dp(),
    })?;

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::money::Money;
    use std::str::FromStr;

    fn product(id: u64, name: &str, cost: &str, sale: &str, stock: u32, sold: u32) -> Product {
        Product {
            id,
            name: name.to_string(),
            cost_price: Money::from_str(cost).unwrap(),
            sale_price: Money::from_str(sale).unwrap(),
            stock,
            sold,
        }
    }

    // Helper: writes products to a Vec<u8> and returns UTF-8 string.
    fn products_to_string(products: &[Product]) -> String {
        let mut out = Vec::new();
        write_products(&mut out, products).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_header_and_rows_in_insertion_order() {
        // Ids out of numeric order on purpose: display order is insertion
        // order, never a sort.
        let products = vec![
            product(2, "Beta", "2.00", "3.00", 8, 2),
            product(1, "Alpha", "1.00", "2.00", 5, 5),
        ];

        let s = products_to_string(&products);
        let lines: Vec<&str> = s.lines().collect();

        assert_eq!(lines.len(), 3, "expected header + 2 rows");
        assert_eq!(
            lines[0],
            "id,name,cost_price,sale_price,stock,sold,remaining,revenue_sold,revenue_remaining,cost_sold,cost_remaining,profit"
        );
        assert!(lines[1].starts_with("2,Beta,"));
        assert!(lines[2].starts_with("1,Alpha,"));
    }

    #[test]
    fn writes_derived_figures_with_4dp_formatting() {
        let products = vec![product(1, "Widget", "2.50", "5.00", 10, 3)];

        let s = products_to_string(&products);
        let lines: Vec<&str> = s.lines().collect();

        assert_eq!(
            lines[1],
            "1,Widget,2.5000,5.0000,10,3,7,15.0000,35.0000,7.5000,17.5000,25.0000"
        );
    }

    #[test]
    fn writes_empty_table_as_header_only() {
        let s = products_to_string(&[]);
        assert_eq!(s.lines().count(), 1);
    }

    #[test]
    fn writes_summary_row() {
        let products = vec![
            product(1, "Widget", "2.50", "5.00", 10, 3),
            product(2, "Gadget", "1.00", "1.50", 4, 0),
        ];
        let totals = metrics::aggregate(&products);

        let mut out = Vec::new();
        write_summary(&mut out, &totals).unwrap();
        let s = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = s.lines().collect();

        assert_eq!(lines.len(), 2, "expected header + 1 row");
        assert_eq!(
            lines[0],
            "units_sold,units_remaining,cost_sold,cost_remaining,revenue_sold,revenue_remaining,profit"
        );
        assert_eq!(lines[1], "3,11,7.5000,21.5000,15.0000,41.0000,27.0000");
    }
}

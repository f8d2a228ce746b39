/// Raw add-form fields as the user entered them. Parsing and validation
/// happen in the add handler, so rejects can name the offending field.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub cost_price: String,
    pub sale_price: String,
    pub stock: String,
    pub sold: String,
}

/// Represents a state-changing request sent from the presentation layer to
/// the processor for handling.
#[derive(Debug)]
pub enum Command {
    Add(ProductDraft),
    AdjustSold { id: u64, delta: i64 },
    Remove { id: u64 },
    Clear,
}

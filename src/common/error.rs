use std::fmt;

/// Add-form field named in validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    CostPrice,
    SalePrice,
    Stock,
    Sold,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::CostPrice => "cost price",
            Field::SalePrice => "sale price",
            Field::Stock => "stock",
            Field::Sold => "sold",
        };
        f.write_str(label)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("invalid {field}: {reason}")]
    Validation { field: Field, reason: String },
    #[error("sold count would become {candidate}, allowed range is 0..={stock}")]
    InvalidQuantity { candidate: i64, stock: u32 },
    #[error("malformed snapshot: {0}")]
    Restore(String),
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing input csv path. usage: cargo run -- <commands.csv> [snapshot.json]")]
    MissingArg,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

pub mod ledger;
pub mod metrics;
pub mod product;
pub mod snapshot;

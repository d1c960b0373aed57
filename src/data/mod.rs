//! Data module - grant record types and CSV loading

mod loader;
mod model;

pub use loader::{load_csv, LoadError, AMOUNT_COL, FROM_COL, POOL_COL, TO_COL};
pub use model::{GrantDataset, GrantRecord, BLOCKED_TRANSFER};

mod builtin;
mod persistence;
mod table;

pub use builtin::{DEFAULT_CATALOG, default_catalog, default_items};
pub use persistence::{load_catalog, save_catalog};
pub use table::Catalog;

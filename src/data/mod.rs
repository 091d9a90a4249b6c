pub mod catalog;
pub mod format;
pub mod paging;
pub mod records;

pub use catalog::{use_catalog, Catalog, CatalogProvider, EmbeddedCatalog};
pub use records::*;

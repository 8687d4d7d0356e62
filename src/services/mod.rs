// Service exports
pub mod directory;
pub mod loader;
pub mod sitemap;
pub mod taxonomy;

pub use directory::Directory;
pub use loader::{load_csv, load_json, load_path, sample_records, LoadError, LoadReport, RowRejection};
pub use sitemap::render_sitemap;
pub use taxonomy::{Taxonomy, TaxonomyError};

mod builder;
pub mod types;

pub use builder::{build_table_of_contents, build_table_of_contents_with};
pub use types::{ScanScope, TocEntry, TocOptions, CONTAINER_ID, ID_PREFIX};

//! Flat table of contents generation for HTML documents.
//!
//! The core is [`build_table_of_contents`], which works on anything that
//! implements [`Document`]. [`HtmlDocument`] is the bundled implementation,
//! and [`processor`] applies the builder to the pages of a built site.

pub mod cli;
pub mod config;
pub mod dom;
pub mod processor;
pub mod toc;
pub mod utils;

pub use dom::{Document, HtmlDocument};
pub use toc::{build_table_of_contents, build_table_of_contents_with, ScanScope, TocEntry, TocOptions};
pub use utils::error::{TocError, TocResult};

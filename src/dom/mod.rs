mod document;
mod serialize;
mod traits;
pub mod types;

pub use document::HtmlDocument;
pub use traits::Document;
pub use types::{ElementData, NodeData, NodeId, NodeKind};

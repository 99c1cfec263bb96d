mod collector;
mod page;
mod site;

pub use collector::collect_pages;
pub use page::{inspect_file, process_html, process_page, Page};
pub use site::{process_site, SiteReport};

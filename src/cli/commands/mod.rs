mod build;
mod config;
mod inspect;

pub use build::{handle_build_command, resolve_config, BuildOverrides};
pub use config::handle_config_command;
pub use inspect::handle_inspect_command;

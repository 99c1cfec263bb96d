use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "htmltoc")]
#[command(about = "Adds a table of contents to the HTML pages of a built site", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Source directory (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Destination directory (pages are rewritten in place when omitted)
    #[arg(short, long, value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Custom configuration file(s), applied in order
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<Vec<PathBuf>>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a table of contents to every page of a site
    #[command(alias = "b")]
    Build {
        /// Source directory (defaults to ./)
        #[arg(short, long, value_name = "DIR")]
        source: Option<PathBuf>,

        /// Destination directory (pages are rewritten in place when omitted)
        #[arg(short, long, value_name = "DIR")]
        destination: Option<PathBuf>,

        /// Only scan headings inside this region: a tag name or #id
        #[arg(short, long, value_name = "SELECTOR")]
        region: Option<String>,

        /// Fail when any page lacks a table of contents target
        #[arg(long, default_value_t = false)]
        strict: bool,

        /// Silence output
        #[arg(short, long, default_value_t = false)]
        quiet: bool,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,
    },

    /// Show the entries a page would get, without writing anything
    #[command(alias = "i")]
    Inspect {
        /// HTML file to inspect
        file: PathBuf,

        /// Only scan headings inside this region: a tag name or #id
        #[arg(short, long, value_name = "SELECTOR")]
        region: Option<String>,

        /// Print entries as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the effective configuration as YAML
    Config {},
}

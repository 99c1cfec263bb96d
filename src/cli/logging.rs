use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Initialize logging with the specified level.
///
/// Only the first call installs the logger; later calls just adjust the level.
pub fn init_logging(level: LevelFilter) {
    if SimpleLogger::new().with_level(level).init().is_err() {
        set_log_level(level);
    }
}

/// Change the log level of the installed logger
pub fn set_log_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Pick the log level from the global and command flags
pub fn level_for(debug: bool, verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if debug || verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false, false, false), LevelFilter::Info);
        assert_eq!(level_for(true, false, false), LevelFilter::Debug);
        assert_eq!(level_for(false, true, false), LevelFilter::Debug);
        assert_eq!(level_for(true, true, true), LevelFilter::Error);
    }
}

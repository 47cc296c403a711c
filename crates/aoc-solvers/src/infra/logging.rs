//! Logger installation
//!
//! Logs go to stderr through `simple_logger`; stdout is reserved for the
//! answer.

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Install the stderr logger and set the maximum level
///
/// The logger itself is installed once per process and lets everything
/// through; `level` is applied with [`log::set_max_level`], so calling this
/// again only changes the level.
pub fn init(level: LevelFilter) {
    if SimpleLogger::new()
        .with_level(LevelFilter::Trace)
        .init()
        .is_err()
    {
        log::trace!("Logger already installed");
    }
    log::set_max_level(level);
}

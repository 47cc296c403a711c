//! Runner constants

use log::LevelFilter;

// =============================================================================
// Command line
// =============================================================================

/// Number of arguments after the program name (`<verbosity> <part>`)
pub const ARG_COUNT: usize = 2;

/// Log level for each verbosity value (0 = warn, 1 = info, 2 = debug)
pub const LOG_LEVELS: [LevelFilter; 3] = [LevelFilter::Warn, LevelFilter::Info, LevelFilter::Debug];

/// Number of parts per puzzle
pub const PART_COUNT: u8 = 2;

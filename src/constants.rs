// src/constants.rs

/// Reserved parameter that makes the engine return the usage table instead of bindings.
pub const HELP_PARAM: &str = "help";

/// Reserved parameter that makes the engine print every binding after parsing.
pub const SHOW_PARAMS_PARAM: &str = "show_params";

/// Prefix every flag is matched with.
pub const FLAG_PREFIX: &str = "--";

/// Prefix (after `--`) of the negated form of a boolean flag.
pub const NEGATION_PREFIX: &str = "no";

/// Width of the name and default columns of the help table.
pub const HELP_COLUMN_WIDTH: usize = 20;

/// Exit status of the host binary when help was requested.
pub const HELP_EXIT_CODE: i32 = 1;

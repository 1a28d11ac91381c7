//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! so the commands stay consistent about names, value hints, and help text.

use clap::{Arg, ArgAction};

/// Pattern to compile (positional).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .required(true)
        .help("Pattern to compile (literals, `(`, `)`, `|`, `*`)")
}

/// Inputs to test against the pattern (trailing positionals).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("INPUT")
        .num_args(0..)
        .help("Inputs to test, one verdict per line")
}

/// Emit JSON instead of the text dump (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Emit the automaton as JSON instead of a text dump")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

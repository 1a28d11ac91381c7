//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tokar")
        .about("Compile restricted regular expressions to DFAs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(nfa_command())
        .subcommand(dfa_command())
        .subcommand(run_command())
}

/// Show the Thompson NFA for a pattern.
pub fn nfa_command() -> Command {
    Command::new("nfa")
        .about("Show the Thompson NFA for a pattern")
        .override_usage(
            "\
  tokar nfa <PATTERN>
  tokar nfa <PATTERN> --json",
        )
        .after_help(
            r#"EXAMPLES:
  tokar nfa '(a|b)*abb'          # state listing with ε-edges
  tokar nfa 'a*' --json          # machine-readable automaton"#,
        )
        .arg(pattern_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Show the DFA for a pattern.
pub fn dfa_command() -> Command {
    Command::new("dfa")
        .about("Show the DFA for a pattern (subset construction)")
        .override_usage(
            "\
  tokar dfa <PATTERN>
  tokar dfa <PATTERN> --json",
        )
        .after_help(
            r#"EXAMPLES:
  tokar dfa '(a|b)*abb'          # states with their NFA subsets
  tokar dfa 'a*' --json          # machine-readable automaton"#,
        )
        .arg(pattern_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Test inputs against a pattern.
pub fn run_command() -> Command {
    Command::new("run")
        .about("Compile a pattern and test inputs against it")
        .override_usage(
            "\
  tokar run <PATTERN> [INPUT]...
  tokar run <PATTERN> [INPUT]... --json",
        )
        .after_help(
            r#"EXAMPLES:
  tokar run '(a|b)*abb' abb ab aabb    # one verdict per input
  tokar run 'a*' ''                    # the empty input prints as ε
  tokar run 'a*' aa b --json           # verdicts as a JSON array"#,
        )
        .arg(pattern_arg())
        .arg(inputs_arg())
        .arg(json_arg())
        .arg(color_arg())
}

mod cli;
mod commands;

use cli::build_cli;
use commands::dfa::DfaArgs;
use commands::nfa::NfaArgs;
use commands::run::RunArgs;

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("nfa", m)) => {
            commands::nfa::run(NfaArgs::from_matches(m));
        }
        Some(("dfa", m)) => {
            commands::dfa::run(DfaArgs::from_matches(m));
        }
        Some(("run", m)) => {
            commands::run::run(RunArgs::from_matches(m));
        }
        _ => unreachable!("clap should have caught this"),
    }
}

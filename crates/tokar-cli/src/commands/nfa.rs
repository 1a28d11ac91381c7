use clap::ArgMatches;

use crate::cli::ColorChoice;
use crate::commands::common;

pub struct NfaArgs {
    pub pattern: String,
    pub json: bool,
    pub color: bool,
}

impl NfaArgs {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m
                .get_one::<String>("pattern")
                .cloned()
                .expect("clap should have caught this"),
            json: m.get_flag("json"),
            color: ColorChoice::from_matches(m).should_colorize(),
        }
    }
}

pub fn run(args: NfaArgs) {
    let nfa = match tokar_lib::compile_nfa(&args.pattern) {
        Ok(nfa) => nfa,
        Err(e) => common::fail(&e, &args.pattern, args.color),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&nfa).expect("automata always serialize");
        println!("{json}");
    } else {
        print!("{}", nfa.dump());
    }
}

use clap::ArgMatches;

use crate::cli::ColorChoice;
use crate::commands::common;

pub struct DfaArgs {
    pub pattern: String,
    pub json: bool,
    pub color: bool,
}

impl DfaArgs {
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

pub fn run(args: DfaArgs) {
    let dfa = match tokar_lib::compile(&args.pattern) {
        Ok(dfa) => dfa,
        Err(e) => common::fail(&e, &args.pattern, args.color),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&dfa).expect("automata always serialize");
        println!("{json}");
    } else {
        print!("{}", dfa.dump());
    }
}

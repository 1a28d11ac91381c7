use std::fmt::Write;

use clap::ArgMatches;
use serde::Serialize;
use tokar_lib::Dfa;

use crate::cli::ColorChoice;
use crate::commands::common;

pub struct RunArgs {
    pub pattern: String,
    pub inputs: Vec<String>,
    pub json: bool,
    pub color: bool,
}

impl RunArgs {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m
                .get_one::<String>("pattern")
                .cloned()
                .expect("clap should have caught this"),
            inputs: m
                .get_many::<String>("inputs")
                .unwrap_or_default()
                .cloned()
                .collect(),
            json: m.get_flag("json"),
            color: ColorChoice::from_matches(m).should_colorize(),
        }
    }
}

/// The outcome for one input word.
#[derive(Serialize)]
struct Verdict<'a> {
    input: &'a str,
    accept: bool,
}

pub fn run(args: RunArgs) {
    let dfa = match tokar_lib::compile(&args.pattern) {
        Ok(dfa) => dfa,
        Err(e) => common::fail(&e, &args.pattern, args.color),
    };

    let verdicts = judge(&dfa, &args.inputs);
    if args.json {
        let json = serde_json::to_string_pretty(&verdicts).expect("verdicts always serialize");
        println!("{json}");
    } else {
        print!("{}", render(&verdicts));
    }
}

fn judge<'a>(dfa: &Dfa, inputs: &'a [String]) -> Vec<Verdict<'a>> {
    inputs
        .iter()
        .map(|input| Verdict {
            input,
            accept: dfa.accepts(input),
        })
        .collect()
}

/// One line per input, in argument order. The empty input shows as ε so
/// the line is never blank after the verdict.
fn render(verdicts: &[Verdict]) -> String {
    let mut out = String::new();
    for verdict in verdicts {
        let word = if verdict.accept { "accept" } else { "reject" };
        let shown = if verdict.input.is_empty() {
            "ε"
        } else {
            verdict.input
        };
        writeln!(out, "{word}  {shown}").expect("String write never fails");
    }
    out
}

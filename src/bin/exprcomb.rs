//! Command-line interface for the exprcomb expression grammar
//!
//! Parses each input and prints the resulting expression tree. Without
//! arguments a built-in list of sample expressions is parsed instead.

use clap::Parser as ClapParser;
use exprcomb::{DEFAULT_MAX_DEPTH, ParseOptions, ParsingMode, parse_with};
use std::process::ExitCode;

const SAMPLES: &[&str] = &[
    "true",
    "false",
    "1",
    "+1",
    "-1",
    "+12",
    "-12",
    "Foo()",
    "Foo(1)",
    "Foo(1,true)",
    "Foo(1,true,Bar())",
    "Foo(1,true,Bar(true))",
];

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expressions to parse; the built-in samples are used when none are given
    inputs: Vec<String>,

    /// Reject input with text left over after the expression
    #[arg(long)]
    strict: bool,

    /// Maximum nesting depth of call arguments
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let opts = ParseOptions {
        mode: if args.strict {
            ParsingMode::Strict
        } else {
            ParsingMode::Lenient
        },
        max_depth: args.max_depth,
    };

    let inputs: Vec<&str> = if args.inputs.is_empty() {
        SAMPLES.to_vec()
    } else {
        args.inputs.iter().map(String::as_str).collect()
    };

    let mut failed = 0;
    for input in &inputs {
        match parse_with(input, &opts) {
            Ok(expr) => println!("{}", expr),
            Err(err) => {
                failed += 1;
                eprint!("{}", err.report(input));
            }
        }
    }

    log::info!("parsed {} of {} inputs", inputs.len() - failed, inputs.len());

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

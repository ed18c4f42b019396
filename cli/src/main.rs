//! The `gds` binary: parse the invocation, then dispatch.
//!
//! Exit codes: 0 on success (including the bare invocation, which prints
//! usage), 2 on any parse/validation failure, 1 on a handler failure.

use std::env;
use std::process;

use gds_cli_parser::{build_grammar, parse};
use tracing::debug;

mod commands;
mod dispatch;
mod usage;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let tokens: Vec<String> = env::args().skip(1).collect();
    let grammar = build_grammar();

    let args = match parse(&grammar, &tokens) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let Some(handler) = args.handler else {
        print!("{}", usage::render(&grammar));
        return;
    };
    debug!(handler = handler.label(), "dispatching");

    if let Err(err) = dispatch::run(handler, &args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

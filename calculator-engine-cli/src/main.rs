mod keys;
mod repl;

use anyhow::Result;
use calculator_engine::interpreter::{calculate, convert};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::debug;
use std::io;

/// Evaluates arithmetic expressions, either given as arguments or typed key by key
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expressions to evaluate. Starts an interactive session when none are given
    expressions: Vec<String>,

    /// Also print the parsed expression tree of each expression
    #[clap(long)]
    tree: bool,

    /// Do not show the live result while typing
    #[clap(long)]
    no_preview: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    debug!("{:?}", args);

    if args.expressions.is_empty() {
        let stdin = io::stdin();
        let stdout = io::stdout();
        repl::run(stdin.lock(), stdout.lock(), !args.no_preview)
    } else {
        calculate_all(&args.expressions, args.tree)
    }
}

fn calculate_all(expressions: &[String], print_tree: bool) -> Result<()> {
    for expression in expressions {
        if print_tree {
            let tree = convert(expression.clone())?;
            print!("{}", tree);
        }
        let result = calculate(expression.clone())?;
        println!("{} = {}", expression, result);
    }
    Ok(())
}

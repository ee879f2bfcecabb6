mod shell;

use crate::shell::Shell;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::LevelFilter;
use std::io;

/// Converts postfix (RPN) expressions to infix and evaluates them
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Arguments {
    /// The expression to process, e.g. `3 4 +`. Starts an interactive session if omitted
    expression: Vec<String>,
    /// Also print the expression tree
    #[clap(long)]
    tree: bool,
    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    let level = args
        .verbose
        .log_level()
        .map_or(LevelFilter::Off, |level| level.to_level_filter());
    env_logger::Builder::new().filter_level(level).init();

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), args.tree);
    shell.print_banner()?;

    if args.expression.is_empty() {
        shell.run_interactive()
    } else {
        shell.process_expression(&args.expression.join(" "))
    }
}

#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use resplint_cli::args::{CliArgs, OutputFormat};
use resplint_cli::driver::{self, EXIT_SUCCESS};
use resplint_cli::reporter::{Reporter, Summary};

fn main() -> Result<()> {
    // Initialize tracing if RESPLINT_LOG or RUST_LOG is set (zero cost otherwise).
    resplint::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    if args.list_files {
        let invocation = driver::prepare(&args, &cwd)?;
        for file in &invocation.files {
            println!("{}", file.display());
        }
        return Ok(());
    }

    let result = driver::run(&args, &cwd)?;
    let summary = Summary::from_diagnostics(&result.diagnostics, result.files.len());

    for failure in &result.failures {
        eprintln!("error: {:#}", failure.error);
    }

    match args.format {
        OutputFormat::Json => {
            let reporter = Reporter::new(false);
            println!("{}", reporter.render_json(&result.diagnostics, summary));
        }
        OutputFormat::Text => {
            let color = args
                .pretty
                .unwrap_or_else(|| std::io::stdout().is_terminal());
            colored::control::set_override(color);
            let mut reporter = Reporter::new(color);
            if !result.diagnostics.is_empty() {
                println!("{}\n", reporter.render(&result.diagnostics));
            }
            println!("{}", reporter.render_summary(&summary));
        }
    }

    let status = result.exit_status(args.deny_warnings);
    if status != EXIT_SUCCESS {
        std::process::exit(status);
    }
    Ok(())
}

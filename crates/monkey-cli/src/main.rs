// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Monkey command-line interface.
//!
//! This is the main entry point for the `monkey` command: it prints a
//! banner and drops into the interactive REPL on standard input/output.

use clap::Parser;
use miette::Result;

mod repl;

/// Monkey: an interactive parser playground for the Monkey language
#[derive(Debug, Parser)]
#[command(name = "monkey")]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    // Initialize tracing subscriber only if RUST_LOG is explicitly set.
    // This keeps stderr quiet by default so REPL output stays clean.
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .try_init();
    }

    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let _cli = Cli::parse();

    println!("Monkey v0.1");
    repl::run()
}

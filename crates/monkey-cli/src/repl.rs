// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Interactive read-parse-print loop for Monkey.
//!
//! Each submitted line is lexed and parsed with a fresh lexer/parser pair.
//! If the parser recorded errors, they are listed one per line; otherwise
//! the line echoes back as the program's canonical pretty-printed form.
//! Nothing is evaluated.
//!
//! The loop returns on end-of-input (Ctrl-D), an empty line, or the literal
//! input `exit`.

use miette::{IntoDiagnostic, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use monkey_core::source_analysis::parse;

/// The interactive prompt.
const PROMPT: &str = ">>> ";

/// Runs the REPL on standard input/output until the user exits.
pub fn run() -> Result<()> {
    let mut rl = DefaultEditor::new().into_diagnostic()?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.is_empty() || line == "exit" {
                    return Ok(());
                }

                let _ = rl.add_history_entry(&line);
                print!("{}", render(&line));
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C cancels the current line
                println!();
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D is a clean end of input
                return Ok(());
            }
            Err(e) => {
                eprintln!("Readline error: {e}");
                return Ok(());
            }
        }
    }
}

/// Parses one line and formats the response: the canonical program form, or
/// the recorded parser errors, one tab-prefixed message per line.
fn render(line: &str) -> String {
    let (program, errors) = parse(line);
    debug!(errors = errors.len(), "parsed repl line");

    if errors.is_empty() {
        return format!("{program}\n");
    }

    let mut out = String::from("Parser errors:\n");
    for error in &errors {
        out.push('\t');
        out.push_str(&error.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_echoes_canonical_form() {
        assert_eq!(render("let x = 5;"), "let x = 5;\n");
        assert_eq!(render("1 + 2 * 3"), "(1 + (2 * 3))\n");
        assert_eq!(render("add(1, 2 * 3, 4 + 5);"), "add(1, (2 * 3), (4 + 5))\n");
    }

    #[test]
    fn render_lists_parser_errors() {
        let output = render("let x 5;");
        assert!(output.starts_with("Parser errors:\n"));
        assert!(output.contains("\texpected next token to be =, got INT instead\n"));
    }

    #[test]
    fn render_lists_every_error_in_order() {
        let output = render("let x 5; let = 10;");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Parser errors:");
        assert_eq!(lines[1], "\texpected next token to be =, got INT instead");
        assert_eq!(lines[2], "\texpected next token to be IDENT, got = instead");
        assert_eq!(lines[3], "\tno prefix parse function for = found");
    }
}

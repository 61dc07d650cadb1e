use std::{
    io::{self, Write},
    iter,
};

use anyhow::Result;
use clap::Parser;

use commandline::Options;
use error::PositionalError;

mod ast;
mod commandline;
mod error;
mod lexer;
mod parser;
mod solver;
mod span;

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new()
        .module(module_path!())
        .verbosity(options.log_verbosity())
        .init()?;

    let stdout = io::stdout();
    run(&options.expression, &mut stdout.lock())
}

/// Prints the postfix and infix forms of `source`, then its partially solved form.
fn run(source: &str, out: &mut impl Write) -> Result<()> {
    let tokens = lexer::lex(source);

    let root = match parser::build(tokens) {
        Ok(root) => root,
        Err(err) => {
            if let Some(description) = describe_error(&err, source) {
                eprintln!("{}", description);
            }
            return Err(err.into());
        }
    };

    writeln!(out, "Postfix: {}", root.postfix_string())?;
    writeln!(out, "Infix: {}", root)?;

    let solved = solver::solve(root)?;
    for diagnostic in solved.diagnostics.iter() {
        writeln!(out, "{}", diagnostic)?;
    }
    writeln!(out, "Solved: {}", solved.expr)?;

    Ok(())
}

/// Renders the line containing the error, with the offending text underlined.
/// The error message itself is left to the caller, so it is reported once.
fn describe_error(err: &impl PositionalError, content: &str) -> Option<String> {
    let start: usize = err.range().start().into();
    let (line_no, line_start, error_line) = find_line(content, start)?;
    let padding = start - line_start;

    fn pad_char(ch: char, times: usize) -> String {
        iter::repeat(ch).take(times).collect()
    }

    let gutter = format!("{}", line_no);

    Some(format!(
        "{}| {}\n{}| {}{}",
        gutter,
        error_line,
        pad_char(' ', gutter.len()),
        pad_char(' ', padding),
        pad_char('^', usize::from(err.length()).max(1)),
    ))
}

fn find_line(source: &str, target_position: usize) -> Option<(usize, usize, &str)> {
    let lines = source.split_inclusive(|c| c == '\n' || c == '\r');
    let mut position = 0usize;
    for (line_idx, line) in lines.enumerate() {
        let end_position = position + line.len();
        if target_position >= position && target_position < end_position {
            return Some((line_idx + 1, position, line.trim_end()));
        }
        position = end_position;
    }
    None
}

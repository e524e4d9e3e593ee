use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use prattle::{UnknownCharPolicy, evaluate_line_with};

/// prattle evaluates arithmetic one line at a time, printing the fully
/// parenthesized form of each line and then its value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads lines from this file instead of standard input.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<String>,

    /// Skips characters that start no token, with a warning, instead of
    /// rejecting the line.
    #[arg(short, long)]
    lenient: bool,

    /// Prints only the value of each line.
    #[arg(long)]
    value_only: bool,

    /// A single expression to evaluate.
    expression: Option<String>,
}

impl Args {
    const fn policy(&self) -> UnknownCharPolicy {
        if self.lenient {
            UnknownCharPolicy::Skip
        } else {
            UnknownCharPolicy::Reject
        }
    }
}

/// Evaluates one line and reports it. Returns whether it succeeded.
fn run_line(line: &str, args: &Args) -> bool {
    match evaluate_line_with(line, args.policy()) {
        Ok((outcome, skipped)) => {
            for diagnostic in skipped {
                eprintln!("Warning: {diagnostic}");
            }
            if !args.value_only {
                println!("{}", outcome.printed);
            }
            println!("{}", outcome.value);
            true
        },
        Err(e) => {
            eprintln!("Error: {e}");
            false
        },
    }
}

/// Runs every line of `input` until it ends or a line reads `exit`.
/// Failed lines are reported and skipped.
fn run_lines(input: impl BufRead, args: &Args) -> io::Result<bool> {
    let mut all_ok = true;
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed == "exit" {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }
        all_ok &= run_line(&line, args);
    }
    Ok(all_ok)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = if let Some(expression) = &args.expression {
        Ok(run_line(expression, &args))
    } else if let Some(path) = &args.file {
        match fs::read_to_string(path) {
            Ok(contents) => run_lines(contents.as_bytes(), &args),
            Err(_) => {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        run_lines(io::stdin().lock(), &args)
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use log::info;
use reckon::{Calculator, EvalError};

/// reckon evaluates arithmetic expressions with integers, floats, `+ - * /
/// ^`, unary signs and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to treat the contents as a path to a file with one
    /// expression per line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// The expression (or file path) to evaluate. Starts an interactive
    /// session when omitted.
    contents: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let calculator = Calculator::new().unwrap_or_else(|e| {
                                          eprintln!("{e}");
                                          std::process::exit(1);
                                      });

    let succeeded = match args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            run_script(&calculator, &script)
        },
        Some(expression) => print_result(&calculator, &expression, &mut io::stdout()),
        None => {
            let stdin = io::stdin();
            match run_interactive(&calculator, stdin.lock(), &mut io::stdout()) {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("Failed to read input: {e}");
                    false
                },
            }
        },
    };

    if !succeeded {
        std::process::exit(1);
    }
}

/// Evaluates one expression, writing its result to `out` and any error to
/// standard error.
fn print_result(calculator: &Calculator, expression: &str, out: &mut impl Write) -> bool {
    match calculator.evaluate(expression) {
        Ok(value) => writeln!(out, "Result: {value}").is_ok(),
        Err(e) => {
            report(expression, &e);
            false
        },
    }
}

/// Prints an error, underlining the offending position when there is one.
fn report(expression: &str, error: &EvalError) {
    if let Some(position) = error.position()
       && let Some(before) = expression.get(..position)
    {
        eprintln!("{expression}");
        eprintln!("{}^", " ".repeat(before.chars().count()));
    }
    eprintln!("{error}");
}

/// Evaluates every non-blank line of a script, reporting failures per line.
fn run_script(calculator: &Calculator, script: &str) -> bool {
    let mut succeeded = true;

    for (index, line) in script.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match calculator.evaluate(line) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprint!("Line {}: ", index + 1);
                report(line, &e);
                succeeded = false;
            },
        }
    }

    succeeded
}

/// Reads expressions from `input` until `exit` or end of input.
///
/// Evaluation errors are reported and the session continues; read and write
/// errors end it.
fn run_interactive(calculator: &Calculator,
                   input: impl BufRead,
                   out: &mut impl Write)
                   -> io::Result<()> {
    info!("starting interactive session");

    let mut lines = input.lines();

    loop {
        writeln!(out, "Enter expression:")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        if line.trim() == "exit" {
            return Ok(());
        }

        print_result(calculator, &line, out);
    }
}

use std::{
    fs,
    io::{self, BufRead, Write},
    rc::Rc,
};

use brio::{interpret, interpreter::evaluator::environment::Environment};
use clap::Parser;

/// brio is a small, dynamically typed scripting language with first-class
/// functions and lexical closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells brio to treat the input as a path to a script file instead of
    /// inline source text.
    #[arg(short, long)]
    file: bool,

    /// Print the final value produced by the script.
    #[arg(short, long)]
    print_result: bool,

    /// Source text (or a file path with --file). Starts an interactive
    /// session when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    let env = Environment::new();

    let Some(contents) = args.contents else {
        repl(&env);
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    match interpret(&script, &env) {
        Ok(result) => {
            if args.print_result && let Some(value) = result {
                println!("{value}");
            }
        },
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        },
    }
}

/// Runs the interactive session.
///
/// Each line is interpreted in one persistent environment, so bindings made
/// on earlier lines stay visible. Parser errors are printed as a block and
/// the session continues; runtime errors print as `ERROR: <message>`.
fn repl(env: &Rc<Environment>) {
    println!("brio {} — interactive session", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!(">> ");
        if io::stdout().flush().is_err() {
            return;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {},
        }

        match interpret(&line, env) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(error) => println!("{error}"),
        }
    }
}

use std::fs;

use clap::Parser;
use logica::{
    interpreter::{session::Session, validator::Policy},
    run_script,
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// logica is an interactive evaluator for boolean logic expressions with
/// user-defined functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells logica to read commands from a file instead of an inline
    /// script.
    #[arg(short, long)]
    file: bool,

    /// Validation policy applied to expressions at definition time.
    #[arg(short, long, value_enum, default_value_t = Policy::Strict)]
    policy: Policy,

    /// An inline script (or a file path with --file). Omit to start an
    /// interactive session.
    contents: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let Some(contents) = args.contents else {
        interactive(args.policy);
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

    if let Err(e) = run_script(&script, args.policy) {
        eprintln!("{e}");
    }
}

/// Reads commands line by line until end of input.
///
/// Each command is executed against one session; failures abort the
/// current command only and the loop continues.
fn interactive(policy: Policy) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to initialize the line editor: {e}");
            return;
        },
    };

    let mut session = Session::new(policy);

    loop {
        match editor.readline("logica> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);

                match session.run_line(&line) {
                    Ok(Some(value)) => println!("Result: {value}"),
                    Ok(None) => {},
                    Err(e) => eprintln!("{e}"),
                }
            },

            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,

            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            },
        }
    }
}

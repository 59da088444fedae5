// The ABA+ CLI.
// Reads a framework file and runs one of the three operation-surface entry
// points, printing the JSON report to stdout.

use std::fs;
use std::process::ExitCode;

use aba_plus::engine::Engine;
use aba_plus::parser::parse;
use clap::{Parser, Subcommand};

#[derive(Parser)]
struct Args {
    // Path to a framework file in the text format (see the grammar in the
    // module docs for aba_plus::parser).
    path: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    // Circularity check, then Atomize -> Derive -> Attacks if acyclic.
    Analyze,
    // Force Atomize -> Derive -> Attacks regardless of circularity.
    TransformAtomic,
    // NonCircularize -> Atomize -> Derive -> Attacks.
    TransformNonCircular,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let contents = match fs::read_to_string(&args.path) {
        Ok(c) => c,
        Err(e) => {
            print_failure(&format!("could not read '{}': {}", args.path, e));
            return ExitCode::FAILURE;
        }
    };

    let framework = match parse(&contents) {
        Ok(fw) => fw,
        Err(e) => {
            print_failure(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    let engine = Engine::new();
    let result = match args.command {
        Command::Analyze => engine.analyze(&framework),
        Command::TransformAtomic => engine.transform_atomic(&framework),
        Command::TransformNonCircular => engine.transform_non_circular(&framework),
    };

    match result {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_failure(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn print_failure(message: &str) {
    let envelope = serde_json::json!({ "success": false, "error": message });
    println!("{}", serde_json::to_string_pretty(&envelope).unwrap());
}

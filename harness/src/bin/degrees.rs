//! Interactive degrees-of-separation query.
//!
//! Usage: `degrees [directory] [--json] [--max-expansions N] [--legacy-early-exit]`
//!
//! Loads `people.csv`, `movies.csv` and `stars.csv` from `directory`
//! (default `large`), asks for two names on stdin and prints the shortest
//! co-star chain between them.

use std::io::{self, Write};
use std::process::ExitCode;

use costar_harness::config::{RunConfig, USAGE};
use costar_harness::loader::load_dir;
use costar_harness::logging::init_tracing;
use costar_harness::prompt::Prompter;
use costar_harness::runner::{render_json, render_text, run_degrees};

fn main() -> ExitCode {
    init_tracing();

    let config = match RunConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RunConfig) -> Result<ExitCode, Box<dyn std::error::Error>> {
    println!("Loading data...");
    let store = load_dir(&config.data_dir)?;
    println!("Data loaded.");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    let Some(source) = prompter.ask_person(&store)? else {
        eprintln!("Person not found.");
        return Ok(ExitCode::FAILURE);
    };
    let Some(target) = prompter.ask_person(&store)? else {
        eprintln!("Person not found.");
        return Ok(ExitCode::FAILURE);
    };
    drop(prompter);

    let run = run_degrees(&store, &source, &target, &config.policy)?;

    let mut out = io::stdout().lock();
    if config.json {
        out.write_all(&render_json(&run)?)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", render_text(&run))?;
    }
    Ok(ExitCode::SUCCESS)
}

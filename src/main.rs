use std::env;
use std::io;
use std::process::ExitCode;

use manifest_transform::core::Registry;
use manifest_transform::{cli, logging};

fn main() -> ExitCode {
    if let Err(err) = logging::init() {
        eprintln!("ERROR: {err}");
        return ExitCode::FAILURE;
    }

    let registry = match Registry::with_builtins() {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("ERROR: {err}");
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = env::args().collect();
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    match cli::run(&args, &registry, &mut stdin, &mut stdout) {
        0 => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

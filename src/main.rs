//! Filetransform's main application entry point.
//! Handles command-line argument parsing, logger construction, and maps
//! the task result into a process exit code.

use filetransform::{
    cli::{get_args, parse_parameters, parse_variables, Args},
    error::{default_error_handler, Result},
    invoke::{invoke, TaskStatus},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    match run(args) {
        Ok(success) => {
            if !success {
                std::process::exit(1);
            }
        }
        Err(err) => default_error_handler(err),
    }
}

fn run(args: Args) -> Result<bool> {
    let parameters = parse_parameters(&args.parameters)?;
    let variables = parse_variables(&args.variables)?;

    let task = invoke(&parameters, &variables)?;

    for warning in &task.warnings {
        log::warn!("Variable '{}' was not found and resolved to an empty string", warning);
    }

    match task.status {
        TaskStatus::Completed => {
            println!("{}: completed.", task.name);
            Ok(true)
        }
        TaskStatus::Failed => {
            eprintln!("{}: failed.", task.name);
            for error in &task.errors {
                eprintln!("  {}", error);
            }
            Ok(false)
        }
    }
}

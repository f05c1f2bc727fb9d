use clap::Parser;

use unrar_wrapper::args::build_spawn_params;
use unrar_wrapper::cli::Cli;
use unrar_wrapper::exec;
use unrar_wrapper::trace::init_tracing;

fn main() {
    init_tracing();

    // Invalid commands and flags exit with status 2 here, before the
    // pipeline runs.
    let cli = Cli::parse();

    let params = match build_spawn_params(&cli) {
        Ok(params) => params,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    for warning in &params.warnings {
        eprintln!("{warning}");
    }

    match exec::run(&params) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

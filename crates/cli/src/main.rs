use clap::Parser;
use line_tally_cli::args::Args;
use line_tally_cli::error::Result;
use line_tally_cli::{config, presentation, prompt};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    log::debug!("line_tally v{}", line_tally_cli::VERSION);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let root = match args.root {
        Some(root) => root,
        None => prompt::ask_root(&mut std::io::stdin().lock(), &mut std::io::stdout())?,
    };

    let config = config::scan_config(root)?;
    let result = line_tally_engine::run(&config)?;

    presentation::print_errors(&result.errors);
    presentation::print_report(&result.totals);
    Ok(())
}

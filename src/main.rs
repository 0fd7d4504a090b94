use std::env;

mod cli;
mod error;
mod exits;
mod pass;
mod rng;
mod settings;
mod terminal;
mod tui;

/// Environment variable holding the `env_logger` filter.
const LOG_ENV: &str = "PAIRPASS_LOG";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .init();

    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();
    log::debug!("starting with {} argument(s)", args.len().saturating_sub(1));

    match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    }
}

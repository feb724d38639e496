//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    if let Err(err) = dishmatch_cli::run() {
        eprintln!("dishmatch: {err}");
        std::process::exit(1);
    }
}

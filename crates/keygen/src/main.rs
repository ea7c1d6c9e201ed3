use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use p2p_keygen::Cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match p2p_keygen::run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("p2p-tool failed: {e:?}");
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}

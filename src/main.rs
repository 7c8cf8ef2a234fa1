//! Terminal front end for the arcade.
//!
//! Prompts go to stdout and answers are read from stdin, one per line.
//! Logs go to stderr, filtered by `RUST_LOG` or `--log-level`.

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rust_arcade::{
    confirm, Answer, Arcade, ArcadeConfig, ArcadeError, Host, PortError, TerminalPort, TerminalSink,
};

#[derive(Debug, Parser)]
#[command(name = "arcade", version, about = "Guessing game, magic eight ball and bear/ninja/hunter")]
struct Args {
    /// RNG seed, for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Player name; skips the name prompt.
    #[arg(long)]
    name: Option<String>,

    /// Log filter, e.g. `debug` or `rust_arcade=trace`.
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn config(&self) -> ArcadeConfig {
        let config = self.seed.into_iter().fold(ArcadeConfig::new(), ArcadeConfig::with_seed);
        self.name.iter().fold(config, |config, name| config.with_player_name(name.as_str()))
    }
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run<R: BufRead>(arcade: &mut Arcade, port: &mut TerminalPort<R, io::Stdout>) -> Result<(), ArcadeError> {
    let mut sink = TerminalSink::new(io::stdout());
    loop {
        arcade.run(&mut Host::new(port, &mut sink))?;
        if confirm(port, "Play again? yes/no")? == Answer::No {
            return Ok(());
        }
        arcade.reload(&mut sink)?;
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let mut arcade = Arcade::new(args.config());
    let stdin = io::stdin();
    let mut port = TerminalPort::new(stdin.lock(), io::stdout());

    match run(&mut arcade, &mut port) {
        Ok(()) => ExitCode::SUCCESS,
        Err(ArcadeError::Port(PortError::Closed)) => {
            info!("input closed, leaving the arcade");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "arcade failed");
            ExitCode::FAILURE
        }
    }
}

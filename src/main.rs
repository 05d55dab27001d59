//! Rock, Paper, Scissors Binary
//!
//! Plays a session against the computer on the current terminal.
//!
//! Options: --rounds N, --verbose, --debug

use anyhow::Context;
use clap::Parser;
use rock_paper_scissors::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    let settings = match Settings::try_from(Args::parse()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    if let Err(e) = log(settings.level()) {
        eprintln!("logging disabled: {}", e);
    }
    if let Err(e) = kys() {
        log::warn!("ctrl+c handler unavailable: {}", e);
    }
    match play(settings) {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => ExitCode::from(bail(e)),
    }
}

fn play(settings: Settings) -> anyhow::Result<Summary> {
    log::info!("starting game with {} round(s)", settings.rounds);
    Session::new(settings.rounds, Human::default(), Computer)
        .run(&mut Console::stdout(settings.verbose))
        .context("game session ended early")
}

fn bail(e: anyhow::Error) -> u8 {
    match e.downcast_ref::<Fault>() {
        Some(fault) if fault.is_cancelled() => {
            println!("\n\n{}", FAREWELL);
            log::info!("game interrupted by user");
            fault.code()
        }
        fault => {
            eprintln!("\nAn error occurred: {:#}", e);
            log::error!("unexpected error occurred: {:?}", e);
            fault.map_or(EXIT_FAILURE, Fault::code)
        }
    }
}

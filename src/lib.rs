//! Rock, Paper, Scissors against a computer opponent.
//!
//! The game core is terminal-agnostic: a [`Session`] drives any two
//! [`Player`]s through a fixed number of rounds, resolves each round with
//! [`Outcome::resolve`], keeps a [`Tally`] and hands every result to a
//! [`Report`]. The `cli` feature adds the interactive [`Human`] player,
//! the colored [`Console`] report and the command line.
mod choice;
mod fault;
mod lines;
mod outcome;
mod player;
mod report;
mod session;
mod settings;
mod tally;

#[cfg(feature = "cli")]
mod args;
#[cfg(feature = "cli")]
mod human;

pub use choice::*;
pub use fault::*;
pub use lines::*;
pub use outcome::*;
pub use player::*;
pub use report::*;
pub use session::*;
pub use settings::*;
pub use tally::*;

#[cfg(feature = "cli")]
pub use args::*;
#[cfg(feature = "cli")]
pub use human::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Counter for rounds played and rounds won.
pub type Count = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SESSION PARAMETERS
// ============================================================================
/// Rounds played when none are requested.
pub const DEFAULT_ROUNDS: Count = 1;
/// Width of the `=` rules framing the session header and summary.
pub const BANNER_WIDTH: usize = 50;
/// Width of the `-` rule under each round heading.
pub const ROUND_WIDTH: usize = 30;

// ============================================================================
// INPUT
// ============================================================================
/// Prompt shown before every line of text input.
pub const TEXT_PROMPT: &str = "Enter your choice (rock, paper, scissors): ";
/// Prompt shown above the interactive menu.
pub const MENU_PROMPT: &str = "Select your choice:";
/// Shown after a line that names no valid choice.
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

// ============================================================================
// PROCESS BOUNDARY
// ============================================================================
/// Exit code for a session that ran to completion.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit code for bad arguments and unexpected failures.
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for a session ended by the user (128 + SIGINT).
pub const EXIT_INTERRUPTED: u8 = 130;
/// Printed when the user walks away mid-session.
pub const FAREWELL: &str = "Game interrupted by user. Goodbye!";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr at the given level,
/// leaving stdout to the game itself.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}

/// Register Ctrl+C handler for immediate termination.
/// Covers the cooked-mode line read, where the blocked `read_line`
/// would never observe the signal. The menu runs in raw mode and
/// reports Ctrl+C as [`Fault::Cancelled`] instead.
#[cfg(feature = "cli")]
pub fn kys() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        println!("\n\n{}", FAREWELL);
        log::info!("game interrupted by user (ctrl+c)");
        std::process::exit(EXIT_INTERRUPTED as i32);
    })
}

//! Command line for the game binary.
use crate::*;
use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  rock-paper-scissors                    # Play one round
  rock-paper-scissors -r 5               # Play 5 rounds
  rock-paper-scissors --rounds 3 -v      # Play 3 rounds with verbose output
  rock-paper-scissors --debug            # Enable debug logging";

/// Play Rock, Paper, Scissors game against the computer
#[derive(Parser, Debug, Clone)]
#[command(name = "rock-paper-scissors", version, after_help = EXAMPLES)]
pub struct Args {
    /// number of rounds to play
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = DEFAULT_ROUNDS as i64,
        allow_negative_numbers = true
    )]
    pub rounds: i64,
    /// enable verbose output (shows more game details)
    #[arg(short, long)]
    pub verbose: bool,
    /// enable debug logging (shows all logging messages)
    #[arg(long)]
    pub debug: bool,
}

/// Rejects sessions that would play nothing.
impl TryFrom<Args> for Settings {
    type Error = String;
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let rounds = Count::try_from(args.rounds)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| String::from("Number of rounds must be at least 1"))?;
        Ok(Self {
            rounds,
            verbose: args.verbose,
            debug: args.debug,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("rock-paper-scissors").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let args = parse(&[]);
        assert_eq!(args.rounds, 1);
        assert!(!args.verbose);
        assert!(!args.debug);
        assert_eq!(Settings::try_from(args), Ok(Settings::default()));
    }

    #[test]
    fn short_and_long_flags() {
        let args = parse(&["-r", "5", "-v"]);
        assert_eq!(args.rounds, 5);
        assert!(args.verbose);
        let args = parse(&["--rounds", "3", "--verbose", "--debug"]);
        assert_eq!(args.rounds, 3);
        assert!(args.debug);
    }

    #[test]
    fn zero_rounds_rejected() {
        let err = Settings::try_from(parse(&["--rounds", "0"])).unwrap_err();
        assert_eq!(err, "Number of rounds must be at least 1");
    }

    #[test]
    fn negative_rounds_reach_validation() {
        let args = parse(&["-r", "-2"]);
        assert_eq!(args.rounds, -2);
        assert!(Settings::try_from(args).is_err());
    }

    #[test]
    fn garbage_rounds_rejected_by_parser() {
        assert!(Args::try_parse_from(["rock-paper-scissors", "--rounds", "many"]).is_err());
    }

    #[test]
    fn version_flag() {
        let err = Args::try_parse_from(["rock-paper-scissors", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}

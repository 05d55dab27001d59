use crate::*;

/// Validated runtime configuration for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Rounds to play, at least one.
    pub rounds: Count,
    /// Show the user's own choice each round and log at info level.
    pub verbose: bool,
    /// Log everything.
    pub debug: bool,
}

impl Settings {
    /// Log level implied by the verbosity flags.
    pub fn level(&self) -> log::LevelFilter {
        match (self.debug, self.verbose) {
            (true, _) => log::LevelFilter::Debug,
            (false, true) => log::LevelFilter::Info,
            (false, false) => log::LevelFilter::Warn,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            verbose: false,
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plays_one_quiet_round() {
        let settings = Settings::default();
        assert_eq!(settings.rounds, 1);
        assert_eq!(settings.level(), log::LevelFilter::Warn);
    }

    #[test]
    fn debug_outranks_verbose() {
        let settings = Settings {
            verbose: true,
            debug: true,
            ..Settings::default()
        };
        assert_eq!(settings.level(), log::LevelFilter::Debug);
        let settings = Settings {
            verbose: true,
            ..Settings::default()
        };
        assert_eq!(settings.level(), log::LevelFilter::Info);
    }
}

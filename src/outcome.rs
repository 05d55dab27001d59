use crate::*;

/// Result of a round, or of a whole session, from the user's side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    /// Resolve a round. Equal choices tie; otherwise whoever's
    /// choice beats the other's takes it.
    pub fn resolve(user: Choice, computer: Choice) -> Self {
        log::debug!("comparing: user={} vs computer={}", user, computer);
        let outcome = if user == computer {
            Outcome::Tie
        } else if user.beats(&computer) {
            Outcome::Win
        } else {
            Outcome::Loss
        };
        log::info!("round result: {}", outcome.verdict());
        outcome
    }
    /// The same result seen from the other player.
    pub fn flip(&self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
    /// Round verdict shown to the user.
    pub fn verdict(&self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Loss => "You lose!",
            Outcome::Tie => "It's a tie!",
        }
    }
}

impl From<(Choice, Choice)> for Outcome {
    fn from((user, computer): (Choice, Choice)) -> Self {
        Self::resolve(user, computer)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "user wins"),
            Outcome::Loss => write!(f, "computer wins"),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tie_iff_equal() {
        for a in Choice::all() {
            for b in Choice::all() {
                assert_eq!(Outcome::resolve(a, b) == Outcome::Tie, a == b);
            }
        }
    }

    #[test]
    fn antisymmetric() {
        for a in Choice::all() {
            for b in Choice::all() {
                assert_eq!(Outcome::resolve(a, b), Outcome::resolve(b, a).flip());
            }
        }
    }

    #[test]
    fn follows_beats_relation() {
        assert_eq!(Outcome::resolve(Choice::Rock, Choice::Scissors), Outcome::Win);
        assert_eq!(Outcome::resolve(Choice::Paper, Choice::Rock), Outcome::Win);
        assert_eq!(Outcome::resolve(Choice::Scissors, Choice::Paper), Outcome::Win);
        assert_eq!(Outcome::resolve(Choice::Scissors, Choice::Rock), Outcome::Loss);
        assert_eq!(Outcome::resolve(Choice::Rock, Choice::Paper), Outcome::Loss);
        assert_eq!(Outcome::resolve(Choice::Paper, Choice::Scissors), Outcome::Loss);
    }

    #[test]
    fn tuple_conversion() {
        assert_eq!(Outcome::from((Choice::Paper, Choice::Paper)), Outcome::Tie);
    }
}

use crate::*;

/// Running score of a session.
///
/// Only the [`Session`] that owns it ever records into it, one outcome per
/// round, so the three counters always sum to the number of rounds played.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Tally {
    user: Count,
    computer: Count,
    ties: Count,
}

impl Tally {
    pub fn new(user: Count, computer: Count, ties: Count) -> Self {
        Self {
            user,
            computer,
            ties,
        }
    }
    pub fn user(&self) -> Count {
        self.user
    }
    pub fn computer(&self) -> Count {
        self.computer
    }
    pub fn ties(&self) -> Count {
        self.ties
    }
    /// Rounds recorded so far.
    pub fn played(&self) -> Count {
        self.user + self.computer + self.ties
    }
    /// Count one more round.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.user += 1,
            Outcome::Loss => self.computer += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
    /// Overall winner. Ties never break a deadlock in wins.
    pub fn winner(&self) -> Outcome {
        match self.user.cmp(&self.computer) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "You: {} | Computer: {} | Ties: {}",
            self.user, self.computer, self.ties
        )
    }
}

/// Final score of a finished session and who took it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Summary {
    tally: Tally,
    winner: Outcome,
}

impl Summary {
    pub fn tally(&self) -> Tally {
        self.tally
    }
    pub fn winner(&self) -> Outcome {
        self.winner
    }
    /// Closing line shown to the user.
    pub fn headline(&self) -> &'static str {
        match self.winner {
            Outcome::Win => "🎉 You won the game!",
            Outcome::Loss => "💻 Computer won the game!",
            Outcome::Tie => "🤝 It's a tie overall!",
        }
    }
}

impl From<Tally> for Summary {
    fn from(tally: Tally) -> Self {
        Self {
            tally,
            winner: tally.winner(),
        }
    }
}

use crate::*;
use rand::Rng;

/// A move: rock, paper or scissors.
///
/// Every choice beats exactly one other choice and loses to the third,
/// so two choices are either equal or one of them [`Choice::beats`] the other.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    #[default]
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Choice {
    /// All three choices in menu order.
    pub const fn all() -> [Choice; 3] {
        [Choice::Rock, Choice::Paper, Choice::Scissors]
    }
    /// The choice this one defeats.
    pub const fn victim(&self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }
    /// True if this choice defeats the other.
    pub fn beats(&self, other: &Choice) -> bool {
        self.victim() == *other
    }
    /// Lowercase name, as typed at the text prompt.
    pub const fn name(&self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
    /// Numbered menu label.
    pub const fn label(&self) -> &'static str {
        match self {
            Choice::Rock => "1. 🪨 Rock",
            Choice::Paper => "2. 📄 Paper",
            Choice::Scissors => "3. ✂️  Scissors",
        }
    }
}

/// uniform over all three choices
impl Arbitrary for Choice {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        Choice::from(rng.random_range(0..3u8))
    }
}

/// u8 isomorphism
impl From<u8> for Choice {
    fn from(n: u8) -> Choice {
        match n {
            0 => Choice::Rock,
            1 => Choice::Paper,
            2 => Choice::Scissors,
            _ => unreachable!("invalid choice"),
        }
    }
}
impl From<Choice> for u8 {
    fn from(c: Choice) -> u8 {
        c as u8
    }
}

/// str isomorphism, forgiving of case and surrounding whitespace
impl TryFrom<&str> for Choice {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Choice::Rock),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            _ => Err(format!("invalid choice str: {}", s.trim())),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

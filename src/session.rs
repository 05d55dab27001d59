use crate::*;

/// One resolved round, as handed to the [`Report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    /// 1-based position within the session.
    pub index: Count,
    /// Rounds in the whole session.
    pub rounds: Count,
    pub user: Choice,
    pub computer: Choice,
    pub outcome: Outcome,
}

impl Round {
    pub fn is_last(&self) -> bool {
        self.index == self.rounds
    }
}

/// Plays a fixed number of rounds between a user and a computer.
///
/// The session owns the [`Tally`] outright: nothing else records into it,
/// and it is only read back once every round has been played or the user
/// has walked away. A [`Fault`] from either player ends the session on
/// the spot; rounds already played stay in [`Session::tally`].
pub struct Session<U, C> {
    rounds: Count,
    user: U,
    computer: C,
    tally: Tally,
}

impl<U, C> Session<U, C>
where
    U: Player,
    C: Player,
{
    pub fn new(rounds: Count, user: U, computer: C) -> Self {
        Self {
            rounds,
            user,
            computer,
            tally: Tally::default(),
        }
    }
    /// Score so far.
    pub fn tally(&self) -> Tally {
        self.tally
    }
    /// Play every round, then report and return the final score.
    pub fn run<R>(&mut self, report: &mut R) -> Result<Summary, Fault>
    where
        R: Report + ?Sized,
    {
        log::info!("starting game session with {} rounds", self.rounds);
        report.start(self.rounds)?;
        for index in 1..=self.rounds {
            let round = self.play(index)?;
            report.round(&round, &self.tally)?;
        }
        let summary = Summary::from(self.tally);
        report.finish(&summary)?;
        log::info!(
            "game session completed: {} ({}-{}, {} ties)",
            summary.winner(),
            self.tally.user(),
            self.tally.computer(),
            self.tally.ties()
        );
        Ok(summary)
    }
    fn play(&mut self, index: Count) -> Result<Round, Fault> {
        log::info!("starting round {}/{}", index, self.rounds);
        let user = self.user.choose()?;
        let computer = self.computer.choose()?;
        let outcome = Outcome::resolve(user, computer);
        self.tally.record(outcome);
        log::info!("round {} completed: {} vs {} -> {}", index, user, computer, outcome);
        Ok(Round {
            index,
            rounds: self.rounds,
            user,
            computer,
            outcome,
        })
    }
}

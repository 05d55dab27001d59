use crate::*;

/// Where a [`Session`] sends its results.
pub trait Report {
    /// Before the first round.
    fn start(&mut self, rounds: Count) -> std::io::Result<()>;
    /// After each round, with the score including it.
    fn round(&mut self, round: &Round, tally: &Tally) -> std::io::Result<()>;
    /// After the last round.
    fn finish(&mut self, summary: &Summary) -> std::io::Result<()>;
}

/// Colored terminal rendering of a session.
#[cfg(feature = "cli")]
pub struct Console<W> {
    out: W,
    verbose: bool,
}

#[cfg(feature = "cli")]
impl Console<std::io::Stdout> {
    pub fn stdout(verbose: bool) -> Self {
        Self::new(std::io::stdout(), verbose)
    }
}

#[cfg(feature = "cli")]
impl<W> Console<W>
where
    W: std::io::Write,
{
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }
    pub fn into_inner(self) -> W {
        self.out
    }
    fn banner(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(BANNER_WIDTH))
    }
    fn verdict(outcome: Outcome) -> colored::ColoredString {
        use colored::Colorize;
        match outcome {
            Outcome::Win => outcome.verdict().green().bold(),
            Outcome::Loss => outcome.verdict().red().bold(),
            Outcome::Tie => outcome.verdict().yellow().bold(),
        }
    }
}

#[cfg(feature = "cli")]
impl<W> Report for Console<W>
where
    W: std::io::Write,
{
    fn start(&mut self, rounds: Count) -> std::io::Result<()> {
        let plural = if rounds == 1 { "" } else { "s" };
        writeln!(self.out)?;
        self.banner()?;
        writeln!(self.out, "Playing {} round{}", rounds, plural)?;
        self.banner()?;
        writeln!(self.out)
    }
    fn round(&mut self, round: &Round, tally: &Tally) -> std::io::Result<()> {
        writeln!(self.out, "Round {}/{}", round.index, round.rounds)?;
        writeln!(self.out, "{}", "-".repeat(ROUND_WIDTH))?;
        if self.verbose {
            writeln!(self.out, "\nYou chose: {}", round.user)?;
        }
        writeln!(self.out, "Computer chose: {}", round.computer)?;
        writeln!(self.out, "{}", Self::verdict(round.outcome))?;
        writeln!(self.out, "\nCurrent Score - {}", tally)?;
        if !round.is_last() {
            writeln!(self.out)?;
        }
        self.out.flush()
    }
    fn finish(&mut self, summary: &Summary) -> std::io::Result<()> {
        let tally = summary.tally();
        writeln!(self.out)?;
        self.banner()?;
        writeln!(self.out, "GAME OVER - Final Score")?;
        self.banner()?;
        writeln!(self.out, "You: {}", tally.user())?;
        writeln!(self.out, "Computer: {}", tally.computer())?;
        writeln!(self.out, "Ties: {}", tally.ties())?;
        writeln!(self.out, "\n{}", summary.headline())?;
        self.banner()?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

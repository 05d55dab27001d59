use crate::*;

/// Anything that can pick a move for a round.
///
/// The session never asks how a choice was made; terminal menus,
/// typed lines and dice all look the same from here.
pub trait Player {
    fn choose(&mut self) -> Result<Choice, Fault>;
}

/// The computer opponent: a uniformly random choice every round.
#[derive(Debug, Default, Clone, Copy)]
pub struct Computer;

impl Player for Computer {
    fn choose(&mut self) -> Result<Choice, Fault> {
        let choice = Choice::random();
        log::debug!("computer selected: {}", choice);
        Ok(choice)
    }
}

impl<P> Player for Box<P>
where
    P: Player + ?Sized,
{
    fn choose(&mut self) -> Result<Choice, Fault> {
        (**self).choose()
    }
}

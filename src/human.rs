use crate::*;
use dialoguer::Select;
use dialoguer::console::Term;
use std::io::IsTerminal;

/// The person at the keyboard.
///
/// Offers an arrow-key menu when stdin is a terminal, and falls back to
/// typed [`Lines`] when it isn't or when the menu can't be drawn. Either
/// way, Ctrl+C or running out of input comes back as [`Fault::Cancelled`].
#[derive(Debug, Clone, Copy)]
pub struct Human {
    interactive: bool,
    prompt: bool,
}

impl Default for Human {
    fn default() -> Self {
        Self {
            interactive: true,
            prompt: true,
        }
    }
}

impl Human {
    /// Never draw the menu, always read typed lines.
    pub fn text() -> Self {
        Self {
            interactive: false,
            ..Self::default()
        }
    }
    /// Read without showing any prompt first. Implies text input.
    pub fn quiet(self) -> Self {
        Self {
            prompt: false,
            ..self
        }
    }
    fn wants_menu(&self) -> bool {
        self.interactive && self.prompt && std::io::stdin().is_terminal()
    }
    fn menu() -> Result<Choice, Fault> {
        let choices = Choice::all();
        let labels = choices.map(|c| c.label());
        let selection = Select::new()
            .with_prompt(MENU_PROMPT)
            .items(&labels)
            .default(0)
            .interact_opt();
        match selection {
            Ok(Some(i)) => {
                let choice = choices[i];
                log::debug!("user selected: {}", choice);
                Ok(choice)
            }
            Ok(None) => {
                Self::restore();
                Err(Fault::Cancelled)
            }
            Err(dialoguer::Error::IO(e)) => {
                Self::restore();
                Err(Fault::from(e))
            }
        }
    }
    /// The menu hides the cursor while it runs and leaves it hidden
    /// when a read is interrupted.
    fn restore() {
        if let Err(e) = Term::stderr().show_cursor() {
            log::debug!("could not restore cursor: {}", e);
        }
    }
    fn lines(&self) -> Result<Choice, Fault> {
        let stdin = std::io::stdin();
        let mut lines = Lines::new(stdin.lock(), std::io::stdout());
        if !self.prompt {
            lines = lines.quiet();
        }
        lines.read()
    }
}

/// Menu first when asked for, typed lines when the menu breaks.
/// A cancelled menu is final; only a broken one falls back.
fn pick<M, L>(menu: bool, select: M, type_in: L) -> Result<Choice, Fault>
where
    M: FnOnce() -> Result<Choice, Fault>,
    L: FnOnce() -> Result<Choice, Fault>,
{
    if menu {
        match select() {
            Err(Fault::Io(e)) => {
                log::warn!("interactive menu failed: {}, falling back to text input", e)
            }
            result => return result,
        }
    }
    type_in()
}

impl Player for Human {
    fn choose(&mut self) -> Result<Choice, Fault> {
        pick(self.wants_menu(), Self::menu, || self.lines())
    }
}

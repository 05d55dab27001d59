use crate::*;
use std::io::BufRead;
use std::io::Write;

/// Line-based input: read a line, normalize it, re-prompt until it names a choice.
///
/// Works on anything readable, so piped stdin and tests look alike.
/// Running out of input is a [`Fault::Cancelled`], never a retry.
pub struct Lines<R, W> {
    input: R,
    output: W,
    prompt: bool,
}

impl<R, W> Lines<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            prompt: true,
        }
    }
    /// Skip the prompt before the first read. Re-prompts still show it.
    pub fn quiet(mut self) -> Self {
        self.prompt = false;
        self
    }
    /// Read lines until one names a valid choice.
    pub fn read(&mut self) -> Result<Choice, Fault> {
        let mut prompt = self.prompt;
        loop {
            if prompt {
                write!(self.output, "{}", TEXT_PROMPT)?;
                self.output.flush()?;
            }
            let ref mut buffer = String::new();
            if self.input.read_line(buffer)? == 0 {
                log::info!("input exhausted while waiting for a choice");
                return Err(Fault::Cancelled);
            }
            match Choice::try_from(buffer.as_str()) {
                Ok(choice) => {
                    log::debug!("user selected: {}", choice);
                    return Ok(choice);
                }
                Err(_) => {
                    log::warn!("invalid choice received: '{}'", buffer.trim().to_lowercase());
                    writeln!(self.output, "{}", INVALID_CHOICE)?;
                    prompt = true;
                }
            }
        }
    }
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R, W> Player for Lines<R, W>
where
    R: BufRead,
    W: Write,
{
    fn choose(&mut self) -> Result<Choice, Fault> {
        self.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lines(input: &str) -> Lines<Cursor<Vec<u8>>, Vec<u8>> {
        Lines::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(lines: Lines<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(lines.into_inner().1).unwrap()
    }

    #[test]
    fn accepts_valid_names() {
        assert_eq!(lines(" ROCK \n").read().unwrap(), Choice::Rock);
        assert_eq!(lines("Paper\n").read().unwrap(), Choice::Paper);
        assert_eq!(lines("scissors\n").read().unwrap(), Choice::Scissors);
    }

    #[test]
    fn accepts_last_line_without_newline() {
        assert_eq!(lines("paper").read().unwrap(), Choice::Paper);
    }

    #[test]
    fn reprompts_once_per_invalid_line() {
        let mut input = lines("foo\nrock\n");
        assert_eq!(input.read().unwrap(), Choice::Rock);
        let output = transcript(input);
        assert_eq!(output.matches(INVALID_CHOICE).count(), 1);
        assert_eq!(output.matches(TEXT_PROMPT).count(), 2);
    }

    #[test]
    fn rejects_empty_lines() {
        let mut input = lines("\n   \nscissors\n");
        assert_eq!(input.read().unwrap(), Choice::Scissors);
        assert_eq!(transcript(input).matches(INVALID_CHOICE).count(), 2);
    }

    #[test]
    fn exhausted_input_cancels() {
        assert!(lines("").read().unwrap_err().is_cancelled());
        assert!(lines("foo\nbar\n").read().unwrap_err().is_cancelled());
    }

    #[test]
    fn quiet_skips_first_prompt_only() {
        let mut input = lines("nope\nrock\n").quiet();
        assert_eq!(input.read().unwrap(), Choice::Rock);
        assert_eq!(transcript(input).matches(TEXT_PROMPT).count(), 1);
    }

    #[test]
    fn consecutive_reads() {
        let mut input = lines("rock\npaper\n");
        assert_eq!(input.choose().unwrap(), Choice::Rock);
        assert_eq!(input.choose().unwrap(), Choice::Paper);
        assert!(input.choose().unwrap_err().is_cancelled());
    }

    #[test]
    fn unreadable_input_fails() {
        let mut input = Lines::new(Cursor::new(vec![0xFF, 0xFE, b'\n']), Vec::new());
        let fault = input.read().unwrap_err();
        assert!(!fault.is_cancelled());
        assert_eq!(fault.code(), EXIT_FAILURE);
    }
}

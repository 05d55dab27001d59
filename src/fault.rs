use crate::*;

/// Why a session stopped before its last round.
#[derive(Debug)]
pub enum Fault {
    /// The user interrupted input, or input ran out.
    Cancelled,
    /// Anything else the terminal threw at us.
    Io(std::io::Error),
}

impl Fault {
    /// Process exit code for this fault.
    pub fn code(&self) -> u8 {
        match self {
            Self::Cancelled => EXIT_INTERRUPTED,
            Self::Io(_) => EXIT_FAILURE,
        }
    }
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<std::io::Error> for Fault {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::Interrupted => Self::Cancelled,
            std::io::ErrorKind::UnexpectedEof => Self::Cancelled,
            _ => Self::Io(e),
        }
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled => write!(f, "input cancelled"),
            Self::Io(_) => write!(f, "input/output failure"),
        }
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cancelled => None,
            Self::Io(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn interrupts_cancel() {
        assert!(Fault::from(Error::from(ErrorKind::Interrupted)).is_cancelled());
        assert!(Fault::from(Error::from(ErrorKind::UnexpectedEof)).is_cancelled());
    }

    #[test]
    fn other_errors_fail() {
        let fault = Fault::from(Error::new(ErrorKind::InvalidData, "stream did not contain valid UTF-8"));
        assert!(!fault.is_cancelled());
        assert_eq!(fault.to_string(), "input/output failure");
    }

    #[test]
    fn cause_reported_once() {
        use std::error::Error as _;
        let fault = Fault::from(Error::new(ErrorKind::InvalidData, "stream did not contain valid UTF-8"));
        let cause = fault.source().map(|e| e.to_string());
        assert_eq!(cause.as_deref(), Some("stream did not contain valid UTF-8"));
        assert!(!fault.to_string().contains("UTF-8"));
        let chain = format!("{:#}", anyhow::Error::from(fault));
        assert_eq!(chain.matches("valid UTF-8").count(), 1);
    }

    #[test]
    fn exit_codes_differ() {
        assert_eq!(Fault::Cancelled.code(), 130);
        assert_eq!(Fault::Io(Error::from(ErrorKind::BrokenPipe)).code(), 1);
    }
}

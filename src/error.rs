use thiserror::Error;

pub type CommandResult<T> = Result<T, SddError>;

pub const HELP_HINT: &str = "Run with --help to see available options";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SddError {
    #[error("Error: {option} requires a name argument")]
    MissingArgument { option: &'static str },
    #[error("Unknown option: {0}")]
    UnknownOption(String),
}

impl SddError {
    /// Remediation printed to stdout after the error itself.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SddError::MissingArgument { .. } => None,
            SddError::UnknownOption(_) => Some(HELP_HINT),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            SddError::MissingArgument { .. } | SddError::UnknownOption(_) => 1,
        }
    }
}

pub mod greet;
pub mod help;
pub mod version;
pub mod welcome;

use crate::config::Config;
use crate::error::{CommandResult, SddError};

/// The action selected by the command token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Welcome,
    Help,
    Version,
    Greet { name: Option<String> },
    Unknown(String),
}

impl Command {
    /// Recognizes the first token; tokens beyond the ones a command reads are ignored.
    pub fn parse(tokens: &[String]) -> Self {
        let Some(first) = tokens.first() else {
            return Command::Welcome;
        };

        match first.as_str() {
            "--help" | "-h" => Command::Help,
            "--version" | "-v" => Command::Version,
            greet::FLAG => Command::Greet {
                name: tokens.get(1).cloned(),
            },
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Maps an argument list to the text destined for stdout.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: Config,
}

impl Dispatcher {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn dispatch(&self, tokens: &[String]) -> CommandResult<String> {
        let command = Command::parse(tokens);
        tracing::debug!(?command, "dispatching");
        self.execute(command)
    }

    /// Dispatches execution to the appropriate command handler.
    pub fn execute(&self, command: Command) -> CommandResult<String> {
        let result = match command {
            Command::Welcome => Ok(welcome::message()),
            Command::Help => Ok(help::message()),
            Command::Version => Ok(version::message(&self.config)),
            Command::Greet { name } => greet::message(name.as_deref()),
            Command::Unknown(token) => Err(SddError::UnknownOption(token)),
        };

        if let Err(err) = &result {
            tracing::debug!(error = %err, "command rejected");
        }
        result
    }
}

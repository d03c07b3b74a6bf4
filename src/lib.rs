use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use commands::Dispatcher;
use config::Config;
use error::CommandResult;

pub type Result<T> = anyhow::Result<T>;

/// Entry point used by the binary crate and integration tests.
pub fn run() -> Result<ExitCode> {
    init_tracing();

    let config = Config::from_package()?;
    let args = cli::Args::from_env();
    let outcome = Dispatcher::new(config).dispatch(&args.tokens());

    let code = render(outcome, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(ExitCode::from(code))
}

/// Writes a dispatch outcome to the given streams and returns the exit code.
pub fn render<O, E>(outcome: CommandResult<String>, stdout: &mut O, stderr: &mut E) -> Result<u8>
where
    O: Write,
    E: Write,
{
    match outcome {
        Ok(output) => {
            writeln!(stdout, "{output}").context("failed to write to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
            Ok(0)
        }
        Err(err) => {
            writeln!(stderr, "{err}").context("failed to write to stderr")?;
            if let Some(hint) = err.hint() {
                writeln!(stdout, "{hint}").context("failed to write to stdout")?;
            }
            stdout.flush().context("failed to flush stdout")?;
            Ok(err.exit_code())
        }
    }
}

fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SddError;

    fn render_to_strings(outcome: CommandResult<String>) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = render(outcome, &mut out, &mut err).expect("writes to buffers succeed");
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn success_goes_to_stdout() {
        let (code, out, err) = render_to_strings(Ok("Hello, World!".to_string()));
        assert_eq!(code, 0);
        assert_eq!(out, "Hello, World!\n");
        assert!(err.is_empty());
    }

    #[test]
    fn missing_argument_goes_to_stderr_only() {
        let (code, out, err) =
            render_to_strings(Err(SddError::MissingArgument { option: "--greet" }));
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err, "Error: --greet requires a name argument\n");
    }

    #[test]
    fn unknown_option_splits_error_and_hint() {
        let (code, out, err) =
            render_to_strings(Err(SddError::UnknownOption("--bogus".to_string())));
        assert_eq!(code, 1);
        assert_eq!(out, "Run with --help to see available options\n");
        assert_eq!(err, "Unknown option: --bogus\n");
    }
}

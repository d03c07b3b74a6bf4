use std::ffi::OsString;
use std::iter;

use clap::Parser;

/// Command-line arguments for the SDD CLI.
///
/// The tokens are collected verbatim; recognition happens in
/// [`crate::commands::Command::parse`].
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "sdd",
    about = "SDD - Spec-Driven Development CLI",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Raw invocation tokens, excluding the program name.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub raw: Vec<OsString>,
}

impl Args {
    /// Parses the process arguments, keeping every user token literally.
    pub fn from_env() -> Self {
        Self::parse_literal(std::env::args_os())
    }

    /// Parses `argv` (program name first) without letting clap interpret any
    /// user token; a `--` escape is injected ahead of them so a leading `--`
    /// of the user's survives.
    pub fn parse_literal<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(escaped(argv))
    }

    pub fn try_parse_literal<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(escaped(argv))
    }

    /// Tokens as strings; invalid UTF-8 is replaced rather than rejected.
    pub fn tokens(&self) -> Vec<String> {
        self.raw
            .iter()
            .map(|token| token.to_string_lossy().into_owned())
            .collect()
    }
}

fn escaped<I, T>(argv: I) -> impl Iterator<Item = OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv = argv.into_iter().map(Into::<OsString>::into);
    let bin = argv.next().unwrap_or_else(|| OsString::from("sdd"));
    iter::once(bin).chain(iter::once(OsString::from("--"))).chain(argv)
}

use crate::error::HELP_HINT;

pub const BANNER: &str = "Welcome to SDD (Spec-Driven Development)";

pub fn message() -> String {
    format!("{BANNER}\n{HELP_HINT}")
}

pub const USAGE: &str = "\
SDD - Spec-Driven Development CLI

Usage:
  sdd [options]

Options:
  -h, --help       Show this help message
  -v, --version    Show version information
  --greet <name>   Greet someone by name

Examples:
  sdd --greet World
  sdd --version";

/// Returns the usage text listing every recognized flag.
pub fn message() -> String {
    USAGE.to_string()
}

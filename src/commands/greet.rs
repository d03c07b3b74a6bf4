use crate::error::{CommandResult, SddError};

pub const FLAG: &str = "--greet";

/// Returns the greeting for `name`, which is substituted literally.
pub fn message(name: Option<&str>) -> CommandResult<String> {
    match name {
        Some(name) => Ok(format!("Hello, {name}!")),
        None => Err(SddError::MissingArgument { option: FLAG }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_by_name() {
        assert_eq!(message(Some("World")).unwrap(), "Hello, World!");
    }

    #[test]
    fn empty_name_still_counts_as_present() {
        assert_eq!(message(Some("")).unwrap(), "Hello, !");
    }

    #[test]
    fn missing_name_is_an_error() {
        assert_eq!(
            message(None).unwrap_err(),
            SddError::MissingArgument { option: FLAG }
        );
    }
}

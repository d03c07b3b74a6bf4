use crate::config::Config;

pub fn message(config: &Config) -> String {
    config.version().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;

    #[test]
    fn prints_only_the_version() {
        let config = Config::new(Version::new(2, 10, 3));
        assert_eq!(message(&config), "2.10.3");
    }
}

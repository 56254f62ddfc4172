use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let sentinel = &config.season.sentinel;

    if sentinel.is_empty() {
        errors.push("season.sentinel: must not be empty".to_string());
    }
    if sentinel.contains(['\n', '\r']) {
        errors.push("season.sentinel: must be a single line".to_string());
    }
    if sentinel.trim() != sentinel {
        // Roster lines are trimmed, so a padded sentinel could never match
        errors.push(format!(
            "season.sentinel: '{}' has leading or trailing whitespace",
            sentinel
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_sentinel(sentinel: &str) -> Config {
        let mut config = Config::default();
        config.season.sentinel = sentinel.to_string();
        config
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&Config::default()).is_ok());
        assert!(validate_config(&config_with_sentinel("-")).is_ok());
    }

    #[test]
    fn test_empty_sentinel() {
        let errors = validate_config(&config_with_sentinel("")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("must not be empty"));
    }

    #[test]
    fn test_padded_sentinel() {
        let errors = validate_config(&config_with_sentinel(" None")).unwrap_err();
        assert!(errors[0].contains("whitespace"));
    }

    #[test]
    fn test_collects_all_errors() {
        let errors = validate_config(&config_with_sentinel("No\nne ")).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}

use crate::config::types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};
use crate::ConfigError;
use std::time::Duration;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if !config.delay_seconds.is_finite() || config.delay_seconds < 0.0 {
        return Err(ConfigError::Validation(format!(
            "delay_seconds must be a finite number >= 0, got {}",
            config.delay_seconds
        )));
    }

    if Duration::try_from_secs_f64(config.delay_seconds).is_err() {
        return Err(ConfigError::Validation(format!(
            "delay_seconds is too large to wait for, got {}",
            config.delay_seconds
        )));
    }

    if config.request_timeout_seconds == 0 {
        return Err(ConfigError::Validation(
            "request_timeout_seconds must be >= 1".to_string(),
        ));
    }

    if config.min_text_length == 0 {
        return Err(ConfigError::Validation(
            "min_text_length must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "csv_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_delay() {
        let mut config = CrawlerConfig::default();
        config.delay_seconds = 0.0;
        assert!(validate_crawler_config(&config).is_ok());

        config.delay_seconds = -0.5;
        assert!(validate_crawler_config(&config).is_err());

        config.delay_seconds = f64::NAN;
        assert!(validate_crawler_config(&config).is_err());

        config.delay_seconds = f64::INFINITY;
        assert!(validate_crawler_config(&config).is_err());
    }

    #[test]
    fn test_validate_delay_too_large_for_duration() {
        let mut config = Config::default();
        config.crawler.delay_seconds = 1e20;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));

        config.crawler.delay_seconds = 86_400.0;
        assert!(validate(&config).is_ok());
        assert_eq!(config.crawler.delay(), Duration::from_secs(86_400));
    }

    #[test]
    fn test_validate_limits() {
        let mut config = CrawlerConfig::default();
        config.max_pages = Some(1);
        assert!(validate_crawler_config(&config).is_ok());

        // Zero means unbounded, like an unset budget
        config.max_pages = Some(0);
        assert!(validate_crawler_config(&config).is_ok());

        let mut config = CrawlerConfig::default();
        config.request_timeout_seconds = 0;
        assert!(validate_crawler_config(&config).is_err());

        let mut config = CrawlerConfig::default();
        config.min_text_length = 0;
        assert!(validate_crawler_config(&config).is_err());
    }

    #[test]
    fn test_validate_crawler_name() {
        let mut config = UserAgentConfig::default();
        assert!(validate_user_agent_config(&config).is_ok());

        config.crawler_name = "Site-Sieve2".to_string();
        assert!(validate_user_agent_config(&config).is_ok());

        config.crawler_name = String::new();
        assert!(validate_user_agent_config(&config).is_err());

        config.crawler_name = "bad name".to_string();
        assert!(validate_user_agent_config(&config).is_err());

        config.crawler_name = "bad/name".to_string();
        assert!(validate_user_agent_config(&config).is_err());
    }

    #[test]
    fn test_validate_crawler_version() {
        let mut config = UserAgentConfig::default();
        config.crawler_version = "  ".to_string();
        assert!(validate_user_agent_config(&config).is_err());
    }

    #[test]
    fn test_validate_output_path() {
        let config = OutputConfig {
            csv_path: PathBuf::new(),
        };
        assert!(validate_output_config(&config).is_err());
    }
}

use crate::config::types::{Config, OutputConfig, SourceConfig, TableSelector};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_source_config(&config.source)?;
    validate_table_selector(&config.table)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the source URL and request settings
fn validate_source_config(config: &SourceConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid source url '{}': {}", config.url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Source url '{}' must use http or https",
            config.url
        )));
    }

    if let Some(agent) = &config.user_agent {
        if agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "user-agent cannot be empty".to_string(),
            ));
        }
    }

    if config.timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates the table selection strategy
fn validate_table_selector(selector: &TableSelector) -> Result<(), ConfigError> {
    // Any index is acceptable; an out-of-range one surfaces as TableNotFound at run time
    if let TableSelector::Class { class } = selector {
        if class.split_whitespace().next().is_none() {
            return Err(ConfigError::Validation(
                "class filter cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output path cannot be empty".to_string(),
        ));
    }

    let delimiter = config.delimiter;
    if !delimiter.is_ascii() || matches!(delimiter, '"' | '\r' | '\n') {
        return Err(ConfigError::Validation(format!(
            "delimiter must be a single ASCII character other than a quote or line break, got {:?}",
            delimiter
        )));
    }

    Ok(())
}

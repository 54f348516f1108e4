//! Checks shared by carrier configurations.

use std::time::Duration;

use super::ConfigError;

pub(crate) fn validate_host(host: &str) -> Result<(), ConfigError> {
    if host.trim().is_empty() {
        return Err(ConfigError::EmptyHost);
    }
    Ok(())
}

/// Accept ports in 1..=65535.
pub(crate) fn validate_port(port: u32) -> Result<u16, ConfigError> {
    match u16::try_from(port) {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::PortOutOfRange(port)),
    }
}

pub(crate) fn validate_path(path: &str) -> Result<(), ConfigError> {
    if path.is_empty() {
        return Err(ConfigError::EmptyPath);
    }
    if !path.starts_with('/') {
        return Err(ConfigError::RelativePath(path.to_owned()));
    }
    Ok(())
}

pub(crate) fn ensure_positive(value: Duration, field: &'static str) -> Result<(), ConfigError> {
    if value.is_zero() {
        return Err(ConfigError::NonPositive(field));
    }
    Ok(())
}

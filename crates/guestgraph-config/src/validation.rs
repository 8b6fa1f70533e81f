//! Custom validation functions referenced from the settings schema.

use validator::ValidationError;

/// Validates a `#RRGGBB` hex color string.
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("hex_color"))
    }
}

/// Validates a log level name or filter directive.
///
/// Plain level names are checked against the tracing levels; anything
/// containing `=` or `,` is assumed to be an EnvFilter directive and is
/// validated later, when the filter is built.
pub fn validate_log_level(value: &str) -> Result<(), ValidationError> {
    const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

    if value.contains('=') || value.contains(',') {
        return Ok(());
    }
    if LEVELS.contains(&value.to_ascii_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("log_level"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_validation() {
        assert!(validate_hex_color("#FFFFFF").is_ok());
        assert!(validate_hex_color("#1f77b4").is_ok());
        assert!(validate_hex_color("white").is_err());
        assert!(validate_hex_color("#FFF").is_err());
        assert!(validate_hex_color("#GGGGGG").is_err());
    }

    #[test]
    fn test_log_level_validation() {
        assert!(validate_log_level("info").is_ok());
        assert!(validate_log_level("DEBUG").is_ok());
        assert!(validate_log_level("guestgraph=debug,tower_http=info").is_ok());
        assert!(validate_log_level("loud").is_err());
    }
}

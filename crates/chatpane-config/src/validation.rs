//! Full configuration validation.
//!
//! Validates color formats, CSS size suffixes, identity fields, and the
//! HTTP timeout range, collecting all errors into one message.

use std::sync::LazyLock;

use chatpane_common::ConfigError;
use regex::Regex;

use crate::schema::ChatpaneConfig;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

static CSS_SIZE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(px|%)$").unwrap());

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ChatpaneConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_color(&mut errors, "style.accent", &config.style.accent);
    validate_color(
        &mut errors,
        "style.background_color",
        &config.style.background_color,
    );
    validate_color(
        &mut errors,
        "style.bubble_border_color",
        &config.style.bubble_border_color,
    );
    validate_color(
        &mut errors,
        "style.send_box_button_color",
        &config.style.send_box_button_color,
    );
    validate_color(
        &mut errors,
        "style.timestamp_color",
        &config.style.timestamp_color,
    );

    validate_css_size(
        &mut errors,
        "style.transcript_terminator_font_size",
        &config.style.transcript_terminator_font_size,
    );
    validate_css_size(&mut errors, "style.root_width", &config.style.root_width);
    validate_css_size(&mut errors, "style.root_height", &config.style.root_height);

    if config.identity.user_id.trim().is_empty() {
        errors.push("identity.user_id must not be empty".into());
    }
    if config.locale.fallback.trim().is_empty() {
        errors.push("locale.fallback must not be empty".into());
    }
    if config.surface.mount_id.trim().is_empty() {
        errors.push("surface.mount_id must not be empty".into());
    }

    let timeout = config.http.request_timeout_secs;
    if !(1..=120).contains(&timeout) {
        errors.push(format!(
            "http.request_timeout_secs must be between 1 and 120 (got {timeout})"
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Accepts `#rrggbb` and `#rrggbbaa` hex colors.
fn validate_color(errors: &mut Vec<String>, field: &str, value: &str) {
    if !HEX_COLOR.is_match(value) {
        errors.push(format!("{field}: '{value}' is not a hex color"));
    }
}

/// Accepts `<n>px` and `<n>%` CSS sizes.
fn validate_css_size(errors: &mut Vec<String>, field: &str, value: &str) {
    if !CSS_SIZE.is_match(value) {
        errors.push(format!("{field}: '{value}' is not a px or % size"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ChatpaneConfig::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn bad_color_is_rejected() {
        let mut config = ChatpaneConfig::default();
        config.style.accent = "red".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("style.accent"));
    }

    #[test]
    fn eight_digit_hex_is_accepted() {
        let mut config = ChatpaneConfig::default();
        config.style.background_color = "#f8f8f880".into();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn bad_size_suffix_is_rejected() {
        let mut config = ChatpaneConfig::default();
        config.style.root_width = "100em".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("style.root_width"));
    }

    #[test]
    fn empty_user_id_is_rejected() {
        let mut config = ChatpaneConfig::default();
        config.identity.user_id = "  ".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("identity.user_id"));
    }

    #[test]
    fn empty_mount_id_is_rejected() {
        let mut config = ChatpaneConfig::default();
        config.surface.mount_id = String::new();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("surface.mount_id"));
    }

    #[test]
    fn timeout_out_of_range_is_rejected() {
        let mut config = ChatpaneConfig::default();
        config.http.request_timeout_secs = 0;
        assert!(validate(&config).is_err());

        config.http.request_timeout_secs = 121;
        assert!(validate(&config).is_err());

        config.http.request_timeout_secs = 120;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = ChatpaneConfig::default();
        config.style.accent = "nope".into();
        config.surface.mount_id = String::new();
        config.http.request_timeout_secs = 0;
        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("style.accent"));
        assert!(msg.contains("surface.mount_id"));
        assert!(msg.contains("http.request_timeout_secs"));
    }
}

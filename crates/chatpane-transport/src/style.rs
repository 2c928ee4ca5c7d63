//! Style set and avatar options for the render entry point.
//!
//! Mirrors the external library's style-set factory: a bag of named
//! color/size options. Values are passed through as strings; the widget
//! interprets them as CSS.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSet {
    pub accent: String,
    pub background_color: String,
    pub bubble_border_color: String,
    pub send_box_button_color: String,
    pub timestamp_color: String,
    pub transcript_terminator_font_size: String,
    pub root_width: String,
    pub root_height: String,
    pub hide_upload_button: bool,
}

impl Default for StyleSet {
    fn default() -> Self {
        Self {
            accent: "#000000".into(),
            background_color: "#f8f8f8".into(),
            bubble_border_color: "#f08040".into(),
            send_box_button_color: "#000000".into(),
            timestamp_color: "#f08040".into(),
            transcript_terminator_font_size: "24px".into(),
            root_width: "100%".into(),
            root_height: "100%".into(),
            hide_upload_button: true,
        }
    }
}

impl StyleSet {
    /// Build a style set from a map of named options. Unknown keys are
    /// ignored; missing keys keep their defaults.
    pub fn from_map(options: &HashMap<String, String>) -> Self {
        let mut style = Self::default();
        for (key, value) in options {
            match key.as_str() {
                "accent" => style.accent = value.clone(),
                "background_color" => style.background_color = value.clone(),
                "bubble_border_color" => style.bubble_border_color = value.clone(),
                "send_box_button_color" => style.send_box_button_color = value.clone(),
                "timestamp_color" => style.timestamp_color = value.clone(),
                "transcript_terminator_font_size" => {
                    style.transcript_terminator_font_size = value.clone()
                }
                "root_width" => style.root_width = value.clone(),
                "root_height" => style.root_height = value.clone(),
                "hide_upload_button" => style.hide_upload_button = value == "true",
                _ => {}
            }
        }
        style
    }
}

/// Avatar images and initials for bot and user bubbles. Empty image URLs
/// mean the widget falls back to initials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarOptions {
    pub bot_image: String,
    pub bot_initials: String,
    pub user_image: String,
    pub user_initials: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_values() {
        let style = StyleSet::default();
        assert_eq!(style.accent, "#000000");
        assert_eq!(style.root_width, "100%");
        assert!(style.hide_upload_button);
    }

    #[test]
    fn from_map_overrides_known_keys() {
        let mut options = HashMap::new();
        options.insert("accent".to_string(), "#112233".to_string());
        options.insert("root_height".to_string(), "480px".to_string());
        options.insert("hide_upload_button".to_string(), "false".to_string());

        let style = StyleSet::from_map(&options);
        assert_eq!(style.accent, "#112233");
        assert_eq!(style.root_height, "480px");
        assert!(!style.hide_upload_button);
        // Untouched keys keep defaults
        assert_eq!(style.background_color, "#f8f8f8");
    }

    #[test]
    fn from_map_ignores_unknown_keys() {
        let mut options = HashMap::new();
        options.insert("no_such_option".to_string(), "whatever".to_string());

        let style = StyleSet::from_map(&options);
        assert_eq!(style.accent, StyleSet::default().accent);
    }

    #[test]
    fn from_empty_map_is_default() {
        let style = StyleSet::from_map(&HashMap::new());
        assert_eq!(style.accent, StyleSet::default().accent);
        assert_eq!(style.root_width, "100%");
    }

    #[test]
    fn style_round_trips_through_json() {
        let style = StyleSet::default();
        let json = serde_json::to_string(&style).unwrap();
        let parsed: StyleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.accent, style.accent);
        assert_eq!(parsed.hide_upload_button, style.hide_upload_button);
    }
}

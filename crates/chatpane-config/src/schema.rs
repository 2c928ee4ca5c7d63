//! Configuration schema types for chatpane.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching the stock widget look.

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Fallback locale when the host supplies none.
pub const DEFAULT_LOCALE: &str = "en-US";

// =============================================================================
// Identity Config
// =============================================================================

/// The fixed user identity attributed to posted activities and handed to the
/// render entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Stable user id sent with every activity.
    pub user_id: String,
    /// Display name shown by the widget.
    pub display_name: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            user_id: "chatpane-user".into(),
            display_name: "Guest".into(),
        }
    }
}

// =============================================================================
// Locale Config
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Locale used when the host does not supply one per update.
    pub fallback: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_LOCALE.into(),
        }
    }
}

// =============================================================================
// Style Config
// =============================================================================

/// Named color/size options forwarded to the render library's style-set
/// factory. Colors are `#rrggbb`/`#rrggbbaa` hex; sizes carry their CSS unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
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

impl Default for StyleConfig {
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

// =============================================================================
// Avatar Config
// =============================================================================

/// Avatar images and initials shown beside bot and user messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    /// Bot avatar image URL. Empty means initials only.
    pub bot_image: String,
    pub bot_initials: String,
    /// User avatar image URL. Empty means initials only.
    pub user_image: String,
    pub user_initials: String,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            bot_image: String::new(),
            bot_initials: "AI".into(),
            user_image: String::new(),
            user_initials: "ME".into(),
        }
    }
}

// =============================================================================
// Surface Config
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Element id the render library binds to.
    pub mount_id: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            mount_id: "webchat".into(),
        }
    }
}

// =============================================================================
// HTTP Config
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Token fetch timeout in seconds (1-120).
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 10,
        }
    }
}

// =============================================================================
// Root Config
// =============================================================================

/// Full chatpane configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatpaneConfig {
    pub identity: IdentityConfig,
    pub locale: LocaleConfig,
    pub style: StyleConfig,
    pub avatar: AvatarConfig,
    pub surface: SurfaceConfig,
    pub http: HttpConfig,
}

// Strong typing over strings. Closed enums for every selector, newtypes for colors and progress.
// Keys coming from JS are checked once, at deserialization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hex color as typed by the user. Never validated; the renderer clamps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn new(value: impl Into<String>) -> Self {
        HexColor(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends a two-digit alpha suffix, e.g. `#667eea` + `15` -> `#667eea15`.
    pub fn with_alpha(&self, alpha_hex: &str) -> HexColor {
        HexColor(format!("{}{}", self.0, alpha_hex))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HexColor {
    fn from(value: &str) -> Self {
        HexColor::new(value)
    }
}

/// Animation progress in [0, 100]. Newtype for type safety.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(from = "u8")]
pub struct Progress(u8);

impl Progress {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Self {
        Progress(value.min(Self::MAX))
    }

    pub fn zero() -> Self {
        Progress(0)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn as_f32(&self) -> f32 {
        self.0 as f32
    }

    pub fn is_complete(&self) -> bool {
        self.0 >= Self::MAX
    }

    pub(crate) fn advance(&mut self) {
        self.0 = self.0.saturating_add(1).min(Self::MAX);
    }
}

impl From<u8> for Progress {
    fn from(value: u8) -> Self {
        Progress::new(value)
    }
}

/// Pixel geometry of an export target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub const fn new(width: u32, height: u32) -> Self {
        PixelSize { width, height }
    }
}

/// Social platform whose post size the design is exported at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Instagram,
    Facebook,
    Twitter,
    Linkedin,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Instagram,
        Platform::Facebook,
        Platform::Twitter,
        Platform::Linkedin,
    ];

    /// Lowercase key, also used as the export filename prefix.
    pub fn key(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
        }
    }
}

/// Social design template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DesignTemplate {
    #[default]
    Modern,
    Minimal,
    Colorful,
    Gradient,
}

impl DesignTemplate {
    pub const ALL: [DesignTemplate; 4] = [
        DesignTemplate::Modern,
        DesignTemplate::Minimal,
        DesignTemplate::Colorful,
        DesignTemplate::Gradient,
    ];
}

/// Logo layout style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogoStyle {
    #[default]
    Minimal,
    Modern,
    Abstract,
    Geometric,
}

impl LogoStyle {
    pub const ALL: [LogoStyle; 4] = [
        LogoStyle::Minimal,
        LogoStyle::Modern,
        LogoStyle::Abstract,
        LogoStyle::Geometric,
    ];
}

/// Video frame style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VideoStyle {
    #[default]
    Promo,
    Story,
    Announcement,
    Quote,
}

impl VideoStyle {
    pub const ALL: [VideoStyle; 4] = [
        VideoStyle::Promo,
        VideoStyle::Story,
        VideoStyle::Announcement,
        VideoStyle::Quote,
    ];
}

/// Icon glyph shown next to a logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    #[default]
    Zap,
    Heart,
    Star,
    Circle,
    Square,
    Triangle,
}

impl IconKind {
    pub const ALL: [IconKind; 6] = [
        IconKind::Zap,
        IconKind::Heart,
        IconKind::Star,
        IconKind::Circle,
        IconKind::Square,
        IconKind::Triangle,
    ];

    /// Heart and star are drawn filled with the primary color; the rest are outlines.
    pub fn is_filled(&self) -> bool {
        matches!(self, IconKind::Heart | IconKind::Star)
    }
}

/// Preview animation kind for the video frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    #[default]
    Fade,
    Slide,
    Zoom,
    Bounce,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 4] = [
        AnimationKind::Fade,
        AnimationKind::Slide,
        AnimationKind::Zoom,
        AnimationKind::Bounce,
    ];
}

/// Composer configuration passed from JS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComposerConfig {
    /// Period between animation ticks (milliseconds).
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u32,
    /// Delay before a canned reply is delivered (milliseconds).
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u32,
    /// On-screen scale of the design preview.
    #[serde(default = "default_design_preview_scale")]
    pub design_preview_scale: f32,
    /// On-screen scale of the video frame preview.
    #[serde(default = "default_video_preview_scale")]
    pub video_preview_scale: f32,
    /// On-screen scale of the business card preview.
    #[serde(default = "default_card_preview_scale")]
    pub card_preview_scale: f32,
}

fn default_tick_interval_ms() -> u32 {
    30
}

fn default_reply_delay_ms() -> u32 {
    1000
}

fn default_design_preview_scale() -> f32 {
    0.4
}

fn default_video_preview_scale() -> f32 {
    0.25
}

fn default_card_preview_scale() -> f32 {
    0.8
}

impl Default for ComposerConfig {
    fn default() -> Self {
        ComposerConfig {
            tick_interval_ms: default_tick_interval_ms(),
            reply_delay_ms: default_reply_delay_ms(),
            design_preview_scale: default_design_preview_scale(),
            video_preview_scale: default_video_preview_scale(),
            card_preview_scale: default_card_preview_scale(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_to_ceiling() {
        assert_eq!(Progress::new(250).as_u8(), 100);
        let mut p = Progress::new(99);
        p.advance();
        p.advance();
        assert_eq!(p.as_u8(), 100);
        assert!(p.is_complete());
    }

    #[test]
    fn progress_from_json_is_clamped() {
        let p: Progress = serde_json::from_str("250").unwrap();
        assert_eq!(p, Progress::new(100));
        let p: Progress = serde_json::from_str("42").unwrap();
        assert_eq!(p.as_u8(), 42);
    }

    #[test]
    fn selectors_use_lowercase_keys() {
        let json = serde_json::to_string(&DesignTemplate::Colorful).unwrap();
        assert_eq!(json, "\"colorful\"");
        let platform: Platform = serde_json::from_str("\"linkedin\"").unwrap();
        assert_eq!(platform, Platform::Linkedin);
        assert!(serde_json::from_str::<VideoStyle>("\"reel\"").is_err());
    }

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config: ComposerConfig = serde_json::from_str(r#"{"reply_delay_ms":250}"#).unwrap();
        assert_eq!(config.reply_delay_ms, 250);
        assert_eq!(config.tick_interval_ms, 30);
        assert_eq!(config, ComposerConfig { reply_delay_ms: 250, ..Default::default() });
    }

    #[test]
    fn color_alpha_suffix() {
        let c = HexColor::from("#667eea");
        assert_eq!(c.with_alpha("15").as_str(), "#667eea15");
    }
}

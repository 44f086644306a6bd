// Parameter models: the user-editable fields of each generator, with defaults.
// Fields are free-form; empty text renders blank and colors are never validated.

use serde::{Deserialize, Serialize};

use crate::types::{HexColor, IconKind};

/// Social design fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignParams {
    pub title: String,
    pub subtitle: String,
    pub background_color: HexColor,
    pub text_color: HexColor,
    pub accent_color: HexColor,
}

impl Default for DesignParams {
    fn default() -> Self {
        DesignParams {
            title: "عنوان التصميم".to_string(),
            subtitle: "النص الفرعي هنا".to_string(),
            background_color: HexColor::from("#667eea"),
            text_color: HexColor::from("#ffffff"),
            accent_color: HexColor::from("#764ba2"),
        }
    }
}

/// Logo and business card fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogoParams {
    pub company_name: String,
    pub tagline: String,
    pub icon: IconKind,
    pub show_icon: bool,
    pub primary_color: HexColor,
    pub secondary_color: HexColor,
}

impl Default for LogoParams {
    fn default() -> Self {
        LogoParams {
            company_name: "شركتك".to_string(),
            tagline: "شعارك هنا".to_string(),
            icon: IconKind::Zap,
            show_icon: true,
            primary_color: HexColor::from("#667eea"),
            secondary_color: HexColor::from("#764ba2"),
        }
    }
}

/// Video frame fields. Title and body text are always painted white.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VideoParams {
    pub title: String,
    pub subtitle: String,
    pub background_color: HexColor,
    pub accent_color: HexColor,
}

impl Default for VideoParams {
    fn default() -> Self {
        VideoParams {
            title: "عنوان الفيديو".to_string(),
            subtitle: "النص الفرعي أو الوصف".to_string(),
            background_color: HexColor::from("#667eea"),
            accent_color: HexColor::from("#764ba2"),
        }
    }
}

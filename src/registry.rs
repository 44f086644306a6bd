// Style registry: fixed canvas geometry and per-template presets.
// Every lookup is a match over a closed enum, so an unknown key cannot be expressed.

use serde::Serialize;

use crate::style::{
    Align, Background, ColorStop, FlexDirection, FocalPoint, FontWeight, GradientDirection,
    Justify, Padding, TextAlign, TextShadow,
};
use crate::types::{DesignTemplate, HexColor, LogoStyle, PixelSize, Platform, VideoStyle};

/// Named output geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CanvasTarget {
    pub size: PixelSize,
    pub label: &'static str,
}

impl Platform {
    /// Post size for this platform.
    pub fn target(&self) -> CanvasTarget {
        match self {
            Platform::Instagram => CanvasTarget {
                size: PixelSize::new(1080, 1080),
                label: "Instagram Post (1:1)",
            },
            Platform::Facebook => CanvasTarget {
                size: PixelSize::new(1200, 630),
                label: "Facebook Post (1.91:1)",
            },
            Platform::Twitter => CanvasTarget {
                size: PixelSize::new(1200, 675),
                label: "Twitter Post (16:9)",
            },
            Platform::Linkedin => CanvasTarget {
                size: PixelSize::new(1200, 627),
                label: "LinkedIn Post (1.91:1)",
            },
        }
    }
}

pub const BUSINESS_CARD: CanvasTarget = CanvasTarget {
    size: PixelSize::new(500, 300),
    label: "Business Card",
};

pub const VIDEO_FRAME: CanvasTarget = CanvasTarget {
    size: PixelSize::new(1080, 1920),
    label: "Vertical Video Frame (9:16)",
};

/// Which user color a preset slot takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Primary,
    Secondary,
}

/// A color slot in a preset: fixed, taken from the palette, or a palette
/// color with an alpha suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Fixed(&'static str),
    Role(ColorRole),
    Tinted(ColorRole, &'static str),
}

/// The two user colors a preset is filled with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette<'a> {
    pub primary: &'a HexColor,
    pub secondary: &'a HexColor,
}

impl Palette<'_> {
    fn role(&self, role: ColorRole) -> &HexColor {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
        }
    }
}

impl Paint {
    pub fn resolve(&self, palette: &Palette<'_>) -> HexColor {
        match self {
            Paint::Fixed(value) => HexColor::new(*value),
            Paint::Role(role) => palette.role(*role).clone(),
            Paint::Tinted(role, alpha) => palette.role(*role).with_alpha(alpha),
        }
    }
}

/// Background formula parameters. Chosen by template, filled by the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundFormula {
    Solid(Paint),
    Linear {
        direction: GradientDirection,
        stops: &'static [(Paint, Option<u16>)],
    },
    Radial {
        focal: FocalPoint,
        stops: &'static [(Paint, Option<u16>)],
    },
}

fn stops(slots: &[(Paint, Option<u16>)], palette: &Palette<'_>) -> Vec<ColorStop> {
    slots
        .iter()
        .map(|(paint, position)| ColorStop {
            color: paint.resolve(palette),
            position: *position,
        })
        .collect()
}

impl BackgroundFormula {
    pub fn apply(&self, palette: &Palette<'_>) -> Background {
        match self {
            BackgroundFormula::Solid(paint) => Background::Solid {
                color: paint.resolve(palette),
            },
            BackgroundFormula::Linear {
                direction,
                stops: slots,
            } => Background::Linear {
                direction: *direction,
                stops: stops(slots, palette),
            },
            BackgroundFormula::Radial { focal, stops: slots } => Background::Radial {
                focal: *focal,
                stops: stops(slots, palette),
            },
        }
    }
}

const P: Paint = Paint::Role(ColorRole::Primary);
const S: Paint = Paint::Role(ColorRole::Secondary);

/// Layout of a full-bleed container (social design, video frame).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPreset {
    pub background: BackgroundFormula,
    pub padding: Padding,
    pub justify: Justify,
    pub align: Option<Align>,
    pub gap_px: Option<u32>,
    /// Accent border on the right edge, in the secondary color.
    pub accent_border_px: Option<u32>,
    pub text_align: Option<TextAlign>,
    pub heading_size_px: u32,
    pub heading_align: TextAlign,
    pub heading_shadow: Option<TextShadow>,
    pub body_max_width_percent: u8,
}

/// Fixed ornaments a design template carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignOrnaments {
    pub corner_circles: bool,
    pub sparkles: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignPreset {
    pub canvas: CanvasPreset,
    pub ornaments: DesignOrnaments,
}

pub const DESIGN_BODY_SIZE_PX: u32 = 42;

const MODERN_DESIGN: DesignPreset = DesignPreset {
    canvas: CanvasPreset {
        background: BackgroundFormula::Linear {
            direction: GradientDirection::Angle(135),
            stops: &[(P, Some(0)), (S, Some(100))],
        },
        padding: Padding::uniform(60),
        justify: Justify::Center,
        align: Some(Align::Center),
        gap_px: Some(30),
        accent_border_px: None,
        text_align: None,
        heading_size_px: 90,
        heading_align: TextAlign::Center,
        heading_shadow: Some(TextShadow::new(4, 20, 0.3)),
        body_max_width_percent: 100,
    },
    ornaments: DesignOrnaments {
        corner_circles: false,
        sparkles: true,
    },
};

const MINIMAL_DESIGN: DesignPreset = DesignPreset {
    canvas: CanvasPreset {
        background: BackgroundFormula::Solid(P),
        padding: Padding::uniform(60),
        justify: Justify::Center,
        align: Some(Align::Start),
        gap_px: None,
        accent_border_px: Some(12),
        text_align: None,
        heading_size_px: 80,
        heading_align: TextAlign::Right,
        heading_shadow: None,
        body_max_width_percent: 80,
    },
    ornaments: DesignOrnaments {
        corner_circles: false,
        sparkles: false,
    },
};

const COLORFUL_DESIGN: DesignPreset = DesignPreset {
    canvas: CanvasPreset {
        background: BackgroundFormula::Radial {
            focal: FocalPoint::new(30, 107),
            stops: &[(S, Some(0)), (P, Some(90))],
        },
        padding: Padding::uniform(60),
        justify: Justify::SpaceBetween,
        align: None,
        gap_px: None,
        accent_border_px: None,
        text_align: None,
        heading_size_px: 90,
        heading_align: TextAlign::Center,
        heading_shadow: None,
        body_max_width_percent: 100,
    },
    ornaments: DesignOrnaments {
        corner_circles: true,
        sparkles: false,
    },
};

const GRADIENT_DESIGN: DesignPreset = DesignPreset {
    canvas: CanvasPreset {
        background: BackgroundFormula::Linear {
            direction: GradientDirection::ToRight,
            stops: &[(P, None), (S, None), (P, None)],
        },
        padding: Padding::uniform(60),
        justify: Justify::Center,
        align: Some(Align::Center),
        gap_px: None,
        accent_border_px: None,
        text_align: Some(TextAlign::Center),
        heading_size_px: 90,
        heading_align: TextAlign::Center,
        heading_shadow: None,
        body_max_width_percent: 100,
    },
    ornaments: DesignOrnaments {
        corner_circles: false,
        sparkles: false,
    },
};

impl DesignTemplate {
    pub fn preset(&self) -> &'static DesignPreset {
        match self {
            DesignTemplate::Modern => &MODERN_DESIGN,
            DesignTemplate::Minimal => &MINIMAL_DESIGN,
            DesignTemplate::Colorful => &COLORFUL_DESIGN,
            DesignTemplate::Gradient => &GRADIENT_DESIGN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoOrnaments {
    pub quote_marks: bool,
    pub call_to_action: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoPreset {
    pub canvas: CanvasPreset,
    pub ornaments: VideoOrnaments,
}

pub const VIDEO_BODY_SIZE_PX: u32 = 52;
pub const VIDEO_HEADING_SHADOW: TextShadow = TextShadow::new(4, 30, 0.4);
pub const VIDEO_BODY_SHADOW: TextShadow = TextShadow::new(2, 20, 0.3);
pub const CALL_TO_ACTION_LABEL: &str = "ابدأ الآن";

const PROMO_VIDEO: VideoPreset = VideoPreset {
    canvas: CanvasPreset {
        background: BackgroundFormula::Linear {
            direction: GradientDirection::Angle(135),
            stops: &[(P, None), (S, None)],
        },
        padding: Padding::uniform(60),
        justify: Justify::Center,
        align: Some(Align::Center),
        gap_px: None,
        accent_border_px: None,
        text_align: Some(TextAlign::Center),
        heading_size_px: 120,
        heading_align: TextAlign::Center,
        heading_shadow: Some(VIDEO_HEADING_SHADOW),
        body_max_width_percent: 100,
    },
    ornaments: VideoOrnaments {
        quote_marks: false,
        call_to_action: true,
    },
};

const STORY_VIDEO: VideoPreset = VideoPreset {
    canvas: CanvasPreset {
        background: BackgroundFormula::Radial {
            focal: FocalPoint::CENTER,
            stops: &[(S, None), (P, None)],
        },
        padding: Padding::uniform(60).with_bottom(100),
        justify: Justify::End,
        align: None,
        gap_px: None,
        accent_border_px: None,
        text_align: None,
        heading_size_px: 100,
        heading_align: TextAlign::Center,
        heading_shadow: Some(VIDEO_HEADING_SHADOW),
        body_max_width_percent: 100,
    },
    ornaments: VideoOrnaments {
        quote_marks: false,
        call_to_action: false,
    },
};

const ANNOUNCEMENT_VIDEO: VideoPreset = VideoPreset {
    canvas: CanvasPreset {
        background: BackgroundFormula::Solid(P),
        padding: Padding::uniform(60),
        justify: Justify::Center,
        align: Some(Align::Start),
        gap_px: None,
        accent_border_px: Some(15),
        text_align: None,
        heading_size_px: 120,
        heading_align: TextAlign::Right,
        heading_shadow: Some(VIDEO_HEADING_SHADOW),
        body_max_width_percent: 80,
    },
    ornaments: VideoOrnaments {
        quote_marks: false,
        call_to_action: false,
    },
};

const QUOTE_VIDEO: VideoPreset = VideoPreset {
    canvas: CanvasPreset {
        background: BackgroundFormula::Linear {
            direction: GradientDirection::ToBottomRight,
            stops: &[(P, None), (S, None)],
        },
        padding: Padding::uniform(80),
        justify: Justify::Center,
        align: Some(Align::Center),
        gap_px: None,
        accent_border_px: None,
        text_align: Some(TextAlign::Center),
        heading_size_px: 120,
        heading_align: TextAlign::Center,
        heading_shadow: Some(VIDEO_HEADING_SHADOW),
        body_max_width_percent: 100,
    },
    ornaments: VideoOrnaments {
        quote_marks: true,
        call_to_action: false,
    },
};

impl VideoStyle {
    pub fn preset(&self) -> &'static VideoPreset {
        match self {
            VideoStyle::Promo => &PROMO_VIDEO,
            VideoStyle::Story => &STORY_VIDEO,
            VideoStyle::Announcement => &ANNOUNCEMENT_VIDEO,
            VideoStyle::Quote => &QUOTE_VIDEO,
        }
    }
}

/// Typography of one logo text line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoType {
    pub size_px: u32,
    pub weight: FontWeight,
    /// `None` paints the text with the primary→secondary gradient.
    pub paint: Option<Paint>,
    pub letter_spacing_px: Option<u32>,
    pub margin_top_px: Option<u32>,
    pub uppercase: bool,
    pub italic: bool,
}

const fn logo_type(size_px: u32, weight: FontWeight, paint: Paint) -> LogoType {
    LogoType {
        size_px,
        weight,
        paint: Some(paint),
        letter_spacing_px: None,
        margin_top_px: None,
        uppercase: false,
        italic: false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoPreset {
    pub background: BackgroundFormula,
    pub direction: FlexDirection,
    pub align: Align,
    pub gap_px: u32,
    pub padding: Padding,
    pub radius_px: Option<u32>,
    /// Accent border on the left edge, in the primary color.
    pub accent_border_px: Option<u32>,
    pub text_align: TextAlign,
    pub name: LogoType,
    pub tagline: LogoType,
    /// Leading icon size; `None` hides the leading icon.
    pub icon_size_px: Option<u32>,
    /// Small icon between name and tagline.
    pub inline_icon_px: Option<u32>,
    /// Export background; `None` keeps transparency.
    pub export_background: Option<&'static str>,
}

const WHITE: Paint = Paint::Fixed("#ffffff");
const GRADIENT_135: GradientDirection = GradientDirection::Angle(135);

const MINIMAL_LOGO: LogoPreset = LogoPreset {
    background: BackgroundFormula::Solid(WHITE),
    direction: FlexDirection::Column,
    align: Align::Center,
    gap_px: 20,
    padding: Padding::uniform(40),
    radius_px: None,
    accent_border_px: None,
    text_align: TextAlign::Center,
    name: LogoType {
        letter_spacing_px: Some(2),
        ..logo_type(48, FontWeight::Light, Paint::Fixed("#333"))
    },
    tagline: LogoType {
        letter_spacing_px: Some(3),
        uppercase: true,
        ..logo_type(16, FontWeight::Regular, Paint::Fixed("#666"))
    },
    icon_size_px: Some(60),
    inline_icon_px: None,
    export_background: Some("#ffffff"),
};

const MODERN_LOGO: LogoPreset = LogoPreset {
    background: BackgroundFormula::Solid(WHITE),
    direction: FlexDirection::Row,
    align: Align::Center,
    gap_px: 30,
    padding: Padding::uniform(40),
    radius_px: None,
    accent_border_px: None,
    text_align: TextAlign::Center,
    name: LogoType {
        paint: None,
        ..logo_type(52, FontWeight::Bold, P)
    },
    tagline: LogoType {
        margin_top_px: Some(5),
        ..logo_type(14, FontWeight::Regular, Paint::Fixed("#888"))
    },
    icon_size_px: Some(80),
    inline_icon_px: Some(30),
    export_background: Some("#ffffff"),
};

const ABSTRACT_LOGO: LogoPreset = LogoPreset {
    background: BackgroundFormula::Linear {
        direction: GRADIENT_135,
        stops: &[
            (Paint::Tinted(ColorRole::Primary, "15"), None),
            (Paint::Tinted(ColorRole::Secondary, "15"), None),
        ],
    },
    direction: FlexDirection::Column,
    align: Align::Center,
    gap_px: 25,
    padding: Padding::uniform(40),
    radius_px: Some(20),
    accent_border_px: None,
    text_align: TextAlign::Center,
    name: logo_type(56, FontWeight::Bold, P),
    tagline: LogoType {
        italic: true,
        ..logo_type(18, FontWeight::Regular, Paint::Fixed("#555"))
    },
    icon_size_px: Some(80),
    inline_icon_px: None,
    export_background: None,
};

const GEOMETRIC_LOGO: LogoPreset = LogoPreset {
    background: BackgroundFormula::Solid(WHITE),
    direction: FlexDirection::Column,
    align: Align::Start,
    gap_px: 15,
    padding: Padding::uniform(40),
    radius_px: None,
    accent_border_px: Some(8),
    text_align: TextAlign::Right,
    name: logo_type(50, FontWeight::Bold, Paint::Fixed("#222")),
    tagline: logo_type(16, FontWeight::SemiBold, S),
    icon_size_px: None,
    inline_icon_px: None,
    export_background: Some("#ffffff"),
};

impl LogoStyle {
    pub fn preset(&self) -> &'static LogoPreset {
        match self {
            LogoStyle::Minimal => &MINIMAL_LOGO,
            LogoStyle::Modern => &MODERN_LOGO,
            LogoStyle::Abstract => &ABSTRACT_LOGO,
            LogoStyle::Geometric => &GEOMETRIC_LOGO,
        }
    }
}

/// Gradient used for clipped logo text and the business card face.
pub const BRAND_GRADIENT: BackgroundFormula = BackgroundFormula::Linear {
    direction: GRADIENT_135,
    stops: &[(P, None), (S, None)],
};

/// Placeholder contact block printed on the business card.
pub const CARD_CONTACT_LINES: [&str; 4] = [
    "جون دو",
    "المدير التنفيذي",
    "info@company.com",
    "+966 50 123 4567",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_geometry_is_fixed() {
        assert_eq!(Platform::Instagram.target().size, PixelSize::new(1080, 1080));
        assert_eq!(Platform::Facebook.target().size, PixelSize::new(1200, 630));
        assert_eq!(Platform::Twitter.target().size, PixelSize::new(1200, 675));
        assert_eq!(Platform::Linkedin.target().size, PixelSize::new(1200, 627));
        assert_eq!(Platform::Twitter.target().label, "Twitter Post (16:9)");
    }

    #[test]
    fn formula_fills_roles_from_palette() {
        let primary = HexColor::from("#010101");
        let secondary = HexColor::from("#020202");
        let palette = Palette {
            primary: &primary,
            secondary: &secondary,
        };
        let bg = COLORFUL_DESIGN.canvas.background.apply(&palette);
        assert_eq!(
            bg.to_string(),
            "radial-gradient(circle at 30% 107%, #020202 0%, #010101 90%)"
        );
    }

    #[test]
    fn tinted_paint_appends_alpha() {
        let primary = HexColor::from("#667eea");
        let secondary = HexColor::from("#764ba2");
        let palette = Palette {
            primary: &primary,
            secondary: &secondary,
        };
        let bg = LogoStyle::Abstract.preset().background.apply(&palette);
        assert_eq!(
            bg.to_string(),
            "linear-gradient(135deg, #667eea15, #764ba215)"
        );
    }

    #[test]
    fn only_abstract_logo_exports_transparent() {
        for style in LogoStyle::ALL {
            let transparent = style.preset().export_background.is_none();
            assert_eq!(transparent, style == LogoStyle::Abstract);
        }
    }
}

// Resolved paint/layout properties for one render pass, plus their CSS rendering.
// Declarations are plain values: rebuilt on every change, compared structurally.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{HexColor, IconKind, PixelSize};

/// Direction of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradientDirection {
    /// Angle in degrees (CSS convention, 0 = to top).
    Angle(u16),
    ToRight,
    ToBottomRight,
}

impl fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientDirection::Angle(deg) => write!(f, "{}deg", deg),
            GradientDirection::ToRight => f.write_str("to right"),
            GradientDirection::ToBottomRight => f.write_str("to bottom right"),
        }
    }
}

/// A gradient color stop. `position` is a percentage along the gradient line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: HexColor,
    pub position: Option<u16>,
}

impl ColorStop {
    pub fn new(color: HexColor) -> Self {
        ColorStop {
            color,
            position: None,
        }
    }

    pub fn at(color: HexColor, position: u16) -> Self {
        ColorStop {
            color,
            position: Some(position),
        }
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{} {}%", self.color, pos),
            None => write!(f, "{}", self.color),
        }
    }
}

/// Focal point of a radial gradient, in percent of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocalPoint {
    pub x_percent: u16,
    pub y_percent: u16,
}

impl FocalPoint {
    pub const CENTER: FocalPoint = FocalPoint {
        x_percent: 50,
        y_percent: 50,
    };

    pub const fn new(x_percent: u16, y_percent: u16) -> Self {
        FocalPoint {
            x_percent,
            y_percent,
        }
    }
}

/// Background expression of a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Background {
    Solid {
        color: HexColor,
    },
    Linear {
        direction: GradientDirection,
        stops: Vec<ColorStop>,
    },
    Radial {
        focal: FocalPoint,
        stops: Vec<ColorStop>,
    },
}

impl Background {
    pub fn is_gradient(&self) -> bool {
        !matches!(self, Background::Solid { .. })
    }

    /// Distinct colors referenced by the expression, in order of first use.
    pub fn colors(&self) -> Vec<&HexColor> {
        let stops = match self {
            Background::Solid { color } => return vec![color],
            Background::Linear { stops, .. } | Background::Radial { stops, .. } => stops,
        };
        let mut colors: Vec<&HexColor> = Vec::with_capacity(stops.len());
        for stop in stops {
            if !colors.contains(&&stop.color) {
                colors.push(&stop.color);
            }
        }
        colors
    }
}

fn join_stops(stops: &[ColorStop]) -> String {
    stops
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Background::Solid { color } => write!(f, "{}", color),
            Background::Linear { direction, stops } => {
                write!(f, "linear-gradient({}, {})", direction, join_stops(stops))
            }
            Background::Radial { focal, stops } => {
                if *focal == FocalPoint::CENTER {
                    write!(f, "radial-gradient(circle at center, {})", join_stops(stops))
                } else {
                    write!(
                        f,
                        "radial-gradient(circle at {}% {}%, {})",
                        focal.x_percent,
                        focal.y_percent,
                        join_stops(stops)
                    )
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexDirection {
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    Start,
    Center,
    End,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Start,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    fn css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    Regular,
    SemiBold,
    Bold,
}

impl FontWeight {
    fn css(&self) -> &'static str {
        match self {
            FontWeight::Light => "300",
            FontWeight::Regular => "normal",
            FontWeight::SemiBold => "600",
            FontWeight::Bold => "bold",
        }
    }
}

/// Which edge a border accent is drawn on. Layouts are right-to-left, so the
/// "start" accent sits on the right for social/video templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Border {
    pub side: BorderSide,
    pub width_px: u32,
    pub color: HexColor,
}

/// Padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Padding {
    pub const fn uniform(px: u32) -> Self {
        Padding {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }

    pub const fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Padding {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub const fn with_bottom(self, bottom: u32) -> Self {
        Padding { bottom, ..self }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.top == self.right && self.right == self.bottom && self.bottom == self.left {
            write!(f, "{}px", self.top)
        } else if self.top == self.bottom && self.left == self.right {
            write!(f, "{}px {}px", self.top, self.right)
        } else {
            write!(
                f,
                "{}px {}px {}px {}px",
                self.top, self.right, self.bottom, self.left
            )
        }
    }
}

/// Black text shadow: vertical offset, blur radius, and alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextShadow {
    pub offset_y_px: u32,
    pub blur_px: u32,
    pub alpha: f32,
}

impl TextShadow {
    pub const fn new(offset_y_px: u32, blur_px: u32, alpha: f32) -> Self {
        TextShadow {
            offset_y_px,
            blur_px,
            alpha,
        }
    }
}

impl fmt::Display for TextShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0 {}px {}px rgba(0,0,0,{})",
            self.offset_y_px, self.blur_px, self.alpha
        )
    }
}

/// How glyphs are painted: a flat color, or a gradient clipped to the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextFill {
    Color { color: HexColor },
    ClippedGradient { background: Background },
}

impl TextFill {
    pub fn color(color: HexColor) -> Self {
        TextFill::Color { color }
    }
}

/// Layout and paint of a container region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerStyle {
    pub background: Background,
    pub padding: Padding,
    pub direction: FlexDirection,
    pub justify: Option<Justify>,
    pub align: Option<Align>,
    pub gap_px: Option<u32>,
    pub border: Option<Border>,
    pub radius_px: Option<u32>,
    pub text_align: Option<TextAlign>,
    pub color: Option<HexColor>,
}

impl ContainerStyle {
    pub fn new(background: Background, padding: Padding, direction: FlexDirection) -> Self {
        ContainerStyle {
            background,
            padding,
            direction,
            justify: None,
            align: None,
            gap_px: None,
            border: None,
            radius_px: None,
            text_align: None,
            color: None,
        }
    }

    pub fn css_properties(&self) -> Vec<CssProperty> {
        let mut props = vec![
            CssProperty::new("background", self.background.to_string()),
            CssProperty::new("padding", self.padding.to_string()),
            CssProperty::new("display", "flex"),
            CssProperty::new(
                "flex-direction",
                match self.direction {
                    FlexDirection::Row => "row",
                    FlexDirection::Column => "column",
                },
            ),
        ];
        if let Some(justify) = self.justify {
            props.push(CssProperty::new(
                "justify-content",
                match justify {
                    Justify::Start => "flex-start",
                    Justify::Center => "center",
                    Justify::End => "flex-end",
                    Justify::SpaceBetween => "space-between",
                },
            ));
        }
        if let Some(align) = self.align {
            props.push(CssProperty::new(
                "align-items",
                match align {
                    Align::Start => "flex-start",
                    Align::Center => "center",
                },
            ));
        }
        if let Some(gap) = self.gap_px {
            props.push(CssProperty::new("gap", format!("{}px", gap)));
        }
        if let Some(border) = &self.border {
            let name = match border.side {
                BorderSide::Left => "border-left",
                BorderSide::Right => "border-right",
            };
            props.push(CssProperty::new(
                name,
                format!("{}px solid {}", border.width_px, border.color),
            ));
        }
        if let Some(radius) = self.radius_px {
            props.push(CssProperty::new("border-radius", format!("{}px", radius)));
        }
        if let Some(align) = self.text_align {
            props.push(CssProperty::new("text-align", align.css()));
        }
        if let Some(color) = &self.color {
            props.push(CssProperty::new("color", color.to_string()));
        }
        props
    }
}

/// Typography and paint of a text region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size_px: u32,
    pub weight: FontWeight,
    pub fill: TextFill,
    pub align: Option<TextAlign>,
    pub line_height: Option<f32>,
    pub opacity: Option<f32>,
    pub shadow: Option<TextShadow>,
    pub max_width_percent: Option<u8>,
    pub letter_spacing_px: Option<u32>,
    pub margin_top_px: Option<u32>,
    pub margin_bottom_px: Option<u32>,
    pub uppercase: bool,
    pub italic: bool,
}

impl TextStyle {
    pub fn new(font_size_px: u32, weight: FontWeight, fill: TextFill) -> Self {
        TextStyle {
            font_size_px,
            weight,
            fill,
            align: None,
            line_height: None,
            opacity: None,
            shadow: None,
            max_width_percent: None,
            letter_spacing_px: None,
            margin_top_px: None,
            margin_bottom_px: None,
            uppercase: false,
            italic: false,
        }
    }

    pub fn css_properties(&self) -> Vec<CssProperty> {
        let mut props = vec![
            CssProperty::new("font-size", format!("{}px", self.font_size_px)),
            CssProperty::new("font-weight", self.weight.css()),
        ];
        match &self.fill {
            TextFill::Color { color } => props.push(CssProperty::new("color", color.to_string())),
            TextFill::ClippedGradient { background } => {
                props.push(CssProperty::new("background", background.to_string()));
                props.push(CssProperty::new("-webkit-background-clip", "text"));
                props.push(CssProperty::new("-webkit-text-fill-color", "transparent"));
            }
        }
        if let Some(align) = self.align {
            props.push(CssProperty::new("text-align", align.css()));
        }
        if let Some(lh) = self.line_height {
            props.push(CssProperty::new("line-height", lh.to_string()));
        }
        if let Some(opacity) = self.opacity {
            props.push(CssProperty::new("opacity", opacity.to_string()));
        }
        props.push(CssProperty::new(
            "text-shadow",
            self.shadow
                .map(|s| s.to_string())
                .unwrap_or_else(|| "none".to_string()),
        ));
        if let Some(max) = self.max_width_percent {
            props.push(CssProperty::new("max-width", format!("{}%", max)));
        }
        if let Some(spacing) = self.letter_spacing_px {
            props.push(CssProperty::new("letter-spacing", format!("{}px", spacing)));
        }
        if let Some(top) = self.margin_top_px {
            props.push(CssProperty::new("margin-top", format!("{}px", top)));
        }
        if let Some(bottom) = self.margin_bottom_px {
            props.push(CssProperty::new("margin-bottom", format!("{}px", bottom)));
        }
        if self.uppercase {
            props.push(CssProperty::new("text-transform", "uppercase"));
        }
        if self.italic {
            props.push(CssProperty::new("font-style", "italic"));
        }
        props
    }
}

/// Text content plus its style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    pub style: TextStyle,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        TextBlock {
            text: text.into(),
            style,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Corner a decoration is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopRight,
    BottomLeft,
}

/// Symbol glyphs drawn as decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    Sparkles,
    Quote,
}

/// Where an icon is placed within a composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconSlot {
    /// Before the text block.
    Leading,
    /// Between the name and the tagline.
    Inline,
}

/// Fixed, non-configurable ornaments of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Decoration {
    Circle {
        corner: Corner,
        offset_px: u32,
        diameter_px: u32,
        color: HexColor,
        opacity: f32,
    },
    Glyph {
        glyph: Glyph,
        corner: Option<Corner>,
        offset_px: u32,
        size_px: u32,
        color: HexColor,
        opacity: f32,
    },
    Icon {
        icon: IconKind,
        slot: IconSlot,
        size_px: u32,
        color: HexColor,
        filled: bool,
    },
    CallToAction {
        label: String,
        background: HexColor,
        color: HexColor,
        font_size_px: u32,
        padding: Padding,
        radius_px: u32,
        margin_top_px: u32,
    },
    Lines {
        lines: Vec<String>,
        font_size_px: u32,
        line_height: f32,
    },
}

/// The resolved output for one composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDeclaration {
    /// Export geometry, when the composition has a fixed one.
    pub canvas: Option<PixelSize>,
    pub container: ContainerStyle,
    pub heading: TextBlock,
    pub body: TextBlock,
    pub decorations: Vec<Decoration>,
}

impl StyleDeclaration {
    /// CSS strings per region, ready to assign to `style` attributes.
    pub fn css(&self) -> RegionCss {
        RegionCss {
            container: join_properties(&self.container.css_properties()),
            heading: join_properties(&self.heading.style.css_properties()),
            body: join_properties(&self.body.style.css_properties()),
        }
    }
}

/// CSS text for each region of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCss {
    pub container: String,
    pub heading: String,
    pub body: String,
}

/// A single `name: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssProperty {
    pub name: &'static str,
    pub value: String,
}

impl CssProperty {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        CssProperty {
            name,
            value: value.into(),
        }
    }
}

impl fmt::Display for CssProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

fn join_properties(props: &[CssProperty]) -> String {
    props
        .iter()
        .map(|p| format!("{};", p))
        .collect::<Vec<_>>()
        .join(" ")
}

// Style resolver: (template, parameter snapshot) -> StyleDeclaration.
// Pure and deterministic. The template decides every formula; the user only supplies text and colors.

use crate::params::{DesignParams, LogoParams, VideoParams};
use crate::registry::{
    CanvasPreset, LogoType, Palette, BRAND_GRADIENT, BUSINESS_CARD, CALL_TO_ACTION_LABEL,
    CARD_CONTACT_LINES, DESIGN_BODY_SIZE_PX, VIDEO_BODY_SHADOW, VIDEO_BODY_SIZE_PX, VIDEO_FRAME,
};
use crate::style::{
    Align, Background, Border, BorderSide, ContainerStyle, Corner, Decoration, FlexDirection,
    FontWeight, Glyph, IconSlot, Justify, Padding, StyleDeclaration, TextAlign, TextBlock,
    TextFill, TextStyle,
};
use crate::types::{DesignTemplate, HexColor, LogoStyle, VideoStyle};

const WHITE: &str = "#ffffff";

/// A template selector that can be resolved against its generator's parameters.
pub trait Resolve {
    type Params;

    fn resolve(&self, params: &Self::Params) -> StyleDeclaration;
}

/// Resolve `template` against a parameter snapshot.
pub fn resolve<T: Resolve>(template: T, params: &T::Params) -> StyleDeclaration {
    template.resolve(params)
}

/// Full-bleed container shared by social designs and video frames.
fn canvas_container(preset: &CanvasPreset, palette: &Palette<'_>) -> ContainerStyle {
    ContainerStyle {
        justify: Some(preset.justify),
        align: preset.align,
        gap_px: preset.gap_px,
        border: preset.accent_border_px.map(|width_px| Border {
            side: BorderSide::Right,
            width_px,
            color: palette.secondary.clone(),
        }),
        text_align: preset.text_align,
        ..ContainerStyle::new(
            preset.background.apply(palette),
            preset.padding,
            FlexDirection::Column,
        )
    }
}

impl Resolve for DesignTemplate {
    type Params = DesignParams;

    fn resolve(&self, params: &DesignParams) -> StyleDeclaration {
        let preset = self.preset();
        let palette = Palette {
            primary: &params.background_color,
            secondary: &params.accent_color,
        };
        let canvas = &preset.canvas;
        let text = &params.text_color;

        let heading = TextStyle {
            align: Some(canvas.heading_align),
            line_height: Some(1.2),
            shadow: canvas.heading_shadow,
            margin_bottom_px: Some(30),
            ..TextStyle::new(
                canvas.heading_size_px,
                FontWeight::Bold,
                TextFill::color(text.clone()),
            )
        };
        let body = TextStyle {
            align: Some(canvas.heading_align),
            line_height: Some(1.6),
            opacity: Some(0.9),
            max_width_percent: Some(canvas.body_max_width_percent),
            ..TextStyle::new(
                DESIGN_BODY_SIZE_PX,
                FontWeight::Regular,
                TextFill::color(text.clone()),
            )
        };

        let mut decorations = Vec::new();
        if preset.ornaments.corner_circles {
            decorations.push(Decoration::Circle {
                corner: Corner::TopRight,
                offset_px: 30,
                diameter_px: 150,
                color: text.clone(),
                opacity: 0.1,
            });
            decorations.push(Decoration::Circle {
                corner: Corner::BottomLeft,
                offset_px: 30,
                diameter_px: 200,
                color: text.clone(),
                opacity: 0.1,
            });
        }
        if preset.ornaments.sparkles {
            decorations.push(Decoration::Glyph {
                glyph: Glyph::Sparkles,
                corner: None,
                offset_px: 50,
                size_px: 40,
                color: text.clone(),
                opacity: 1.0,
            });
        }

        StyleDeclaration {
            canvas: None,
            container: canvas_container(canvas, &palette),
            heading: TextBlock::new(params.title.clone(), heading),
            body: TextBlock::new(params.subtitle.clone(), body),
            decorations,
        }
    }
}

impl Resolve for VideoStyle {
    type Params = VideoParams;

    fn resolve(&self, params: &VideoParams) -> StyleDeclaration {
        let preset = self.preset();
        let palette = Palette {
            primary: &params.background_color,
            secondary: &params.accent_color,
        };
        let canvas = &preset.canvas;
        let white = HexColor::from(WHITE);

        let heading = TextStyle {
            align: Some(canvas.heading_align),
            line_height: Some(1.2),
            shadow: canvas.heading_shadow,
            margin_bottom_px: Some(40),
            ..TextStyle::new(
                canvas.heading_size_px,
                FontWeight::Bold,
                TextFill::color(white.clone()),
            )
        };
        let body = TextStyle {
            align: Some(canvas.heading_align),
            line_height: Some(1.6),
            opacity: Some(0.95),
            shadow: Some(VIDEO_BODY_SHADOW),
            max_width_percent: Some(canvas.body_max_width_percent),
            ..TextStyle::new(
                VIDEO_BODY_SIZE_PX,
                FontWeight::Regular,
                TextFill::color(white.clone()),
            )
        };

        let mut decorations = Vec::new();
        if preset.ornaments.quote_marks {
            for corner in [Corner::TopRight, Corner::BottomLeft] {
                decorations.push(Decoration::Glyph {
                    glyph: Glyph::Quote,
                    corner: Some(corner),
                    offset_px: 80,
                    size_px: 200,
                    color: white.clone(),
                    opacity: 0.2,
                });
            }
        }
        if preset.ornaments.call_to_action {
            decorations.push(Decoration::CallToAction {
                label: CALL_TO_ACTION_LABEL.to_string(),
                background: white.clone(),
                color: params.background_color.clone(),
                font_size_px: 48,
                padding: Padding::symmetric(30, 60),
                radius_px: 60,
                margin_top_px: 80,
            });
        }

        StyleDeclaration {
            canvas: Some(VIDEO_FRAME.size),
            container: canvas_container(canvas, &palette),
            heading: TextBlock::new(params.title.clone(), heading),
            body: TextBlock::new(params.subtitle.clone(), body),
            decorations,
        }
    }
}

fn logo_text(face: &LogoType, palette: &Palette<'_>, align: TextAlign) -> TextStyle {
    let fill = match face.paint {
        Some(paint) => TextFill::color(paint.resolve(palette)),
        None => TextFill::ClippedGradient {
            background: BRAND_GRADIENT.apply(palette),
        },
    };
    TextStyle {
        align: Some(align),
        letter_spacing_px: face.letter_spacing_px,
        margin_top_px: face.margin_top_px,
        uppercase: face.uppercase,
        italic: face.italic,
        ..TextStyle::new(face.size_px, face.weight, fill)
    }
}

fn icon(params: &LogoParams, slot: IconSlot, size_px: u32) -> Decoration {
    Decoration::Icon {
        icon: params.icon,
        slot,
        size_px,
        color: params.primary_color.clone(),
        filled: params.icon.is_filled(),
    }
}

impl Resolve for LogoStyle {
    type Params = LogoParams;

    fn resolve(&self, params: &LogoParams) -> StyleDeclaration {
        let preset = self.preset();
        let palette = Palette {
            primary: &params.primary_color,
            secondary: &params.secondary_color,
        };

        let container = ContainerStyle {
            align: Some(preset.align),
            gap_px: Some(preset.gap_px),
            border: preset.accent_border_px.map(|width_px| Border {
                side: BorderSide::Left,
                width_px,
                color: params.primary_color.clone(),
            }),
            radius_px: preset.radius_px,
            text_align: Some(preset.text_align),
            ..ContainerStyle::new(
                preset.background.apply(&palette),
                preset.padding,
                preset.direction,
            )
        };

        let mut decorations = Vec::new();
        if params.show_icon {
            if let Some(size) = preset.icon_size_px {
                decorations.push(icon(params, IconSlot::Leading, size));
            }
            if let Some(size) = preset.inline_icon_px {
                decorations.push(icon(params, IconSlot::Inline, size));
            }
        }

        StyleDeclaration {
            canvas: None,
            container,
            heading: TextBlock::new(
                params.company_name.clone(),
                logo_text(&preset.name, &palette, preset.text_align),
            ),
            body: TextBlock::new(
                params.tagline.clone(),
                logo_text(&preset.tagline, &palette, preset.text_align),
            ),
            decorations,
        }
    }
}

/// The business card printed from the logo parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BusinessCard;

impl Resolve for BusinessCard {
    type Params = LogoParams;

    fn resolve(&self, params: &LogoParams) -> StyleDeclaration {
        let palette = Palette {
            primary: &params.primary_color,
            secondary: &params.secondary_color,
        };
        let white = HexColor::from(WHITE);

        let container = ContainerStyle {
            justify: Some(Justify::SpaceBetween),
            radius_px: Some(15),
            color: Some(white.clone()),
            ..ContainerStyle::new(
                BRAND_GRADIENT.apply(&palette),
                Padding::uniform(30),
                FlexDirection::Column,
            )
        };
        let name = TextStyle::new(32, FontWeight::Bold, TextFill::color(white.clone()));
        let tagline = TextStyle {
            opacity: Some(0.9),
            ..TextStyle::new(14, FontWeight::Regular, TextFill::color(white))
        };

        let mut decorations = Vec::new();
        if params.show_icon {
            decorations.push(icon(params, IconSlot::Leading, 40));
        }
        decorations.push(Decoration::Lines {
            lines: CARD_CONTACT_LINES.iter().map(|l| l.to_string()).collect(),
            font_size_px: 14,
            line_height: 1.8,
        });

        StyleDeclaration {
            canvas: Some(BUSINESS_CARD.size),
            container,
            heading: TextBlock::new(params.company_name.clone(), name),
            body: TextBlock::new(params.tagline.clone(), tagline),
            decorations,
        }
    }
}

/// True when the container paints a gradient drawn from at most two user colors.
/// Equal user colors still count: the formula is two-color, the result is flat.
pub fn is_two_color_gradient(background: &Background) -> bool {
    background.is_gradient() && background.colors().len() <= 2
}

/// True when the container centers its children on the cross axis.
pub fn is_centered(container: &ContainerStyle) -> bool {
    container.align == Some(Align::Center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IconKind;
    use proptest::prelude::*;

    fn design(title: &str, subtitle: &str, bg: &str, text: &str, accent: &str) -> DesignParams {
        DesignParams {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            background_color: HexColor::from(bg),
            text_color: HexColor::from(text),
            accent_color: HexColor::from(accent),
        }
    }

    #[test]
    fn modern_square_post_is_centered_gradient() {
        let params = design("T", "S", "#123456", "#abcdef", "#fedcba");
        let decl = resolve(DesignTemplate::Modern, &params);

        assert!(is_two_color_gradient(&decl.container.background));
        assert!(is_centered(&decl.container));
        assert_eq!(decl.heading.style.align, Some(TextAlign::Center));
        assert_eq!(decl.heading.text, "T");
        assert_eq!(decl.body.text, "S");
        assert_eq!(
            decl.container.background.to_string(),
            "linear-gradient(135deg, #123456 0%, #fedcba 100%)"
        );
    }

    #[test]
    fn minimal_design_is_solid_with_right_accent() {
        let params = DesignParams::default();
        let decl = resolve(DesignTemplate::Minimal, &params);

        assert!(!decl.container.background.is_gradient());
        let border = decl.container.border.expect("minimal carries an accent border");
        assert_eq!(border.side, BorderSide::Right);
        assert_eq!(border.width_px, 12);
        assert_eq!(border.color, params.accent_color);
        assert_eq!(decl.heading.style.font_size_px, 80);
        assert_eq!(decl.heading.style.align, Some(TextAlign::Right));
        assert_eq!(decl.body.style.max_width_percent, Some(80));
    }

    #[test]
    fn colorful_design_has_two_translucent_circles() {
        let params = DesignParams::default();
        let decl = resolve(DesignTemplate::Colorful, &params);

        let circles: Vec<_> = decl
            .decorations
            .iter()
            .filter(|d| matches!(d, Decoration::Circle { opacity, .. } if *opacity == 0.1))
            .collect();
        assert_eq!(circles.len(), 2);
        assert!(matches!(decl.container.background, Background::Radial { .. }));

        for template in [DesignTemplate::Minimal, DesignTemplate::Gradient] {
            let decl = resolve(template, &params);
            assert!(decl.decorations.is_empty(), "{:?} has no ornaments", template);
        }
    }

    #[test]
    fn heading_sizes_are_template_constants() {
        let params = DesignParams::default();
        for template in DesignTemplate::ALL {
            let decl = resolve(template, &params);
            assert!(decl.body.style.font_size_px < decl.heading.style.font_size_px);
            assert_eq!(decl.body.style.font_size_px, DESIGN_BODY_SIZE_PX);
        }
    }

    #[test]
    fn empty_text_still_resolves() {
        let params = design("", "", "#000000", "#ffffff", "#111111");
        for template in DesignTemplate::ALL {
            let decl = resolve(template, &params);
            assert!(decl.heading.is_blank());
            assert!(decl.body.is_blank());
            assert!(!decl.css().container.is_empty());
        }
    }

    #[test]
    fn quote_video_has_mirrored_quote_marks() {
        let decl = resolve(VideoStyle::Quote, &VideoParams::default());
        let corners: Vec<_> = decl
            .decorations
            .iter()
            .filter_map(|d| match d {
                Decoration::Glyph {
                    glyph: Glyph::Quote,
                    corner,
                    ..
                } => *corner,
                _ => None,
            })
            .collect();
        assert_eq!(corners, vec![Corner::TopRight, Corner::BottomLeft]);
        assert_eq!(decl.container.padding, Padding::uniform(80));
        assert_eq!(decl.canvas, Some(VIDEO_FRAME.size));
    }

    #[test]
    fn promo_call_to_action_uses_background_color() {
        let params = VideoParams {
            background_color: HexColor::from("#ff0000"),
            ..VideoParams::default()
        };
        let decl = resolve(VideoStyle::Promo, &params);
        let cta = decl
            .decorations
            .iter()
            .find_map(|d| match d {
                Decoration::CallToAction { color, label, .. } => Some((color, label)),
                _ => None,
            })
            .expect("promo has a call to action");
        assert_eq!(cta.0, &HexColor::from("#ff0000"));
        assert_eq!(cta.1, CALL_TO_ACTION_LABEL);
    }

    #[test]
    fn story_video_sits_at_bottom() {
        let decl = resolve(VideoStyle::Story, &VideoParams::default());
        assert_eq!(decl.container.justify, Some(Justify::End));
        assert_eq!(decl.container.padding.bottom, 100);
        assert_eq!(decl.heading.style.font_size_px, 100);
    }

    #[test]
    fn geometric_logo_hides_leading_icon() {
        let params = LogoParams::default();
        let decl = resolve(LogoStyle::Geometric, &params);
        assert!(decl.decorations.is_empty());
        let border = decl.container.border.expect("geometric has a left accent");
        assert_eq!(border.side, BorderSide::Left);
        assert_eq!(decl.heading.style.align, Some(TextAlign::Right));
    }

    #[test]
    fn modern_logo_uses_gradient_text_and_inline_icon() {
        let params = LogoParams::default();
        let decl = resolve(LogoStyle::Modern, &params);
        assert!(matches!(decl.heading.style.fill, TextFill::ClippedGradient { .. }));
        let slots: Vec<_> = decl
            .decorations
            .iter()
            .filter_map(|d| match d {
                Decoration::Icon { slot, size_px, .. } => Some((*slot, *size_px)),
                _ => None,
            })
            .collect();
        assert_eq!(slots, vec![(IconSlot::Leading, 80), (IconSlot::Inline, 30)]);
    }

    #[test]
    fn hidden_icon_removes_icon_decorations() {
        let params = LogoParams {
            show_icon: false,
            ..LogoParams::default()
        };
        for style in LogoStyle::ALL {
            let decl = resolve(style, &params);
            assert!(!decl
                .decorations
                .iter()
                .any(|d| matches!(d, Decoration::Icon { .. })));
        }
        let card = resolve(BusinessCard, &params);
        assert_eq!(card.decorations.len(), 1);
    }

    #[test]
    fn business_card_geometry_and_contact_block() {
        let decl = resolve(BusinessCard, &LogoParams::default());
        assert_eq!(decl.canvas, Some(BUSINESS_CARD.size));
        assert_eq!(decl.container.radius_px, Some(15));
        assert!(decl.decorations.iter().any(|d| matches!(
            d,
            Decoration::Lines { lines, .. } if lines.len() == CARD_CONTACT_LINES.len()
        )));
    }

    fn design_params_strategy() -> impl Strategy<Value = DesignParams> {
        (
            ".{0,12}",
            ".{0,24}",
            "#[0-9a-f]{6}",
            "#[0-9a-f]{6}",
            "#[0-9a-f]{6}",
        )
            .prop_map(|(title, subtitle, bg, text, accent)| DesignParams {
                title,
                subtitle,
                background_color: HexColor::new(bg),
                text_color: HexColor::new(text),
                accent_color: HexColor::new(accent),
            })
    }

    fn logo_params_strategy() -> impl Strategy<Value = LogoParams> {
        (
            ".{0,12}",
            ".{0,24}",
            0usize..IconKind::ALL.len(),
            any::<bool>(),
            "#[0-9a-f]{6}",
            "#[0-9a-f]{6}",
        )
            .prop_map(
                |(company_name, tagline, icon, show_icon, primary, secondary)| LogoParams {
                    company_name,
                    tagline,
                    icon: IconKind::ALL[icon],
                    show_icon,
                    primary_color: HexColor::new(primary),
                    secondary_color: HexColor::new(secondary),
                },
            )
    }

    proptest! {
        #[test]
        fn logo_resolution_is_deterministic(
            params in logo_params_strategy(),
            index in 0usize..4,
        ) {
            let style = LogoStyle::ALL[index];
            prop_assert_eq!(resolve(style, &params), resolve(style, &params.clone()));
        }

        #[test]
        fn business_card_resolution_is_deterministic(params in logo_params_strategy()) {
            prop_assert_eq!(
                resolve(BusinessCard, &params),
                resolve(BusinessCard, &params.clone())
            );
        }

        #[test]
        fn design_resolution_is_deterministic(
            params in design_params_strategy(),
            index in 0usize..4,
        ) {
            let template = DesignTemplate::ALL[index];
            let first = resolve(template, &params);
            let second = resolve(template, &params.clone());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn modern_is_centered_two_color_gradient_for_any_colors(
            params in design_params_strategy(),
        ) {
            let decl = resolve(DesignTemplate::Modern, &params);
            prop_assert!(is_two_color_gradient(&decl.container.background));
            prop_assert!(is_centered(&decl.container));
            prop_assert_eq!(decl.heading.style.align, Some(TextAlign::Center));
        }

        #[test]
        fn video_resolution_is_deterministic(
            title in ".{0,12}",
            bg in "#[0-9a-f]{6}",
            index in 0usize..4,
        ) {
            let params = VideoParams {
                title,
                background_color: HexColor::new(bg),
                ..VideoParams::default()
            };
            let style = VideoStyle::ALL[index];
            prop_assert_eq!(resolve(style, &params), resolve(style, &params));
        }
    }
}

// Generators: one per tab. Each owns its template selector and parameter model exclusively
// and re-resolves the declaration on demand.

use serde::Serialize;
use tracing::debug;

use crate::animation::{AnimationPlayer, FrameSample, PlayState, TickOutcome};
use crate::export::{AssetKind, ExportPlan};
use crate::params::{DesignParams, LogoParams, VideoParams};
use crate::registry::CanvasTarget;
use crate::resolver::{resolve, BusinessCard};
use crate::style::StyleDeclaration;
use crate::types::{
    AnimationKind, ComposerConfig, DesignTemplate, LogoStyle, Platform, VideoStyle,
};

/// Social post composer.
#[derive(Debug, Clone, Default)]
pub struct DesignGenerator {
    platform: Platform,
    template: DesignTemplate,
    params: DesignParams,
}

impl DesignGenerator {
    pub fn new(platform: Platform, template: DesignTemplate, params: DesignParams) -> Self {
        DesignGenerator {
            platform,
            template,
            params,
        }
    }

    /// Returns whether the selection changed.
    pub fn select_template(&mut self, template: DesignTemplate) -> bool {
        let changed = self.template != template;
        self.template = template;
        changed
    }

    /// Only the next export's geometry depends on the platform.
    pub fn select_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    pub fn set_params(&mut self, params: DesignParams) {
        self.params = params;
    }

    pub fn params_mut(&mut self) -> &mut DesignParams {
        &mut self.params
    }

    pub fn template(&self) -> DesignTemplate {
        self.template
    }

    pub fn target(&self) -> CanvasTarget {
        self.platform.target()
    }

    pub fn declaration(&self) -> StyleDeclaration {
        let mut declaration = resolve(self.template, &self.params);
        declaration.canvas = Some(self.platform.target().size);
        debug!(template = ?self.template, platform = ?self.platform, "design resolved");
        declaration
    }

    pub fn export_plan(&self, epoch_ms: u64) -> ExportPlan {
        ExportPlan::new(AssetKind::SocialDesign(self.platform), epoch_ms)
    }
}

/// Logo and business card composer.
#[derive(Debug, Clone, Default)]
pub struct LogoGenerator {
    style: LogoStyle,
    params: LogoParams,
}

impl LogoGenerator {
    pub fn new(style: LogoStyle, params: LogoParams) -> Self {
        LogoGenerator { style, params }
    }

    pub fn select_style(&mut self, style: LogoStyle) -> bool {
        let changed = self.style != style;
        self.style = style;
        changed
    }

    pub fn set_params(&mut self, params: LogoParams) {
        self.params = params;
    }

    pub fn params_mut(&mut self) -> &mut LogoParams {
        &mut self.params
    }

    pub fn style(&self) -> LogoStyle {
        self.style
    }

    pub fn declaration(&self) -> StyleDeclaration {
        debug!(style = ?self.style, show_icon = self.params.show_icon, "logo resolved");
        resolve(self.style, &self.params)
    }

    /// The card is resolved from the same parameters, independent of the logo style.
    pub fn business_card(&self) -> StyleDeclaration {
        resolve(BusinessCard, &self.params)
    }

    pub fn logo_export_plan(&self, epoch_ms: u64) -> ExportPlan {
        ExportPlan::new(AssetKind::Logo(self.style), epoch_ms)
    }

    pub fn card_export_plan(&self, epoch_ms: u64) -> ExportPlan {
        ExportPlan::new(AssetKind::BusinessCard, epoch_ms)
    }
}

/// Everything the video preview renders for one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoPreview {
    pub declaration: StyleDeclaration,
    pub sample: FrameSample,
    pub transform: String,
    pub state: PlayState,
    /// Progress bar width in percent; absent while idle.
    pub progress_bar_percent: Option<u8>,
}

/// Vertical video frame composer with an animated preview.
#[derive(Debug, Clone)]
pub struct VideoGenerator {
    style: VideoStyle,
    params: VideoParams,
    player: AnimationPlayer,
}

impl VideoGenerator {
    pub fn new(
        style: VideoStyle,
        params: VideoParams,
        animation: AnimationKind,
        config: &ComposerConfig,
    ) -> Self {
        VideoGenerator {
            style,
            params,
            player: AnimationPlayer::new(animation, config.tick_interval_ms),
        }
    }

    pub fn select_style(&mut self, style: VideoStyle) -> bool {
        let changed = self.style != style;
        self.style = style;
        changed
    }

    pub fn select_animation(&mut self, kind: AnimationKind) {
        self.player.set_kind(kind);
    }

    pub fn set_params(&mut self, params: VideoParams) {
        self.params = params;
    }

    pub fn params_mut(&mut self) -> &mut VideoParams {
        &mut self.params
    }

    pub fn style(&self) -> VideoStyle {
        self.style
    }

    pub fn player(&self) -> &AnimationPlayer {
        &self.player
    }

    pub fn toggle_preview(&mut self) -> PlayState {
        self.player.toggle()
    }

    pub fn stop_preview(&mut self) {
        self.player.stop();
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.player.tick()
    }

    pub fn declaration(&self) -> StyleDeclaration {
        debug!(style = ?self.style, "video frame resolved");
        resolve(self.style, &self.params)
    }

    pub fn preview(&self) -> VideoPreview {
        let sample = self.player.current_sample();
        VideoPreview {
            declaration: self.declaration(),
            sample,
            transform: sample.transform_css(),
            state: self.player.state(),
            progress_bar_percent: self.player.progress_bar_percent(),
        }
    }

    pub fn frame_export_plan(&self, epoch_ms: u64) -> ExportPlan {
        ExportPlan::new(AssetKind::VideoFrame, epoch_ms)
    }

    pub fn sequence_export_plan(&self, epoch_ms: u64) -> ExportPlan {
        ExportPlan::video_sequence(epoch_ms)
    }
}

impl Default for VideoGenerator {
    fn default() -> Self {
        VideoGenerator::new(
            VideoStyle::default(),
            VideoParams::default(),
            AnimationKind::default(),
            &ComposerConfig::default(),
        )
    }
}

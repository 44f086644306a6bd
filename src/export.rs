// Export planning and the contract with the page's rasterizer and download trigger.
// Rasterization itself happens outside the engine; this module decides geometry, scale, and filename.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ComposerError;
use crate::registry::{BUSINESS_CARD, VIDEO_FRAME};
use crate::types::{HexColor, LogoStyle, PixelSize, Platform};

/// Shown when a "video" export is requested: only one frame is produced.
pub const SEQUENCE_NOTICE: &str = "سيتم تحميل إطار واحد. يمكنك استخدام برنامج تحرير فيديو مثل CapCut أو Adobe Premiere لإنشاء فيديو متحرك من عدة إطارات.";

/// Asset being exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "variant", rename_all = "snake_case")]
pub enum AssetKind {
    SocialDesign(Platform),
    Logo(LogoStyle),
    BusinessCard,
    VideoFrame,
}

impl AssetKind {
    /// Filename prefix before the timestamp.
    pub fn file_prefix(&self) -> String {
        match self {
            AssetKind::SocialDesign(platform) => format!("{}-design", platform.key()),
            AssetKind::Logo(_) => "logo".to_string(),
            AssetKind::BusinessCard => "business-card".to_string(),
            AssetKind::VideoFrame => "video-frame".to_string(),
        }
    }

    /// Fixed capture geometry. Logos are captured at their natural size.
    pub fn size(&self) -> Option<PixelSize> {
        match self {
            AssetKind::SocialDesign(platform) => Some(platform.target().size),
            AssetKind::Logo(_) => None,
            AssetKind::BusinessCard => Some(BUSINESS_CARD.size),
            AssetKind::VideoFrame => Some(VIDEO_FRAME.size),
        }
    }

    /// Device-pixel multiplier used for capture.
    pub fn scale(&self) -> u32 {
        match self {
            AssetKind::SocialDesign(_) | AssetKind::VideoFrame => 2,
            AssetKind::Logo(_) | AssetKind::BusinessCard => 3,
        }
    }

    /// Backdrop painted behind the capture; `None` keeps transparency.
    pub fn background(&self) -> Option<HexColor> {
        match self {
            AssetKind::SocialDesign(_) | AssetKind::VideoFrame => None,
            AssetKind::Logo(style) => style.preset().export_background.map(HexColor::from),
            AssetKind::BusinessCard => Some(HexColor::from("#ffffff")),
        }
    }
}

/// `<prefix>-<epoch_ms>.png`
pub fn export_filename(prefix: &str, epoch_ms: u64) -> String {
    format!("{}-{}.png", prefix, epoch_ms)
}

/// Everything the page needs to capture and save one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportPlan {
    pub asset: AssetKind,
    pub size: Option<PixelSize>,
    pub scale: u32,
    pub background: Option<HexColor>,
    pub filename: String,
    pub notice: Option<&'static str>,
}

impl ExportPlan {
    pub fn new(asset: AssetKind, epoch_ms: u64) -> Self {
        ExportPlan {
            asset,
            size: asset.size(),
            scale: asset.scale(),
            background: asset.background(),
            filename: export_filename(&asset.file_prefix(), epoch_ms),
            notice: None,
        }
    }

    /// "Video" export: a single frame plus the notice pointing at external editors.
    pub fn video_sequence(epoch_ms: u64) -> Self {
        ExportPlan {
            notice: Some(SEQUENCE_NOTICE),
            ..ExportPlan::new(AssetKind::VideoFrame, epoch_ms)
        }
    }

    /// Pixel size of the produced image, when the capture geometry is fixed.
    pub fn output_size(&self) -> Option<PixelSize> {
        self.size
            .map(|s| PixelSize::new(s.width * self.scale, s.height * self.scale))
    }
}

/// Encoded image returned by the rasterizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    pub fn png(bytes: Vec<u8>) -> Self {
        ImagePayload {
            mime_type: "image/png",
            bytes,
        }
    }
}

/// Captures a mounted visual tree into an image.
pub trait Rasterizer {
    type Target: ?Sized;

    fn rasterize(&mut self, target: &Self::Target, plan: &ExportPlan)
        -> Result<ImagePayload, ComposerError>;
}

/// Hands a finished image to the user (a browser download in practice).
pub trait FileSink {
    fn save(&mut self, payload: ImagePayload, filename: &str) -> Result<(), ComposerError>;
}

/// What an export request amounted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExportOutcome {
    Saved { filename: String },
    /// The visual tree was not mounted; nothing was produced.
    TargetNotReady,
}

/// Drives a rasterizer and a sink for export plans.
pub struct Exporter<R, S> {
    rasterizer: R,
    sink: S,
}

impl<R: Rasterizer, S: FileSink> Exporter<R, S> {
    pub fn new(rasterizer: R, sink: S) -> Self {
        Exporter { rasterizer, sink }
    }

    /// Capture `target` and save it under the plan's filename.
    /// A missing target yields `TargetNotReady` instead of an error.
    pub fn export(
        &mut self,
        target: Option<&R::Target>,
        plan: &ExportPlan,
    ) -> Result<ExportOutcome, ComposerError> {
        let Some(target) = target else {
            warn!(filename = %plan.filename, "export skipped: render target not mounted");
            return Ok(ExportOutcome::TargetNotReady);
        };

        let payload = self.rasterizer.rasterize(target, plan)?;
        debug!(filename = %plan.filename, bytes = payload.bytes.len(), "export rasterized");
        self.sink.save(payload, &plan.filename)?;

        Ok(ExportOutcome::Saved {
            filename: plan.filename.clone(),
        })
    }

    pub fn into_parts(self) -> (R, S) {
        (self.rasterizer, self.sink)
    }
}

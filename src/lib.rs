// composer_core: creative asset composer Rust/WASM engine
// Template resolution, preview animation, canned assistant, and export planning live here; JS is plumbing.

mod animation;
mod assistant;
mod error;
mod export;
mod generator;
mod params;
mod registry;
mod resolver;
mod style;
mod types;

use serde::{Deserialize, Serialize};
use tracing::info;
use wasm_bindgen::prelude::*;

pub use animation::{sample, AnimationPlayer, FrameSample, PlayState, TickOutcome};
pub use assistant::{classify, respond, ChatSession, Message, ReplyCategory, ReplyTicket, Role};
pub use error::ComposerError;
pub use export::{
    export_filename, AssetKind, ExportOutcome, ExportPlan, Exporter, FileSink, ImagePayload,
    Rasterizer, SEQUENCE_NOTICE,
};
pub use generator::{DesignGenerator, LogoGenerator, VideoGenerator, VideoPreview};
pub use params::{DesignParams, LogoParams, VideoParams};
pub use registry::{CanvasTarget, BUSINESS_CARD, VIDEO_FRAME};
pub use resolver::{is_centered, is_two_color_gradient, resolve, BusinessCard, Resolve};
pub use style::*;
pub use types::*;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    info!("composer engine loaded");
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DesignRequest {
    platform: Platform,
    template: DesignTemplate,
    params: DesignParams,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LogoRequest {
    style: LogoStyle,
    params: LogoParams,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct VideoRequest {
    style: VideoStyle,
    animation: Option<AnimationKind>,
    params: VideoParams,
}

/// Which asset an export plan is requested for. The current selection of
/// the owning generator fills in platform and style.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ExportRequest {
    Design,
    Logo,
    BusinessCard,
    VideoFrame,
    VideoSequence,
}

#[derive(Serialize)]
struct Resolved<'a> {
    target: Option<&'a CanvasTarget>,
    preview_scale: Option<f32>,
    css: RegionCss,
    declaration: &'a StyleDeclaration,
}

#[derive(Serialize)]
struct TargetEntry {
    key: &'static str,
    #[serde(flatten)]
    target: CanvasTarget,
}

fn parse_request<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T, ComposerError> {
    serde_json::from_str(json).map_err(|e| ComposerError::InvalidRequest(e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ComposerError> {
    Ok(serde_json::to_string(value)?)
}

fn js_err(err: ComposerError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn resolved_json(
    declaration: &StyleDeclaration,
    target: Option<&CanvasTarget>,
    preview_scale: Option<f32>,
) -> Result<String, ComposerError> {
    to_json(&Resolved {
        target,
        preview_scale,
        css: declaration.css(),
        declaration,
    })
}

/// Main composer interface exposed to JavaScript.
/// Batch interface: each call takes and returns one JSON document.
#[wasm_bindgen]
pub struct Composer {
    config: ComposerConfig,
    design: DesignGenerator,
    logo: LogoGenerator,
    video: VideoGenerator,
    chat: ChatSession,
}

impl Composer {
    fn from_config(config: ComposerConfig) -> Composer {
        Composer {
            design: DesignGenerator::default(),
            logo: LogoGenerator::default(),
            video: VideoGenerator::new(
                VideoStyle::default(),
                VideoParams::default(),
                AnimationKind::default(),
                &config,
            ),
            chat: ChatSession::new(config.reply_delay_ms),
            config,
        }
    }

    fn apply_design(&mut self, request_json: &str) -> Result<String, ComposerError> {
        let request: DesignRequest = parse_request(request_json)?;
        self.design.select_platform(request.platform);
        self.design.select_template(request.template);
        self.design.set_params(request.params);

        let target = self.design.target();
        resolved_json(
            &self.design.declaration(),
            Some(&target),
            Some(self.config.design_preview_scale),
        )
    }

    fn apply_logo(&mut self, request_json: &str) -> Result<String, ComposerError> {
        let request: LogoRequest = parse_request(request_json)?;
        self.logo.select_style(request.style);
        self.logo.set_params(request.params);
        resolved_json(&self.logo.declaration(), None, None)
    }

    fn apply_business_card(&mut self, params_json: &str) -> Result<String, ComposerError> {
        let params: LogoParams = parse_request(params_json)?;
        self.logo.set_params(params);
        resolved_json(
            &self.logo.business_card(),
            Some(&BUSINESS_CARD),
            Some(self.config.card_preview_scale),
        )
    }

    fn apply_video(&mut self, request_json: &str) -> Result<String, ComposerError> {
        let request: VideoRequest = parse_request(request_json)?;
        self.video.select_style(request.style);
        if let Some(kind) = request.animation {
            self.video.select_animation(kind);
        }
        self.video.set_params(request.params);
        resolved_json(
            &self.video.declaration(),
            Some(&VIDEO_FRAME),
            Some(self.config.video_preview_scale),
        )
    }

    fn deliver_reply(&mut self, ticket_json: &str) -> Result<String, ComposerError> {
        let ticket: ReplyTicket = parse_request(ticket_json)?;
        let message = self.chat.deliver(ticket).cloned();
        to_json(&message)
    }

    fn plan_for(&self, kind: &str, epoch_ms: u64) -> Result<ExportPlan, ComposerError> {
        let request: ExportRequest =
            serde_json::from_value(serde_json::Value::String(kind.to_string()))
                .map_err(|e| ComposerError::InvalidRequest(e.to_string()))?;

        Ok(match request {
            ExportRequest::Design => self.design.export_plan(epoch_ms),
            ExportRequest::Logo => self.logo.logo_export_plan(epoch_ms),
            ExportRequest::BusinessCard => self.logo.card_export_plan(epoch_ms),
            ExportRequest::VideoFrame => self.video.frame_export_plan(epoch_ms),
            ExportRequest::VideoSequence => self.video.sequence_export_plan(epoch_ms),
        })
    }
}

#[wasm_bindgen]
impl Composer {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<Composer, JsValue> {
        let config: ComposerConfig = serde_json::from_str(config_json)
            .map_err(|e| js_err(ComposerError::InvalidConfig(e.to_string())))?;
        Ok(Composer::from_config(config))
    }

    /// Social design: `{ platform, template, params }` in, declaration + CSS out.
    pub fn resolve_design(&mut self, request_json: &str) -> Result<String, JsValue> {
        self.apply_design(request_json).map_err(js_err)
    }

    /// Logo: `{ style, params }`.
    pub fn resolve_logo(&mut self, request_json: &str) -> Result<String, JsValue> {
        self.apply_logo(request_json).map_err(js_err)
    }

    /// Business card from the logo parameter model.
    pub fn resolve_business_card(&mut self, params_json: &str) -> Result<String, JsValue> {
        self.apply_business_card(params_json).map_err(js_err)
    }

    /// Video frame: `{ style, animation?, params }`.
    pub fn resolve_video(&mut self, request_json: &str) -> Result<String, JsValue> {
        self.apply_video(request_json).map_err(js_err)
    }

    /// Pure sample of `kind` ("fade", "slide", "zoom", "bounce") at `progress`.
    pub fn sample(&self, progress: u8, kind: &str) -> Result<String, JsValue> {
        let kind: AnimationKind =
            serde_json::from_value(serde_json::Value::String(kind.to_string()))
                .map_err(|e| js_err(ComposerError::InvalidRequest(e.to_string())))?;
        to_json(&sample(Progress::new(progress), kind)).map_err(js_err)
    }

    /// Play/pause the video preview. Returns whether it is now running.
    pub fn toggle_preview(&mut self) -> bool {
        self.video.toggle_preview() == PlayState::Running
    }

    /// Advance the preview by one tick and return the frame to render.
    pub fn tick(&mut self) -> Result<String, JsValue> {
        self.video.tick();
        to_json(&self.video.preview()).map_err(js_err)
    }

    /// Timer period the page should drive `tick` with.
    pub fn tick_interval_ms(&self) -> u32 {
        self.video.player().tick_interval_ms()
    }

    /// Canned reply for `text`, without touching the transcript.
    pub fn respond(&self, text: &str) -> String {
        respond(text).to_string()
    }

    /// Record a user message. Returns the reply ticket as JSON, or `null` for blank input.
    pub fn chat_send(&mut self, text: &str) -> Result<String, JsValue> {
        to_json(&self.chat.send(text)).map_err(js_err)
    }

    /// Deliver a due reply for the ticket JSON returned by `chat_send`.
    /// Returns the message, or `null` if the ticket is stale.
    pub fn chat_deliver(&mut self, ticket_json: &str) -> Result<String, JsValue> {
        self.deliver_reply(ticket_json).map_err(js_err)
    }

    pub fn chat_cancel(&mut self, ticket_id: u64) -> bool {
        self.chat.cancel(ticket_id)
    }

    /// Call when the assistant panel goes away. Pending replies are dropped;
    /// the transcript is kept and chatting resumes with the next `chat_send`.
    pub fn chat_close(&mut self) {
        self.chat.close();
    }

    pub fn chat_is_typing(&self) -> bool {
        self.chat.is_typing()
    }

    pub fn chat_transcript(&self) -> Result<String, JsValue> {
        to_json(&self.chat.messages()).map_err(js_err)
    }

    /// Export plan for `kind` ("design", "logo", "business_card", "video_frame",
    /// "video_sequence") at the given timestamp.
    pub fn export_plan(&self, kind: &str, epoch_ms: u64) -> Result<String, JsValue> {
        let plan = self.plan_for(kind, epoch_ms).map_err(js_err)?;
        to_json(&plan).map_err(js_err)
    }

    /// Same as `export_plan`, stamped with the browser clock.
    pub fn export_plan_now(&self, kind: &str) -> Result<String, JsValue> {
        self.export_plan(kind, js_sys::Date::now() as u64)
    }

    /// All fixed output geometries, keyed by platform or asset.
    pub fn canvas_targets(&self) -> Result<String, JsValue> {
        let mut entries: Vec<TargetEntry> = Platform::ALL
            .iter()
            .map(|p| TargetEntry {
                key: p.key(),
                target: p.target(),
            })
            .collect();
        entries.push(TargetEntry {
            key: "business_card",
            target: BUSINESS_CARD,
        });
        entries.push(TargetEntry {
            key: "video_frame",
            target: VIDEO_FRAME,
        });
        to_json(&entries).map_err(js_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer() -> Composer {
        Composer::from_config(ComposerConfig::default())
    }

    #[test]
    fn composer_creation_works() {
        assert!(Composer::new("{}").is_ok());
        let composer = Composer::new(r#"{"tick_interval_ms":16}"#).unwrap();
        assert_eq!(composer.tick_interval_ms(), 16);
    }

    #[test]
    fn resolve_design_reports_target_and_css() {
        let mut composer = composer();
        let out = composer
            .apply_design(r#"{"platform":"twitter","template":"gradient","params":{"title":"T"}}"#)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["target"]["size"]["width"], 1200);
        assert_eq!(value["target"]["size"]["height"], 675);
        assert_eq!(value["declaration"]["heading"]["text"], "T");
        assert!(value["css"]["container"].as_str().unwrap().contains("gradient"));
    }

    #[test]
    fn unknown_request_keys_are_rejected() {
        let mut composer = composer();
        let err = composer.apply_design(r#"{"layout":"grid"}"#).unwrap_err();
        assert!(matches!(err, ComposerError::InvalidRequest(_)));
    }

    #[test]
    fn business_card_uses_logo_params() {
        let mut composer = composer();
        let out = composer
            .apply_business_card(r#"{"company_name":"Acme"}"#)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["declaration"]["heading"]["text"], "Acme");
        assert_eq!(value["target"]["size"]["width"], 500);
    }

    #[test]
    fn video_request_switches_animation() {
        let mut composer = composer();
        composer
            .apply_video(r#"{"style":"quote","animation":"slide"}"#)
            .unwrap();
        assert!(composer.toggle_preview());
        let frame: serde_json::Value = serde_json::from_str(&composer.tick().unwrap()).unwrap();
        assert_eq!(frame["sample"]["translate_x_percent"], 99.0);
        assert_eq!(frame["progress_bar_percent"], 1);
    }

    #[test]
    fn sample_binding_parses_kind() {
        let out = composer().sample(100, "bounce").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["scale"], 1.0);
        assert_eq!(value["opacity"], 1.0);
    }

    #[test]
    fn export_plan_follows_current_selection() {
        let mut composer = composer();
        composer
            .apply_design(r#"{"platform":"linkedin"}"#)
            .unwrap();
        let plan = composer.plan_for("design", 12).unwrap();
        assert_eq!(plan.filename, "linkedin-design-12.png");

        let sequence = composer.plan_for("video_sequence", 12).unwrap();
        assert_eq!(sequence.notice, Some(SEQUENCE_NOTICE));
        assert!(composer.plan_for("gif", 12).is_err());
    }

    #[test]
    fn chat_round_trip_through_binding() {
        let mut composer = composer();
        assert_eq!(composer.chat_send("  ").unwrap(), "null");

        let ticket_json = composer.chat_send("ألوان").unwrap();
        let ticket: ReplyTicket = serde_json::from_str(&ticket_json).unwrap();
        assert_eq!(ticket.delay_ms, 1000);
        assert!(composer.chat_is_typing());

        let reply: Message =
            serde_json::from_str(&composer.deliver_reply(&ticket_json).unwrap()).unwrap();
        assert_eq!(reply.content, ReplyCategory::Colors.reply());
    }

    #[test]
    fn chat_survives_panel_remount() {
        let mut composer = composer();
        let first = composer.chat_send("تصميم").unwrap();
        composer.deliver_reply(&first).unwrap();
        let pending = composer.chat_send("فيديو").unwrap();
        composer.chat_close();

        let again = composer.chat_send("help").unwrap();
        assert_ne!(again, "null");
        assert_eq!(composer.deliver_reply(&pending).unwrap(), "null");
        assert_ne!(composer.deliver_reply(&again).unwrap(), "null");

        let transcript: Vec<Message> =
            serde_json::from_str(&composer.chat_transcript().unwrap()).unwrap();
        assert_eq!(transcript.len(), 5);
        assert_eq!(transcript[4].content, ReplyCategory::Help.reply());
    }

    #[test]
    fn malformed_ticket_is_rejected() {
        let err = composer().deliver_reply(r#"{"id":1}"#).unwrap_err();
        assert!(matches!(err, ComposerError::InvalidRequest(_)));
    }

    #[test]
    fn canvas_targets_cover_every_platform() {
        let out = composer().canvas_targets().unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), Platform::ALL.len() + 2);
        assert_eq!(entries[0]["key"], "instagram");
        assert_eq!(entries[0]["label"], "Instagram Post (1:1)");
    }
}

// Preview animation: a pure sampling law plus the Idle/Running progress counter.
// The caller drives `tick()` on a fixed period; ticks never overlap.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{AnimationKind, Progress};

/// Progress at which the fade-in reaches full opacity.
const FADE_IN_SPAN: f32 = 30.0;

/// Interpolated transform for one preview frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSample {
    pub opacity: f32,
    pub scale: f32,
    /// Horizontal offset in percent of the container width.
    pub translate_x_percent: f32,
}

impl FrameSample {
    /// Pose shown while no animation is running.
    pub const REST: FrameSample = FrameSample {
        opacity: 1.0,
        scale: 1.0,
        translate_x_percent: 0.0,
    };

    /// CSS `transform` value for this sample.
    pub fn transform_css(&self) -> String {
        format!(
            "scale({}) translateX({}%)",
            self.scale, self.translate_x_percent
        )
    }
}

/// Sample the interpolation law of `kind` at `progress`.
///
/// Every kind fades in over the first 30 units. Zoom and bounce grow from half
/// size to full size across the whole run; slide enters from one container
/// width to the side.
pub fn sample(progress: Progress, kind: AnimationKind) -> FrameSample {
    let p = progress.as_f32();
    let opacity = (p / FADE_IN_SPAN).clamp(0.0, 1.0);

    match kind {
        AnimationKind::Fade => FrameSample {
            opacity,
            scale: 1.0,
            translate_x_percent: 0.0,
        },
        // Bounce shares the zoom ramp; there is no overshoot curve.
        AnimationKind::Zoom | AnimationKind::Bounce => FrameSample {
            opacity,
            scale: 0.5 + (p / 100.0) * 0.5,
            translate_x_percent: 0.0,
        },
        AnimationKind::Slide => FrameSample {
            opacity,
            scale: 1.0,
            translate_x_percent: 100.0 - p,
        },
    }
}

/// Run state of the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayState {
    Idle,
    Running,
}

/// Result of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Progress moved forward to the contained value.
    Advanced(Progress),
    /// The run hit the ceiling; the player is idle again with progress 0.
    Finished,
    /// Tick arrived while idle; nothing changed.
    Ignored,
}

/// Owns the animation progress counter for one video generator.
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    state: PlayState,
    progress: Progress,
    kind: AnimationKind,
    tick_interval_ms: u32,
}

impl AnimationPlayer {
    pub fn new(kind: AnimationKind, tick_interval_ms: u32) -> Self {
        AnimationPlayer {
            state: PlayState::Idle,
            progress: Progress::zero(),
            kind,
            tick_interval_ms,
        }
    }

    /// (Re)start from progress 0.
    pub fn start(&mut self) {
        self.state = PlayState::Running;
        self.progress = Progress::zero();
        debug!(kind = ?self.kind, "preview animation started");
    }

    pub fn stop(&mut self) {
        if self.state == PlayState::Running {
            debug!(progress = self.progress.as_u8(), "preview animation stopped");
        }
        self.state = PlayState::Idle;
    }

    /// Play/pause button: starts when idle, stops when running.
    pub fn toggle(&mut self) -> PlayState {
        match self.state {
            PlayState::Idle => self.start(),
            PlayState::Running => self.stop(),
        }
        self.state
    }

    /// Advance by one unit. The tick that finds progress at the ceiling ends the run.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != PlayState::Running {
            return TickOutcome::Ignored;
        }
        if self.progress.is_complete() {
            self.state = PlayState::Idle;
            self.progress = Progress::zero();
            debug!("preview animation finished");
            return TickOutcome::Finished;
        }
        self.progress.advance();
        TickOutcome::Advanced(self.progress)
    }

    /// Switch interpolation kind; run state is unaffected.
    pub fn set_kind(&mut self, kind: AnimationKind) {
        self.kind = kind;
    }

    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    /// Sample to render now: the interpolated pose while running, the rest pose otherwise.
    pub fn current_sample(&self) -> FrameSample {
        match self.state {
            PlayState::Running => sample(self.progress, self.kind),
            PlayState::Idle => FrameSample::REST,
        }
    }

    /// Width of the progress bar in percent, shown only while running.
    pub fn progress_bar_percent(&self) -> Option<u8> {
        self.is_running().then(|| self.progress.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundaries() {
        for kind in AnimationKind::ALL {
            let start = sample(Progress::zero(), kind);
            assert_eq!(start.opacity, 0.0);

            let end = sample(Progress::new(100), kind);
            assert_eq!(end.opacity, 1.0);
            assert_eq!(end.scale, 1.0);
            assert_eq!(end.translate_x_percent, 0.0);
        }
    }

    #[test]
    fn out_of_range_json_progress_samples_as_finished() {
        let p: Progress = serde_json::from_str("250").unwrap();
        let s = sample(p, AnimationKind::Zoom);
        assert_eq!(s.scale, 1.0);
        assert_eq!(s, sample(Progress::new(100), AnimationKind::Zoom));
    }

    #[test]
    fn zoom_starts_at_half_scale() {
        assert_eq!(sample(Progress::zero(), AnimationKind::Zoom).scale, 0.5);
        assert_eq!(sample(Progress::new(50), AnimationKind::Zoom).scale, 0.75);
    }

    #[test]
    fn slide_enters_from_full_width() {
        let s = sample(Progress::zero(), AnimationKind::Slide);
        assert_eq!(s.translate_x_percent, 100.0);
        assert_eq!(s.scale, 1.0);
        assert_eq!(
            sample(Progress::new(40), AnimationKind::Slide).translate_x_percent,
            60.0
        );
    }

    #[test]
    fn bounce_follows_zoom_curve() {
        for p in [0u8, 10, 45, 99, 100] {
            assert_eq!(
                sample(Progress::new(p), AnimationKind::Bounce),
                sample(Progress::new(p), AnimationKind::Zoom)
            );
        }
    }

    #[test]
    fn run_reaches_ceiling_then_resets() {
        let mut player = AnimationPlayer::new(AnimationKind::Fade, 30);
        player.start();

        for expected in 1..=100u8 {
            assert_eq!(player.tick(), TickOutcome::Advanced(Progress::new(expected)));
        }
        assert_eq!(player.current_sample().opacity, 1.0);
        assert_eq!(player.progress_bar_percent(), Some(100));

        assert_eq!(player.tick(), TickOutcome::Finished);
        assert_eq!(player.state(), PlayState::Idle);
        assert_eq!(player.progress(), Progress::zero());
        assert_eq!(player.tick(), TickOutcome::Ignored);
        assert_eq!(player.current_sample(), FrameSample::REST);
    }

    #[test]
    fn toggle_restarts_from_zero() {
        let mut player = AnimationPlayer::new(AnimationKind::Slide, 30);
        assert_eq!(player.toggle(), PlayState::Running);
        player.tick();
        player.tick();
        assert_eq!(player.toggle(), PlayState::Idle);
        assert_eq!(player.progress_bar_percent(), None);

        assert_eq!(player.toggle(), PlayState::Running);
        assert_eq!(player.progress(), Progress::zero());
        assert_eq!(player.current_sample().translate_x_percent, 100.0);
    }

    #[test]
    fn kind_switch_keeps_run_state() {
        let mut player = AnimationPlayer::new(AnimationKind::Fade, 30);
        player.start();
        player.tick();
        player.set_kind(AnimationKind::Zoom);
        assert!(player.is_running());
        assert_eq!(player.progress(), Progress::new(1));
        assert_eq!(player.kind(), AnimationKind::Zoom);
    }

    #[test]
    fn transform_css_format() {
        assert_eq!(FrameSample::REST.transform_css(), "scale(1) translateX(0%)");
    }

    fn kind_strategy() -> impl Strategy<Value = AnimationKind> {
        (0usize..4).prop_map(|i| AnimationKind::ALL[i])
    }

    proptest! {
        #[test]
        fn sampling_is_deterministic(p in 0u8..=100, kind in kind_strategy()) {
            prop_assert_eq!(sample(Progress::new(p), kind), sample(Progress::new(p), kind));
        }

        #[test]
        fn opacity_ramps_then_holds(p in 0u8..100, kind in kind_strategy()) {
            let here = sample(Progress::new(p), kind).opacity;
            let next = sample(Progress::new(p + 1), kind).opacity;
            prop_assert!(next >= here);
            if p > 30 {
                prop_assert_eq!(here, 1.0);
            }
            prop_assert!((0.0..=1.0).contains(&here));
        }

        #[test]
        fn scale_never_exceeds_one(p in 0u8..=100, kind in kind_strategy()) {
            let s = sample(Progress::new(p), kind);
            prop_assert!(s.scale >= 0.5 && s.scale <= 1.0);
            prop_assert!(s.translate_x_percent >= 0.0 && s.translate_x_percent <= 100.0);
        }
    }
}

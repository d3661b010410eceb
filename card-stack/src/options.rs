use std::sync::Arc;

use crate::HighlightStyle;
use crate::stack::CardStack;

/// A callback fired when the stack's state changes and the host should re-render.
///
/// The second argument is `is_interacting`.
pub type OnChangeCallback = Arc<dyn Fn(&CardStack, bool) + Send + Sync>;

/// A callback receiving every committed index.
///
/// This is how the stack writes back to an externally bound index value.
pub type OnCommitCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// A fire-and-forget selection feedback signal (e.g. a haptic tick).
///
/// Invoked once per drag sample with the continuous index computed for that sample. The stack
/// does not rate-limit it; delivery cadence is whatever the host's gesture recognizer provides.
pub type OnFeedbackCallback = Arc<dyn Fn(f32) + Send + Sync>;

/// Configuration for [`crate::CardStack`].
///
/// This type is cheap to clone: callbacks are stored in `Arc`s. Numeric parameters are not
/// validated.
pub struct CardStackOptions {
    pub count: usize,
    /// Starting index, read once by `CardStack::new` and normalized into `0..count`.
    pub initial_index: isize,
    /// Circular index arithmetic instead of clamping at the ends.
    pub wrap: bool,
    pub highlight: HighlightStyle,

    /// Pixels of horizontal drag that move the continuous index by one card.
    pub drag_scale: f32,
    /// End-translation magnitude (pixels) above which a release advances one card.
    pub commit_threshold: f32,

    /// Horizontal distance (pixels) between neighbouring cards at rest.
    pub card_padding: f32,
    /// Amplitude of the swing-out multiplier applied while a card leaves the focal slot.
    pub swing_amplitude: f32,
    /// Swing-out applies for relative positions in `(0, swing_cutoff)`.
    pub swing_cutoff: f32,
    /// Scale lost per card of distance from the focal slot.
    pub scale_step: f32,
    /// Degrees of tilt per card of distance from the focal slot.
    pub rotation_step_deg: f32,

    /// Grace period after a release before the interaction flag clears.
    ///
    /// This only gates highlight rendering; tune it to roughly match the settle animation.
    pub interaction_clear_delay_ms: u64,

    pub on_change: Option<OnChangeCallback>,
    pub on_commit: Option<OnCommitCallback>,
    pub on_feedback: Option<OnFeedbackCallback>,
}

impl Clone for CardStackOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            initial_index: self.initial_index,
            wrap: self.wrap,
            highlight: self.highlight,
            drag_scale: self.drag_scale,
            commit_threshold: self.commit_threshold,
            card_padding: self.card_padding,
            swing_amplitude: self.swing_amplitude,
            swing_cutoff: self.swing_cutoff,
            scale_step: self.scale_step,
            rotation_step_deg: self.rotation_step_deg,
            interaction_clear_delay_ms: self.interaction_clear_delay_ms,
            on_change: self.on_change.clone(),
            on_commit: self.on_commit.clone(),
            on_feedback: self.on_feedback.clone(),
        }
    }
}

impl CardStackOptions {
    pub const DEFAULT_DRAG_SCALE: f32 = 300.0;
    pub const DEFAULT_COMMIT_THRESHOLD: f32 = 200.0;
    pub const DEFAULT_CARD_PADDING: f32 = 35.0;
    pub const DEFAULT_INTERACTION_CLEAR_DELAY_MS: u64 = 500;

    /// Creates options for a stack of `count` cards starting at index 0.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            initial_index: 0,
            wrap: false,
            highlight: HighlightStyle::default(),
            drag_scale: Self::DEFAULT_DRAG_SCALE,
            commit_threshold: Self::DEFAULT_COMMIT_THRESHOLD,
            card_padding: Self::DEFAULT_CARD_PADDING,
            swing_amplitude: 15.0,
            swing_cutoff: 0.99,
            scale_step: 0.1,
            rotation_step_deg: 2.0,
            interaction_clear_delay_ms: Self::DEFAULT_INTERACTION_CLEAR_DELAY_MS,
            on_change: None,
            on_commit: None,
            on_feedback: None,
        }
    }

    pub fn with_initial_index(mut self, initial_index: isize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_highlight(mut self, highlight: HighlightStyle) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn with_drag_scale(mut self, drag_scale: f32) -> Self {
        self.drag_scale = drag_scale;
        self
    }

    pub fn with_commit_threshold(mut self, commit_threshold: f32) -> Self {
        self.commit_threshold = commit_threshold;
        self
    }

    pub fn with_card_padding(mut self, card_padding: f32) -> Self {
        self.card_padding = card_padding;
        self
    }

    pub fn with_swing(mut self, amplitude: f32, cutoff: f32) -> Self {
        self.swing_amplitude = amplitude;
        self.swing_cutoff = cutoff;
        self
    }

    pub fn with_scale_step(mut self, scale_step: f32) -> Self {
        self.scale_step = scale_step;
        self
    }

    pub fn with_rotation_step_deg(mut self, rotation_step_deg: f32) -> Self {
        self.rotation_step_deg = rotation_step_deg;
        self
    }

    pub fn with_interaction_clear_delay_ms(mut self, delay_ms: u64) -> Self {
        self.interaction_clear_delay_ms = delay_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&CardStack, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_commit(
        mut self,
        on_commit: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_commit = on_commit.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_feedback(
        mut self,
        on_feedback: Option<impl Fn(f32) + Send + Sync + 'static>,
    ) -> Self {
        self.on_feedback = on_feedback.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CardStackOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CardStackOptions")
            .field("count", &self.count)
            .field("initial_index", &self.initial_index)
            .field("wrap", &self.wrap)
            .field("highlight", &self.highlight)
            .field("drag_scale", &self.drag_scale)
            .field("commit_threshold", &self.commit_threshold)
            .field("card_padding", &self.card_padding)
            .field("swing_amplitude", &self.swing_amplitude)
            .field("swing_cutoff", &self.swing_cutoff)
            .field("scale_step", &self.scale_step)
            .field("rotation_step_deg", &self.rotation_step_deg)
            .field(
                "interaction_clear_delay_ms",
                &self.interaction_clear_delay_ms,
            )
            .finish_non_exhaustive()
    }
}

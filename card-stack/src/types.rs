/// An RGBA color with channels in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::GRAY
    }
}

/// Styling for the outline drawn around the focused card while the stack is at rest.
///
/// Values are passed through to the renderer as-is; nothing here is validated.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightStyle {
    pub enabled: bool,
    pub corner_radius: f32,
    pub color: Color,
    pub stroke_width: f32,
    pub blur_radius: f32,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            enabled: false,
            corner_radius: 10.0,
            color: Color::GRAY,
            stroke_width: 4.0,
            blur_radius: 3.0,
        }
    }
}

impl HighlightStyle {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }
}

/// What a drag release asks the stack to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeIntent {
    /// Dragged right past the threshold: go to the previous card.
    Backward,
    /// Dragged left past the threshold: go to the next card.
    Forward,
    /// Below the threshold: settle on the nearest card.
    Settle,
}

impl SwipeIntent {
    pub fn from_translation(translation_x: f32, threshold: f32) -> Self {
        if translation_x.abs() > threshold {
            if translation_x > 0.0 {
                Self::Backward
            } else {
                Self::Forward
            }
        } else {
            Self::Settle
        }
    }
}

/// Render attributes for a single card.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardTransform {
    pub index: usize,
    /// `current - index`; `0.0` means the card is the focal (topmost) card.
    pub relative_position: f32,
    pub z_index: i64,
    /// Horizontal offset in pixels.
    pub offset_x: f32,
    pub scale: f32,
    pub rotation_deg: f32,
    pub highlighted: bool,
}

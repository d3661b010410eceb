//! Per-card transform math.
//!
//! Everything here is a pure function of the card index, the continuous current index, and the
//! item count (plus tunables from [`CardStackOptions`]). `p = current - index` is the signed
//! distance of a card from the focal slot: positive for cards already passed, negative for cards
//! still ahead.

use core::f32::consts::PI;

use crate::index::{nearest_index, normalize_index};
use crate::{CardStackOptions, CardTransform};

pub fn relative_position(index: usize, current: f32) -> f32 {
    current - index as f32
}

/// Stacking order for a card.
///
/// Cards whose midpoint has been passed (`index + 0.5 < current`) drop behind every card still
/// ahead; on each side, the card nearest the focal slot is on top.
pub fn z_index(index: usize, current: f32, count: usize) -> i64 {
    let depth = count as i64 - index as i64;
    if (index as f32) + 0.5 < current {
        -depth
    } else {
        depth
    }
}

/// Horizontal offset in pixels.
///
/// The base offset spreads cards `card_padding` apart. While a card is leaving the focal slot
/// (`0 < p < swing_cutoff`) and is not the last card, the offset is multiplied by
/// `sin(pi * p) * swing_amplitude`, which is zero at both ends of the transition.
pub fn offset_x(index: usize, current: f32, count: usize, options: &CardStackOptions) -> f32 {
    let p = relative_position(index, current);
    let base = (index as f32 - current) * options.card_padding;
    let is_last = index + 1 >= count;
    if p > 0.0 && p < options.swing_cutoff && !is_last {
        base * (PI * p).sin() * options.swing_amplitude
    } else {
        base
    }
}

/// `1 - scale_step * |p|`. Not clamped; far-away cards can reach zero or below.
pub fn scale(p: f32, scale_step: f32) -> f32 {
    1.0 - scale_step * p.abs()
}

/// `-p * rotation_step_deg`, in degrees.
pub fn rotation_deg(p: f32, rotation_step_deg: f32) -> f32 {
    -p * rotation_step_deg
}

/// Whether `index` gets the highlight outline.
///
/// The nearest card is normalized the same way as a commit (wrapped or clamped), so an animated
/// index past either end still lights the card it will settle on.
pub fn is_highlighted(
    index: usize,
    current: f32,
    is_interacting: bool,
    options: &CardStackOptions,
) -> bool {
    options.highlight.enabled
        && !is_interacting
        && options.count > 0
        && index == normalize_index(nearest_index(current), options.count, options.wrap)
}

/// Computes every render attribute for the card at `index`.
pub fn card_transform(
    index: usize,
    current: f32,
    is_interacting: bool,
    options: &CardStackOptions,
) -> CardTransform {
    let count = options.count;
    let p = relative_position(index, current);
    CardTransform {
        index,
        relative_position: p,
        z_index: z_index(index, current, count),
        offset_x: offset_x(index, current, count, options),
        scale: scale(p, options.scale_step),
        rotation_deg: rotation_deg(p, options.rotation_step_deg),
        highlighted: is_highlighted(index, current, is_interacting, options),
    }
}

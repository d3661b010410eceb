//! A headless, gesture-driven card stack ("swipeable deck").
//!
//! For adapter-level utilities (item ownership, bound indexes, spring settling), see the
//! `card-stack-adapter` crate.
//!
//! This crate focuses on the two pieces of a card stack that carry real logic: the index/gesture
//! state machine (continuous index while dragging, threshold-based commit on release, clamped or
//! wrapping index arithmetic) and the per-card transform math (offset, scale, rotation, stacking
//! order, highlight).
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - drag samples (horizontal translation) and the release translation
//! - a clock (`now_ms`) for the post-release interaction timer
//! - a renderer that applies each [`CardTransform`]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod index;
mod options;
mod stack;
mod state;
mod types;

pub mod transform;


pub use index::{index_to_target, nearest_index, normalize_index};
pub use options::{CardStackOptions, OnChangeCallback, OnCommitCallback, OnFeedbackCallback};
pub use stack::CardStack;
pub use state::IndexState;
pub use types::{CardTransform, Color, HighlightStyle, SwipeIntent};

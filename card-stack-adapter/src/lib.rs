//! Adapter utilities for the `card-stack` crate.
//!
//! The `card-stack` crate is UI-agnostic and focuses on the index/gesture state machine and the
//! per-card transform math. This crate provides small, framework-neutral helpers commonly needed
//! by adapters:
//!
//! - Owning the item collection and running the per-item render pass
//! - An externally bound, observable index (`SharedIndex`)
//! - Spring-based settling after a release (optional; adapter-driven via `tick`)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![forbid(unsafe_code)]

mod binding;
mod controller;
mod key;
mod render;
mod spring;

#[cfg(test)]
mod tests;

pub use binding::SharedIndex;
pub use controller::Controller;
pub use key::CardItem;
pub use render::{RenderedCard, render_in_paint_order};
pub use spring::{Spring, SpringConfig};

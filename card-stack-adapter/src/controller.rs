use std::sync::Arc;

use card_stack::{CardStack, CardStackOptions, CardTransform, OnCommitCallback, index_to_target};

use crate::{CardItem, RenderedCard, SharedIndex, Spring, SpringConfig, render_in_paint_order};

/// A framework-neutral controller that owns the item collection and wraps a
/// `card_stack::CardStack`, adding a bound index and spring-driven settling.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_drag_changed` / `on_drag_ended` / `on_pointer_lost` when gesture events occur
/// - `tick(now_ms)` each frame/timer tick (for the settle spring and the interaction timer)
/// - `render(renderer)` to build the cards for the current frame
#[derive(Clone, Debug)]
pub struct Controller<T> {
    stack: CardStack,
    items: Vec<T>,
    binding: Option<SharedIndex>,
    spring: Option<Spring>,
    spring_config: SpringConfig,
    last_tick_ms: Option<u64>,
}

impl<T: CardItem> Controller<T> {
    /// Creates a controller for `items`. `options.count` is overwritten with `items.len()`.
    pub fn new(items: Vec<T>, mut options: CardStackOptions) -> Self {
        options.count = items.len();
        Self {
            stack: CardStack::new(options),
            items,
            binding: None,
            spring: None,
            spring_config: SpringConfig::default(),
            last_tick_ms: None,
        }
    }

    /// Creates a controller whose index is bound to `binding`.
    ///
    /// The starting index is read from `binding` (and written back if it had to be normalized).
    /// Every commit is written to `binding` before any `on_commit` callback in `options` runs.
    pub fn with_binding(
        items: Vec<T>,
        mut options: CardStackOptions,
        binding: SharedIndex,
    ) -> Self {
        let initial = binding.get();
        options.initial_index = index_to_target(initial);

        let chained = options.on_commit.take();
        let on_commit: OnCommitCallback = Arc::new({
            let binding = binding.clone();
            move |index: usize| {
                binding.set(index);
                if let Some(cb) = &chained {
                    cb(index);
                }
            }
        });
        options.on_commit = Some(on_commit);

        let mut c = Self::new(items, options);
        if c.stack.committed_index() != initial {
            binding.set(c.stack.committed_index());
        }
        c.binding = Some(binding);
        c
    }

    pub fn with_spring_config(mut self, config: SpringConfig) -> Self {
        self.spring_config = config;
        self
    }

    pub fn stack(&self) -> &CardStack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut CardStack {
        &mut self.stack
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn binding(&self) -> Option<&SharedIndex> {
        self.binding.as_ref()
    }

    /// The item in the committed slot, if any.
    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.stack.committed_index())
    }

    pub fn is_animating(&self) -> bool {
        self.spring.is_some()
    }

    /// `true` while a drag is in progress, its grace period is running, or the spring is settling.
    pub fn is_in_motion(&self) -> bool {
        self.stack.is_interacting() || self.is_animating()
    }

    pub fn cancel_animation(&mut self) {
        self.spring = None;
    }

    /// The continuous index to lay cards out at: the spring position while settling, otherwise
    /// the stack's own continuous index.
    pub fn displayed_index(&self) -> f32 {
        match &self.spring {
            Some(spring) => spring.position(),
            None => self.stack.current_index(),
        }
    }

    fn animate_from(&mut self, from: f32, now_ms: u64) {
        let to = self.stack.current_index();
        if from == to {
            self.spring = None;
            return;
        }
        if let Some(spring) = self.spring.as_mut() {
            spring.retarget(to);
        } else {
            self.spring = Some(Spring::new(from, to, self.spring_config));
        }
        self.last_tick_ms = Some(now_ms);
    }

    /// Call this for every drag sample. Cancels any running settle animation.
    pub fn on_drag_changed(&mut self, translation_x: f32) {
        self.cancel_animation();
        self.stack.drag_changed(translation_x);
    }

    /// Call this when the drag ends. Starts the settle animation and returns the committed index.
    pub fn on_drag_ended(&mut self, translation_x: f32, now_ms: u64) -> usize {
        let from = self.displayed_index();
        let committed = self.stack.drag_ended(translation_x, now_ms);
        self.animate_from(from, now_ms);
        committed
    }

    /// Call this when the pointer is lost mid-drag (treated as a short release).
    pub fn on_pointer_lost(&mut self, now_ms: u64) -> usize {
        let from = self.displayed_index();
        let committed = self.stack.drag_cancelled(now_ms);
        self.animate_from(from, now_ms);
        committed
    }

    /// Animates to the next card (e.g. from a keyboard or button).
    pub fn select_next(&mut self, now_ms: u64) -> usize {
        let from = self.displayed_index();
        let committed = self.stack.select_next();
        self.animate_from(from, now_ms);
        committed
    }

    pub fn select_previous(&mut self, now_ms: u64) -> usize {
        let from = self.displayed_index();
        let committed = self.stack.select_previous();
        self.animate_from(from, now_ms);
        committed
    }

    /// Adopts a caller-side write to the bound index.
    ///
    /// Returns `true` if the committed index changed.
    pub fn sync_binding(&mut self, now_ms: u64) -> bool {
        let Some(binding) = &self.binding else {
            return false;
        };
        let bound = binding.get();
        if bound == self.stack.committed_index() {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "card_stack_adapter", bound, "sync_binding");

        let from = self.displayed_index();
        let previous = self.stack.committed_index();
        self.stack.set_index(bound);
        let committed = self.stack.committed_index();
        if committed != bound {
            binding.set(committed);
        }
        self.animate_from(from, now_ms);
        committed != previous
    }

    /// Replaces the item collection. Cancels any running settle animation.
    pub fn set_items(&mut self, items: Vec<T>) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "card_stack_adapter",
            old = self.items.len(),
            new = items.len(),
            "set_items"
        );
        self.cancel_animation();
        self.stack.set_count(items.len());
        self.items = items;
    }

    /// Advances the controller.
    ///
    /// - Runs the stack's interaction-clear timer.
    /// - If a settle animation is active, steps it and returns the displayed index.
    /// - Otherwise returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        self.stack.update_interaction(now_ms);

        let spring = self.spring.as_mut()?;
        let dt = now_ms.saturating_sub(self.last_tick_ms.unwrap_or(now_ms));
        self.last_tick_ms = Some(now_ms);
        let position = spring.step(dt);
        if spring.is_settled() {
            self.spring = None;
        }
        Some(position)
    }

    /// Builds the cards for the current frame, back to front.
    ///
    /// `renderer` is invoked once per item with the item and its computed transform. No card is
    /// highlighted while the stack is interacting or the settle spring is running.
    pub fn render<N>(
        &self,
        renderer: impl FnMut(&T, &CardTransform) -> N,
    ) -> Vec<RenderedCard<T::Id, N>> {
        render_in_paint_order(
            &self.stack,
            &self.items,
            self.displayed_index(),
            self.is_in_motion(),
            renderer,
        )
    }
}

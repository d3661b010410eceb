use core::cell::Cell;

use crate::index::{index_to_target, nearest_index, normalize_index};
use crate::transform;
use crate::{CardStackOptions, CardTransform, IndexState, SwipeIntent};

/// A headless, gesture-driven card stack.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or items, only their count.
/// - Your adapter drives it with drag samples, releases, and timer ticks.
/// - Rendering is exposed via per-card transforms (`card_transform`, `for_each_card`).
///
/// For item ownership, bound indexes, and the settle animation, see the `card-stack-adapter`
/// crate.
#[derive(Clone, Debug)]
pub struct CardStack {
    options: CardStackOptions,
    current: f32,
    committed: usize,
    is_interacting: bool,
    interaction_deadline_ms: Option<u64>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl CardStack {
    /// Creates a new card stack, normalizing `options.initial_index` into `0..count`.
    pub fn new(options: CardStackOptions) -> Self {
        let committed = normalize_index(options.initial_index, options.count, options.wrap);
        csdebug!(
            count = options.count,
            wrap = options.wrap,
            initial_index = committed,
            "CardStack::new"
        );
        Self {
            current: committed as f32,
            committed,
            is_interacting: false,
            interaction_deadline_ms: None,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &CardStackOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn is_wrapping(&self) -> bool {
        self.options.wrap
    }

    /// The continuous index of the focal card. Whole whenever no gesture is in progress.
    pub fn current_index(&self) -> f32 {
        self.current
    }

    /// The last settled index.
    pub fn committed_index(&self) -> usize {
        self.committed
    }

    /// The card closest to the focal slot, normalized into `0..count`.
    pub fn nearest_index(&self) -> usize {
        normalize_index(nearest_index(self.current), self.count(), self.options.wrap)
    }

    pub fn is_interacting(&self) -> bool {
        self.is_interacting
    }

    /// When the pending interaction-clear timer fires, if one is running.
    ///
    /// Adapters with a real timer facility can schedule a single wakeup here and call
    /// `update_interaction` from it.
    pub fn interaction_deadline_ms(&self) -> Option<u64> {
        self.interaction_deadline_ms
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_interacting);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    fn set_interacting(&mut self, is_interacting: bool) {
        if self.is_interacting == is_interacting {
            return;
        }
        self.is_interacting = is_interacting;
        self.notify();
    }

    /// Applies one live drag sample.
    ///
    /// `translation_x` is the horizontal displacement since the drag began. The continuous index
    /// follows it without clamping; clamping happens at commit time. Any pending
    /// interaction-clear timer from an earlier release is cancelled.
    pub fn drag_changed(&mut self, translation_x: f32) {
        if self.count() == 0 {
            cswarn!(translation_x, "drag_changed on an empty stack");
        }
        let current = self.committed as f32 - translation_x / self.options.drag_scale;
        cstrace!(translation_x, current, "drag_changed");

        self.interaction_deadline_ms = None;
        self.batch_update(|s| {
            s.current = current;
            s.set_interacting(true);
            s.notify();
        });

        if let Some(cb) = &self.options.on_feedback {
            cb(current);
        }
    }

    /// Ends a drag with its final translation and commits the resulting index.
    ///
    /// Beyond `commit_threshold` the stack moves exactly one card from the committed index
    /// (dragging right goes back, dragging left goes forward); otherwise it settles on the card
    /// nearest the continuous index. Starts the interaction-clear timer. Returns the committed
    /// index.
    pub fn drag_ended(&mut self, translation_x: f32, now_ms: u64) -> usize {
        let intent = SwipeIntent::from_translation(translation_x, self.options.commit_threshold);
        let previous = self.committed as isize;
        let current = self.committed as f32 - translation_x / self.options.drag_scale;
        let target = match intent {
            SwipeIntent::Backward => previous - 1,
            SwipeIntent::Forward => previous + 1,
            SwipeIntent::Settle => nearest_index(current),
        };
        cstrace!(translation_x, ?intent, target_index = target, "drag_ended");
        self.release(target, now_ms)
    }

    /// Handles an interrupted drag (pointer loss) as a below-threshold release.
    pub fn drag_cancelled(&mut self, now_ms: u64) -> usize {
        let target = nearest_index(self.current);
        cstrace!(current = self.current, target_index = target, "drag_cancelled");
        self.release(target, now_ms)
    }

    fn release(&mut self, target: isize, now_ms: u64) -> usize {
        let deadline = now_ms.saturating_add(self.options.interaction_clear_delay_ms);
        self.batch_update(|s| {
            s.commit(target);
            s.interaction_deadline_ms = Some(deadline);
        });
        self.committed
    }

    /// Runs the interaction-clear timer. Call this from a timer or on each frame tick.
    pub fn update_interaction(&mut self, now_ms: u64) {
        let Some(deadline) = self.interaction_deadline_ms else {
            return;
        };
        if now_ms >= deadline {
            self.interaction_deadline_ms = None;
            self.set_interacting(false);
        }
    }

    /// Commits `target` as the new selection.
    ///
    /// The target is wrapped (wrap mode) or clamped into `0..count`, becomes both the committed
    /// and the continuous index, and is reported through `on_commit`.
    pub fn commit(&mut self, target: isize) -> usize {
        let index = normalize_index(target, self.count(), self.options.wrap);
        csdebug!(target_index = target, index, "commit");
        self.committed = index;
        self.current = index as f32;
        if let Some(cb) = &self.options.on_commit {
            cb(index);
        }
        self.notify();
        index
    }

    pub fn select_next(&mut self) -> usize {
        self.commit(self.committed as isize + 1)
    }

    pub fn select_previous(&mut self) -> usize {
        self.commit(self.committed as isize - 1)
    }

    /// Adopts an index changed by the caller (e.g. the externally bound value was written).
    ///
    /// Unlike `commit`, this does not echo the index back through `on_commit`.
    pub fn set_index(&mut self, index: usize) {
        let count = self.count();
        if index >= count {
            cswarn!(index, count, "set_index: index out of range");
        }
        let index = normalize_index(index_to_target(index), count, self.options.wrap);
        if self.committed == index && self.current == index as f32 {
            return;
        }
        self.committed = index;
        self.current = index as f32;
        self.notify();
    }

    /// Updates the item count, re-normalizing the committed index if it no longer fits.
    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        let index = normalize_index(self.committed as isize, count, self.options.wrap);
        self.batch_update(|s| {
            if index != s.committed {
                s.commit(index as isize);
            } else {
                s.notify();
            }
        });
    }

    /// Returns a lightweight snapshot of the current index state.
    pub fn index_state(&self) -> IndexState {
        IndexState {
            current: self.current,
            committed: self.committed,
            is_interacting: self.is_interacting,
        }
    }

    /// Restores index state from a previously captured snapshot.
    ///
    /// The committed index is normalized into `0..count`. At rest, the continuous index snaps
    /// onto it; mid-gesture, it keeps its offset from the committed index.
    ///
    /// When `state.is_interacting` is `true`, the interaction-clear timer is started as if a
    /// release happened at `now_ms`.
    pub fn restore_index_state(&mut self, state: IndexState, now_ms: u64) {
        let committed = normalize_index(
            index_to_target(state.committed),
            self.count(),
            self.options.wrap,
        );
        let current = if state.is_interacting {
            committed as f32 + (state.current - state.committed as f32)
        } else {
            committed as f32
        };
        let deadline = now_ms.saturating_add(self.options.interaction_clear_delay_ms);
        self.batch_update(|s| {
            s.committed = committed;
            s.current = current;
            s.interaction_deadline_ms = state.is_interacting.then_some(deadline);
            s.set_interacting(state.is_interacting);
            s.notify();
        });
    }

    /// Render attributes for `index` at the current continuous index.
    ///
    /// Returns `None` if `index` is out of bounds.
    pub fn card_transform(&self, index: usize) -> Option<CardTransform> {
        self.card_transform_at(index, self.current)
    }

    /// Render attributes for `index` at an arbitrary continuous index (e.g. an animated one).
    pub fn card_transform_at(&self, index: usize, current: f32) -> Option<CardTransform> {
        if index >= self.count() {
            return None;
        }
        Some(transform::card_transform(
            index,
            current,
            self.is_interacting,
            &self.options,
        ))
    }

    /// Calls `f` for every card in index order.
    pub fn for_each_card(&self, f: impl FnMut(CardTransform)) {
        self.for_each_card_at(self.current, f);
    }

    pub fn for_each_card_at(&self, current: f32, f: impl FnMut(CardTransform)) {
        self.for_each_card_with(current, self.is_interacting, f);
    }

    /// Like `for_each_card_at`, but with an explicit interaction flag.
    ///
    /// Adapters that animate the index themselves pass `true` while their animation runs so the
    /// highlight stays hidden during motion.
    pub fn for_each_card_with(
        &self,
        current: f32,
        is_interacting: bool,
        mut f: impl FnMut(CardTransform),
    ) {
        for index in 0..self.count() {
            f(transform::card_transform(
                index,
                current,
                is_interacting,
                &self.options,
            ));
        }
    }

    /// Collects all card transforms into `out`, back to front (ascending `z_index`).
    ///
    /// `out` is cleared first so adapters can reuse the allocation across frames.
    pub fn collect_cards_in_paint_order(&self, out: &mut Vec<CardTransform>) {
        self.collect_cards_in_paint_order_at(self.current, out);
    }

    pub fn collect_cards_in_paint_order_at(&self, current: f32, out: &mut Vec<CardTransform>) {
        self.collect_cards_in_paint_order_with(current, self.is_interacting, out);
    }

    pub fn collect_cards_in_paint_order_with(
        &self,
        current: f32,
        is_interacting: bool,
        out: &mut Vec<CardTransform>,
    ) {
        out.clear();
        out.reserve(self.count());
        self.for_each_card_with(current, is_interacting, |card| out.push(card));
        out.sort_by_key(|card| card.z_index);
    }
}

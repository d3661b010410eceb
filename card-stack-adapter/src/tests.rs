use crate::*;

use std::cell::Cell;

use card_stack::{CardStack, CardStackOptions, HighlightStyle};

#[derive(Clone, Debug, PartialEq)]
struct Photo {
    id: u32,
    title: &'static str,
}

impl CardItem for Photo {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

fn photos(n: u32) -> Vec<Photo> {
    (0..n)
        .map(|i| Photo {
            id: 100 + i,
            title: "photo",
        })
        .collect()
}

/// Ticks at ~60fps until the controller stops animating.
fn settle<T: CardItem>(c: &mut Controller<T>, mut now_ms: u64) -> u64 {
    for _ in 0..600 {
        now_ms += 16;
        c.tick(now_ms);
        if !c.is_animating() {
            break;
        }
    }
    now_ms
}

#[test]
fn spring_converges_onto_target() {
    let mut s = Spring::new(0.0, 1.0, SpringConfig::default());
    let mut last = s.position();
    for _ in 0..200 {
        let pos = s.step(16);
        assert!(pos >= last - 1e-3, "near-critical spring should not swing back");
        last = pos;
        if s.is_settled() {
            break;
        }
    }
    assert!(s.is_settled());
    assert_eq!(s.position(), 1.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn spring_step_is_frame_rate_independent() {
    let mut coarse = Spring::new(3.0, 0.0, SpringConfig::default());
    let mut fine = coarse;
    coarse.step(100);
    for _ in 0..10 {
        fine.step(10);
    }
    assert!((coarse.position() - fine.position()).abs() < 0.05);
}

#[test]
fn spring_retarget_keeps_motion() {
    let mut s = Spring::new(0.0, 2.0, SpringConfig::default());
    s.step(50);
    let v = s.velocity();
    assert!(v > 0.0);
    s.retarget(-1.0);
    assert_eq!(s.velocity(), v);
    assert_eq!(s.target(), -1.0);
}

#[test]
fn shared_index_is_shared_between_clones() {
    let a = SharedIndex::new(3);
    let b = a.clone();
    b.set(5);
    assert_eq!(a.get(), 5);
    assert_eq!(SharedIndex::default().get(), 0);
}

#[test]
fn binding_is_read_on_mount_and_written_on_commit() {
    let bound = SharedIndex::new(2);
    let mut c = Controller::with_binding(photos(5), CardStackOptions::new(0), bound.clone());
    assert_eq!(c.stack().committed_index(), 2);
    assert_eq!(c.stack().count(), 5);

    c.on_drag_changed(-120.0);
    c.on_drag_changed(-260.0);
    assert_eq!(bound.get(), 2);
    assert_eq!(c.on_drag_ended(-260.0, 1_000), 3);
    assert_eq!(bound.get(), 3);
    assert_eq!(c.selected_item().map(|p| p.id), Some(103));
}

#[test]
fn binding_out_of_range_is_normalized_and_written_back() {
    let bound = SharedIndex::new(42);
    let c = Controller::with_binding(photos(4), CardStackOptions::new(0), bound.clone());
    assert_eq!(c.stack().committed_index(), 3);
    assert_eq!(bound.get(), 3);

    let bound = SharedIndex::new(6);
    let c = Controller::with_binding(
        photos(4),
        CardStackOptions::new(0).with_wrap(true),
        bound.clone(),
    );
    assert_eq!(c.stack().committed_index(), 2);
    assert_eq!(bound.get(), 2);
}

#[test]
fn binding_chains_existing_on_commit() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let last = Arc::new(AtomicUsize::new(usize::MAX));
    let options = CardStackOptions::new(0).with_on_commit(Some({
        let last = Arc::clone(&last);
        move |i: usize| last.store(i, Ordering::Relaxed)
    }));
    let bound = SharedIndex::new(0);
    let mut c = Controller::with_binding(photos(3), options, bound.clone());
    c.select_next(0);
    assert_eq!(bound.get(), 1);
    assert_eq!(last.load(Ordering::Relaxed), 1);
}

#[test]
fn sync_binding_adopts_caller_writes() {
    let bound = SharedIndex::new(0);
    let mut c = Controller::with_binding(photos(5), CardStackOptions::new(0), bound.clone());
    assert!(!c.sync_binding(0));

    bound.set(4);
    assert!(c.sync_binding(0));
    assert_eq!(c.stack().committed_index(), 4);
    assert!(c.is_animating());
    assert_eq!(c.displayed_index(), 0.0);

    settle(&mut c, 0);
    assert_eq!(c.displayed_index(), 4.0);

    bound.set(9);
    assert!(!c.sync_binding(0), "clamped back onto the same card");
    assert_eq!(c.stack().committed_index(), 4);
    assert_eq!(bound.get(), 4);
    assert!(!c.is_animating());
}

#[test]
fn sync_binding_reports_change_only_when_committed_moves() {
    let bound = SharedIndex::new(5);
    let mut c = Controller::with_binding(photos(6), CardStackOptions::new(0), bound.clone());
    assert_eq!(c.stack().committed_index(), 5);

    bound.set(9);
    assert!(!c.sync_binding(0));
    assert_eq!(bound.get(), 5);

    bound.set(2);
    assert!(c.sync_binding(0));
    assert_eq!(c.stack().committed_index(), 2);
}

#[test]
fn release_settles_with_spring_from_drag_position() {
    let mut c = Controller::new(photos(4), CardStackOptions::new(0));
    c.on_drag_changed(-240.0);
    assert_eq!(c.displayed_index(), 0.8);

    assert_eq!(c.on_drag_ended(-240.0, 0), 1);
    assert!(c.is_animating());
    assert_eq!(c.displayed_index(), 0.8);
    assert_eq!(c.stack().current_index(), 1.0);

    let first = c.tick(16);
    assert!(matches!(first, Some(p) if p > 0.8 && p <= 1.0 + 1e-3));

    settle(&mut c, 16);
    assert!(!c.is_animating());
    assert_eq!(c.displayed_index(), 1.0);
    assert_eq!(c.tick(10_000), None);
}

#[test]
fn drag_interrupts_settle_animation() {
    let mut c = Controller::new(photos(4), CardStackOptions::new(0));
    c.on_drag_changed(-240.0);
    c.on_drag_ended(-240.0, 0);
    c.tick(16);
    assert!(c.is_animating());

    c.on_drag_changed(30.0);
    assert!(!c.is_animating());
    assert!((c.displayed_index() - 0.9).abs() < 1e-6);
}

#[test]
fn pointer_lost_settles_on_nearest_card() {
    let mut c = Controller::new(photos(4), CardStackOptions::new(0).with_initial_index(2));
    c.on_drag_changed(200.0);
    assert_eq!(c.on_pointer_lost(0), 1);
    assert!(c.is_animating());
    settle(&mut c, 0);
    assert_eq!(c.displayed_index(), 1.0);
}

#[test]
fn render_invokes_renderer_once_per_item_in_paint_order() {
    let c = Controller::new(
        photos(4),
        CardStackOptions::new(0)
            .with_initial_index(1)
            .with_highlight(HighlightStyle::enabled()),
    );
    let calls = Cell::new(0);
    let cards = c.render(|photo, t| {
        calls.set(calls.get() + 1);
        (photo.title, t.scale)
    });

    assert_eq!(calls.get(), 4);
    let ids: Vec<u32> = cards.iter().map(|card| card.id).collect();
    assert_eq!(ids, vec![100, 103, 102, 101]);

    let top = cards.last().unwrap();
    assert_eq!(top.transform.index, 1);
    assert!(top.transform.highlighted);
    assert_eq!(top.node, ("photo", 1.0));
}

#[test]
fn render_uses_displayed_index_while_settling() {
    let mut c = Controller::new(photos(3), CardStackOptions::new(0));
    c.on_drag_changed(-150.0);
    c.on_drag_ended(-150.0, 0);

    let cards = c.render(|_, t| t.relative_position);
    let first = cards.iter().find(|card| card.id == 100).unwrap();
    assert_eq!(first.node, 0.5);
}

#[test]
fn set_items_renormalizes_and_updates_binding() {
    let bound = SharedIndex::new(4);
    let mut c = Controller::with_binding(photos(5), CardStackOptions::new(0), bound.clone());
    c.set_items(photos(2));
    assert_eq!(c.items().len(), 2);
    assert_eq!(c.stack().committed_index(), 1);
    assert_eq!(bound.get(), 1);
}

#[test]
fn empty_controller_renders_nothing() {
    let mut c = Controller::new(Vec::<Photo>::new(), CardStackOptions::new(3));
    c.on_drag_changed(-300.0);
    assert_eq!(c.on_drag_ended(-300.0, 0), 0);
    settle(&mut c, 0);
    assert!(c.render(|p, _| p.id).is_empty());
    assert_eq!(c.selected_item(), None);
}

#[test]
fn interaction_clears_through_tick() {
    let mut c = Controller::new(photos(3), CardStackOptions::new(0));
    c.on_drag_changed(-30.0);
    c.on_drag_ended(-30.0, 0);
    assert!(c.stack().is_interacting());
    c.tick(499);
    assert!(c.stack().is_interacting());
    c.tick(500);
    assert!(!c.stack().is_interacting());
}

#[test]
fn free_render_function_matches_controller() {
    let items = photos(3);
    let stack = CardStack::new(CardStackOptions::new(3).with_initial_index(2));
    let cards = render_in_paint_order(
        &stack,
        &items,
        stack.current_index(),
        stack.is_interacting(),
        |p, _| p.id,
    );
    let ids: Vec<u32> = cards.iter().map(|card| card.node).collect();
    assert_eq!(ids, vec![100, 101, 102]);
}

#[test]
fn no_highlight_while_spring_settles() {
    let mut c = Controller::new(
        photos(6),
        CardStackOptions::new(0)
            .with_wrap(true)
            .with_initial_index(5)
            .with_highlight(HighlightStyle::enabled()),
    );
    assert_eq!(c.select_next(0), 0);
    assert!(c.is_animating());
    assert!(c.is_in_motion());

    let mut now_ms = 0u64;
    let mut lit = Vec::new();
    while c.is_animating() && now_ms < 10_000 {
        let frame = c.render(|_, t| t.highlighted);
        lit.extend(frame.iter().filter(|card| card.node).map(|card| card.transform.index));
        now_ms += 16;
        c.tick(now_ms);
    }
    assert!(lit.is_empty(), "highlighted during settle: {lit:?}");

    let frame = c.render(|_, t| t.highlighted);
    let lit: Vec<usize> = frame
        .iter()
        .filter(|card| card.node)
        .map(|card| card.transform.index)
        .collect();
    assert_eq!(lit, vec![0]);
}

#[test]
fn no_highlight_while_syncing_binding() {
    let bound = SharedIndex::new(0);
    let mut c = Controller::with_binding(
        photos(4),
        CardStackOptions::new(0).with_highlight(HighlightStyle::enabled()),
        bound.clone(),
    );
    bound.set(3);
    assert!(c.sync_binding(0));
    c.tick(16);
    assert!(c.render(|_, t| t.highlighted).iter().all(|card| !card.node));

    settle(&mut c, 16);
    assert!(c.render(|_, t| t.highlighted).iter().any(|card| card.node));
}

// Example: a framework adapter driving the controller with simulated input and frames.
use card_stack::CardStackOptions;
use card_stack_adapter::{CardItem, Controller, SharedIndex};

#[derive(Clone, Debug)]
struct Card {
    id: u64,
    title: String,
}

impl CardItem for Card {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

fn main() {
    let cards: Vec<Card> = (0..5)
        .map(|i| Card {
            id: i,
            title: format!("Card {i}"),
        })
        .collect();

    // The host owns the bound index; the controller reads it on mount.
    let selected = SharedIndex::new(1);
    let mut c = Controller::with_binding(cards, CardStackOptions::new(0), selected.clone());

    let mut now_ms = 0u64;
    for dx in [-30.0, -90.0, -180.0, -240.0] {
        now_ms += 16;
        c.on_drag_changed(dx);
    }
    c.on_drag_ended(-240.0, now_ms);
    println!("bound index after swipe: {}", selected.get());

    // Frame loop: sample the spring and render until the stack is at rest.
    loop {
        now_ms += 16;
        let displayed = c.tick(now_ms);
        let frame = c.render(|card, t| {
            format!(
                "{} x={:.1} scale={:.2} rot={:.1}",
                card.title, t.offset_x, t.scale, t.rotation_deg
            )
        });
        if let Some(top) = frame.last() {
            println!("t={now_ms}ms displayed={displayed:?} top: {}", top.node);
        }
        if displayed.is_none() && !c.stack().is_interacting() {
            break;
        }
    }

    // The host writes the bound index directly (e.g. a "jump to start" button).
    selected.set(0);
    c.sync_binding(now_ms);
    println!("jumping back, animating={}", c.is_animating());
}

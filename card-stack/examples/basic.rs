use card_stack::{CardStack, CardStackOptions, HighlightStyle};

fn main() {
    let mut stack = CardStack::new(
        CardStackOptions::new(6)
            .with_wrap(true)
            .with_highlight(HighlightStyle::enabled())
            .with_on_commit(Some(|index: usize| println!("committed index={index}"))),
    );

    // Simulate a leftward drag delivered as translation samples, then a release.
    for dx in [-40.0, -110.0, -190.0, -260.0] {
        stack.drag_changed(dx);
        println!("drag dx={dx} current={:.3}", stack.current_index());
    }
    stack.drag_ended(-260.0, 1_000);

    let mut cards = Vec::new();
    stack.collect_cards_in_paint_order(&mut cards);
    for card in &cards {
        println!("{card:?}");
    }

    // Highlight comes back once the interaction timer has run out.
    stack.update_interaction(1_500);
    println!(
        "highlighted={:?}",
        stack.card_transform(stack.committed_index()).map(|c| c.highlighted)
    );

    // Wrap mode: going back from the first card lands on the last one.
    stack.commit(0);
    stack.drag_ended(320.0, 2_000);
    println!("after wrap: {}", stack.committed_index());
}

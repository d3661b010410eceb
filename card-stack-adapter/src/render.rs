use card_stack::{CardStack, CardTransform};

use crate::CardItem;

/// One rendered card: the item's identity, its transform, and whatever the renderer produced.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedCard<I, N> {
    pub id: I,
    pub transform: CardTransform,
    pub node: N,
}

/// Runs `renderer` once per item and returns the results back to front (ascending `z_index`).
///
/// `current` is the continuous index to lay the cards out at, usually the animated one.
/// `is_interacting` should be `true` while anything is in motion; it hides the highlight.
/// `items` must be the collection `stack` was sized for; cards without a matching item are
/// skipped.
pub fn render_in_paint_order<T: CardItem, N>(
    stack: &CardStack,
    items: &[T],
    current: f32,
    is_interacting: bool,
    mut renderer: impl FnMut(&T, &CardTransform) -> N,
) -> Vec<RenderedCard<T::Id, N>> {
    debug_assert_eq!(
        stack.count(),
        items.len(),
        "render_in_paint_order: stack count does not match items"
    );
    let mut transforms = Vec::new();
    stack.collect_cards_in_paint_order_with(current, is_interacting, &mut transforms);
    transforms
        .into_iter()
        .filter_map(|transform| {
            let item = items.get(transform.index)?;
            Some(RenderedCard {
                id: item.id(),
                node: renderer(item, &transform),
                transform,
            })
        })
        .collect()
}

use core::hash::Hash;

/// An item that can be shown as a card.
///
/// `id` must be stable for the lifetime of the item so renderers can reuse per-card resources
/// across frames and reorders.
pub trait CardItem {
    type Id: Clone + Eq + Hash;

    fn id(&self) -> Self::Id;
}

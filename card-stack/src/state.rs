/// A lightweight, serializable snapshot of a card stack's index state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexState {
    /// The continuous (possibly fractional) index of the focal card.
    pub current: f32,
    /// The last settled index.
    pub committed: usize,
    pub is_interacting: bool,
}

impl IndexState {
    /// Returns `true` when no gesture is mid-flight (the continuous index sits on a card).
    pub fn is_settled(&self) -> bool {
        self.current == self.committed as f32
    }
}

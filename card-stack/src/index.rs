/// Maps a commit target into `0..count`.
///
/// With `wrap`, index arithmetic is circular; otherwise the target is clamped to the first/last
/// card. An empty stack always yields `0`.
pub fn normalize_index(target: isize, count: usize, wrap: bool) -> usize {
    if count == 0 {
        return 0;
    }
    if wrap {
        let n = count as isize;
        (((target % n) + n) % n) as usize
    } else {
        target.clamp(0, count as isize - 1) as usize
    }
}

/// Rounds a continuous index to the nearest card (half away from zero).
pub fn nearest_index(current: f32) -> isize {
    current.round() as isize
}

/// Converts a card index into a commit target, saturating at `isize::MAX`.
pub fn index_to_target(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

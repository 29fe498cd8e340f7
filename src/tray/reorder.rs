use crate::model::nav::NavItem;

/// Clamp `index` into `[min, max]`; `min` wins when the range is empty.
pub fn clamp_index(index: isize, min: isize, max: isize) -> isize {
    index.min(max).max(min)
}

/// Move one element of a capacity-bounded list, returning the new list.
///
/// Only the first `capacity` elements take part; the rest are dropped from
/// the result. An out-of-range `from_index` leaves the (truncated) order
/// unchanged. `to_index` is clamped into `[0, capacity - 1]` and then to the
/// end of the list. `items` is never modified.
pub fn reorder_bounded<T: Clone>(
    items: &[T],
    from_index: isize,
    to_index: isize,
    capacity: usize,
) -> Vec<T> {
    let mut list = items[..items.len().min(capacity)].to_vec();
    let Ok(from) = usize::try_from(from_index) else {
        return list;
    };
    if from >= list.len() {
        return list;
    }

    let moved = list.remove(from);
    let last_slot = isize::try_from(capacity)
        .unwrap_or(isize::MAX)
        .saturating_sub(1);
    let clamped_to = clamp_index(to_index, 0, last_slot);
    // `clamped_to` is non-negative here.
    let insert_at = usize::try_from(clamped_to).unwrap_or(0).min(list.len());
    list.insert(insert_at, moved);
    list
}

#[tracing::instrument(skip(cards), fields(count = cards.len()))]
/// Reorder a tray's cards after a drop.
///
/// Tray-typed entry point over [`reorder_bounded`].
pub fn reorder_tray_cards(
    cards: &[NavItem],
    from_index: isize,
    to_index: isize,
    capacity: usize,
) -> Vec<NavItem> {
    if cards.len() > capacity {
        tracing::debug!(capacity, "tray holds more cards than capacity; truncating");
    }
    reorder_bounded(cards, from_index, to_index, capacity)
}

#[cfg(test)]
#[path = "../../tests/unit/tray/reorder.rs"]
mod tests;

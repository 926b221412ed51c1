use crate::NavDirection;
use crate::math;

/// Highest index the window may start at so that the last page is full.
///
/// Collapses to 0 when there are fewer items than `items_to_show`. An `items_to_show` below 1
/// counts as 1, matching the layout divisor.
pub fn forward_limit(count: usize, items_to_show: f64) -> usize {
    let count = count.max(1) as f64;
    let items_to_show = math::slots(items_to_show);
    if items_to_show > count {
        return 0;
    }
    math::floor_index(count - items_to_show)
}

/// Steps `current` by `items_to_scroll` in `direction`, clamped to `[0, forward_limit]`.
pub fn next_index(
    current: usize,
    count: usize,
    items_to_show: f64,
    items_to_scroll: usize,
    direction: NavDirection,
) -> usize {
    match direction {
        NavDirection::Next => {
            let limit = forward_limit(count, items_to_show);
            current.saturating_add(items_to_scroll).min(limit)
        }
        NavDirection::Prev => current.saturating_sub(items_to_scroll),
    }
}

/// Direction of a move from `current` towards `target`.
pub fn direction_to(current: usize, target: usize) -> NavDirection {
    if target < current {
        NavDirection::Prev
    } else {
        NavDirection::Next
    }
}

/// A committed navigation decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: usize,
    pub to: usize,
    pub direction: NavDirection,
}

/// Plans a jump from `current` to `target`.
///
/// Negative targets clamp to 0. Returns `None` when nothing would move: the neighbour in the
/// requested direction is `current` itself (already at that edge), or the target is `current`.
/// Targets whose window would run past the end snap to the last full window.
pub fn plan_go_to(
    current: usize,
    target: isize,
    count: usize,
    items_to_show: f64,
    items_to_scroll: usize,
) -> Option<Move> {
    let items_to_show = math::slots(items_to_show);
    let mut safe = target.max(0) as usize;
    let direction = direction_to(current, safe);
    let neighbour = next_index(current, count, items_to_show, items_to_scroll, direction);
    if neighbour == current {
        return None;
    }
    if safe as f64 + items_to_show >= count as f64 {
        safe = math::floor_index(count as f64 - items_to_show);
    }
    if safe == current {
        return None;
    }
    Some(Move {
        from: current,
        to: safe,
        direction: direction_to(current, safe),
    })
}

/// Clamps an index into the valid window range. Used when the configuration or the item count
/// changes under an existing index.
pub fn clamp_index(index: usize, count: usize, items_to_show: f64) -> usize {
    let shown = (count as f64).min(math::slots(items_to_show));
    let end_limit = math::floor_index(count as f64 - shown);
    index.min(end_limit)
}

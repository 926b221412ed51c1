use crate::axis::Axis;
use crate::math;
use crate::{NavDirection, SwipeEvent};

/// Snapshot of the engine state a gesture is evaluated against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureContext {
    pub axis: Axis,
    pub item_size: f64,
    pub active_index: usize,
    pub count: usize,
    pub items_to_show: f64,
    pub items_to_scroll: usize,
    /// Settled track position the drag started from.
    pub track_position: f64,
}

/// Decision taken when the pointer is released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Too short (or off-axis): snap back to the settled position.
    Reset,
    /// Navigate to this (unclamped) index.
    GoTo(isize),
}

/// Minimum release distance that commits a move.
pub fn min_swipe_distance(item_size: f64) -> f64 {
    item_size / 5.0
}

/// Items to advance for a committed swipe of `magnitude`.
///
/// A long swipe may skip more than `items_to_scroll`.
pub fn items_to_advance(magnitude: f64, item_size: f64, items_to_scroll: usize) -> usize {
    let threshold = min_swipe_distance(item_size);
    let via_swipe = math::ceil_index((magnitude - threshold) / item_size);
    items_to_scroll.max(via_swipe)
}

/// Tentative track position while dragging, or `None` when the update must be ignored (off-axis
/// drag, or a drag past the edge stop).
pub fn drag_position(ctx: &GestureContext, ev: &SwipeEvent) -> Option<f64> {
    let dir = ev.dir?;
    let direction = ctx.axis.classify(dir)?;
    let edge_stop = ctx.axis.edge_stop(
        direction,
        ctx.item_size,
        ctx.active_index,
        ctx.count,
        ctx.items_to_show,
    );
    if ctx.axis.primary_magnitude(ev) > edge_stop {
        return None;
    }
    Some(ctx.track_position + ctx.axis.primary_delta(ev))
}

/// Turns a release event into a navigation decision.
pub fn release(ctx: &GestureContext, ev: &SwipeEvent) -> SwipeOutcome {
    if ctx.item_size.is_nan() || ctx.item_size <= 0.0 {
        return SwipeOutcome::Reset;
    }
    let Some(direction) = ev.dir.and_then(|dir| ctx.axis.classify(dir)) else {
        return SwipeOutcome::Reset;
    };
    let magnitude = ctx.axis.primary_magnitude(ev);
    if magnitude < min_swipe_distance(ctx.item_size) {
        return SwipeOutcome::Reset;
    }

    let n = items_to_advance(magnitude, ctx.item_size, ctx.items_to_scroll);
    let n = isize::try_from(n).unwrap_or(isize::MAX);
    let index = isize::try_from(ctx.active_index).unwrap_or(isize::MAX);
    let target = match direction {
        NavDirection::Next => index.saturating_add(n),
        NavDirection::Prev => index.saturating_sub(n),
    };
    SwipeOutcome::GoTo(target)
}

use crate::{NavDirection, SwipeDir, SwipeEvent};

/// The carousel's primary axis, oriented by `(vertical_mode, is_rtl)`.
///
/// Gesture and navigation code ask this descriptor which physical direction means "next" and how
/// a drag delta moves the track, instead of branching on the mode flags themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axis {
    pub vertical: bool,
    pub rtl: bool,
}

impl Axis {
    pub fn new(vertical: bool, rtl: bool) -> Self {
        // RTL has no meaning on the vertical axis.
        Self {
            vertical,
            rtl: rtl && !vertical,
        }
    }

    /// Whether a swipe in `dir` travels along this axis.
    pub fn is_primary(self, dir: SwipeDir) -> bool {
        if self.vertical {
            dir.is_vertical()
        } else {
            dir.is_horizontal()
        }
    }

    /// Maps a physical swipe direction to a navigation direction. Cross-axis swipes map to `None`.
    pub fn classify(self, dir: SwipeDir) -> Option<NavDirection> {
        if !self.is_primary(dir) {
            return None;
        }
        let next = match dir {
            SwipeDir::Left => !self.rtl,
            SwipeDir::Right => self.rtl,
            SwipeDir::Up => true,
            SwipeDir::Down => false,
        };
        Some(if next {
            NavDirection::Next
        } else {
            NavDirection::Prev
        })
    }

    /// Multiplier applied to a raw drag delta before it is added to the track position.
    pub fn sign(self) -> f64 {
        if self.rtl { -1.0 } else { 1.0 }
    }

    /// Signed drag delta along this axis, already oriented for the track.
    pub fn primary_delta(self, ev: &SwipeEvent) -> f64 {
        let raw = if self.vertical { ev.delta_y } else { ev.delta_x };
        raw * self.sign()
    }

    /// Unsigned drag distance along this axis.
    pub fn primary_magnitude(self, ev: &SwipeEvent) -> f64 {
        if self.vertical { ev.abs_y } else { ev.abs_x }
    }

    /// Maximum drag distance in `direction` before the content boundary, plus half an item of
    /// overdrag.
    pub fn edge_stop(
        self,
        direction: NavDirection,
        item_size: f64,
        active_index: usize,
        count: usize,
        items_to_show: f64,
    ) -> f64 {
        let overdrag = item_size / 2.0;
        let index = active_index as f64;
        match direction {
            NavDirection::Next => {
                let track_size = count.max(1) as f64 * item_size;
                track_size - item_size * index - items_to_show * item_size + overdrag
            }
            NavDirection::Prev => item_size * index + overdrag,
        }
    }
}

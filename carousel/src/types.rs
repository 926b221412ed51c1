/// Navigation direction along the carousel's primary axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavDirection {
    Next,
    Prev,
}

impl NavDirection {
    pub fn is_next(self) -> bool {
        matches!(self, Self::Next)
    }
}

/// Direction label reported by the gesture source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeDir {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDir {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// A classified drag update (or release) from the gesture source.
///
/// Deltas are `current - start`, so a drag to the right has a positive `delta_x`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwipeEvent {
    pub delta_x: f64,
    pub delta_y: f64,
    pub abs_x: f64,
    pub abs_y: f64,
    pub dir: Option<SwipeDir>,
}

impl SwipeEvent {
    /// A horizontal drag; `abs_x` is derived from `delta_x`.
    pub fn horizontal(delta_x: f64) -> Self {
        let dir = if delta_x < 0.0 {
            SwipeDir::Left
        } else {
            SwipeDir::Right
        };
        Self {
            delta_x,
            delta_y: 0.0,
            abs_x: crate::math::abs(delta_x),
            abs_y: 0.0,
            dir: Some(dir),
        }
    }

    /// A vertical drag; `abs_y` is derived from `delta_y`.
    pub fn vertical(delta_y: f64) -> Self {
        let dir = if delta_y < 0.0 {
            SwipeDir::Up
        } else {
            SwipeDir::Down
        };
        Self {
            delta_x: 0.0,
            delta_y,
            abs_x: 0.0,
            abs_y: crate::math::abs(delta_y),
            dir: Some(dir),
        }
    }
}

/// Where an item sits inside its slot on the cross axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemPosition {
    Start,
    #[default]
    Center,
    End,
}

/// Easing curve used by the presentation layer for track transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            // Approximates CSS `ease` (cubic-bezier(.25,.1,.25,1)).
            Self::Ease => {
                let s = t * t * (3.0 - 2.0 * t);
                s + (t - s) * 0.25 * (1.0 - t)
            }
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

/// Per-item padding as `[top, right, bottom, left]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPadding(pub [f64; 4]);

/// Callback payload identifying an item by key and index.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselItem<K> {
    pub key: K,
    pub index: usize,
}

pub type ItemKey = u64;

/// Visibility class of an item relative to the current window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    Visible,
    /// Hidden, but within one scroll step before the window.
    HiddenPrev,
    /// Hidden, but within one scroll step after the window.
    HiddenNext,
    Hidden,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Render data for one item.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemView {
    pub index: usize,
    pub visibility: Visibility,
    /// Whether the item should be reachable by keyboard focus.
    pub focusable: bool,
    /// Slot size on the primary axis.
    pub size: f64,
}

/// Half-open range of visible item indexes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

use crate::NavDirection;

/// Whether the engine still accepts asynchronous updates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lifecycle {
    #[default]
    Active,
    Disposed,
}

/// Phase of the animated move state machine.
///
/// `Idle -> Moving` on a committed navigation, `Moving -> Idle` on the transition-finished
/// signal. The settle callbacks run after the phase is back to `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    #[default]
    Idle,
    Moving(NavDirection),
}

/// A lightweight, serializable snapshot of the engine state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub active_index: usize,
    pub active_page: usize,
    /// Settled track offset along the primary axis.
    pub track_position: f64,
    /// Track offset while a drag or tilt is in progress; 0 otherwise.
    pub swipe_position: f64,
    pub is_swiping: bool,
    pub transitioning: bool,
    /// Inner container width (outer spacing removed).
    pub container_width: f64,
    pub track_height: f64,
    /// Per-item height in vertical mode.
    pub item_height: f64,
    /// Transition duration currently in effect (0 right after a resize).
    pub transition_ms: u64,
}

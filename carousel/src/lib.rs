//! A headless carousel engine.
//!
//! For adapter-level utilities (tweened transitions, resize feeds), see the `carousel-adapter`
//! crate.
//!
//! This crate implements the position/transition state machine behind a paging carousel: which
//! items are visible, where the sliding track sits, how swipe gestures turn into index changes,
//! how responsive breakpoints are reconciled against the current state, and when autoplay
//! advances.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - container width and track height measurements
//! - classified swipe deltas and releases
//! - a transition-finished signal once the track animation completes
//! - clock ticks (`now_ms`) for autoplay and the edge tilt
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod axis;
pub mod breakpoint;
mod carousel;
pub mod gesture;
pub mod layout;
mod math;
pub mod navigation;
mod options;
pub mod page;
mod state;
mod timer;
mod types;

#[cfg(test)]
mod tests;

pub use axis::Axis;
pub use carousel::{Carousel, TILT_DISTANCE, TILT_DURATION_MS};
pub use options::{
    Breakpoint, CarouselConfig, CarouselOptions, ConfigOverride, OnResizeCallback,
    OnSettleCallback, OnStartCallback, OnUpdateCallback,
};
pub use state::{CarouselState, Lifecycle, TransitionPhase};
pub use types::{
    CarouselItem, Easing, ItemKey, ItemPadding, ItemPosition, ItemView, NavDirection, SwipeDir,
    SwipeEvent, Visibility, VisibleRange,
};

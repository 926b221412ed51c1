//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and only tracks where the track should sit. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A [`Controller`] that tweens the track between positions and raises the engine's
//!   transition-finished signal when the tween completes
//! - Resize observer plumbing ([`ResizeEntry`]) for container and track measurements
//!
//! No UI toolkit bindings live here.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod resize;
mod tween;


pub use carousel::Easing;
pub use controller::Controller;
pub use resize::{ResizeEntry, ResizeTarget, apply_resize, apply_resize_entries};
pub use tween::Tween;

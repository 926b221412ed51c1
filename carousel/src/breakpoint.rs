use crate::{Breakpoint, CarouselConfig};

/// Picks the breakpoint that applies at `container_width`.
///
/// Breakpoints are scanned from last to first and the first one with `width <= container_width`
/// wins, so among matching breakpoints the last declared one takes effect. When nothing matches
/// (typically width 0 before the first measurement), the first declared breakpoint is used.
pub fn select_breakpoint(breakpoints: &[Breakpoint], container_width: f64) -> Option<&Breakpoint> {
    breakpoints
        .iter()
        .rev()
        .find(|bp| bp.width <= container_width)
        .or_else(|| breakpoints.first())
}

/// Merges the matching breakpoint over `base`. Without breakpoints `base` is returned unchanged.
pub fn resolve(base: &CarouselConfig, breakpoints: &[Breakpoint], container_width: f64) -> CarouselConfig {
    match select_breakpoint(breakpoints, container_width) {
        Some(bp) => {
            ctrace!(width = bp.width, container_width, "breakpoint selected");
            bp.overrides.apply(base)
        }
        None => base.clone(),
    }
}

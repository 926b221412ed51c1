use alloc::vec::Vec;
use core::cell::Cell;
use core::ops::Range;

use crate::axis::Axis;
use crate::gesture::{self, GestureContext, SwipeOutcome};
use crate::layout::{self, LayoutInput};
use crate::navigation::{self, Move};
use crate::options::OnSettleCallback;
use crate::page;
use crate::timer::{Interval, Timeout};
use crate::{
    CarouselConfig, CarouselItem, CarouselOptions, CarouselState, ItemKey, ItemView, Lifecycle,
    NavDirection, SwipeEvent, TransitionPhase, Visibility, VisibleRange, breakpoint,
};

/// Distance of the edge bounce played when navigation is blocked.
pub const TILT_DISTANCE: f64 = 20.0;
/// How long the edge bounce is held before the track reverts.
pub const TILT_DURATION_MS: u64 = 150;

/// A headless carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or read a clock.
/// - Your adapter feeds it measured sizes, classified swipe events, the transition-finished
///   signal and clock ticks.
/// - It exposes index/position decisions and per-item render data.
///
/// For tween-driven transitions and resize feeds, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel<K = ItemKey> {
    options: CarouselOptions<K>,
    config: CarouselConfig,
    lifecycle: Lifecycle,
    phase: TransitionPhase,

    active_index: usize,
    active_page: usize,
    track_position: f64,
    swipe_position: f64,
    is_swiping: bool,
    transitioning: bool,

    raw_container_width: Option<f64>,
    container_width: f64,
    track_height: f64,
    suppress_transition: bool,

    autoplay: Option<Interval>,
    tilt: Option<Timeout>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<K> Carousel<K> {
    /// Creates a carousel from options.
    ///
    /// Until the first container resize the width is 0, so the config is resolved against the
    /// breakpoint fallback.
    pub fn new(options: CarouselOptions<K>) -> Self {
        let config = breakpoint::resolve(&options.config, &options.breakpoints, 0.0);
        let active_index =
            navigation::clamp_index(options.initial_active_index, options.count, config.items_to_show);
        cdebug!(
            count = options.count,
            active_index,
            breakpoints = options.breakpoints.len(),
            "Carousel::new"
        );
        let mut c = Self {
            active_page: page::active_page(active_index, options.count, config.items_to_show),
            options,
            config,
            lifecycle: Lifecycle::Active,
            phase: TransitionPhase::Idle,
            active_index,
            track_position: 0.0,
            swipe_position: 0.0,
            is_swiping: false,
            transitioning: false,
            raw_container_width: None,
            container_width: 0.0,
            track_height: 0.0,
            suppress_transition: false,
            autoplay: None,
            tilt: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        c.sync_autoplay();
        c
    }

    pub fn options(&self) -> &CarouselOptions<K> {
        &self.options
    }

    /// The effective config: base options merged with the breakpoint for the current width.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Replaces the options and reconciles index, position, page and autoplay against them.
    ///
    /// No transition is started: the track jumps to the reconciled position.
    pub fn set_options(&mut self, options: CarouselOptions<K>) {
        self.options = options;
        ctrace!(count = self.options.count, "Carousel::set_options");
        self.batch_update(|c| {
            c.reconcile();
            c.notify();
        });
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.batch_update(|c| {
            c.reconcile();
            c.notify();
        });
    }

    pub fn set_auto_play(&mut self, enabled: bool) {
        if self.options.config.enable_auto_play == enabled {
            return;
        }
        self.update_options(|o| o.config.enable_auto_play = enabled);
    }

    fn notify_now(&self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        if let Some(cb) = &self.options.on_update {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_update` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_page(&self) -> usize {
        self.active_page
    }

    pub fn track_position(&self) -> f64 {
        self.track_position
    }

    pub fn swipe_position(&self) -> f64 {
        self.swipe_position
    }

    /// Offset the track should be drawn at: the drag/tilt offset while swiping, else the settled
    /// position.
    pub fn track_offset(&self) -> f64 {
        if self.is_swiping {
            self.swipe_position
        } else {
            self.track_position
        }
    }

    pub fn is_swiping(&self) -> bool {
        self.is_swiping
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_disposed(&self) -> bool {
        self.lifecycle == Lifecycle::Disposed
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    pub fn track_height(&self) -> f64 {
        self.track_height
    }

    /// Transition duration the renderer should use for the next position change.
    ///
    /// 0 right after a container resize so the reposition does not animate; restored on the next
    /// `tick`.
    pub fn transition_ms(&self) -> u64 {
        if self.suppress_transition {
            0
        } else {
            self.config.transition_ms
        }
    }

    fn layout_input(&self) -> LayoutInput {
        LayoutInput {
            container_width: self.container_width,
            track_height: self.track_height,
            count: self.options.count,
            items_to_show: self.config.items_to_show,
            show_empty_slots: self.config.show_empty_slots,
            vertical_mode: self.config.vertical_mode,
        }
    }

    /// Slot size along the primary axis. Always derived, never stored.
    pub fn item_size(&self) -> f64 {
        layout::item_size(self.layout_input())
    }

    pub fn num_pages(&self) -> usize {
        layout::num_pages(self.options.count, self.config.items_to_show)
    }

    pub fn pages(&self) -> Range<usize> {
        0..self.num_pages()
    }

    /// Height of the visible window. In vertical mode this is derived from the item height; in
    /// horizontal mode it is the measured track height.
    pub fn viewport_height(&self) -> f64 {
        if self.config.vertical_mode {
            layout::vertical_viewport_height(
                self.item_size(),
                self.options.count,
                self.config.items_to_show,
            )
        } else {
            self.track_height
        }
    }

    pub fn axis(&self) -> Axis {
        Axis::new(self.config.vertical_mode, self.config.is_rtl)
    }

    pub fn item(&self, index: usize) -> CarouselItem<K> {
        CarouselItem {
            key: (self.options.get_item_key)(index),
            index,
        }
    }

    /// Returns a lightweight snapshot of the current state.
    pub fn state(&self) -> CarouselState {
        CarouselState {
            active_index: self.active_index,
            active_page: self.active_page,
            track_position: self.track_position,
            swipe_position: self.swipe_position,
            is_swiping: self.is_swiping,
            transitioning: self.transitioning,
            container_width: self.container_width,
            track_height: self.track_height,
            item_height: if self.config.vertical_mode {
                self.item_size()
            } else {
                0.0
            },
            transition_ms: self.transition_ms(),
        }
    }

    fn neighbour(&self, direction: NavDirection) -> usize {
        navigation::next_index(
            self.active_index,
            self.options.count,
            self.config.items_to_show,
            self.config.items_to_scroll,
            direction,
        )
    }

    pub fn can_slide_prev(&self) -> bool {
        self.neighbour(NavDirection::Prev) != self.active_index
    }

    pub fn can_slide_next(&self) -> bool {
        self.neighbour(NavDirection::Next) != self.active_index
    }

    pub fn prev_arrow_disabled(&self) -> bool {
        !self.can_slide_prev() && self.config.disable_arrows_on_end
    }

    pub fn next_arrow_disabled(&self) -> bool {
        !self.can_slide_next() && self.config.disable_arrows_on_end
    }

    pub fn visible_range(&self) -> VisibleRange {
        let end = crate::math::ceil_index(
            self.active_index as f64 + crate::math::slots(self.config.items_to_show),
        );
        VisibleRange {
            start_index: self.active_index,
            end_index: end.min(self.options.count),
        }
    }

    /// Classifies `index` relative to the visible window.
    pub fn visibility(&self, index: usize) -> Visibility {
        let start = self.active_index as f64;
        let end = start + crate::math::slots(self.config.items_to_show);
        let scroll = self.config.items_to_scroll as f64;
        let i = index as f64;

        if i >= start && i < end {
            Visibility::Visible
        } else if i >= start - scroll && i < start {
            Visibility::HiddenPrev
        } else if i > start && i < end + scroll {
            Visibility::HiddenNext
        } else {
            Visibility::Hidden
        }
    }

    fn item_view(&self, index: usize, size: f64) -> ItemView {
        let visibility = self.visibility(index);
        ItemView {
            index,
            visibility,
            focusable: !self.config.auto_tab_index_visible_items || visibility.is_visible(),
            size,
        }
    }

    /// Iterates over render data for every item without allocations.
    pub fn for_each_item(&self, mut f: impl FnMut(ItemView)) {
        let size = self.item_size();
        for index in 0..self.options.count {
            f(self.item_view(index, size));
        }
    }

    /// Collects render data for every item.
    pub fn items(&self) -> Vec<ItemView> {
        let mut out = Vec::with_capacity(self.options.count);
        self.for_each_item(|view| out.push(view));
        out
    }

    fn position_for(&self, index: usize) -> f64 {
        -(index as f64) * self.item_size()
    }

    fn update_active_page(&mut self) {
        let page = page::active_page(
            self.active_index,
            self.options.count,
            self.config.items_to_show,
        );
        if page != self.active_page {
            ctrace!(from = self.active_page, to = page, "active page changed");
            self.active_page = page;
            self.notify();
        }
    }

    /// Resolves breakpoints, then clamps the index, then recomputes the position and page.
    ///
    /// The order matters: a position computed from a stale index would be out of range.
    fn reconcile(&mut self) {
        self.config = breakpoint::resolve(
            &self.options.config,
            &self.options.breakpoints,
            self.container_width,
        );
        self.active_index = navigation::clamp_index(
            self.active_index,
            self.options.count,
            self.config.items_to_show,
        );
        self.track_position = self.position_for(self.active_index);
        self.update_active_page();
        self.sync_autoplay();
    }

    fn sync_autoplay(&mut self) {
        let at_end = !self.can_slide_next();
        let wanted = self.config.enable_auto_play && !at_end && !self.is_disposed();
        if !wanted {
            if self.autoplay.take().is_some() {
                cdebug!(active_index = self.active_index, at_end, "autoplay stopped");
            }
            return;
        }
        let speed = self.config.auto_play_speed_ms;
        match self.autoplay {
            Some(timer) if timer.period_ms() == speed.max(1) => {}
            _ => {
                cdebug!(speed_ms = speed, "autoplay armed");
                self.autoplay = Some(Interval::new(speed));
            }
        }
    }

    /// Applies a container width measurement.
    ///
    /// A width equal to the last reported one is a duplicate and ignored, so a resize observer
    /// that re-fires because of our own state update cannot loop.
    pub fn on_container_resize(&mut self, width: f64) {
        if self.is_disposed() || self.raw_container_width == Some(width) {
            return;
        }
        if !width.is_finite() || width < 0.0 {
            cwarn!(width, "ignoring invalid container width");
            return;
        }
        self.raw_container_width = Some(width);

        let measured = breakpoint::resolve(&self.options.config, &self.options.breakpoints, width);
        let spacing = if measured.vertical_mode {
            0.0
        } else {
            measured.outer_spacing * 2.0
        };
        let inner = (width - spacing).max(0.0);
        cdebug!(width, inner, "container resized");

        self.batch_update(|c| {
            c.container_width = inner;
            c.suppress_transition = true;
            c.reconcile();
            if let Some(cb) = &c.options.on_resize {
                cb(&c.config);
            }
            c.notify();
        });
    }

    /// Applies a track (content block) height measurement.
    pub fn on_track_resize(&mut self, height: f64) {
        if self.is_disposed() || self.track_height == height {
            return;
        }
        if !height.is_finite() || height < 0.0 {
            cwarn!(height, "ignoring invalid track height");
            return;
        }
        self.track_height = height;
        ctrace!(height, "track resized");
        if self.config.vertical_mode {
            self.track_position = self.position_for(self.active_index);
        }
        self.notify();
    }

    /// Advances by `items_to_scroll`. Returns `true` when a move started.
    ///
    /// At the end edge this is a no-op (optionally playing the tilt bounce).
    pub fn slide_next(&mut self) -> bool {
        self.slide(NavDirection::Next)
    }

    /// Retreats by `items_to_scroll`. Returns `true` when a move started.
    pub fn slide_prev(&mut self) -> bool {
        self.slide(NavDirection::Prev)
    }

    fn slide(&mut self, direction: NavDirection) -> bool {
        if self.is_disposed() {
            return false;
        }
        let target = self.neighbour(direction);
        if target != self.active_index {
            return self.go_to(target as isize);
        }
        if self.config.enable_tilt {
            self.start_tilt(direction);
        }
        false
    }

    /// Navigates to `target` (clamped). Returns `true` when a move started.
    ///
    /// A no-op when already at the edge in the requested direction: nothing changes and no
    /// callback fires.
    pub fn go_to(&mut self, target: isize) -> bool {
        if self.is_disposed() {
            return false;
        }
        let planned = navigation::plan_go_to(
            self.active_index,
            target,
            self.options.count,
            self.config.items_to_show,
            self.config.items_to_scroll,
        );
        match planned {
            Some(mv) => {
                self.begin_move(mv);
                true
            }
            None => false,
        }
    }

    /// Navigates to the first item of `page` (clamped to the last page).
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let page = page.min(self.num_pages() - 1);
        let target = page::page_start(page, self.config.items_to_show);
        self.go_to(isize::try_from(target).unwrap_or(isize::MAX))
    }

    /// Handles a click on an item; navigates there when `focus_on_select` is enabled.
    pub fn on_item_click(&mut self, index: usize) -> bool {
        if !self.config.focus_on_select {
            return false;
        }
        self.go_to(isize::try_from(index).unwrap_or(isize::MAX))
    }

    fn begin_move(&mut self, mv: Move) {
        let left = self.item(mv.from);
        let arriving = self.item(mv.to);
        let start_cb = match mv.direction {
            NavDirection::Next => &self.options.on_next_start,
            NavDirection::Prev => &self.options.on_prev_start,
        };
        if let Some(cb) = start_cb {
            cb(&left, &arriving);
        }

        let size = self.item_size();
        cdebug!(from = mv.from, to = mv.to, next = mv.direction.is_next(), "move started");
        self.batch_update(|c| {
            c.track_position -= size * (mv.to as f64 - mv.from as f64);
            c.active_index = mv.to;
            c.swipe_position = 0.0;
            c.is_swiping = false;
            c.tilt = None;
            c.transitioning = true;
            c.phase = TransitionPhase::Moving(mv.direction);
            c.update_active_page();
            c.sync_autoplay();
            c.notify();
        });
    }

    /// The transition-finished signal from the rendered track.
    ///
    /// Settles the pending move and fires `on_change` plus the direction's end callback. A signal
    /// with no move pending is ignored.
    pub fn on_transition_end(&mut self) {
        if self.is_disposed() {
            return;
        }
        let TransitionPhase::Moving(direction) = self.phase else {
            ctrace!("transition end without a pending move");
            return;
        };
        self.phase = TransitionPhase::Idle;
        self.transitioning = false;

        let item = self.item(self.active_index);
        let page = self.active_page;
        fn fire<K>(cb: &Option<OnSettleCallback<K>>, item: &CarouselItem<K>, page: usize) {
            if let Some(cb) = cb {
                cb(item, page);
            }
        }
        fire(&self.options.on_change, &item, page);
        match direction {
            NavDirection::Next => fire(&self.options.on_next_end, &item, page),
            NavDirection::Prev => fire(&self.options.on_prev_end, &item, page),
        }

        self.batch_update(|c| {
            c.sync_autoplay();
            c.notify();
        });
    }

    fn gesture_context(&self) -> GestureContext {
        GestureContext {
            axis: self.axis(),
            item_size: self.item_size(),
            active_index: self.active_index,
            count: self.options.count,
            items_to_show: self.config.items_to_show,
            items_to_scroll: self.config.items_to_scroll,
            track_position: self.track_position,
        }
    }

    /// A drag update. Moves the track with the pointer unless the drag is off-axis or past the
    /// edge stop, in which case the update is dropped.
    pub fn on_swiping(&mut self, ev: SwipeEvent) {
        if self.is_disposed() || !self.config.enable_swipe {
            return;
        }
        let Some(position) = gesture::drag_position(&self.gesture_context(), &ev) else {
            return;
        };
        self.swipe_position = position;
        self.is_swiping = true;
        self.transitioning = true;
        self.tilt = None;
        self.notify();
    }

    /// The pointer was released. Either commits a move or snaps back.
    pub fn on_swiped(&mut self, ev: SwipeEvent) {
        if self.is_disposed() || !self.config.enable_swipe {
            return;
        }
        let outcome = gesture::release(&self.gesture_context(), &ev);
        ctrace!(?outcome, "swipe released");
        self.batch_update(|c| {
            // Cleared before navigating so an edge no-op still snaps the track back.
            c.is_swiping = false;
            c.swipe_position = 0.0;
            c.transitioning = matches!(c.phase, TransitionPhase::Moving(_));
            if let SwipeOutcome::GoTo(target) = outcome {
                c.go_to(target);
            }
            c.notify();
        });
    }

    fn start_tilt(&mut self, direction: NavDirection) {
        self.swipe_position = match direction {
            NavDirection::Next => self.track_position - TILT_DISTANCE,
            NavDirection::Prev => TILT_DISTANCE,
        };
        self.is_swiping = true;
        self.tilt = Some(Timeout::new(TILT_DURATION_MS));
        ctrace!(next = direction.is_next(), "tilt");
        self.notify();
    }

    pub fn is_tilting(&self) -> bool {
        self.tilt.is_some()
    }

    /// Advances clock-driven state: restores the transition duration after a resize, reverts an
    /// expired tilt and fires due autoplay ticks.
    ///
    /// Autoplay only advances while no move is in flight.
    pub fn tick(&mut self, now_ms: u64) {
        if self.is_disposed() {
            return;
        }
        self.batch_update(|c| {
            if c.suppress_transition {
                c.suppress_transition = false;
                c.notify();
            }

            let tilt_done = c.tilt.as_mut().is_some_and(|t| t.is_expired(now_ms));
            if tilt_done {
                c.tilt = None;
                c.is_swiping = false;
                c.swipe_position = 0.0;
                c.notify();
            }

            let due = c.autoplay.as_mut().is_some_and(|t| t.poll(now_ms));
            if due && !c.transitioning {
                ctrace!(now_ms, "autoplay tick");
                c.slide_next();
            }
        });
    }

    /// Tears the engine down: cancels autoplay, tilt and any pending transition. Every later
    /// asynchronous update is ignored.
    pub fn dispose(&mut self) {
        if self.is_disposed() {
            return;
        }
        cdebug!("Carousel::dispose");
        self.lifecycle = Lifecycle::Disposed;
        self.autoplay = None;
        self.tilt = None;
        self.phase = TransitionPhase::Idle;
        self.transitioning = false;
        self.is_swiping = false;
        self.swipe_position = 0.0;
    }
}

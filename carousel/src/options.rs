use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::carousel::Carousel;
use crate::{CarouselItem, Easing, ItemKey, ItemPadding, ItemPosition};

/// Fired when a transition settles: `(item arrived at, active page)`.
///
/// Used for `on_change`, `on_next_end` and `on_prev_end`.
pub type OnSettleCallback<K> = Arc<dyn Fn(&CarouselItem<K>, usize) + Send + Sync>;

/// Fired when a move begins: `(item left, item arriving)`.
///
/// Every committed move fires it, whatever started it: arrows, `go_to`, page jumps, swipes and
/// autoplay. Blocked or no-op navigation never does.
pub type OnStartCallback<K> = Arc<dyn Fn(&CarouselItem<K>, &CarouselItem<K>) + Send + Sync>;

/// Fired after a container resize with the effective (breakpoint-resolved) config.
pub type OnResizeCallback = Arc<dyn Fn(&CarouselConfig) + Send + Sync>;

/// Fired whenever observable engine state changes. Coalesced by `Carousel::batch_update`.
pub type OnUpdateCallback<K> = Arc<dyn Fn(&Carousel<K>) + Send + Sync>;

/// Resolved carousel configuration.
///
/// This is the plain-data part of the options: everything a breakpoint may override.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Number of simultaneously visible items. May be fractional for peeking.
    pub items_to_show: f64,
    /// Step size of a single navigation action.
    pub items_to_scroll: usize,
    pub vertical_mode: bool,
    pub is_rtl: bool,
    pub item_position: ItemPosition,
    pub item_padding: ItemPadding,
    /// Space reserved at both ends of the container (horizontal mode only).
    pub outer_spacing: f64,
    /// Size slots by `items_to_show` even when there are fewer items.
    pub show_empty_slots: bool,
    pub enable_auto_play: bool,
    pub auto_play_speed_ms: u64,
    /// Bounce the track when navigation is blocked at an edge.
    pub enable_tilt: bool,
    pub transition_ms: u64,
    pub easing: Easing,
    pub tilt_easing: Easing,
    pub enable_swipe: bool,
    pub enable_mouse_swipe: bool,
    pub prevent_default_touchmove_event: bool,
    /// Navigate to an item when it is clicked.
    pub focus_on_select: bool,
    pub auto_tab_index_visible_items: bool,
    pub disable_arrows_on_end: bool,
    pub show_arrows: bool,
    pub pagination: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            items_to_show: 1.0,
            items_to_scroll: 1,
            vertical_mode: false,
            is_rtl: false,
            item_position: ItemPosition::Center,
            item_padding: ItemPadding::default(),
            outer_spacing: 0.0,
            show_empty_slots: false,
            enable_auto_play: false,
            auto_play_speed_ms: 2000,
            enable_tilt: true,
            transition_ms: 500,
            easing: Easing::Ease,
            tilt_easing: Easing::Ease,
            enable_swipe: true,
            enable_mouse_swipe: true,
            prevent_default_touchmove_event: false,
            focus_on_select: false,
            auto_tab_index_visible_items: true,
            disable_arrows_on_end: true,
            show_arrows: true,
            pagination: true,
        }
    }
}

/// A partial [`CarouselConfig`]: unset fields inherit from the base config.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConfigOverride {
    pub items_to_show: Option<f64>,
    pub items_to_scroll: Option<usize>,
    pub vertical_mode: Option<bool>,
    pub is_rtl: Option<bool>,
    pub item_position: Option<ItemPosition>,
    pub item_padding: Option<ItemPadding>,
    pub outer_spacing: Option<f64>,
    pub show_empty_slots: Option<bool>,
    pub enable_auto_play: Option<bool>,
    pub auto_play_speed_ms: Option<u64>,
    pub enable_tilt: Option<bool>,
    pub transition_ms: Option<u64>,
    pub easing: Option<Easing>,
    pub tilt_easing: Option<Easing>,
    pub enable_swipe: Option<bool>,
    pub enable_mouse_swipe: Option<bool>,
    pub prevent_default_touchmove_event: Option<bool>,
    pub focus_on_select: Option<bool>,
    pub auto_tab_index_visible_items: Option<bool>,
    pub disable_arrows_on_end: Option<bool>,
    pub show_arrows: Option<bool>,
    pub pagination: Option<bool>,
}

impl ConfigOverride {
    /// Shallow merge: every field set on `self` replaces the one in `base`.
    pub fn apply(&self, base: &CarouselConfig) -> CarouselConfig {
        fn pick<T: Clone>(over: &Option<T>, base: &T) -> T {
            over.clone().unwrap_or_else(|| base.clone())
        }

        CarouselConfig {
            items_to_show: pick(&self.items_to_show, &base.items_to_show),
            items_to_scroll: pick(&self.items_to_scroll, &base.items_to_scroll),
            vertical_mode: pick(&self.vertical_mode, &base.vertical_mode),
            is_rtl: pick(&self.is_rtl, &base.is_rtl),
            item_position: pick(&self.item_position, &base.item_position),
            item_padding: pick(&self.item_padding, &base.item_padding),
            outer_spacing: pick(&self.outer_spacing, &base.outer_spacing),
            show_empty_slots: pick(&self.show_empty_slots, &base.show_empty_slots),
            enable_auto_play: pick(&self.enable_auto_play, &base.enable_auto_play),
            auto_play_speed_ms: pick(&self.auto_play_speed_ms, &base.auto_play_speed_ms),
            enable_tilt: pick(&self.enable_tilt, &base.enable_tilt),
            transition_ms: pick(&self.transition_ms, &base.transition_ms),
            easing: pick(&self.easing, &base.easing),
            tilt_easing: pick(&self.tilt_easing, &base.tilt_easing),
            enable_swipe: pick(&self.enable_swipe, &base.enable_swipe),
            enable_mouse_swipe: pick(&self.enable_mouse_swipe, &base.enable_mouse_swipe),
            prevent_default_touchmove_event: pick(
                &self.prevent_default_touchmove_event,
                &base.prevent_default_touchmove_event,
            ),
            focus_on_select: pick(&self.focus_on_select, &base.focus_on_select),
            auto_tab_index_visible_items: pick(
                &self.auto_tab_index_visible_items,
                &base.auto_tab_index_visible_items,
            ),
            disable_arrows_on_end: pick(&self.disable_arrows_on_end, &base.disable_arrows_on_end),
            show_arrows: pick(&self.show_arrows, &base.show_arrows),
            pagination: pick(&self.pagination, &base.pagination),
        }
    }

    pub fn with_items_to_show(mut self, items_to_show: f64) -> Self {
        self.items_to_show = Some(items_to_show);
        self
    }

    pub fn with_items_to_scroll(mut self, items_to_scroll: usize) -> Self {
        self.items_to_scroll = Some(items_to_scroll);
        self
    }

    pub fn with_auto_play_speed_ms(mut self, speed_ms: u64) -> Self {
        self.auto_play_speed_ms = Some(speed_ms);
        self
    }
}

/// A width threshold with the config fields it overrides.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    /// Minimum container width (inclusive) at which this breakpoint applies.
    pub width: f64,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub overrides: ConfigOverride,
}

impl Breakpoint {
    pub fn new(width: f64, overrides: ConfigOverride) -> Self {
        Self { width, overrides }
    }
}

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: closures are stored in `Arc`s, so adapters can tweak a field and call
/// `Carousel::set_options` without reallocating callbacks.
pub struct CarouselOptions<K = ItemKey> {
    /// Number of items. The engine never looks at item content.
    pub count: usize,
    pub get_item_key: Arc<dyn Fn(usize) -> K + Send + Sync>,
    pub config: CarouselConfig,
    /// Responsive overrides, in declaration order.
    pub breakpoints: Vec<Breakpoint>,
    pub initial_active_index: usize,

    pub on_change: Option<OnSettleCallback<K>>,
    pub on_next_start: Option<OnStartCallback<K>>,
    pub on_prev_start: Option<OnStartCallback<K>>,
    pub on_next_end: Option<OnSettleCallback<K>>,
    pub on_prev_end: Option<OnSettleCallback<K>>,
    pub on_resize: Option<OnResizeCallback>,
    pub on_update: Option<OnUpdateCallback<K>>,
}

impl<K> Clone for CarouselOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            get_item_key: Arc::clone(&self.get_item_key),
            config: self.config.clone(),
            breakpoints: self.breakpoints.clone(),
            initial_active_index: self.initial_active_index,
            on_change: self.on_change.clone(),
            on_next_start: self.on_next_start.clone(),
            on_prev_start: self.on_prev_start.clone(),
            on_next_end: self.on_next_end.clone(),
            on_prev_end: self.on_prev_end.clone(),
            on_resize: self.on_resize.clone(),
            on_update: self.on_update.clone(),
        }
    }
}

impl CarouselOptions<ItemKey> {
    /// Creates options for a carousel keyed by index (`ItemKey = u64`).
    pub fn new(count: usize) -> Self {
        Self::new_with_key(count, |i| i as u64)
    }
}

impl<K> CarouselOptions<K> {
    /// Creates options with a custom key mapping, so callbacks can report a stable item identity.
    pub fn new_with_key(count: usize, get_item_key: impl Fn(usize) -> K + Send + Sync + 'static) -> Self {
        Self {
            count,
            get_item_key: Arc::new(get_item_key),
            config: CarouselConfig::default(),
            breakpoints: Vec::new(),
            initial_active_index: 0,
            on_change: None,
            on_next_start: None,
            on_prev_start: None,
            on_next_end: None,
            on_prev_end: None,
            on_resize: None,
            on_update: None,
        }
    }

    pub fn with_config(mut self, config: CarouselConfig) -> Self {
        self.config = config;
        self
    }

    /// Applies `f` to the base config in place.
    pub fn configure(mut self, f: impl FnOnce(&mut CarouselConfig)) -> Self {
        f(&mut self.config);
        self
    }

    pub fn with_items_to_show(mut self, items_to_show: f64) -> Self {
        self.config.items_to_show = items_to_show;
        self
    }

    pub fn with_items_to_scroll(mut self, items_to_scroll: usize) -> Self {
        self.config.items_to_scroll = items_to_scroll;
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: impl IntoIterator<Item = Breakpoint>) -> Self {
        self.breakpoints = breakpoints.into_iter().collect();
        self
    }

    pub fn with_initial_active_index(mut self, index: usize) -> Self {
        self.initial_active_index = index;
        self
    }

    pub fn with_on_change(
        mut self,
        f: Option<impl Fn(&CarouselItem<K>, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_next_start(
        mut self,
        f: Option<impl Fn(&CarouselItem<K>, &CarouselItem<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_next_start = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_prev_start(
        mut self,
        f: Option<impl Fn(&CarouselItem<K>, &CarouselItem<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_prev_start = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_next_end(
        mut self,
        f: Option<impl Fn(&CarouselItem<K>, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_next_end = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_prev_end(
        mut self,
        f: Option<impl Fn(&CarouselItem<K>, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_prev_end = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_resize(mut self, f: Option<impl Fn(&CarouselConfig) + Send + Sync + 'static>) -> Self {
        self.on_resize = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_update(mut self, f: Option<impl Fn(&Carousel<K>) + Send + Sync + 'static>) -> Self {
        self.on_update = f.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> core::fmt::Debug for CarouselOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("config", &self.config)
            .field("breakpoints", &self.breakpoints)
            .field("initial_active_index", &self.initial_active_index)
            .finish_non_exhaustive()
    }
}

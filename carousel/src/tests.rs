use crate::*;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Ev {
    Change(usize, usize),
    NextStart(usize, usize),
    PrevStart(usize, usize),
    NextEnd(usize, usize),
    PrevEnd(usize, usize),
}

type Log = Arc<Mutex<Vec<Ev>>>;

fn record(options: CarouselOptions) -> (CarouselOptions, Log) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let (a, b, c, d, e) = (
        Arc::clone(&log),
        Arc::clone(&log),
        Arc::clone(&log),
        Arc::clone(&log),
        Arc::clone(&log),
    );
    let options = options
        .with_on_change(Some(move |it: &CarouselItem<u64>, page: usize| {
            a.lock().unwrap().push(Ev::Change(it.index, page));
        }))
        .with_on_next_start(Some(move |from: &CarouselItem<u64>, to: &CarouselItem<u64>| {
            b.lock().unwrap().push(Ev::NextStart(from.index, to.index));
        }))
        .with_on_prev_start(Some(move |from: &CarouselItem<u64>, to: &CarouselItem<u64>| {
            c.lock().unwrap().push(Ev::PrevStart(from.index, to.index));
        }))
        .with_on_next_end(Some(move |it: &CarouselItem<u64>, page: usize| {
            d.lock().unwrap().push(Ev::NextEnd(it.index, page));
        }))
        .with_on_prev_end(Some(move |it: &CarouselItem<u64>, page: usize| {
            e.lock().unwrap().push(Ev::PrevEnd(it.index, page));
        }));
    (options, log)
}

fn changes(log: &Log) -> usize {
    log.lock()
        .unwrap()
        .iter()
        .filter(|ev| matches!(ev, Ev::Change(..)))
        .count()
}

/// A carousel measured at 500 wide.
fn measured(options: CarouselOptions) -> Carousel {
    let mut c = Carousel::new(options);
    c.on_container_resize(500.0);
    c
}

fn settle(c: &mut Carousel) {
    c.on_transition_end();
}

fn show(n: f64) -> ConfigOverride {
    ConfigOverride::default().with_items_to_show(n)
}

#[test]
fn num_pages_rounds_up_and_never_drops_below_one() {
    assert_eq!(layout::num_pages(0, 1.0), 1);
    assert_eq!(layout::num_pages(5, 1.0), 5);
    assert_eq!(layout::num_pages(7, 2.0), 4);
    assert_eq!(layout::num_pages(10, 3.0), 4);
    assert_eq!(layout::num_pages(3, 2.5), 2);
    // items_to_show below 1 is treated as 1
    assert_eq!(layout::num_pages(5, 0.0), 5);
    assert_eq!(layout::num_pages(4, 0.5), 4);
}

#[test]
fn breakpoint_picks_widest_match_at_or_below_width() {
    let base = CarouselConfig::default();
    let bps = vec![
        Breakpoint::new(0.0, show(1.0)),
        Breakpoint::new(600.0, show(2.0)),
        Breakpoint::new(900.0, show(3.0)),
    ];
    assert_eq!(breakpoint::resolve(&base, &bps, 700.0).items_to_show, 2.0);
    assert_eq!(breakpoint::resolve(&base, &bps, 600.0).items_to_show, 2.0);
    assert_eq!(breakpoint::resolve(&base, &bps, 599.9).items_to_show, 1.0);
    assert_eq!(breakpoint::resolve(&base, &bps, 1200.0).items_to_show, 3.0);
}

#[test]
fn breakpoint_falls_back_to_first_declared_when_none_match() {
    let base = CarouselConfig::default();
    let bps = vec![
        Breakpoint::new(300.0, show(2.0)),
        Breakpoint::new(600.0, show(3.0)),
    ];
    assert_eq!(breakpoint::resolve(&base, &bps, 0.0).items_to_show, 2.0);
    assert_eq!(breakpoint::resolve(&base, &bps, 299.0).items_to_show, 2.0);
}

#[test]
fn unsorted_breakpoints_use_last_declared_match() {
    let base = CarouselConfig::default();
    let bps = vec![
        Breakpoint::new(900.0, show(3.0)),
        Breakpoint::new(0.0, show(1.0)),
        Breakpoint::new(600.0, show(2.0)),
    ];
    assert_eq!(breakpoint::resolve(&base, &bps, 700.0).items_to_show, 2.0);
    // 900 matches too, but it was declared before 600.
    assert_eq!(breakpoint::resolve(&base, &bps, 1000.0).items_to_show, 2.0);
}

#[test]
fn breakpoint_override_is_shallow() {
    let base = CarouselConfig {
        items_to_scroll: 2,
        transition_ms: 300,
        ..CarouselConfig::default()
    };
    assert_eq!(breakpoint::resolve(&base, &[], 500.0), base);

    let bps = vec![Breakpoint::new(0.0, show(4.0).with_auto_play_speed_ms(900))];
    let cfg = breakpoint::resolve(&base, &bps, 500.0);
    assert_eq!(cfg.items_to_show, 4.0);
    assert_eq!(cfg.auto_play_speed_ms, 900);
    assert_eq!(cfg.items_to_scroll, 2);
    assert_eq!(cfg.transition_ms, 300);
}

#[test]
fn item_size_depends_on_mode_and_empty_slots() {
    let input = layout::LayoutInput {
        container_width: 600.0,
        track_height: 1000.0,
        count: 5,
        items_to_show: 3.0,
        show_empty_slots: false,
        vertical_mode: false,
    };
    assert_eq!(layout::item_size(input), 200.0);

    // Fewer items than slots: items grow to fill the container...
    let few = layout::LayoutInput { count: 2, ..input };
    assert_eq!(layout::item_size(few), 300.0);
    // ...unless empty slots are kept.
    let empty = layout::LayoutInput {
        show_empty_slots: true,
        ..few
    };
    assert_eq!(layout::item_size(empty), 200.0);

    let zero_show = layout::LayoutInput {
        items_to_show: 0.0,
        ..input
    };
    assert_eq!(layout::item_size(zero_show), 600.0);

    // Vertical mode measures the track content, not the container.
    let vertical = layout::LayoutInput {
        vertical_mode: true,
        ..input
    };
    assert_eq!(layout::item_size(vertical), 200.0);
}

#[test]
fn next_index_clamps_to_window_limits() {
    use NavDirection::*;
    assert_eq!(navigation::next_index(0, 5, 1.0, 1, Next), 1);
    assert_eq!(navigation::next_index(4, 5, 1.0, 1, Next), 4);
    assert_eq!(navigation::next_index(2, 5, 2.0, 2, Next), 3);
    assert_eq!(navigation::next_index(1, 5, 1.0, 3, Prev), 0);
    // Not enough items to fill the window: nothing moves.
    assert_eq!(navigation::next_index(0, 2, 3.0, 1, Next), 0);
    assert_eq!(navigation::next_index(0, 0, 1.0, 1, Next), 0);
}

#[test]
fn advancing_through_five_items_stops_at_the_end() {
    let (options, log) = record(CarouselOptions::new(5));
    let mut c = measured(options.configure(|cfg| cfg.enable_tilt = false));

    for expected in 1..=4 {
        assert!(c.slide_next());
        settle(&mut c);
        assert_eq!(c.active_index(), expected);
    }
    assert_eq!(changes(&log), 4);

    let before = c.state();
    for _ in 0..3 {
        assert!(!c.slide_next());
        settle(&mut c);
    }
    assert_eq!(c.active_index(), 4);
    assert_eq!(c.state(), before);
    assert_eq!(changes(&log), 4);
}

#[test]
fn go_to_keeps_window_inside_items() {
    for count in 0..8usize {
        for items_to_show in [1.0, 2.0, 3.0, 2.5] {
            for start in 0..count.max(1) {
                for target in -3isize..12 {
                    let mut c = measured(
                        CarouselOptions::new(count)
                            .with_items_to_show(items_to_show)
                            .with_initial_active_index(start),
                    );
                    c.go_to(target);
                    let index = c.active_index();
                    if (count as f64) < items_to_show {
                        assert_eq!(index, 0, "count={count} show={items_to_show}");
                    } else {
                        assert!(
                            index as f64 + items_to_show <= count as f64,
                            "count={count} show={items_to_show} start={start} target={target} index={index}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn go_to_clamps_negative_and_snaps_past_end() {
    let mut c = measured(CarouselOptions::new(5).with_initial_active_index(3));
    assert!(c.go_to(-5));
    assert_eq!(c.active_index(), 0);
    settle(&mut c);

    assert!(c.go_to(40));
    assert_eq!(c.active_index(), 4);

    let mut c = measured(CarouselOptions::new(6).with_items_to_show(2.0));
    assert!(c.go_to(5));
    assert_eq!(c.active_index(), 4);
}

#[test]
fn go_to_at_edge_is_a_silent_noop() {
    let (options, log) = record(CarouselOptions::new(5));
    let mut c = measured(options);
    let before = c.state();
    assert!(!c.go_to(-1));
    assert!(!c.go_to(0));
    assert_eq!(c.state(), before);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn settling_returns_straight_to_idle() {
    let phases = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&phases);
    let mut c = measured(CarouselOptions::new(4).with_on_update(Some(move |c: &Carousel| {
        seen.lock().unwrap().push(c.phase());
    })));
    phases.lock().unwrap().clear();

    assert!(c.slide_next());
    settle(&mut c);
    settle(&mut c);
    assert_eq!(
        *phases.lock().unwrap(),
        vec![TransitionPhase::Moving(NavDirection::Next), TransitionPhase::Idle]
    );
}

#[test]
fn moves_fire_direction_specific_callbacks() {
    let (options, log) = record(CarouselOptions::new(5));
    let mut c = measured(options);

    assert!(c.go_to(3));
    assert_eq!(c.phase(), TransitionPhase::Moving(NavDirection::Next));
    assert!(c.is_transitioning());
    settle(&mut c);
    assert_eq!(c.phase(), TransitionPhase::Idle);
    assert!(!c.is_transitioning());

    assert!(c.go_to(1));
    settle(&mut c);

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            Ev::NextStart(0, 3),
            Ev::Change(3, 3),
            Ev::NextEnd(3, 3),
            Ev::PrevStart(3, 1),
            Ev::Change(1, 1),
            Ev::PrevEnd(1, 1),
        ]
    );
}

#[test]
fn transition_end_without_pending_move_is_ignored() {
    let (options, log) = record(CarouselOptions::new(5));
    let mut c = measured(options);
    settle(&mut c);
    assert!(c.go_to(2));
    settle(&mut c);
    settle(&mut c);
    assert_eq!(changes(&log), 1);
}

#[test]
fn track_position_follows_signed_item_distance() {
    let mut c = measured(CarouselOptions::new(5));
    assert_eq!(c.item_size(), 500.0);
    c.go_to(2);
    assert_eq!(c.track_position(), -1000.0);
    settle(&mut c);
    c.slide_prev();
    assert_eq!(c.track_position(), -500.0);
    assert_eq!(c.track_offset(), -500.0);
}

#[test]
fn short_swipe_resets_to_settled_position() {
    let mut c = measured(CarouselOptions::new(5));
    let ev = SwipeEvent::horizontal(-50.0); // item_size / 10

    c.on_swiping(ev);
    assert!(c.is_swiping());
    assert_eq!(c.track_offset(), -50.0);

    c.on_swiped(ev);
    assert!(!c.is_swiping());
    assert!(!c.is_transitioning());
    assert_eq!(c.active_index(), 0);
    assert_eq!(c.track_offset(), 0.0);
}

#[test]
fn long_swipe_skips_more_than_one_step() {
    assert_eq!(gesture::items_to_advance(750.0, 500.0, 1), 2);
    assert_eq!(gesture::items_to_advance(150.0, 500.0, 3), 3);

    let mut c = measured(CarouselOptions::new(5));
    let ev = SwipeEvent::horizontal(-750.0);
    c.on_swiping(ev);
    c.on_swiped(ev);
    assert_eq!(c.active_index(), 2);
    assert_eq!(c.track_position(), -1000.0);
}

#[test]
fn rtl_swipes_right_to_advance() {
    let mut c = measured(CarouselOptions::new(5).configure(|cfg| cfg.is_rtl = true));
    let ev = SwipeEvent::horizontal(750.0);
    c.on_swiping(ev);
    assert_eq!(c.track_offset(), -750.0);
    c.on_swiped(ev);
    assert_eq!(c.active_index(), 2);
}

#[test]
fn vertical_mode_uses_track_height_and_ignores_horizontal_swipes() {
    let mut c = Carousel::new(CarouselOptions::new(5).configure(|cfg| cfg.vertical_mode = true));
    c.on_container_resize(300.0);
    c.on_track_resize(1000.0);
    assert_eq!(c.item_size(), 200.0);
    assert_eq!(c.viewport_height(), 200.0);

    c.on_swiped(SwipeEvent::horizontal(-500.0));
    assert_eq!(c.active_index(), 0);

    let up = SwipeEvent::vertical(-300.0);
    c.on_swiping(up);
    assert_eq!(c.track_offset(), -300.0);
    c.on_swiped(up);
    assert_eq!(c.active_index(), 2);
    assert_eq!(c.track_position(), -400.0);
}

#[test]
fn drag_past_edge_stop_is_ignored() {
    let mut c = measured(CarouselOptions::new(5));
    // Going back from index 0 allows half an item of overdrag.
    c.on_swiping(SwipeEvent::horizontal(300.0));
    assert!(!c.is_swiping());

    c.on_swiping(SwipeEvent::horizontal(200.0));
    assert!(c.is_swiping());
    assert_eq!(c.track_offset(), 200.0);

    // Releasing past the threshold at the edge still snaps back.
    c.on_swiped(SwipeEvent::horizontal(200.0));
    assert_eq!(c.active_index(), 0);
    assert!(!c.is_swiping());
    assert_eq!(c.track_offset(), 0.0);
}

#[test]
fn disabled_swipe_ignores_gestures() {
    let mut c = measured(CarouselOptions::new(5).configure(|cfg| cfg.enable_swipe = false));
    let ev = SwipeEvent::horizontal(-750.0);
    c.on_swiping(ev);
    c.on_swiped(ev);
    assert!(!c.is_swiping());
    assert_eq!(c.active_index(), 0);
}

#[test]
fn axis_maps_physical_directions() {
    let ltr = Axis::new(false, false);
    assert_eq!(ltr.classify(SwipeDir::Left), Some(NavDirection::Next));
    assert_eq!(ltr.classify(SwipeDir::Right), Some(NavDirection::Prev));
    assert_eq!(ltr.classify(SwipeDir::Up), None);

    let rtl = Axis::new(false, true);
    assert_eq!(rtl.classify(SwipeDir::Left), Some(NavDirection::Prev));
    assert_eq!(rtl.classify(SwipeDir::Right), Some(NavDirection::Next));
    assert_eq!(rtl.sign(), -1.0);

    let vertical = Axis::new(true, true);
    assert_eq!(vertical.classify(SwipeDir::Up), Some(NavDirection::Next));
    assert_eq!(vertical.classify(SwipeDir::Down), Some(NavDirection::Prev));
    assert_eq!(vertical.classify(SwipeDir::Left), None);
    assert_eq!(vertical.sign(), 1.0);
}

#[test]
fn active_page_rounds_up_and_clamps() {
    assert_eq!(page::active_page(3, 7, 2.0), 2);
    assert_eq!(page::active_page(6, 7, 2.0), 3);
    assert_eq!(page::active_page(5, 5, 1.0), 4);
    assert_eq!(page::active_page(0, 0, 1.0), 0);
    // Fewer items than slots: a single page.
    assert_eq!(page::active_page(1, 2, 3.0), 0);
}

#[test]
fn go_to_page_lands_on_page_start() {
    let mut c = measured(CarouselOptions::new(7).with_items_to_show(2.0));
    assert_eq!(c.pages(), 0..4);

    assert!(c.go_to_page(2));
    assert_eq!(c.active_index(), 4);
    assert_eq!(c.active_page(), 2);
    settle(&mut c);

    assert!(c.go_to_page(9));
    assert_eq!(c.active_index(), 5);
    assert_eq!(c.active_page(), 3);
}

#[test]
fn autoplay_advances_and_stops_at_the_end() {
    let (options, log) = record(
        CarouselOptions::new(3).configure(|cfg| {
            cfg.enable_auto_play = true;
            cfg.auto_play_speed_ms = 1000;
        }),
    );
    let mut c = measured(options);
    assert!(c.is_autoplaying());

    c.tick(0);
    c.tick(999);
    assert_eq!(c.active_index(), 0);
    c.tick(1000);
    assert_eq!(c.active_index(), 1);

    // Still moving: the due tick is skipped.
    c.tick(2000);
    assert_eq!(c.active_index(), 1);
    settle(&mut c);

    c.tick(3000);
    assert_eq!(c.active_index(), 2);
    settle(&mut c);
    assert!(!c.is_autoplaying());
    assert_eq!(changes(&log), 2);

    for now_ms in [4000, 5000, 6000] {
        c.tick(now_ms);
    }
    assert_eq!(changes(&log), 2);
    assert_eq!(c.active_index(), 2);
}

#[test]
fn autoplay_rearms_when_breakpoint_changes_speed() {
    let mut c = Carousel::new(
        CarouselOptions::new(5)
            .configure(|cfg| cfg.enable_auto_play = true)
            .with_breakpoints([
                Breakpoint::new(0.0, ConfigOverride::default().with_auto_play_speed_ms(1000)),
                Breakpoint::new(600.0, ConfigOverride::default().with_auto_play_speed_ms(3000)),
            ]),
    );
    c.on_container_resize(700.0);
    assert_eq!(c.config().auto_play_speed_ms, 3000);

    c.tick(0);
    c.tick(1000);
    c.tick(2999);
    assert_eq!(c.active_index(), 0);
    c.tick(3000);
    assert_eq!(c.active_index(), 1);
}

#[test]
fn toggling_autoplay_creates_and_cancels_the_timer() {
    let mut c = measured(CarouselOptions::new(5));
    assert!(!c.is_autoplaying());
    c.set_auto_play(true);
    assert!(c.is_autoplaying());
    c.set_auto_play(false);
    assert!(!c.is_autoplaying());
    c.tick(0);
    c.tick(10_000);
    assert_eq!(c.active_index(), 0);
}

#[test]
fn resize_reclamps_index_before_repositioning() {
    let resized = Arc::new(Mutex::new(Vec::new()));
    let r = Arc::clone(&resized);
    let mut c = Carousel::new(
        CarouselOptions::new(5)
            .with_breakpoints([Breakpoint::new(0.0, show(1.0)), Breakpoint::new(600.0, show(3.0))])
            .with_on_resize(Some(move |cfg: &CarouselConfig| {
                r.lock().unwrap().push(cfg.items_to_show);
            })),
    );
    c.on_container_resize(500.0);
    c.go_to(4);
    settle(&mut c);
    assert_eq!(c.active_index(), 4);

    c.on_container_resize(900.0);
    assert_eq!(*resized.lock().unwrap(), vec![1.0, 3.0]);
    assert_eq!(c.active_index(), 2);
    assert_eq!(c.item_size(), 300.0);
    assert_eq!(c.track_position(), -600.0);
    assert_eq!(c.active_page(), 1);

    // Reposition does not animate; duration comes back on the next tick.
    assert_eq!(c.transition_ms(), 0);
    c.tick(0);
    assert_eq!(c.transition_ms(), 500);
}

#[test]
fn duplicate_resize_is_ignored() {
    let resized = Arc::new(AtomicUsize::new(0));
    let r = Arc::clone(&resized);
    let mut c = Carousel::new(CarouselOptions::new(5).with_on_resize(Some(
        move |_: &CarouselConfig| {
            r.fetch_add(1, Ordering::SeqCst);
        },
    )));
    c.on_container_resize(500.0);
    c.on_container_resize(500.0);
    assert_eq!(resized.load(Ordering::SeqCst), 1);
    c.on_container_resize(400.0);
    assert_eq!(resized.load(Ordering::SeqCst), 2);
}

#[test]
fn invalid_measurements_are_ignored() {
    let mut c = measured(CarouselOptions::new(3));
    c.on_container_resize(f64::NAN);
    c.on_container_resize(-10.0);
    assert_eq!(c.container_width(), 500.0);
    c.on_track_resize(f64::INFINITY);
    assert_eq!(c.track_height(), 0.0);
}

#[test]
fn outer_spacing_shrinks_horizontal_container() {
    let mut c = Carousel::new(CarouselOptions::new(5).configure(|cfg| cfg.outer_spacing = 50.0));
    c.on_container_resize(600.0);
    assert_eq!(c.container_width(), 500.0);

    let mut v = Carousel::new(CarouselOptions::new(5).configure(|cfg| {
        cfg.outer_spacing = 50.0;
        cfg.vertical_mode = true;
    }));
    v.on_container_resize(600.0);
    assert_eq!(v.container_width(), 600.0);
}

#[test]
fn tilt_bounces_at_edges_then_reverts() {
    let mut c = measured(CarouselOptions::new(3));
    assert!(!c.slide_prev());
    assert!(c.is_tilting());
    assert!(c.is_swiping());
    assert_eq!(c.track_offset(), TILT_DISTANCE);
    assert_eq!(c.active_index(), 0);

    c.tick(1000);
    c.tick(1149);
    assert!(c.is_tilting());
    c.tick(1000 + TILT_DURATION_MS);
    assert!(!c.is_tilting());
    assert!(!c.is_swiping());
    assert_eq!(c.track_offset(), c.track_position());

    let mut c = measured(CarouselOptions::new(2));
    c.go_to(1);
    settle(&mut c);
    assert!(!c.slide_next());
    assert_eq!(c.track_offset(), -500.0 - TILT_DISTANCE);
}

#[test]
fn no_tilt_when_disabled() {
    let mut c = measured(CarouselOptions::new(3).configure(|cfg| cfg.enable_tilt = false));
    let before = c.state();
    assert!(!c.slide_prev());
    assert!(!c.is_tilting());
    assert_eq!(c.state(), before);
}

#[test]
fn items_are_classified_around_the_window() {
    let mut c = measured(CarouselOptions::new(10).with_items_to_show(2.0).with_items_to_scroll(2));
    c.go_to(4);
    settle(&mut c);

    let classes: Vec<Visibility> = c.items().iter().map(|v| v.visibility).collect();
    use Visibility::*;
    assert_eq!(
        classes,
        vec![
            Hidden, Hidden, HiddenPrev, HiddenPrev, Visible, Visible, HiddenNext, HiddenNext,
            Hidden, Hidden,
        ]
    );

    let focusable: Vec<usize> = c
        .items()
        .iter()
        .filter(|v| v.focusable)
        .map(|v| v.index)
        .collect();
    assert_eq!(focusable, vec![4, 5]);
    assert!(c.items().iter().all(|v| v.size == 250.0));
}

#[test]
fn fractional_items_to_show_peeks_the_next_item() {
    let c = measured(CarouselOptions::new(5).with_items_to_show(1.5));
    let range = c.visible_range();
    assert_eq!(range.start_index, 0);
    assert_eq!(range.end_index, 2);
    assert!(range.contains(1));
    assert_eq!(c.visibility(1), Visibility::Visible);
}

#[test]
fn arrows_disable_only_at_edges() {
    let mut c = measured(CarouselOptions::new(3));
    assert!(c.prev_arrow_disabled());
    assert!(!c.next_arrow_disabled());
    c.go_to(2);
    settle(&mut c);
    assert!(!c.prev_arrow_disabled());
    assert!(c.next_arrow_disabled());

    let c = measured(CarouselOptions::new(3).configure(|cfg| cfg.disable_arrows_on_end = false));
    assert!(!c.can_slide_prev());
    assert!(!c.prev_arrow_disabled());
}

#[test]
fn item_click_navigates_only_with_focus_on_select() {
    let mut c = measured(CarouselOptions::new(5));
    assert!(!c.on_item_click(3));
    assert_eq!(c.active_index(), 0);

    let mut c = measured(CarouselOptions::new(5).configure(|cfg| cfg.focus_on_select = true));
    assert!(c.on_item_click(3));
    assert_eq!(c.active_index(), 3);
}

#[test]
fn shrinking_count_reclamps_without_animation() {
    let mut c = measured(CarouselOptions::new(10));
    c.go_to(8);
    settle(&mut c);
    c.set_count(3);
    assert_eq!(c.active_index(), 2);
    assert_eq!(c.track_position(), -1000.0);
    assert_eq!(c.active_page(), 2);
    assert!(!c.is_transitioning());
}

#[test]
fn zero_items_to_show_never_moves_past_the_last_item() {
    assert_eq!(navigation::forward_limit(3, 0.0), 2);
    assert_eq!(navigation::clamp_index(5, 3, 0.0), 2);

    let (options, log) = record(CarouselOptions::new(3).with_items_to_show(0.0));
    let mut c = measured(options);
    assert!(c.go_to(10));
    settle(&mut c);
    assert_eq!(c.active_index(), 2);
    assert_eq!(c.visible_range(), VisibleRange { start_index: 2, end_index: 3 });
    assert!(c.visibility(2).is_visible());
    assert_eq!(
        *log.lock().unwrap(),
        vec![Ev::NextStart(0, 2), Ev::Change(2, 2), Ev::NextEnd(2, 2)]
    );

    assert!(!c.slide_next());
    assert_eq!(c.active_index(), 2);

    assert!(c.go_to_page(1));
    assert_eq!(c.active_index(), 1);
}

#[test]
fn empty_carousel_has_one_page_and_never_moves() {
    let (options, log) = record(CarouselOptions::new(0));
    let mut c = measured(options);
    assert_eq!(c.num_pages(), 1);
    assert!(!c.slide_next());
    assert!(!c.go_to(3));
    assert!(c.items().is_empty());
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn dispose_cancels_pending_work() {
    let (options, log) = record(CarouselOptions::new(5).configure(|cfg| {
        cfg.enable_auto_play = true;
        cfg.auto_play_speed_ms = 100;
    }));
    let mut c = measured(options);
    assert!(c.go_to(1));
    c.dispose();
    assert!(c.is_disposed());
    assert!(!c.is_autoplaying());

    settle(&mut c);
    c.tick(0);
    c.tick(1000);
    c.on_container_resize(900.0);
    assert!(!c.go_to(3));
    assert!(!c.slide_next());

    assert_eq!(c.active_index(), 1);
    assert_eq!(c.container_width(), 500.0);
    assert_eq!(changes(&log), 0);
}

#[test]
fn on_update_is_coalesced_per_operation() {
    let updates = Arc::new(AtomicUsize::new(0));
    let u = Arc::clone(&updates);
    let mut c = Carousel::new(CarouselOptions::new(5).with_on_update(Some(move |_: &Carousel| {
        u.fetch_add(1, Ordering::SeqCst);
    })));

    c.on_container_resize(500.0);
    assert_eq!(updates.load(Ordering::SeqCst), 1);

    c.go_to(3);
    assert_eq!(updates.load(Ordering::SeqCst), 2);

    c.dispose();
    c.on_track_resize(100.0);
    assert_eq!(updates.load(Ordering::SeqCst), 2);
}

#[test]
fn custom_keys_reach_callbacks() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let s = Arc::clone(&seen);
    let mut c = Carousel::new(
        CarouselOptions::new_with_key(4, |i| ["a", "b", "c", "d"][i]).with_on_change(Some(
            move |it: &CarouselItem<&'static str>, page: usize| {
                s.lock().unwrap().push((it.key, page));
            },
        )),
    );
    c.on_container_resize(400.0);
    c.go_to(2);
    c.on_transition_end();
    assert_eq!(*seen.lock().unwrap(), vec![("c", 2)]);
}

#[cfg(feature = "serde")]
#[test]
fn config_and_breakpoints_deserialize_with_defaults() {
    let cfg: CarouselConfig =
        serde_json::from_str(r#"{ "items_to_show": 2.5, "auto_play_speed_ms": 1000 }"#).unwrap();
    assert_eq!(cfg.items_to_show, 2.5);
    assert_eq!(cfg.auto_play_speed_ms, 1000);
    assert_eq!(cfg.transition_ms, 500);

    let bps: Vec<Breakpoint> =
        serde_json::from_str(r#"[{ "width": 0 }, { "width": 600, "items_to_show": 3 }]"#).unwrap();
    assert_eq!(bps.len(), 2);
    assert_eq!(bps[0].overrides, ConfigOverride::default());
    assert_eq!(bps[1].overrides.items_to_show, Some(3.0));
}

// Example: responsive breakpoints, navigation and a swipe, driven by hand.
use carousel::{Breakpoint, Carousel, CarouselOptions, ConfigOverride, SwipeEvent};

fn main() {
    let options = CarouselOptions::new(10)
        .with_breakpoints([
            Breakpoint::new(1.0, ConfigOverride::default().with_items_to_show(1.0)),
            Breakpoint::new(550.0, ConfigOverride::default().with_items_to_show(2.0)),
            Breakpoint::new(850.0, ConfigOverride::default().with_items_to_show(3.0)),
        ])
        .with_on_change(Some(|item: &carousel::CarouselItem<u64>, page: usize| {
            println!("settled on item {} (page {page})", item.index);
        }));

    let mut c = Carousel::new(options);
    c.on_container_resize(900.0);
    println!(
        "show={} item_size={} pages={}",
        c.config().items_to_show,
        c.item_size(),
        c.num_pages()
    );

    c.slide_next();
    // The renderer reports when the track animation finished.
    c.on_transition_end();
    println!("visible={:?}", c.visible_range());

    c.go_to(100);
    c.on_transition_end();
    println!("after go_to(100): index={} next_disabled={}", c.active_index(), c.next_arrow_disabled());

    // A long drag back.
    c.on_swiping(SwipeEvent::horizontal(420.0));
    println!("dragging at {}", c.track_offset());
    c.on_swiped(SwipeEvent::horizontal(420.0));
    c.on_transition_end();
    println!("after swipe: index={} page={}", c.active_index(), c.active_page());

    // Shrinking the container reclamps against the narrower breakpoint.
    c.on_container_resize(400.0);
    println!("narrow: show={} index={}", c.config().items_to_show, c.active_index());

    for item in c.items().iter().take(4) {
        println!("{item:?}");
    }
}

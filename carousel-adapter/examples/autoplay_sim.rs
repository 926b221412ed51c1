// Example: a simulated frame loop driving autoplay through the adapter controller.
use carousel::CarouselOptions;
use carousel_adapter::{Controller, Easing, ResizeEntry};

fn main() {
    let options = CarouselOptions::new(4)
        .configure(|cfg| {
            cfg.enable_auto_play = true;
            cfg.auto_play_speed_ms = 1000;
            cfg.transition_ms = 300;
            cfg.easing = Easing::EaseInOutCubic;
        })
        .with_on_change(Some(|item: &carousel::CarouselItem<u64>, _page: usize| {
            println!("  -> settled on {}", item.index);
        }));

    let mut c = Controller::new(options);
    c.on_resize(ResizeEntry::container(600.0, 320.0), 0);

    let mut now_ms = 0u64;
    while now_ms <= 4_000 {
        let offset = c.tick(now_ms);
        if c.is_animating() {
            println!("t={now_ms:>5} offset={offset:>8.1}");
        }
        now_ms += 50;
    }
    println!(
        "done: index={} autoplaying={}",
        c.carousel().active_index(),
        c.carousel().is_autoplaying()
    );
}

use carousel::{Carousel, CarouselOptions, ItemKey, SwipeEvent, TransitionPhase};

use crate::{ResizeEntry, Tween, apply_resize, apply_resize_entries};

#[derive(Clone, Copy, Debug)]
struct Animation {
    tween: Tween,
    /// Whether completing the tween settles a pending move.
    settles: bool,
}

#[derive(Clone, Copy)]
struct Snapshot {
    index: usize,
    phase: TransitionPhase,
    tilting: bool,
}

/// A framework-neutral controller that wraps a `carousel::Carousel` and animates the track.
///
/// The engine only knows where the track should end up. This type owns the motion in between:
/// committed moves tween from the displayed offset to the new track position over
/// `transition_ms`, and the engine's transition-finished signal is raised when the tween
/// completes. Snap-backs after a short swipe and the tilt revert are tweened too, without
/// settling anything.
///
/// Adapters drive it by calling:
/// - `on_resize` when the resize observer fires
/// - the navigation and swipe methods on user input
/// - `tick(now_ms)` each frame, applying the returned offset to the rendered track
#[derive(Clone, Debug)]
pub struct Controller<K = ItemKey> {
    c: Carousel<K>,
    animation: Option<Animation>,
    offset: f64,
}

impl<K> Controller<K> {
    pub fn new(options: CarouselOptions<K>) -> Self {
        Self::from_carousel(Carousel::new(options))
    }

    pub fn from_carousel(c: Carousel<K>) -> Self {
        let offset = c.track_offset();
        Self {
            c,
            animation: None,
            offset,
        }
    }

    pub fn carousel(&self) -> &Carousel<K> {
        &self.c
    }

    /// Direct engine access. Changes made here are picked up by the next `tick`.
    pub fn carousel_mut(&mut self) -> &mut Carousel<K> {
        &mut self.c
    }

    pub fn into_carousel(self) -> Carousel<K> {
        self.c
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// The track offset as of the last controller call.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Drops the active tween and jumps to the engine's offset.
    ///
    /// A pending move is settled immediately so its callbacks still fire.
    pub fn cancel_animation(&mut self) {
        self.finish_animation();
        self.offset = self.c.track_offset();
    }

    fn finish_animation(&mut self) {
        if let Some(anim) = self.animation.take() {
            if anim.settles {
                self.c.on_transition_end();
            }
        }
    }

    fn sample(&self, now_ms: u64) -> f64 {
        match self.animation {
            Some(anim) => anim.tween.sample(now_ms),
            None => self.c.track_offset(),
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            index: self.c.active_index(),
            phase: self.c.phase(),
            tilting: self.c.is_tilting(),
        }
    }

    /// Reconciles the animation with whatever the engine did since `before`.
    fn follow(&mut self, from: f64, before: Snapshot, now_ms: u64) {
        let moving = matches!(self.c.phase(), TransitionPhase::Moving(_));
        let moved = moving && (before.phase != self.c.phase() || before.index != self.c.active_index());
        let config = self.c.config();

        if moved {
            let to = self.c.track_position();
            let duration_ms = self.c.transition_ms();
            match self.animation.as_mut() {
                // Interrupted: continue from wherever the track is drawn right now.
                Some(anim) => {
                    anim.tween.retarget(now_ms, to, duration_ms);
                    anim.tween.easing = config.easing;
                    anim.settles = true;
                }
                None => {
                    self.animation = Some(Animation {
                        tween: Tween::new(from, to, now_ms, duration_ms, config.easing),
                        settles: true,
                    });
                }
            }
            atrace!(from, to, "move tween");
        } else if self.c.is_swiping() {
            // Pointer-driven (or tilted): the track follows without easing.
            if !self.animation.is_some_and(|a| a.settles) {
                self.animation = None;
            }
        } else if self.animation.is_none() {
            let to = self.c.track_offset();
            if from != to {
                let easing = if before.tilting && !self.c.is_tilting() {
                    config.tilt_easing
                } else {
                    config.easing
                };
                self.animation = Some(Animation {
                    tween: Tween::new(from, to, now_ms, self.c.transition_ms(), easing),
                    settles: false,
                });
            }
        }
        self.offset = self.sample(now_ms);
    }

    fn run<R>(&mut self, now_ms: u64, f: impl FnOnce(&mut Carousel<K>) -> R) -> R {
        let from = self.sample(now_ms);
        let before = self.snapshot();
        let out = f(&mut self.c);
        self.follow(from, before, now_ms);
        out
    }

    /// Applies a resize entry. Resizes jump rather than animate; an in-flight move is
    /// retargeted to the reclamped position.
    pub fn on_resize(&mut self, entry: ResizeEntry, now_ms: u64) {
        apply_resize(&mut self.c, entry);
        self.after_resize(now_ms);
    }

    pub fn on_resize_entries(
        &mut self,
        entries: impl IntoIterator<Item = ResizeEntry>,
        now_ms: u64,
    ) {
        apply_resize_entries(&mut self.c, entries);
        self.after_resize(now_ms);
    }

    fn after_resize(&mut self, now_ms: u64) {
        match self.animation.as_mut() {
            Some(anim) if anim.settles => {
                anim.tween = Tween::new(
                    self.c.track_position(),
                    self.c.track_position(),
                    now_ms,
                    0,
                    anim.tween.easing,
                );
            }
            _ => self.animation = None,
        }
        self.offset = self.sample(now_ms);
    }

    /// A drag update. Settles any move still animating so the drag starts from rest.
    pub fn on_swiping(&mut self, ev: SwipeEvent, now_ms: u64) {
        if self.animation.is_some_and(|a| a.settles) && self.c.config().enable_swipe {
            self.finish_animation();
        }
        self.run(now_ms, |c| c.on_swiping(ev));
    }

    pub fn on_swiped(&mut self, ev: SwipeEvent, now_ms: u64) {
        self.run(now_ms, |c| c.on_swiped(ev));
    }

    pub fn slide_next(&mut self, now_ms: u64) -> bool {
        self.run(now_ms, |c| c.slide_next())
    }

    pub fn slide_prev(&mut self, now_ms: u64) -> bool {
        self.run(now_ms, |c| c.slide_prev())
    }

    pub fn go_to(&mut self, target: isize, now_ms: u64) -> bool {
        self.run(now_ms, |c| c.go_to(target))
    }

    pub fn go_to_page(&mut self, page: usize, now_ms: u64) -> bool {
        self.run(now_ms, |c| c.go_to_page(page))
    }

    pub fn on_item_click(&mut self, index: usize, now_ms: u64) -> bool {
        self.run(now_ms, |c| c.on_item_click(index))
    }

    /// Advances the controller and returns the offset to render.
    ///
    /// Runs the engine clock first (autoplay, tilt revert), then samples the active tween. A
    /// finished move tween raises the engine's transition-finished signal.
    pub fn tick(&mut self, now_ms: u64) -> f64 {
        self.run(now_ms, |c| c.tick(now_ms));

        if let Some(anim) = self.animation {
            if anim.tween.is_done(now_ms) {
                self.animation = None;
                if anim.settles {
                    self.c.on_transition_end();
                }
            }
        }
        self.offset = self.sample(now_ms);
        self.offset
    }

    pub fn dispose(&mut self) {
        adebug!(animating = self.animation.is_some(), "Controller::dispose");
        self.animation = None;
        self.c.dispose();
        self.offset = self.c.track_offset();
    }
}

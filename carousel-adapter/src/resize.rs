use carousel::Carousel;

/// The two regions a resize observer tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResizeTarget {
    /// The element that bounds the visible window.
    Container,
    /// The sliding track holding every item.
    Track,
}

/// One resize observer notification.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResizeEntry {
    pub target: ResizeTarget,
    pub content_width: f64,
    pub content_height: f64,
}

impl ResizeEntry {
    pub fn container(content_width: f64, content_height: f64) -> Self {
        Self {
            target: ResizeTarget::Container,
            content_width,
            content_height,
        }
    }

    pub fn track(content_width: f64, content_height: f64) -> Self {
        Self {
            target: ResizeTarget::Track,
            content_width,
            content_height,
        }
    }
}

/// Routes a resize entry to the matching carousel handler.
///
/// The container contributes its width (breakpoints, item width); the track contributes its
/// height (vertical item height).
pub fn apply_resize<K>(c: &mut Carousel<K>, entry: ResizeEntry) {
    match entry.target {
        ResizeTarget::Container => c.on_container_resize(entry.content_width),
        ResizeTarget::Track => c.on_track_resize(entry.content_height),
    }
}

/// Applies a batch of entries with a single `on_update` notification.
///
/// Track entries are applied after container entries so vertical item heights are derived
/// against the final configuration.
pub fn apply_resize_entries<K>(c: &mut Carousel<K>, entries: impl IntoIterator<Item = ResizeEntry>) {
    let mut track = None;
    c.batch_update(|c| {
        for entry in entries {
            match entry.target {
                ResizeTarget::Container => apply_resize(c, entry),
                ResizeTarget::Track => track = Some(entry),
            }
        }
        if let Some(entry) = track {
            apply_resize(c, entry);
        }
    });
}

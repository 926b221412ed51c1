use crate::math;

/// Inputs for sizing a single item slot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutInput {
    /// Inner container width (outer spacing already removed).
    pub container_width: f64,
    /// Measured height of the whole track content block.
    pub track_height: f64,
    pub count: usize,
    pub items_to_show: f64,
    pub show_empty_slots: bool,
    pub vertical_mode: bool,
}

/// Size of one item slot along the primary axis.
///
/// Horizontal mode divides the container width between the shown items. Vertical mode divides
/// the measured track height by the item count instead: it measures the rendered content, not
/// the container.
pub fn item_size(input: LayoutInput) -> f64 {
    if input.vertical_mode {
        return vertical_item_size(input.track_height, input.count);
    }
    let count = input.count.max(1) as f64;
    let divisor = if input.show_empty_slots {
        input.items_to_show
    } else {
        count.min(input.items_to_show)
    };
    input.container_width / divisor.max(1.0)
}

pub fn vertical_item_size(track_height: f64, count: usize) -> f64 {
    track_height / count.max(1) as f64
}

/// `ceil(count / max(items_to_show, 1))`, never less than 1.
pub fn num_pages(count: usize, items_to_show: f64) -> usize {
    let pages = math::ceil_index(count as f64 / items_to_show.max(1.0));
    pages.max(1)
}

/// Height of the visible window in vertical mode: as many slots as can be filled.
pub fn vertical_viewport_height(item_height: f64, count: usize, items_to_show: f64) -> f64 {
    item_height * (count as f64).min(math::slots(items_to_show))
}

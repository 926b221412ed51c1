use crate::layout::num_pages;
use crate::math;

/// Page that contains `active_index`, clamped to `[0, num_pages - 1]`.
pub fn active_page(active_index: usize, count: usize, items_to_show: f64) -> usize {
    let per_page = (count as f64).min(items_to_show).max(1.0);
    let page = math::ceil_index(active_index as f64 / per_page);
    page.min(num_pages(count, items_to_show) - 1)
}

/// First index of `page`.
pub fn page_start(page: usize, items_to_show: f64) -> usize {
    math::floor_index(page as f64 * math::slots(items_to_show))
}

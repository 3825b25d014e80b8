//! Pagination math for the grid and carousel views. Pure helpers; the host
//! owns the actual widgets.

/// Grid rows/cols are accepted from settings but held to 1..=10.
pub fn clamp_grid_dim(n: i64) -> usize {
    n.clamp(1, 10) as usize
}

/// Number of pages, never less than 1 even for an empty collection.
pub fn page_count(items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    items.div_ceil(page_size).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages.saturating_sub(1))
}

/// Next page, wrapping from the last back to the first.
pub fn next_page(page: usize, total_pages: usize) -> usize {
    if page + 1 < total_pages {
        page + 1
    } else {
        0
    }
}

/// Previous page, wrapping from the first to the last.
pub fn prev_page(page: usize, total_pages: usize) -> usize {
    if page > 0 {
        page - 1
    } else {
        total_pages.saturating_sub(1)
    }
}

/// Carousel step forward, wrapping at the end.
pub fn next_index(index: usize, len: usize) -> usize {
    if index + 1 < len {
        index + 1
    } else {
        0
    }
}

/// Carousel step back, wrapping at the start.
pub fn prev_index(index: usize, len: usize) -> usize {
    if index > 0 {
        index - 1
    } else {
        len.saturating_sub(1)
    }
}

/// The slice of items visible on `page`; empty past the end.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let start = page.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

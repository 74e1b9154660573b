//! Fixed-size paging over the result list.
//!
//! All arithmetic is on integers, so an exact multiple of `PAGE_SIZE`
//! never produces a phantom trailing page.

/// Number of results shown per page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed to show `len` results.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Results visible on `page_index`, clipped to the end of the list.
///
/// Out-of-range pages yield an empty slice.
pub fn visible_slice(results: &[String], page_index: usize) -> &[String] {
    let start = page_index.saturating_mul(PAGE_SIZE).min(results.len());
    let end = start.saturating_add(PAGE_SIZE).min(results.len());
    &results[start..end]
}

pub fn can_go_previous(page_index: usize) -> bool {
    page_index > 0
}

pub fn can_go_next(results: &[String], page_index: usize) -> bool {
    page_index.saturating_add(1) < page_count(results.len())
}

//! Cursor pagination over ordered listings
//!
//! The cursor is a plain positional offset. With `before` set the window
//! starts `size + 1` items ahead of the cursor, clamped at zero.

use crate::error::CatalogError;
use crate::models::Page;

/// Resolve the `[start, end)` window a page selects from `len` items
pub fn page_bounds(page: &Page, len: usize) -> Result<(usize, usize), CatalogError> {
    let mut start = 0;
    if !page.cursor.is_empty() {
        start = page
            .cursor
            .parse::<usize>()
            .map_err(|_| CatalogError::InvalidCursor(page.cursor.clone()))?;
        if page.before {
            start = start.saturating_sub(page.size.saturating_add(1));
        }
    }

    let end = start.saturating_add(page.size).min(len);
    // an offset past the end yields an empty window
    let start = start.min(end);
    Ok((start, end))
}

/// Slice `items` down to the requested page, or return them all
pub fn paginate<T: Clone>(items: &[T], page: Option<&Page>) -> Result<Vec<T>, CatalogError> {
    match page {
        None => Ok(items.to_vec()),
        Some(page) => {
            let (start, end) = page_bounds(page, items.len())?;
            Ok(items[start..end].to_vec())
        }
    }
}

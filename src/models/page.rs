//! Pagination options for catalog listings

use serde::{Deserialize, Serialize};

/// Cursor-based page request.
///
/// The cursor is a raw positional offset into the listing, `""` meaning
/// the start. With `before` set the page ends just ahead of the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub cursor: String,
    pub size: usize,
    #[serde(default)]
    pub before: bool,
}

impl Page {
    pub fn new(cursor: impl Into<String>, size: usize, before: bool) -> Self {
        Self {
            cursor: cursor.into(),
            size,
            before,
        }
    }
}

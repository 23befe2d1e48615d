//! Library DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use magictales::Library;

pub const EMPTY_LIBRARY_MESSAGE: &str = "Your bookshelf is empty - go create a story!";

/// Library search query
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct LibraryQuery {
    /// Case-insensitive substring filter on titles
    pub search: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LibraryResponse {
    /// Entries matching the search, in insertion order
    pub entries: Vec<String>,
    /// Total saved entries, ignoring the search
    pub total: usize,
    /// Present when nothing has been saved yet
    pub empty_message: Option<String>,
}

impl LibraryResponse {
    pub fn new(library: &Library, search: Option<&str>) -> Self {
        Self {
            entries: library
                .search(search.unwrap_or(""))
                .into_iter()
                .map(|e| e.to_string())
                .collect(),
            total: library.len(),
            empty_message: library
                .is_empty()
                .then(|| EMPTY_LIBRARY_MESSAGE.to_string()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SaveToLibraryResponse {
    /// False when the title was already saved
    pub added: bool,
    pub entry: String,
    pub library: LibraryResponse,
}

use serde::{Deserialize, Serialize};

/// A single page of a chapter, `image_url` is always absolute
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Page {
    pub index: i64,
    pub image_url: String,
}

/// Result of resolving an image url from a reader page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum ImageUrl {
    Resolved(String),
    /// Pages already carry a direct url, nothing to resolve
    Unsupported,
}

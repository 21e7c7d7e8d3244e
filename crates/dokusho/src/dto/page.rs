use dokusho_lib::models::Page;
use serde::Deserialize;

use super::{absolute_url, nullable};

#[derive(Debug, Clone, Deserialize)]
pub struct PageData {
    pub index: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_quality: Option<String>,
    #[serde(default)]
    pub metadata_issues: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub permanently_failed: bool,
}

impl PageData {
    /// `None` for pages without an image url or that will never load
    pub fn into_page(self, base_url: &str) -> Option<Page> {
        if self.permanently_failed {
            return None;
        }

        let url = self.url?;
        Some(Page {
            index: self.index,
            image_url: absolute_url(base_url, &url),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChapterDataResponse {
    pub pages: Vec<PageData>,
    #[serde(default, rename = "hasData", deserialize_with = "nullable")]
    pub has_data: bool,
}

impl ChapterDataResponse {
    pub fn into_pages(self, base_url: &str) -> Vec<Page> {
        self.pages
            .into_iter()
            .filter_map(|page| page.into_page(base_url))
            .collect()
    }
}

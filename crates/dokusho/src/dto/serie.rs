use dokusho_lib::models::{MangaInfo, MangaPage, Status};
use serde::Deserialize;

use super::{absolute_url, nullable};

pub const SERIE_PATH: &str = "/api/v1/serie/";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SerieListResponse {
    pub data: Vec<Serie>,
    pub pagination: Pagination,
}

impl SerieListResponse {
    pub fn into_manga_page(self, source_id: i64, base_url: &str) -> MangaPage {
        let has_next_page = self.pagination.has_next_page();
        MangaPage {
            manga: self
                .data
                .into_iter()
                .map(|serie| serie.into_manga_info(source_id, base_url))
                .collect(),
            has_next_page,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
}

/// Upstream site a serie or chapter was scraped from
#[derive(Debug, Clone, Deserialize)]
pub struct SourceInfo {
    pub id: String,
    pub external_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SerieSource {
    pub id: String,
    pub external_id: String,
    pub is_primary: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub consecutive_failures: i64,
    pub source: SourceInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChapterCount {
    #[serde(default, deserialize_with = "nullable")]
    pub chapters: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Serie {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub status: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "nullable")]
    pub authors: Vec<Person>,
    #[serde(default, deserialize_with = "nullable")]
    pub artists: Vec<Person>,
    #[serde(default, deserialize_with = "nullable")]
    pub sources: Vec<SerieSource>,
    #[serde(default, rename = "_count")]
    pub count: Option<ChapterCount>,
}

/// The detail endpoint returns the same shape as a list entry
pub type SerieDetailResponse = Serie;

/// First matching tag wins
pub fn map_status(tags: &[String]) -> Status {
    let has = |tag: &str| tags.iter().any(|t| t == tag);
    if has("Completed") || has("Scanlated") {
        Status::Completed
    } else if has("Ongoing") || has("Scanlating") {
        Status::Ongoing
    } else if has("Hiatus") {
        Status::OnHiatus
    } else if has("Canceled") {
        Status::Cancelled
    } else {
        Status::Unknown
    }
}

impl Serie {
    pub fn path(&self) -> String {
        format!("{SERIE_PATH}{}", self.id)
    }

    pub fn into_manga_info(self, source_id: i64, base_url: &str) -> MangaInfo {
        MangaInfo {
            source_id,
            path: self.path(),
            status: map_status(&self.status),
            cover_url: self.cover.as_deref().map(|c| absolute_url(base_url, c)),
            title: self.title,
            description: self.synopsis,
            author: self.authors.into_iter().map(|p| p.name).collect(),
            artist: self.artists.into_iter().map(|p| p.name).collect(),
            genre: self.genres.into_iter().map(|g| g.title).collect(),
        }
    }
}

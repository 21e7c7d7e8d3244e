use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Status {
    Ongoing,
    Completed,
    OnHiatus,
    Cancelled,
    #[default]
    Unknown,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Ongoing => "Ongoing",
            Status::Completed => "Completed",
            Status::OnHiatus => "On Hiatus",
            Status::Cancelled => "Cancelled",
            Status::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// A type represent manga details, normalized across source
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MangaInfo {
    pub source_id: i64,
    pub title: String,
    pub author: Vec<String>,
    pub artist: Vec<String>,
    pub genre: Vec<String>,
    pub status: Status,
    pub description: Option<String>,
    pub path: String,
    pub cover_url: Option<String>,
}

/// One page of a manga listing
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MangaPage {
    pub manga: Vec<MangaInfo>,
    pub has_next_page: bool,
}

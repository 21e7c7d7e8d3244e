use chrono::NaiveDateTime;
use dokusho_lib::models::ChapterInfo;
use serde::Deserialize;

use super::{SERIE_PATH, SourceInfo, nullable};

#[derive(Debug, Clone, Deserialize)]
pub struct ScanlationGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

fn enabled_by_default() -> bool {
    true
}

fn nullable_enabled<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub serie_id: String,
    pub source_id: String,
    pub external_id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub chapter_number: f64,
    #[serde(default)]
    pub volume_number: Option<i64>,
    #[serde(default)]
    pub volume_name: Option<String>,
    pub language: String,
    pub date_upload: String,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(
        default = "enabled_by_default",
        deserialize_with = "nullable_enabled"
    )]
    pub enabled: bool,
    #[serde(default)]
    pub page_fetch_status: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub groups: Vec<ScanlationGroup>,
    #[serde(default)]
    pub source: Option<SourceInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChapterListResponse {
    pub chapters: Vec<Chapter>,
}

/// Whole numbers keep one decimal, `1.0` stays `1.0`
fn chapter_number(number: f64) -> String {
    if number.is_finite() && number.fract() == 0.0 {
        format!("{number:.1}")
    } else {
        number.to_string()
    }
}

/// Seconds since epoch of an upload date like `2024-01-31T12:00:00.000Z`,
/// `0` when it can not be parsed
pub fn parse_upload_date(date: &str) -> i64 {
    let date = date.split('.').next().unwrap_or_default();
    let date = date.split('Z').next().unwrap_or_default();
    match NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S") {
        Ok(date) => date.and_utc().timestamp(),
        Err(e) => {
            warn!("invalid upload date {date:?}: {e}");
            0
        }
    }
}

impl Chapter {
    pub fn data_path(&self, serie_id: &str) -> String {
        format!("{SERIE_PATH}{serie_id}/chapters/{}/data", self.id)
    }

    pub fn display_title(&self) -> String {
        let mut title = String::new();
        if let Some(volume) = self.volume_number {
            title.push_str(&format!("Vol. {volume} "));
        }
        title.push_str(&format!("Ch. {}", chapter_number(self.chapter_number)));
        if let Some(name) = self.title.as_deref().filter(|t| !t.trim().is_empty()) {
            title.push_str(&format!(" - {name}"));
        }
        title
    }

    pub fn scanlator(&self) -> Option<String> {
        if self.groups.is_empty() {
            return None;
        }

        Some(
            self.groups
                .iter()
                .map(|g| g.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    pub fn into_chapter_info(self, source_id: i64, serie_id: &str) -> ChapterInfo {
        ChapterInfo {
            source_id,
            title: self.display_title(),
            path: self.data_path(serie_id),
            number: self.chapter_number,
            scanlator: self.scanlator(),
            uploaded: parse_upload_date(&self.date_upload),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn chapter(json: &str) -> Chapter {
        serde_json::from_str(json).unwrap()
    }

    const FULL: &str = r#"{
        "id": "c1",
        "serie_id": "s1",
        "source_id": "src",
        "external_id": "ext",
        "title": "The Beginning",
        "chapter_number": 12.5,
        "volume_number": 3,
        "volume_name": "Volume 3",
        "language": "en",
        "date_upload": "2024-01-31T12:30:45.123Z",
        "external_url": "https://example.org/c1",
        "page_fetch_status": "done",
        "groups": [{"id": "g1", "name": "Team A"}, {"id": "g2", "name": "Team B", "url": null}],
        "source": {"id": "src", "external_id": "md", "name": "MangaDex"}
    }"#;

    #[test]
    fn test_map_full_chapter() {
        let info = chapter(FULL).into_chapter_info(9, "s1");

        assert_eq!(info.source_id, 9);
        assert_eq!(info.title, "Vol. 3 Ch. 12.5 - The Beginning");
        assert_eq!(info.path, "/api/v1/serie/s1/chapters/c1/data");
        assert_eq!(info.number, 12.5);
        assert_eq!(info.scanlator.as_deref(), Some("Team A, Team B"));
        assert_eq!(info.uploaded, 1706704245);
    }

    #[test]
    fn test_map_minimal_chapter() {
        let c = chapter(
            r#"{
                "id": "c2", "serie_id": "s1", "source_id": "src", "external_id": "e",
                "title": "  ", "chapter_number": 1, "language": "fr",
                "date_upload": "2024-01-31T00:00:00", "enabled": null, "groups": null
            }"#,
        );
        assert!(c.enabled);

        let info = c.into_chapter_info(1, "s1");
        assert_eq!(info.title, "Ch. 1.0");
        assert!(info.scanlator.is_none());
        assert_eq!(info.uploaded, 1706659200);
    }

    #[test]
    fn test_chapter_number_keeps_one_decimal() {
        assert_eq!(chapter_number(1.0), "1.0");
        assert_eq!(chapter_number(120.0), "120.0");
        assert_eq!(chapter_number(12.5), "12.5");
        assert_eq!(chapter_number(0.25), "0.25");
    }

    #[test]
    fn test_enabled_defaults_to_true() {
        let c = chapter(
            r#"{
                "id": "c", "serie_id": "s", "source_id": "x", "external_id": "e",
                "chapter_number": 2, "language": "en", "date_upload": ""
            }"#,
        );
        assert!(c.enabled);
    }

    #[test]
    fn test_parse_upload_date() {
        assert_eq!(parse_upload_date("1970-01-01T00:00:10Z"), 10);
        assert_eq!(parse_upload_date("2024-01-31T12:30:45.123456Z"), 1706704245);
        assert_eq!(parse_upload_date("2024-01-31T12:30:45"), 1706704245);
    }

    #[test]
    fn test_parse_invalid_upload_date_is_epoch() {
        assert_eq!(parse_upload_date(""), 0);
        assert_eq!(parse_upload_date("yesterday"), 0);
        assert_eq!(parse_upload_date("2024-01-31"), 0);
        assert_eq!(parse_upload_date("2024-01-31T12:30:45+02:00"), 0);
    }
}

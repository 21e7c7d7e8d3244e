use std::{collections::HashMap, sync::Arc};

use anyhow::{Context, Result};
use bytes::Bytes;
use dokusho_lib::prelude::{
    ChapterInfo, Extension, HttpClient, ImageUrl, Input, MangaInfo, MangaPage, Page, Preference,
    Request, Response, SourceInfo,
};
use serde::de::DeserializeOwned;
use url::{Url, form_urlencoded};

use crate::{
    config::Variant,
    dto::{ChapterDataResponse, ChapterListResponse, SERIE_PATH, SerieDetailResponse, SerieListResponse},
    settings::Settings,
};

pub const USER_AGENT: &str = "DokushoExtension/1.0";
pub const API_KEY_HEADER: &str = "X-API-Key";
pub const IMAGE_ACCEPT: &str = "image/*,*/*;q=0.8";

pub struct Dokusho {
    variant: Variant,
    settings: Settings,
    client: Arc<dyn HttpClient>,
}

fn serie_id_from_path(path: &str) -> &str {
    path.strip_prefix(SERIE_PATH).unwrap_or(path).trim_matches('/')
}

// `/.../serie/{id}/chapters` of the url a chapter list was fetched from
fn serie_id_from_url(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    let segments: Vec<&str> = url.path_segments()?.collect();
    segments
        .windows(3)
        .find(|w| w[0] == "serie" && w[2] == "chapters")
        .map(|w| w[1].to_string())
}

fn parse_as<T: DeserializeOwned>(response: Response) -> Result<T> {
    serde_json::from_slice(&response.body)
        .with_context(|| format!("failed to decode response from {}", response.url))
}

impl Dokusho {
    pub fn new(variant: Variant, settings: Settings, client: Arc<dyn HttpClient>) -> Self {
        Self {
            variant,
            settings,
            client,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn base_url(&self) -> &str {
        &self.settings.address
    }

    fn source_id(&self) -> i64 {
        self.variant.source_id()
    }

    fn get(&self, url: &str) -> Result<Response> {
        debug!("GET {url}");
        self.client.call(Request::get(url).headers(self.headers()))
    }

    pub(crate) fn serie_list_url(&self, page: i64, query: Option<&str>) -> String {
        let mut url = format!("{}/api/v1/serie?page={page}", self.base_url());
        if let Some(query) = query.filter(|q| !q.trim().is_empty()) {
            // a literal plus is already %2B, so every '+' left is a space
            let query: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
            url.push_str("&q=");
            url.push_str(&query.replace('+', "%20"));
        }

        url
    }

    fn fetch_serie_list(&self, url: &str) -> Result<MangaPage> {
        let result: SerieListResponse = parse_as(self.get(url)?)?;
        let page = result.into_manga_page(self.source_id(), self.base_url());
        debug!(
            "got {} manga, has next page: {}",
            page.manga.len(),
            page.has_next_page
        );

        Ok(page)
    }
}

impl Extension for Dokusho {
    fn get_source_info(&self) -> SourceInfo {
        SourceInfo {
            id: self.source_id(),
            name: self.variant.display_name(&self.settings.display_name),
            url: self.settings.address.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            icon: if self.settings.address.is_empty() {
                String::new()
            } else {
                format!("{}/favicon.ico", self.settings.address)
            },
            languages: self.variant.languages(),
            nsfw: false,
        }
    }

    fn headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert("User-Agent".to_string(), USER_AGENT.to_string());
        if self.settings.has_api_key() {
            headers.insert(API_KEY_HEADER.to_string(), self.settings.api_key.clone());
        }
        headers
    }

    fn get_preferences(&self) -> Result<Vec<Preference>> {
        Ok(self.settings.preferences())
    }

    fn set_preferences(&mut self, preferences: Vec<Input>) -> Result<()> {
        self.settings = self.settings.with_inputs(&preferences)?;
        Ok(())
    }

    fn get_popular_manga(&self, page: i64) -> Result<MangaPage> {
        self.fetch_serie_list(&self.serie_list_url(page, None))
    }

    // the api has no separate sort for latest, it already returns recently updated first
    fn get_latest_manga(&self, page: i64) -> Result<MangaPage> {
        self.fetch_serie_list(&self.serie_list_url(page, None))
    }

    fn search_manga(
        &self,
        page: i64,
        query: Option<String>,
        _filters: Option<Vec<Input>>,
    ) -> Result<MangaPage> {
        self.fetch_serie_list(&self.serie_list_url(page, query.as_deref()))
    }

    fn get_manga_detail(&self, path: String) -> Result<MangaInfo> {
        let url = format!("{}{}", self.base_url(), path);
        let result: SerieDetailResponse = parse_as(self.get(&url)?)?;

        Ok(result.into_manga_info(self.source_id(), self.base_url()))
    }

    fn get_manga_url(&self, path: &str) -> String {
        format!("{}/series/{}", self.base_url(), serie_id_from_path(path))
    }

    fn get_chapters(&self, path: String) -> Result<Vec<ChapterInfo>> {
        let requested_id = serie_id_from_path(&path);
        let url = format!(
            "{}{}{}/chapters",
            self.base_url(),
            SERIE_PATH,
            requested_id
        );
        let response = self.get(&url)?;
        let serie_id =
            serie_id_from_url(&response.url).unwrap_or_else(|| requested_id.to_string());

        let result: ChapterListResponse = parse_as(response)?;
        let source_id = self.source_id();
        let variant = self.variant;
        let mut chapters: Vec<ChapterInfo> = result
            .chapters
            .into_iter()
            .filter(|c| c.enabled)
            .filter(|c| variant.is_all() || c.language.eq_ignore_ascii_case(variant.lang))
            .map(|c| c.into_chapter_info(source_id, &serie_id))
            .collect();

        chapters.sort_by(|a, b| b.number.total_cmp(&a.number));
        debug!("got {} chapters for serie {serie_id}", chapters.len());

        Ok(chapters)
    }

    fn get_pages(&self, path: String) -> Result<Vec<Page>> {
        let url = format!("{}{}", self.base_url(), path);
        let result: ChapterDataResponse = parse_as(self.get(&url)?)?;
        let pages = result.into_pages(self.base_url());
        debug!("got {} pages from {path}", pages.len());

        Ok(pages)
    }

    fn image_request(&self, url: &str) -> Request {
        Request::get(url)
            .headers(self.headers())
            .set("Accept", IMAGE_ACCEPT)
    }

    fn get_image_bytes(&self, url: String) -> Result<Bytes> {
        let response = self.client.call(self.image_request(&url))?;
        Ok(response.body)
    }

    fn resolve_image_url(&self, _response: &Response) -> Result<ImageUrl> {
        Ok(ImageUrl::Unsupported)
    }
}

use std::{collections::HashMap, sync::Mutex};

use anyhow::{Result, anyhow};
use bytes::Bytes;
use dokusho_lib::http::{Headers, HttpClient, Request, Response};

/// Serves canned bodies keyed by full request url and records every request
#[derive(Default)]
pub struct MockClient {
    routes: HashMap<String, String>,
    redirects: HashMap<String, String>,
    requests: Mutex<Vec<Request>>,
}

impl MockClient {
    pub fn route(mut self, url: &str, body: &str) -> Self {
        self.routes.insert(url.to_string(), body.to_string());
        self
    }

    /// Report `to` as the final url of requests made to `from`
    pub fn redirect(mut self, from: &str, to: &str) -> Self {
        self.redirects.insert(from.to_string(), to.to_string());
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl HttpClient for MockClient {
    fn call(&self, req: Request) -> Result<Response> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(req.clone());
        }

        let body = self
            .routes
            .get(&req.url)
            .ok_or_else(|| anyhow!("no route for {}", req.url))?;
        let url = self.redirects.get(&req.url).unwrap_or(&req.url).clone();

        Ok(Response {
            url,
            headers: Headers::new(),
            body: Bytes::from(body.clone()),
            status: 200,
        })
    }
}

pub fn serie_list_json(ids: &[&str], page: i64, total_pages: i64) -> String {
    let data = ids
        .iter()
        .map(|id| format!(r#"{{"id": "{id}", "title": "Title {id}", "status": ["Ongoing"]}}"#))
        .collect::<Vec<_>>()
        .join(",");

    format!(
        r#"{{"data": [{data}], "pagination": {{"page": {page}, "pageSize": 20, "total": {}, "totalPages": {total_pages}}}}}"#,
        ids.len()
    )
}

pub fn chapter_json(id: &str, number: f64, language: &str, enabled: bool) -> String {
    format!(
        r#"{{
            "id": "{id}", "serie_id": "s1", "source_id": "src", "external_id": "{id}",
            "chapter_number": {number:.1}, "language": "{language}",
            "date_upload": "2024-03-01T08:00:00.000Z", "enabled": {enabled},
            "groups": [{{"id": "g", "name": "Group"}}]
        }}"#
    )
}

pub fn page_json(index: i64, url: Option<&str>, permanently_failed: bool) -> String {
    let url = url.map_or_else(|| "null".to_string(), |u| format!(r#""{u}""#));
    format!(
        r#"{{"index": {index}, "type": "image", "url": {url}, "permanently_failed": {permanently_failed}}}"#
    )
}

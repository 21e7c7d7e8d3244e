use std::io::Read;

use anyhow::{Result, anyhow};
use bytes::Bytes;
use dokusho_lib::{
    error::Error,
    http::{Headers, HttpClient, Request, Response},
};
use ureq::{Agent, ResponseExt};

/// Blocking client backed by `ureq`, used by hosts and the cli
pub struct UreqClient {
    agent: Agent,
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqClient {
    pub fn new() -> Self {
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self { agent }
    }
}

impl HttpClient for UreqClient {
    fn call(&self, req: Request) -> Result<Response> {
        debug!("request => {} {}", req.method, req.url);

        if req.method != "GET" {
            return Err(anyhow!("unsupported method {}", req.method));
        }

        let mut builder = self.agent.get(&req.url);
        for (key, values) in &req.headers {
            for value in values {
                builder = builder.header(key, value);
            }
        }

        let mut response = builder.call().map_err(|err| {
            debug!("response error => {err}");
            anyhow!("request to {} failed: {err}", req.url)
        })?;

        // redirects are followed, so this may differ from req.url
        let url = response.get_uri().to_string();
        let status = response.status().as_u16();
        debug!("response => {status} {url}");

        let mut headers = Headers::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers
                    .entry(name.as_str().to_string())
                    .or_default()
                    .push(value.to_string());
            }
        }

        let mut body = vec![];
        response
            .body_mut()
            .as_reader()
            .read_to_end(&mut body)?;

        let response = Response {
            url,
            headers,
            body: Bytes::from(body),
            status,
        };
        if !response.is_success() {
            return Err(Error::Http {
                status,
                url: response.url,
            }
            .into());
        }

        Ok(response)
    }
}

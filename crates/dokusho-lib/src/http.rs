use anyhow::Result;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type Headers = HashMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    pub url: String,
    pub headers: Headers,
}

impl Request {
    pub fn get(url: &str) -> Request {
        Request {
            method: "GET".to_string(),
            url: url.to_string(),
            headers: Headers::new(),
        }
    }

    /// Append a value for `name`, keeping any value already set.
    pub fn header(mut self, name: &str, value: &str) -> Request {
        self.headers
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
        self
    }

    /// Replace every value of `name` with `value`.
    pub fn set(mut self, name: &str, value: &str) -> Request {
        self.headers
            .insert(name.to_string(), vec![value.to_string()]);
        self
    }

    pub fn headers<I, K, V>(self, headers: I) -> Request
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        headers
            .into_iter()
            .fold(self, |req, (k, v)| req.set(k.as_ref(), v.as_ref()))
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .and_then(|(_, values)| values.first())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Final url, after any redirect the transport followed
    pub url: String,
    pub headers: Headers,
    pub body: Bytes,
    pub status: u16,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport supplied by the host. Extensions never open connections themselves.
pub trait HttpClient: Send + Sync {
    fn call(&self, req: Request) -> Result<Response>;
}

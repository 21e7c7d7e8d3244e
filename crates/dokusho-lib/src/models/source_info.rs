use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum Lang {
    All,
    Single(String),
}

impl Lang {
    pub fn from_code(code: &str) -> Self {
        if code == "all" {
            Lang::All
        } else {
            Lang::Single(code.to_string())
        }
    }
}

/// A type represent source
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceInfo {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub version: String,
    pub icon: String,
    pub languages: Lang,
    pub nsfw: bool,
}

use serde::{Deserialize, Serialize};

/// Value the host stores for a preference
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum Input {
    Text {
        name: String,
        state: Option<String>,
    },
}

impl Input {
    pub fn text(name: &str, state: &str) -> Self {
        Self::Text {
            name: name.to_string(),
            state: Some(state.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Input::Text { name, .. } => name,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::Input;

/// How the host should render a text preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum TextKind {
    Plain,
    Uri,
    Password,
}

/// An editable setting shown on the source preference screen
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Preference {
    pub title: String,
    pub summary: String,
    pub dialog_message: Option<String>,
    pub kind: TextKind,
    pub default: String,
    /// Current value, `name` is the key the host stores it under
    pub input: Input,
    /// Message shown when the host rejects a value
    pub validation_message: Option<String>,
    pub restart_required: bool,
}

impl Preference {
    pub fn key(&self) -> &str {
        self.input.name()
    }
}

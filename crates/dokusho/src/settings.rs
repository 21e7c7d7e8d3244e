use dokusho_lib::{
    error::Error,
    models::{Input, Preference, TextKind},
};
use url::Url;

pub const PREF_DISPLAY_NAME: &str = "Source display name";
pub const PREF_ADDRESS: &str = "Address";
pub const PREF_API_KEY: &str = "API key";

const MAX_MASK_LEN: usize = 20;

/// User configuration, read once when the source is built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub display_name: String,
    /// Server base url without trailing slash
    pub address: String,
    pub api_key: String,
}

fn text_state<'a>(inputs: &'a [Input], key: &str) -> Option<&'a str> {
    inputs.iter().find_map(|input| match input {
        Input::Text { name, state } if name == key => state.as_deref(),
        _ => None,
    })
}

/// Drops a single trailing slash
pub fn strip_slash(address: &str) -> &str {
    address.strip_suffix('/').unwrap_or(address)
}

pub fn validate_address(address: &str) -> Result<(), Error> {
    let invalid = |reason: &str| Error::InvalidPreference {
        name: PREF_ADDRESS.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(address).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if address.ends_with('/') {
        return Err(invalid("must not end with a slash"));
    }

    Ok(())
}

impl Settings {
    /// Values as stored by the host, nothing is validated
    pub fn from_inputs(inputs: &[Input]) -> Self {
        let get = |key: &str| text_state(inputs, key).unwrap_or_default();
        Self {
            display_name: get(PREF_DISPLAY_NAME).to_string(),
            address: strip_slash(get(PREF_ADDRESS)).to_string(),
            api_key: get(PREF_API_KEY).to_string(),
        }
    }

    /// Apply edited values on top of the current ones, all or nothing
    pub fn with_inputs(&self, inputs: &[Input]) -> Result<Self, Error> {
        let mut settings = self.clone();
        if let Some(display_name) = text_state(inputs, PREF_DISPLAY_NAME) {
            settings.display_name = display_name.to_string();
        }
        if let Some(address) = text_state(inputs, PREF_ADDRESS) {
            validate_address(address)?;
            settings.address = address.to_string();
        }
        if let Some(api_key) = text_state(inputs, PREF_API_KEY) {
            settings.api_key = api_key.to_string();
        }

        Ok(settings)
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn masked_api_key(&self) -> String {
        "*".repeat(self.api_key.chars().count().min(MAX_MASK_LEN))
    }

    pub fn preferences(&self) -> Vec<Preference> {
        vec![
            Preference {
                title: PREF_DISPLAY_NAME.to_string(),
                summary: if self.display_name.trim().is_empty() {
                    "Optional: Customize the displayed source name".to_string()
                } else {
                    self.display_name.clone()
                },
                dialog_message: None,
                kind: TextKind::Plain,
                default: String::new(),
                input: Input::text(PREF_DISPLAY_NAME, &self.display_name),
                validation_message: None,
                restart_required: true,
            },
            Preference {
                title: "Server address".to_string(),
                summary: if self.address.trim().is_empty() {
                    "The Dokusho server address (e.g., https://dokusho.example.com)".to_string()
                } else {
                    self.address.clone()
                },
                dialog_message: Some(
                    "Enter the full URL of your Dokusho server. Do not include a trailing slash."
                        .to_string(),
                ),
                kind: TextKind::Uri,
                default: String::new(),
                input: Input::text(PREF_ADDRESS, &self.address),
                validation_message: Some(
                    "The URL is invalid, malformed, or ends with a slash".to_string(),
                ),
                restart_required: true,
            },
            Preference {
                title: PREF_API_KEY.to_string(),
                summary: if self.has_api_key() {
                    self.masked_api_key()
                } else {
                    "Enter your Dokusho API key for authentication".to_string()
                },
                dialog_message: Some(
                    "Enter your API key. You can generate one in the Dokusho dashboard under your account settings."
                        .to_string(),
                ),
                kind: TextKind::Password,
                default: String::new(),
                input: Input::text(PREF_API_KEY, &self.api_key),
                validation_message: None,
                restart_required: true,
            },
        ]
    }
}

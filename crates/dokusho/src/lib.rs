#[macro_use]
extern crate log;

pub mod config;
pub mod dto;
pub mod settings;
pub mod source;

#[cfg(test)]
mod mock;

use std::sync::Arc;

use dokusho_lib::{
    export_plugin,
    extensions::PluginRegistrar,
    http::HttpClient,
    models::Input,
};

pub use config::{VARIANTS, Variant};
pub use settings::Settings;
pub use source::Dokusho;

/// Every locale variant, each with the preferences the host stored for it
pub fn sources<F>(client: Arc<dyn HttpClient>, load_preferences: F) -> Vec<Dokusho>
where
    F: Fn(i64) -> Vec<Input>,
{
    VARIANTS
        .iter()
        .map(|variant| {
            let settings = Settings::from_inputs(&load_preferences(variant.source_id()));
            Dokusho::new(*variant, settings, client.clone())
        })
        .collect()
}

export_plugin!(register);

unsafe fn register(registrar: &mut dyn PluginRegistrar) {
    let client = registrar.http_client();
    let sources = sources(client, |id| registrar.load_preferences(id));
    for source in sources {
        registrar.register_function(Box::new(source));
    }
}

use std::{path::Path, sync::Arc};

use anyhow::Result;
use dokusho::{Dokusho, Settings, VARIANTS};
use dokusho_lib::{extensions::Extension, http::HttpClient, models::Version};

use crate::data::Index;

/// Every variant, configured from the command line instead of stored preferences
pub fn sources(settings: &Settings, client: Arc<dyn HttpClient>) -> Vec<Dokusho> {
    VARIANTS
        .iter()
        .map(|variant| Dokusho::new(*variant, settings.clone(), client.clone()))
        .collect()
}

pub fn index(sources: &[Dokusho]) -> Result<Vec<Index>> {
    let lib_version: Version = dokusho_lib::LIB_VERSION.parse()?;
    sources
        .iter()
        .map(|source| -> Result<Index> {
            let info = source.get_source_info();
            let version: Version = info.version.parse()?;
            let lang = source.variant().lang.to_string();
            Ok(Index {
                path: format!("library/dokusho-{lang}.so"),
                id: info.id,
                name: info.name,
                lang,
                version: version.to_string(),
                lib_version: lib_version.to_string(),
                icon: info.icon,
            })
        })
        .collect()
}

pub fn generate_json(sources: &[Dokusho], out: &Path) -> Result<()> {
    std::fs::create_dir_all(out.join("library"))?;

    let file = std::fs::File::create(out.join("index.json"))?;
    serde_json::to_writer_pretty(&file, &index(sources)?)?;
    info!("wrote {} sources to {}", sources.len(), out.display());

    Ok(())
}

#[cfg(test)]
mod test {
    use dokusho_util::http::UreqClient;

    use super::*;

    #[test]
    fn test_index_lists_every_variant() {
        let sources = dokusho::sources(Arc::new(UreqClient::new()), |_| vec![]);

        let index = index(&sources).unwrap();

        assert_eq!(index.len(), 9);
        assert_eq!(index[0].name, "Dokusho");
        assert_eq!(index[0].path, "library/dokusho-all.so");
        assert_eq!(index[1].name, "Dokusho En");
        assert!(index.iter().all(|i| i.id >= 0));
        assert!(index.iter().all(|i| i.icon.is_empty()));
    }

    #[test]
    fn test_index_uses_cli_settings() {
        let settings = Settings {
            display_name: "Home".to_string(),
            address: "https://dokusho.example.com".to_string(),
            api_key: String::new(),
        };
        let sources = sources(&settings, Arc::new(UreqClient::new()));

        let index = index(&sources).unwrap();

        assert_eq!(index.len(), 9);
        assert_eq!(index[0].name, "Dokusho (Home)");
        assert_eq!(index[1].name, "Dokusho (Home) En");
        assert!(
            index
                .iter()
                .all(|i| i.icon == "https://dokusho.example.com/favicon.ico")
        );
    }
}

use std::{collections::HashMap, sync::Arc};

use crate::{
    http::{HttpClient, Request, Response},
    models::{ChapterInfo, ImageUrl, Input, MangaInfo, MangaPage, Page, Preference, SourceInfo},
};
use anyhow::Result;
use bytes::Bytes;

pub trait Extension: Send + Sync {
    fn get_source_info(&self) -> SourceInfo;

    fn headers(&self) -> HashMap<String, String> {
        HashMap::new()
    }

    fn get_preferences(&self) -> Result<Vec<Preference>> {
        Ok(vec![])
    }

    fn set_preferences(&mut self, _preferences: Vec<Input>) -> Result<()> {
        Ok(())
    }

    fn get_popular_manga(&self, page: i64) -> Result<MangaPage>;

    fn get_latest_manga(&self, page: i64) -> Result<MangaPage>;

    fn search_manga(
        &self,
        page: i64,
        query: Option<String>,
        filters: Option<Vec<Input>>,
    ) -> Result<MangaPage>;

    fn get_manga_detail(&self, path: String) -> Result<MangaInfo>;

    /// Url shown to the user for a manga, may differ from the path used to fetch it
    fn get_manga_url(&self, path: &str) -> String;

    fn get_chapters(&self, path: String) -> Result<Vec<ChapterInfo>>;

    fn get_pages(&self, path: String) -> Result<Vec<Page>>;

    /// Request the host issues to download a page image
    fn image_request(&self, url: &str) -> Request {
        Request::get(url).headers(self.headers())
    }

    fn get_image_bytes(&self, url: String) -> Result<Bytes>;

    /// Sources whose pages point to html readers resolve the image here
    fn resolve_image_url(&self, _response: &Response) -> Result<ImageUrl> {
        Ok(ImageUrl::Unsupported)
    }
}

/// A type represents an extension
pub struct PluginDeclaration {
    pub rustc_version: &'static str,
    pub core_version: &'static str,
    pub register: unsafe fn(&mut dyn PluginRegistrar),
}

/// A trait for register an extension
pub trait PluginRegistrar {
    fn register_function(&mut self, extension: Box<dyn Extension>);

    /// Transport every registered extension must use
    fn http_client(&self) -> Arc<dyn HttpClient>;

    /// Preference values stored by the host for a source, empty on first run
    fn load_preferences(&self, source_id: i64) -> Vec<Input>;
}

/// macro for export an extension
#[macro_export]
macro_rules! export_plugin {
    ($register:expr) => {
        #[doc(hidden)]
        #[allow(non_upper_case_globals)]
        #[unsafe(no_mangle)]
        pub static plugin_declaration: $crate::extensions::PluginDeclaration =
            $crate::extensions::PluginDeclaration {
                rustc_version: $crate::RUSTC_VERSION,
                core_version: $crate::LIB_VERSION,
                register: $register,
            };
    };
}

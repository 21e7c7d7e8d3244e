//! Records mirroring the Dokusho JSON api, each with a mapping into the
//! canonical models of `dokusho_lib`.

use serde::{Deserialize, Deserializer};

pub mod chapter;
pub use chapter::*;

pub mod page;
pub use page::*;

pub mod serie;
pub use serie::*;

/// Treat an explicit `null` like a missing field
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Server relative urls are joined to `base_url`, absolute ones pass through
pub fn absolute_url(base_url: &str, url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("{base_url}{url}")
    }
}

pub use crate::error::Error;
pub use crate::extensions::{Extension, PluginDeclaration, PluginRegistrar};
pub use crate::http::{Headers, HttpClient, Request, Response};
pub use crate::models::*;

use openapi::apis::configuration::{ApiKey, Configuration};
use std::sync::Arc;

pub use dynamic_hls::DynamicHlsApi;
pub use error::ClientError;
pub use library::LibraryApi;
pub use quick_connect::QuickConnectApi;

pub mod dynamic_hls;
pub mod error;
pub mod library;
pub mod quick_connect;

/// One handle per server, holding the per-tag clients. All calls are
/// synchronous; the configuration is shared and immutable.
#[derive(Default, Debug)]
pub struct JellyfinApi {
    pub dynamic_hls: DynamicHlsApi,
    pub library: LibraryApi,
    pub quick_connect: QuickConnectApi,
}

impl JellyfinApi {
    pub fn new(base_path: String, token: String) -> Self {
        let configuration = Arc::new({
            let mut c = Configuration::new();
            c.base_path = base_path;
            c.api_key = Some(ApiKey {
                prefix: None,
                key: token,
            });
            c
        });
        Self {
            dynamic_hls: DynamicHlsApi::new(configuration.clone()),
            library: LibraryApi::new(configuration.clone()),
            quick_connect: QuickConnectApi::new(configuration.clone()),
        }
    }
}

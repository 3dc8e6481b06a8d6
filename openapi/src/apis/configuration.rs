/// Connection settings shared by every API call. Built once, then shared
/// immutably (the wrapper crate puts it behind an `Arc`).
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Server root without a trailing slash, e.g. `http://jellyfin.local:8096`.
    pub base_path: String,
    pub user_agent: Option<String>,
    pub client: reqwest::blocking::Client,
    /// Rendered as `Authorization: MediaBrowser Token="…"`.
    pub api_key: Option<ApiKey>,
    pub bearer_access_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiKey {
    pub prefix: Option<String>,
    pub key: String,
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            base_path: "http://localhost:8096".to_owned(),
            user_agent: Some(format!(
                "jellyfin-openapi/{}/rust",
                env!("CARGO_PKG_VERSION")
            )),
            client: reqwest::blocking::Client::new(),
            api_key: None,
            bearer_access_token: None,
        }
    }
}

use serde::{Deserialize, Serialize};

/// State of a quick connect pairing request.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuickConnectResult {
    /// Whether the request has been authorized by a logged-in user yet.
    #[serde(rename = "Authenticated")]
    pub authenticated: bool,
    /// The secret the initiating device polls the state with.
    #[serde(rename = "Secret", skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// The short code shown to the user for authorization.
    #[serde(rename = "Code", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "DeviceId", skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(rename = "DeviceName", skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(rename = "AppName", skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(rename = "AppVersion", skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(rename = "DateAdded", skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
}

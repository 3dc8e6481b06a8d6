use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaUpdateInfoPathInfo {
    #[serde(rename = "Path", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// One of `Created`, `Modified`, `Deleted`. Unknown values trigger a
    /// full refresh of the containing folder on the server.
    #[serde(rename = "UpdateType", skip_serializing_if = "Option::is_none")]
    pub update_type: Option<String>,
}

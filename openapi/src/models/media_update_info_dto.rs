use serde::{Deserialize, Serialize};

use crate::models;

/// Batch of path-level change notifications for `/Library/Media/Updated`.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaUpdateInfoDto {
    #[serde(rename = "Updates")]
    pub updates: Vec<models::MediaUpdateInfoPathInfo>,
}

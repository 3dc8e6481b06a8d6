use serde::{Deserialize, Serialize};

use crate::models;

/// Theme songs or theme videos for an item, plus the id of the item that
/// actually owns them (relevant when `inheritFromParent` was set).
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeMediaResult {
    #[serde(rename = "Items", skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<models::BaseItemDto>>,
    #[serde(rename = "TotalRecordCount")]
    pub total_record_count: i32,
    #[serde(rename = "StartIndex")]
    pub start_index: i32,
    #[serde(rename = "OwnerId")]
    pub owner_id: uuid::Uuid,
}

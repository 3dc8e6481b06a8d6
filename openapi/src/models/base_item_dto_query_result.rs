use serde::{Deserialize, Serialize};

use crate::models;

/// A page of items plus the total count of the full result set.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaseItemDtoQueryResult {
    #[serde(rename = "Items", skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<models::BaseItemDto>>,
    /// Total number of records available, not just the returned page.
    #[serde(rename = "TotalRecordCount")]
    pub total_record_count: i32,
    #[serde(rename = "StartIndex")]
    pub start_index: i32,
}

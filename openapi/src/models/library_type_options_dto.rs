use serde::{Deserialize, Serialize};

use crate::models;

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct LibraryTypeOptionsDto {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(rename = "MetadataFetchers")]
    pub metadata_fetchers: Vec<models::LibraryOptionInfoDto>,
    #[serde(rename = "ImageFetchers")]
    pub image_fetchers: Vec<models::LibraryOptionInfoDto>,
    #[serde(rename = "SupportedImageTypes")]
    pub supported_image_types: Vec<String>,
}

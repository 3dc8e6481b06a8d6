use serde::{Deserialize, Serialize};

use crate::models;

/// Providers and savers available when configuring a library, as returned by
/// `/Libraries/AvailableOptions`.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct LibraryOptionsResultDto {
    #[serde(rename = "MetadataSavers")]
    pub metadata_savers: Vec<models::LibraryOptionInfoDto>,
    #[serde(rename = "MetadataReaders")]
    pub metadata_readers: Vec<models::LibraryOptionInfoDto>,
    #[serde(rename = "SubtitleFetchers")]
    pub subtitle_fetchers: Vec<models::LibraryOptionInfoDto>,
    #[serde(rename = "LyricFetchers")]
    pub lyric_fetchers: Vec<models::LibraryOptionInfoDto>,
    #[serde(rename = "TypeOptions")]
    pub type_options: Vec<models::LibraryTypeOptionsDto>,
}

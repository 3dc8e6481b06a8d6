use serde::{Deserialize, Serialize};

use crate::models;

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct AllThemeMediaResult {
    #[serde(rename = "ThemeVideosResult", skip_serializing_if = "Option::is_none")]
    pub theme_videos_result: Option<Box<models::ThemeMediaResult>>,
    #[serde(rename = "ThemeSongsResult", skip_serializing_if = "Option::is_none")]
    pub theme_songs_result: Option<Box<models::ThemeMediaResult>>,
    #[serde(
        rename = "SoundtrackSongsResult",
        skip_serializing_if = "Option::is_none"
    )]
    pub soundtrack_songs_result: Option<Box<models::ThemeMediaResult>>,
}

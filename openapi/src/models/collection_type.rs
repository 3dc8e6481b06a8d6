use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The wire spellings are lowercase, unlike every other Jellyfin enum.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Display,
    EnumString,
)]
pub enum CollectionType {
    #[serde(rename = "unknown")]
    #[strum(serialize = "unknown")]
    Unknown,
    #[serde(rename = "movies")]
    #[strum(serialize = "movies")]
    Movies,
    #[serde(rename = "tvshows")]
    #[strum(serialize = "tvshows")]
    TvShows,
    #[serde(rename = "music")]
    #[strum(serialize = "music")]
    Music,
    #[serde(rename = "musicvideos")]
    #[strum(serialize = "musicvideos")]
    MusicVideos,
    #[serde(rename = "trailers")]
    #[strum(serialize = "trailers")]
    Trailers,
    #[serde(rename = "homevideos")]
    #[strum(serialize = "homevideos")]
    HomeVideos,
    #[serde(rename = "boxsets")]
    #[strum(serialize = "boxsets")]
    BoxSets,
    #[serde(rename = "books")]
    #[strum(serialize = "books")]
    Books,
    #[serde(rename = "photos")]
    #[strum(serialize = "photos")]
    Photos,
    #[serde(rename = "livetv")]
    #[strum(serialize = "livetv")]
    LiveTv,
    #[serde(rename = "playlists")]
    #[strum(serialize = "playlists")]
    Playlists,
    #[serde(rename = "folders")]
    #[strum(serialize = "folders")]
    Folders,
}

use serde::{Deserialize, Serialize};

/// Per-kind totals for a library, as returned by `/Items/Counts`.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCounts {
    #[serde(rename = "MovieCount")]
    pub movie_count: i32,
    #[serde(rename = "SeriesCount")]
    pub series_count: i32,
    #[serde(rename = "EpisodeCount")]
    pub episode_count: i32,
    #[serde(rename = "ArtistCount")]
    pub artist_count: i32,
    #[serde(rename = "ProgramCount")]
    pub program_count: i32,
    #[serde(rename = "TrailerCount")]
    pub trailer_count: i32,
    #[serde(rename = "SongCount")]
    pub song_count: i32,
    #[serde(rename = "AlbumCount")]
    pub album_count: i32,
    #[serde(rename = "MusicVideoCount")]
    pub music_video_count: i32,
    #[serde(rename = "BoxSetCount")]
    pub box_set_count: i32,
    #[serde(rename = "BookCount")]
    pub book_count: i32,
    #[serde(rename = "ItemCount")]
    pub item_count: i32,
}

use serde::{Deserialize, Serialize};

use super::{configuration, urlencode, Error};
use crate::models;

/// Typed errors of [`delete_item`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeleteItemError {
    Status401(models::ProblemDetails),
    Status404(models::ProblemDetails),
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`delete_items`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeleteItemsError {
    Status401(models::ProblemDetails),
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`get_ancestors`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetAncestorsError {
    Status404(models::ProblemDetails),
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`get_critic_reviews`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetCriticReviewsError {
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`get_download`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetDownloadError {
    Status404(models::ProblemDetails),
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`get_file`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetFileError {
    Status404(models::ProblemDetails),
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`get_item_counts`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetItemCountsError {
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`get_library_options_info`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetLibraryOptionsInfoError {
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`get_media_folders`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetMediaFoldersError {
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`get_physical_paths`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetPhysicalPathsError {
    UnknownValue(serde_json::Value),
}

/// Typed errors of the six `/{type}/{itemId}/Similar` operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetSimilarItemsError {
    Status404(models::ProblemDetails),
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`get_theme_media`], [`get_theme_songs`] and
/// [`get_theme_videos`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetThemeMediaError {
    Status404(models::ProblemDetails),
    UnknownValue(serde_json::Value),
}

/// Typed errors of the `/Library/{Movies,Series,Media}/{Added,Updated}`
/// notifications and [`refresh_library`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LibraryNotificationError {
    UnknownValue(serde_json::Value),
}

/// Deletes an item from the library and filesystem.
pub fn delete_item(
    configuration: &configuration::Configuration,
    item_id: uuid::Uuid,
) -> Result<(), Error<DeleteItemError>> {
    let uri_str = format!(
        "{}/Items/{itemId}",
        configuration.base_path,
        itemId = urlencode(item_id.to_string())
    );
    let req_builder = configuration.client.delete(&uri_str);
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_empty(req_builder)
}

/// Deletes multiple items from the library and filesystem.
pub fn delete_items(
    configuration: &configuration::Configuration,
    ids: Option<&[uuid::Uuid]>,
) -> Result<(), Error<DeleteItemsError>> {
    let uri_str = format!("{}/Items", configuration.base_path);
    let mut req_builder = configuration.client.delete(&uri_str);
    if let Some(ids) = ids {
        req_builder = req_builder.query(&[("ids", super::csv(ids))]);
    }
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_empty(req_builder)
}

/// Gets all parents of an item, root first.
pub fn get_ancestors(
    configuration: &configuration::Configuration,
    item_id: uuid::Uuid,
    user_id: Option<uuid::Uuid>,
) -> Result<Vec<models::BaseItemDto>, Error<GetAncestorsError>> {
    let uri_str = format!(
        "{}/Items/{itemId}/Ancestors",
        configuration.base_path,
        itemId = urlencode(item_id.to_string())
    );
    let mut req_builder = configuration.client.get(&uri_str);
    if let Some(ref user_id) = user_id {
        req_builder = req_builder.query(&[("userId", &user_id.to_string())]);
    }
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_json(req_builder)
}

/// Gets critic reviews for an item. Deprecated upstream but still served.
pub fn get_critic_reviews(
    configuration: &configuration::Configuration,
    item_id: &str,
) -> Result<models::BaseItemDtoQueryResult, Error<GetCriticReviewsError>> {
    let uri_str = format!(
        "{}/Items/{itemId}/CriticReviews",
        configuration.base_path,
        itemId = urlencode(item_id)
    );
    let req_builder = configuration.client.get(&uri_str);
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_json(req_builder)
}

/// Downloads an item's media file, with a content-disposition filename.
pub fn get_download(
    configuration: &configuration::Configuration,
    item_id: uuid::Uuid,
) -> Result<Vec<u8>, Error<GetDownloadError>> {
    let uri_str = format!(
        "{}/Items/{itemId}/Download",
        configuration.base_path,
        itemId = urlencode(item_id.to_string())
    );
    let req_builder = configuration.client.get(&uri_str);
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_bytes(req_builder)
}

/// Gets an item's original file.
pub fn get_file(
    configuration: &configuration::Configuration,
    item_id: uuid::Uuid,
) -> Result<Vec<u8>, Error<GetFileError>> {
    let uri_str = format!(
        "{}/Items/{itemId}/File",
        configuration.base_path,
        itemId = urlencode(item_id.to_string())
    );
    let req_builder = configuration.client.get(&uri_str);
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_bytes(req_builder)
}

/// Gets item counts, optionally scoped to one user's library.
pub fn get_item_counts(
    configuration: &configuration::Configuration,
    user_id: Option<uuid::Uuid>,
    is_favorite: Option<bool>,
) -> Result<models::ItemCounts, Error<GetItemCountsError>> {
    let uri_str = format!("{}/Items/Counts", configuration.base_path);
    let mut req_builder = configuration.client.get(&uri_str);
    if let Some(ref user_id) = user_id {
        req_builder = req_builder.query(&[("userId", &user_id.to_string())]);
    }
    if let Some(is_favorite) = is_favorite {
        req_builder = req_builder.query(&[("isFavorite", is_favorite.to_string())]);
    }
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_json(req_builder)
}

/// Gets the options available when setting up a library of the given type.
pub fn get_library_options_info(
    configuration: &configuration::Configuration,
    library_content_type: Option<models::CollectionType>,
    is_new_library: Option<bool>,
) -> Result<models::LibraryOptionsResultDto, Error<GetLibraryOptionsInfoError>> {
    let uri_str = format!("{}/Libraries/AvailableOptions", configuration.base_path);
    let mut req_builder = configuration.client.get(&uri_str);
    if let Some(library_content_type) = library_content_type {
        req_builder =
            req_builder.query(&[("libraryContentType", library_content_type.to_string())]);
    }
    if let Some(is_new_library) = is_new_library {
        req_builder = req_builder.query(&[("isNewLibrary", is_new_library.to_string())]);
    }
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_json(req_builder)
}

/// Gets all user media folders.
pub fn get_media_folders(
    configuration: &configuration::Configuration,
    is_hidden: Option<bool>,
) -> Result<models::BaseItemDtoQueryResult, Error<GetMediaFoldersError>> {
    let uri_str = format!("{}/Library/MediaFolders", configuration.base_path);
    let mut req_builder = configuration.client.get(&uri_str);
    if let Some(is_hidden) = is_hidden {
        req_builder = req_builder.query(&[("isHidden", is_hidden.to_string())]);
    }
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_json(req_builder)
}

/// Gets a list of physical paths from the virtual folders.
pub fn get_physical_paths(
    configuration: &configuration::Configuration,
) -> Result<Vec<String>, Error<GetPhysicalPathsError>> {
    let uri_str = format!("{}/Library/PhysicalPaths", configuration.base_path);
    let req_builder = configuration.client.get(&uri_str);
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_json(req_builder)
}

// The six Similar endpoints differ only in the path root; the server routes
// them all to the same handler.
fn get_similar(
    configuration: &configuration::Configuration,
    path_root: &str,
    item_id: uuid::Uuid,
    exclude_artist_ids: Option<&[uuid::Uuid]>,
    user_id: Option<uuid::Uuid>,
    limit: Option<i32>,
    fields: Option<&[models::ItemFields]>,
) -> Result<models::BaseItemDtoQueryResult, Error<GetSimilarItemsError>> {
    let uri_str = format!(
        "{}/{root}/{itemId}/Similar",
        configuration.base_path,
        root = path_root,
        itemId = urlencode(item_id.to_string())
    );
    let mut req_builder = configuration.client.get(&uri_str);
    if let Some(exclude_artist_ids) = exclude_artist_ids {
        req_builder = req_builder.query(&[("excludeArtistIds", super::csv(exclude_artist_ids))]);
    }
    if let Some(ref user_id) = user_id {
        req_builder = req_builder.query(&[("userId", &user_id.to_string())]);
    }
    if let Some(limit) = limit {
        req_builder = req_builder.query(&[("limit", limit.to_string())]);
    }
    if let Some(fields) = fields {
        req_builder = req_builder.query(&[("fields", super::csv(fields))]);
    }
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_json(req_builder)
}

macro_rules! similar_endpoint {
    ($(#[$doc:meta])* $name:ident, $root:literal) => {
        $(#[$doc])*
        pub fn $name(
            configuration: &configuration::Configuration,
            item_id: uuid::Uuid,
            exclude_artist_ids: Option<&[uuid::Uuid]>,
            user_id: Option<uuid::Uuid>,
            limit: Option<i32>,
            fields: Option<&[models::ItemFields]>,
        ) -> Result<models::BaseItemDtoQueryResult, Error<GetSimilarItemsError>> {
            get_similar(
                configuration,
                $root,
                item_id,
                exclude_artist_ids,
                user_id,
                limit,
                fields,
            )
        }
    };
}

similar_endpoint!(
    /// Gets albums similar to the given one.
    get_similar_albums, "Albums");
similar_endpoint!(
    /// Gets artists similar to the given one.
    get_similar_artists, "Artists");
similar_endpoint!(
    /// Gets items similar to the given one.
    get_similar_items, "Items");
similar_endpoint!(
    /// Gets movies similar to the given one.
    get_similar_movies, "Movies");
similar_endpoint!(
    /// Gets shows similar to the given one.
    get_similar_shows, "Shows");
similar_endpoint!(
    /// Gets trailers similar to the given item.
    get_similar_trailers, "Trailers");

fn theme_media_request(
    configuration: &configuration::Configuration,
    item_id: uuid::Uuid,
    endpoint: &str,
    user_id: Option<uuid::Uuid>,
    inherit_from_parent: Option<bool>,
    sort_by: Option<&[models::ItemSortBy]>,
    sort_order: Option<&[models::SortOrder]>,
) -> reqwest::blocking::RequestBuilder {
    let uri_str = format!(
        "{}/Items/{itemId}/{endpoint}",
        configuration.base_path,
        itemId = urlencode(item_id.to_string()),
        endpoint = endpoint
    );
    let mut req_builder = configuration.client.get(&uri_str);
    if let Some(ref user_id) = user_id {
        req_builder = req_builder.query(&[("userId", &user_id.to_string())]);
    }
    if let Some(inherit_from_parent) = inherit_from_parent {
        req_builder = req_builder.query(&[("inheritFromParent", inherit_from_parent.to_string())]);
    }
    if let Some(sort_by) = sort_by {
        req_builder = req_builder.query(&[("sortBy", super::csv(sort_by))]);
    }
    if let Some(sort_order) = sort_order {
        req_builder = req_builder.query(&[("sortOrder", super::csv(sort_order))]);
    }
    super::apply_common_headers(req_builder, configuration)
}

/// Gets theme songs and videos for an item in one call.
pub fn get_theme_media(
    configuration: &configuration::Configuration,
    item_id: uuid::Uuid,
    user_id: Option<uuid::Uuid>,
    inherit_from_parent: Option<bool>,
    sort_by: Option<&[models::ItemSortBy]>,
    sort_order: Option<&[models::SortOrder]>,
) -> Result<models::AllThemeMediaResult, Error<GetThemeMediaError>> {
    super::execute_json(theme_media_request(
        configuration,
        item_id,
        "ThemeMedia",
        user_id,
        inherit_from_parent,
        sort_by,
        sort_order,
    ))
}

/// Gets theme songs for an item.
pub fn get_theme_songs(
    configuration: &configuration::Configuration,
    item_id: uuid::Uuid,
    user_id: Option<uuid::Uuid>,
    inherit_from_parent: Option<bool>,
    sort_by: Option<&[models::ItemSortBy]>,
    sort_order: Option<&[models::SortOrder]>,
) -> Result<models::ThemeMediaResult, Error<GetThemeMediaError>> {
    super::execute_json(theme_media_request(
        configuration,
        item_id,
        "ThemeSongs",
        user_id,
        inherit_from_parent,
        sort_by,
        sort_order,
    ))
}

/// Gets theme videos for an item.
pub fn get_theme_videos(
    configuration: &configuration::Configuration,
    item_id: uuid::Uuid,
    user_id: Option<uuid::Uuid>,
    inherit_from_parent: Option<bool>,
    sort_by: Option<&[models::ItemSortBy]>,
    sort_order: Option<&[models::SortOrder]>,
) -> Result<models::ThemeMediaResult, Error<GetThemeMediaError>> {
    super::execute_json(theme_media_request(
        configuration,
        item_id,
        "ThemeVideos",
        user_id,
        inherit_from_parent,
        sort_by,
        sort_order,
    ))
}

/// Reports that new movies have been added by an external notifier.
pub fn post_added_movies(
    configuration: &configuration::Configuration,
    tmdb_id: Option<&str>,
    imdb_id: Option<&str>,
) -> Result<(), Error<LibraryNotificationError>> {
    let uri_str = format!("{}/Library/Movies/Added", configuration.base_path);
    let mut req_builder = configuration.client.post(&uri_str);
    if let Some(tmdb_id) = tmdb_id {
        req_builder = req_builder.query(&[("tmdbId", tmdb_id)]);
    }
    if let Some(imdb_id) = imdb_id {
        req_builder = req_builder.query(&[("imdbId", imdb_id)]);
    }
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_empty(req_builder)
}

/// Reports that new episodes of a series have been added by an external
/// notifier.
pub fn post_added_series(
    configuration: &configuration::Configuration,
    tvdb_id: Option<&str>,
) -> Result<(), Error<LibraryNotificationError>> {
    let uri_str = format!("{}/Library/Series/Added", configuration.base_path);
    let mut req_builder = configuration.client.post(&uri_str);
    if let Some(tvdb_id) = tvdb_id {
        req_builder = req_builder.query(&[("tvdbId", tvdb_id)]);
    }
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_empty(req_builder)
}

/// Reports that media at the given paths was created, modified or deleted.
pub fn post_updated_media(
    configuration: &configuration::Configuration,
    media_update_info_dto: models::MediaUpdateInfoDto,
) -> Result<(), Error<LibraryNotificationError>> {
    let uri_str = format!("{}/Library/Media/Updated", configuration.base_path);
    let req_builder = configuration
        .client
        .post(&uri_str)
        .json(&media_update_info_dto);
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_empty(req_builder)
}

/// Reports that movies have been updated by an external notifier.
pub fn post_updated_movies(
    configuration: &configuration::Configuration,
    tmdb_id: Option<&str>,
    imdb_id: Option<&str>,
) -> Result<(), Error<LibraryNotificationError>> {
    let uri_str = format!("{}/Library/Movies/Updated", configuration.base_path);
    let mut req_builder = configuration.client.post(&uri_str);
    if let Some(tmdb_id) = tmdb_id {
        req_builder = req_builder.query(&[("tmdbId", tmdb_id)]);
    }
    if let Some(imdb_id) = imdb_id {
        req_builder = req_builder.query(&[("imdbId", imdb_id)]);
    }
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_empty(req_builder)
}

/// Reports that a series has been updated by an external notifier.
pub fn post_updated_series(
    configuration: &configuration::Configuration,
    tvdb_id: Option<&str>,
) -> Result<(), Error<LibraryNotificationError>> {
    let uri_str = format!("{}/Library/Series/Updated", configuration.base_path);
    let mut req_builder = configuration.client.post(&uri_str);
    if let Some(tvdb_id) = tvdb_id {
        req_builder = req_builder.query(&[("tvdbId", tvdb_id)]);
    }
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_empty(req_builder)
}

/// Starts a scan of all libraries.
pub fn refresh_library(
    configuration: &configuration::Configuration,
) -> Result<(), Error<LibraryNotificationError>> {
    let uri_str = format!("{}/Library/Refresh", configuration.base_path);
    let req_builder = configuration.client.post(&uri_str);
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_empty(req_builder)
}

use std::sync::Arc;

use openapi::apis::configuration::Configuration;
use openapi::apis::library_api::*;
use openapi::models::{
    AllThemeMediaResult, BaseItemDto, BaseItemDtoQueryResult, CollectionType, ItemCounts,
    ItemFields, ItemSortBy, LibraryOptionsResultDto, MediaUpdateInfoDto, SortOrder,
    ThemeMediaResult,
};
use uuid::Uuid;

use crate::error::{boxed, ClientError};

/// Library browsing, deletion, similarity queries, theme media and the
/// external-notifier endpoints.
#[derive(Default, Debug)]
pub struct LibraryApi {
    configuration: Arc<Configuration>,
}

impl LibraryApi {
    pub(crate) fn new(configuration: Arc<Configuration>) -> Self {
        Self { configuration }
    }

    /// Deletes an item from the library and filesystem.
    pub fn delete_item(&self, item_id: Uuid) -> Result<(), ClientError> {
        delete_item(&self.configuration, item_id).map_err(boxed)
    }

    /// Deletes multiple items from the library and filesystem.
    pub fn delete_items(&self, ids: Option<&[Uuid]>) -> Result<(), ClientError> {
        delete_items(&self.configuration, ids).map_err(boxed)
    }

    /// Gets all parents of an item, root first.
    pub fn ancestors(
        &self,
        item_id: Uuid,
        user_id: Option<Uuid>,
    ) -> Result<Vec<BaseItemDto>, ClientError> {
        get_ancestors(&self.configuration, item_id, user_id).map_err(boxed)
    }

    pub fn critic_reviews(&self, item_id: &str) -> Result<BaseItemDtoQueryResult, ClientError> {
        get_critic_reviews(&self.configuration, item_id).map_err(boxed)
    }

    /// Downloads an item's media file.
    pub fn download(&self, item_id: Uuid) -> Result<Vec<u8>, ClientError> {
        get_download(&self.configuration, item_id).map_err(boxed)
    }

    /// Gets an item's original file.
    pub fn file(&self, item_id: Uuid) -> Result<Vec<u8>, ClientError> {
        get_file(&self.configuration, item_id).map_err(boxed)
    }

    /// Gets item counts, optionally scoped to one user's library.
    pub fn item_counts(
        &self,
        user_id: Option<Uuid>,
        is_favorite: Option<bool>,
    ) -> Result<ItemCounts, ClientError> {
        get_item_counts(&self.configuration, user_id, is_favorite).map_err(boxed)
    }

    pub fn library_options_info(
        &self,
        library_content_type: Option<CollectionType>,
        is_new_library: Option<bool>,
    ) -> Result<LibraryOptionsResultDto, ClientError> {
        get_library_options_info(&self.configuration, library_content_type, is_new_library)
            .map_err(boxed)
    }

    /// Gets all user media folders.
    pub fn media_folders(
        &self,
        is_hidden: Option<bool>,
    ) -> Result<BaseItemDtoQueryResult, ClientError> {
        get_media_folders(&self.configuration, is_hidden).map_err(boxed)
    }

    pub fn physical_paths(&self) -> Result<Vec<String>, ClientError> {
        get_physical_paths(&self.configuration).map_err(boxed)
    }

    pub fn similar_albums(
        &self,
        item_id: Uuid,
        query: &SimilarItemsQuery,
    ) -> Result<BaseItemDtoQueryResult, ClientError> {
        query.run(&self.configuration, get_similar_albums, item_id)
    }

    pub fn similar_artists(
        &self,
        item_id: Uuid,
        query: &SimilarItemsQuery,
    ) -> Result<BaseItemDtoQueryResult, ClientError> {
        query.run(&self.configuration, get_similar_artists, item_id)
    }

    pub fn similar_items(
        &self,
        item_id: Uuid,
        query: &SimilarItemsQuery,
    ) -> Result<BaseItemDtoQueryResult, ClientError> {
        query.run(&self.configuration, get_similar_items, item_id)
    }

    pub fn similar_movies(
        &self,
        item_id: Uuid,
        query: &SimilarItemsQuery,
    ) -> Result<BaseItemDtoQueryResult, ClientError> {
        query.run(&self.configuration, get_similar_movies, item_id)
    }

    pub fn similar_shows(
        &self,
        item_id: Uuid,
        query: &SimilarItemsQuery,
    ) -> Result<BaseItemDtoQueryResult, ClientError> {
        query.run(&self.configuration, get_similar_shows, item_id)
    }

    pub fn similar_trailers(
        &self,
        item_id: Uuid,
        query: &SimilarItemsQuery,
    ) -> Result<BaseItemDtoQueryResult, ClientError> {
        query.run(&self.configuration, get_similar_trailers, item_id)
    }

    /// Gets theme songs and videos for an item in one call.
    pub fn theme_media(
        &self,
        item_id: Uuid,
        query: &ThemeMediaQuery,
    ) -> Result<AllThemeMediaResult, ClientError> {
        get_theme_media(
            &self.configuration,
            item_id,
            query.user_id,
            query.inherit_from_parent,
            query.sort_by.as_deref(),
            query.sort_order.as_deref(),
        )
        .map_err(boxed)
    }

    pub fn theme_songs(
        &self,
        item_id: Uuid,
        query: &ThemeMediaQuery,
    ) -> Result<ThemeMediaResult, ClientError> {
        get_theme_songs(
            &self.configuration,
            item_id,
            query.user_id,
            query.inherit_from_parent,
            query.sort_by.as_deref(),
            query.sort_order.as_deref(),
        )
        .map_err(boxed)
    }

    pub fn theme_videos(
        &self,
        item_id: Uuid,
        query: &ThemeMediaQuery,
    ) -> Result<ThemeMediaResult, ClientError> {
        get_theme_videos(
            &self.configuration,
            item_id,
            query.user_id,
            query.inherit_from_parent,
            query.sort_by.as_deref(),
            query.sort_order.as_deref(),
        )
        .map_err(boxed)
    }

    /// Tells the server new movies were added, by TMDb or IMDb id.
    pub fn notify_movies_added(
        &self,
        tmdb_id: Option<&str>,
        imdb_id: Option<&str>,
    ) -> Result<(), ClientError> {
        log::debug!("notifying movies added: tmdb={tmdb_id:?} imdb={imdb_id:?}");
        post_added_movies(&self.configuration, tmdb_id, imdb_id).map_err(boxed)
    }

    pub fn notify_movies_updated(
        &self,
        tmdb_id: Option<&str>,
        imdb_id: Option<&str>,
    ) -> Result<(), ClientError> {
        log::debug!("notifying movies updated: tmdb={tmdb_id:?} imdb={imdb_id:?}");
        post_updated_movies(&self.configuration, tmdb_id, imdb_id).map_err(boxed)
    }

    /// Tells the server new episodes of a series were added, by TVDb id.
    pub fn notify_series_added(&self, tvdb_id: Option<&str>) -> Result<(), ClientError> {
        log::debug!("notifying series added: tvdb={tvdb_id:?}");
        post_added_series(&self.configuration, tvdb_id).map_err(boxed)
    }

    pub fn notify_series_updated(&self, tvdb_id: Option<&str>) -> Result<(), ClientError> {
        log::debug!("notifying series updated: tvdb={tvdb_id:?}");
        post_updated_series(&self.configuration, tvdb_id).map_err(boxed)
    }

    /// Tells the server media at the given paths changed on disk.
    pub fn notify_media_updated(&self, updates: MediaUpdateInfoDto) -> Result<(), ClientError> {
        post_updated_media(&self.configuration, updates).map_err(boxed)
    }

    /// Starts a scan of all libraries.
    pub fn refresh(&self) -> Result<(), ClientError> {
        log::debug!("requesting library refresh");
        refresh_library(&self.configuration).map_err(boxed)
    }
}

type SimilarFn = fn(
    &Configuration,
    Uuid,
    Option<&[Uuid]>,
    Option<Uuid>,
    Option<i32>,
    Option<&[ItemFields]>,
) -> Result<BaseItemDtoQueryResult, openapi::apis::Error<GetSimilarItemsError>>;

/// Optional filters shared by the six Similar endpoints.
#[derive(Default, Debug, Clone)]
pub struct SimilarItemsQuery {
    pub exclude_artist_ids: Option<Vec<Uuid>>,
    pub user_id: Option<Uuid>,
    pub limit: Option<i32>,
    pub fields: Option<Vec<ItemFields>>,
}

impl SimilarItemsQuery {
    fn run(
        &self,
        configuration: &Configuration,
        endpoint: SimilarFn,
        item_id: Uuid,
    ) -> Result<BaseItemDtoQueryResult, ClientError> {
        endpoint(
            configuration,
            item_id,
            self.exclude_artist_ids.as_deref(),
            self.user_id,
            self.limit,
            self.fields.as_deref(),
        )
        .map_err(boxed)
    }
}

/// Optional filters shared by the three theme-media endpoints.
#[derive(Default, Debug, Clone)]
pub struct ThemeMediaQuery {
    pub user_id: Option<Uuid>,
    pub inherit_from_parent: Option<bool>,
    pub sort_by: Option<Vec<ItemSortBy>>,
    pub sort_order: Option<Vec<SortOrder>>,
}

use openapi::apis::configuration::{ApiKey, Configuration};
use openapi::apis::library_api;
use openapi::apis::Error;
use openapi::models;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_configuration(base_path: String) -> Configuration {
    Configuration {
        base_path,
        api_key: Some(ApiKey {
            prefix: None,
            key: "test-token".to_owned(),
        }),
        ..Configuration::default()
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn item_counts_parses_pascal_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Items/Counts"))
        .and(query_param("isFavorite", "true"))
        .and(query_param_is_missing("userId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "MovieCount": 12,
            "SeriesCount": 3,
            "EpisodeCount": 48,
            "ArtistCount": 0,
            "ProgramCount": 0,
            "TrailerCount": 1,
            "SongCount": 0,
            "AlbumCount": 0,
            "MusicVideoCount": 0,
            "BoxSetCount": 2,
            "BookCount": 0,
            "ItemCount": 66,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let counts = tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        library_api::get_item_counts(&configuration, None, Some(true))
    })
    .await
    .unwrap()
    .unwrap();
    assert_eq!(counts.movie_count, 12);
    assert_eq!(counts.episode_count, 48);
    assert_eq!(counts.item_count, 66);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_items_joins_ids_comma_delimited() {
    let server = MockServer::start().await;
    let a = uuid::Uuid::new_v4();
    let b = uuid::Uuid::new_v4();
    Mock::given(method("DELETE"))
        .and(path("/Items"))
        .and(query_param("ids", format!("{a},{b}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        library_api::delete_items(&configuration, Some(&[a, b]))
    })
    .await
    .unwrap()
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_item_substitutes_path_and_sends_auth() {
    let server = MockServer::start().await;
    let item_id = uuid::Uuid::new_v4();
    Mock::given(method("DELETE"))
        .and(path(format!("/Items/{item_id}")))
        .and(header(
            "authorization",
            "MediaBrowser Token=\"test-token\"",
        ))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        library_api::delete_item(&configuration, item_id)
    })
    .await
    .unwrap()
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn ancestors_returns_root_first() {
    let server = MockServer::start().await;
    let item_id = uuid::Uuid::new_v4();
    let root_id = uuid::Uuid::new_v4();
    let season_id = uuid::Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path(format!("/Items/{item_id}/Ancestors")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "Id": root_id, "Name": "Shows", "Type": "CollectionFolder" },
            { "Id": season_id, "Name": "Season 1", "Type": "Season" },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let ancestors = tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        library_api::get_ancestors(&configuration, item_id, None)
    })
    .await
    .unwrap()
    .unwrap();
    assert_eq!(ancestors.len(), 2);
    assert_eq!(ancestors[0].id, root_id);
    assert_eq!(ancestors[0].name.as_deref(), Some("Shows"));
    assert_eq!(
        ancestors[1].r#type,
        Some(models::BaseItemKind::Season)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn similar_movies_sends_filters_with_wire_names() {
    let server = MockServer::start().await;
    let item_id = uuid::Uuid::new_v4();
    let user_id = uuid::Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path(format!("/Movies/{item_id}/Similar")))
        .and(query_param("userId", user_id.to_string()))
        .and(query_param("limit", "5"))
        .and(query_param("fields", "Genres,Overview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Items": [{ "Id": uuid::Uuid::new_v4(), "Name": "A similar movie" }],
            "TotalRecordCount": 1,
            "StartIndex": 0,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        library_api::get_similar_movies(
            &configuration,
            item_id,
            None,
            Some(user_id),
            Some(5),
            Some(&[models::ItemFields::Genres, models::ItemFields::Overview]),
        )
    })
    .await
    .unwrap()
    .unwrap();
    assert_eq!(result.total_record_count, 1);
    assert_eq!(result.items.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn theme_media_splits_songs_and_videos() {
    let server = MockServer::start().await;
    let item_id = uuid::Uuid::new_v4();
    let owner_id = uuid::Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path(format!("/Items/{item_id}/ThemeMedia")))
        .and(query_param("inheritFromParent", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ThemeSongsResult": {
                "OwnerId": owner_id,
                "Items": [{ "Id": uuid::Uuid::new_v4(), "Name": "Main theme" }],
                "TotalRecordCount": 1,
                "StartIndex": 0,
            },
            "ThemeVideosResult": {
                "OwnerId": owner_id,
                "Items": [],
                "TotalRecordCount": 0,
                "StartIndex": 0,
            },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        library_api::get_theme_media(&configuration, item_id, None, Some(true), None, None)
    })
    .await
    .unwrap()
    .unwrap();
    let songs = result.theme_songs_result.unwrap();
    assert_eq!(songs.owner_id, owner_id);
    assert_eq!(songs.total_record_count, 1);
    assert_eq!(result.theme_videos_result.unwrap().total_record_count, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn media_folders_respects_hidden_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Library/MediaFolders"))
        .and(query_param("isHidden", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Items": [
                { "Id": uuid::Uuid::new_v4(), "Name": "Movies", "CollectionType": "movies" },
                { "Id": uuid::Uuid::new_v4(), "Name": "Music", "CollectionType": "music" },
            ],
            "TotalRecordCount": 2,
            "StartIndex": 0,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let folders = tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        library_api::get_media_folders(&configuration, Some(false))
    })
    .await
    .unwrap()
    .unwrap();
    let items = folders.items.unwrap();
    assert_eq!(
        items[0].collection_type,
        Some(models::CollectionType::Movies)
    );
    assert_eq!(
        items[1].collection_type,
        Some(models::CollectionType::Music)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn physical_paths_parses_string_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Library/PhysicalPaths"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!(["/media/movies", "/media/shows"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let paths = tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        library_api::get_physical_paths(&configuration)
    })
    .await
    .unwrap()
    .unwrap();
    assert_eq!(paths, vec!["/media/movies", "/media/shows"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn library_options_info_sends_content_type_in_lowercase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Libraries/AvailableOptions"))
        .and(query_param("libraryContentType", "tvshows"))
        .and(query_param("isNewLibrary", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "MetadataSavers": [],
            "MetadataReaders": [{ "Name": "Nfo", "DefaultEnabled": true }],
            "SubtitleFetchers": [],
            "LyricFetchers": [],
            "TypeOptions": [],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let options = tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        library_api::get_library_options_info(
            &configuration,
            Some(models::CollectionType::TvShows),
            Some(true),
        )
    })
    .await
    .unwrap()
    .unwrap();
    assert_eq!(options.metadata_readers[0].name.as_deref(), Some("Nfo"));
    assert!(options.metadata_readers[0].default_enabled);
}

#[tokio::test(flavor = "multi_thread")]
async fn download_returns_raw_bytes() {
    let server = MockServer::start().await;
    let item_id = uuid::Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path(format!("/Items/{item_id}/Download")))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"\x00\x01\x02media".to_vec(), "video/x-matroska"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let bytes = tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        library_api::get_download(&configuration, item_id)
    })
    .await
    .unwrap()
    .unwrap();
    assert_eq!(bytes, b"\x00\x01\x02media");
}

#[tokio::test(flavor = "multi_thread")]
async fn updated_media_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Library/Media/Updated"))
        .and(body_json(serde_json::json!({
            "Updates": [{ "Path": "/media/movies/new", "UpdateType": "Created" }],
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        let dto = models::MediaUpdateInfoDto {
            updates: vec![models::MediaUpdateInfoPathInfo {
                path: Some("/media/movies/new".to_owned()),
                update_type: Some("Created".to_owned()),
            }],
        };
        library_api::post_updated_media(&configuration, dto)
    })
    .await
    .unwrap()
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn added_movies_sends_provider_ids() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Library/Movies/Added"))
        .and(query_param("tmdbId", "603"))
        .and(query_param("imdbId", "tt0133093"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        library_api::post_added_movies(&configuration, Some("603"), Some("tt0133093"))
    })
    .await
    .unwrap()
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn refresh_posts_without_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Library/Refresh"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        library_api::refresh_library(&configuration)
    })
    .await
    .unwrap()
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_missing_item_keeps_the_body() {
    let server = MockServer::start().await;
    let item_id = uuid::Uuid::new_v4();
    Mock::given(method("DELETE"))
        .and(path(format!("/Items/{item_id}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "title": "Not Found",
            "status": 404,
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        library_api::delete_item(&configuration, item_id)
    })
    .await
    .unwrap()
    .unwrap_err();
    match err {
        Error::ResponseError(content) => {
            assert_eq!(content.status, 404);
            assert!(content.content.contains("Not Found"));
            // Untagged enum: any problem-details variant may match, but the
            // parsed document must carry the status.
            match content.entity.unwrap() {
                library_api::DeleteItemError::Status401(p)
                | library_api::DeleteItemError::Status404(p) => {
                    assert_eq!(p.status, Some(404));
                }
                other => panic!("unexpected entity: {other:?}"),
            }
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

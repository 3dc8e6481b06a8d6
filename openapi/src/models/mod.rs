pub mod all_theme_media_result;
pub use self::all_theme_media_result::AllThemeMediaResult;
pub mod base_item_dto;
pub use self::base_item_dto::BaseItemDto;
pub mod base_item_dto_query_result;
pub use self::base_item_dto_query_result::BaseItemDtoQueryResult;
pub mod base_item_kind;
pub use self::base_item_kind::BaseItemKind;
pub mod collection_type;
pub use self::collection_type::CollectionType;
pub mod encoding_context;
pub use self::encoding_context::EncodingContext;
pub mod external_url;
pub use self::external_url::ExternalUrl;
pub mod item_counts;
pub use self::item_counts::ItemCounts;
pub mod item_fields;
pub use self::item_fields::ItemFields;
pub mod item_sort_by;
pub use self::item_sort_by::ItemSortBy;
pub mod library_option_info_dto;
pub use self::library_option_info_dto::LibraryOptionInfoDto;
pub mod library_options_result_dto;
pub use self::library_options_result_dto::LibraryOptionsResultDto;
pub mod library_type_options_dto;
pub use self::library_type_options_dto::LibraryTypeOptionsDto;
pub mod media_update_info_dto;
pub use self::media_update_info_dto::MediaUpdateInfoDto;
pub mod media_update_info_path_info;
pub use self::media_update_info_path_info::MediaUpdateInfoPathInfo;
pub mod name_guid_pair;
pub use self::name_guid_pair::NameGuidPair;
pub mod problem_details;
pub use self::problem_details::ProblemDetails;
pub mod quick_connect_result;
pub use self::quick_connect_result::QuickConnectResult;
pub mod sort_order;
pub use self::sort_order::SortOrder;
pub mod subtitle_delivery_method;
pub use self::subtitle_delivery_method::SubtitleDeliveryMethod;
pub mod theme_media_result;
pub use self::theme_media_result::ThemeMediaResult;
pub mod user_item_data_dto;
pub use self::user_item_data_dto::UserItemDataDto;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn base_item_dto_parses_a_realistic_payload() {
        let body = serde_json::json!({
            "Name": "The Matrix",
            "Id": "f27caa37-e117-4dd9-8be2-3a2f14a2f763",
            "Type": "Movie",
            "RunTimeTicks": 81790000000i64,
            "ProductionYear": 1999,
            "IsFolder": false,
            "UserData": { "PlaybackPositionTicks": 0, "PlayCount": 2, "IsFavorite": true, "Played": true },
            "ImageTags": { "Primary": "deadbeef" },
            "Unknown future field": "ignored",
        });
        let item: BaseItemDto = serde_json::from_value(body).unwrap();
        assert_eq!(item.name.as_deref(), Some("The Matrix"));
        assert_eq!(
            item.id,
            uuid::Uuid::from_str("f27caa37-e117-4dd9-8be2-3a2f14a2f763").unwrap()
        );
        assert_eq!(item.r#type, Some(BaseItemKind::Movie));
        assert_eq!(item.run_time_ticks, Some(81_790_000_000));
        let user_data = item.user_data.unwrap();
        assert_eq!(user_data.play_count, 2);
        assert!(user_data.is_favorite);
        assert_eq!(
            item.image_tags.unwrap().get("Primary").map(String::as_str),
            Some("deadbeef")
        );
    }

    #[test]
    fn optional_fields_are_omitted_on_the_wire() {
        let result = QuickConnectResult {
            authenticated: false,
            secret: Some("s".to_owned()),
            ..Default::default()
        };
        let body = serde_json::to_value(&result).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "Authenticated": false, "Secret": "s" })
        );
    }

    #[test]
    fn collection_type_uses_lowercase_spellings() {
        assert_eq!(CollectionType::TvShows.to_string(), "tvshows");
        assert_eq!(
            CollectionType::from_str("musicvideos").ok(),
            Some(CollectionType::MusicVideos)
        );
        assert_eq!(
            serde_json::from_str::<CollectionType>("\"boxsets\"").unwrap(),
            CollectionType::BoxSets
        );
    }

    #[test]
    fn pascal_case_enums_round_trip_through_display() {
        assert_eq!(ItemSortBy::DateCreated.to_string(), "DateCreated");
        assert_eq!(SortOrder::Descending.to_string(), "Descending");
        assert_eq!(
            ItemFields::from_str("CanDelete").ok(),
            Some(ItemFields::CanDelete)
        );
        assert_eq!(
            serde_json::to_string(&SubtitleDeliveryMethod::External).unwrap(),
            "\"External\""
        );
    }
}

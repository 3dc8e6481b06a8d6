use std::sync::Arc;

use openapi::apis::configuration::Configuration;
use openapi::apis::dynamic_hls_api::*;
use uuid::Uuid;

use crate::error::{boxed, ClientError};

pub use openapi::apis::dynamic_hls_api::TranscodeParams;

/// HLS playlists and transcoded segments. Playlists and segments come back
/// as raw bytes; the caller decides whether to parse or pass them through.
#[derive(Default, Debug)]
pub struct DynamicHlsApi {
    configuration: Arc<Configuration>,
}

impl DynamicHlsApi {
    pub(crate) fn new(configuration: Arc<Configuration>) -> Self {
        Self { configuration }
    }

    /// Gets a transcoded audio segment.
    #[allow(clippy::too_many_arguments)]
    pub fn audio_segment(
        &self,
        item_id: Uuid,
        playlist_id: &str,
        segment_id: i32,
        container: &str,
        runtime_ticks: i64,
        actual_segment_length_ticks: i64,
        params: &TranscodeParams,
    ) -> Result<Vec<u8>, ClientError> {
        get_hls_audio_segment(
            &self.configuration,
            item_id,
            playlist_id,
            segment_id,
            container,
            runtime_ticks,
            actual_segment_length_ticks,
            params,
        )
        .map_err(boxed)
    }

    /// Gets a transcoded video segment.
    #[allow(clippy::too_many_arguments)]
    pub fn video_segment(
        &self,
        item_id: Uuid,
        playlist_id: &str,
        segment_id: i32,
        container: &str,
        runtime_ticks: i64,
        actual_segment_length_ticks: i64,
        params: &TranscodeParams,
    ) -> Result<Vec<u8>, ClientError> {
        get_hls_video_segment(
            &self.configuration,
            item_id,
            playlist_id,
            segment_id,
            container,
            runtime_ticks,
            actual_segment_length_ticks,
            params,
        )
        .map_err(boxed)
    }

    /// Gets a live HLS playlist for an in-progress recording or channel.
    pub fn live_stream(
        &self,
        item_id: Uuid,
        params: &TranscodeParams,
    ) -> Result<Vec<u8>, ClientError> {
        get_live_hls_stream(&self.configuration, item_id, params).map_err(boxed)
    }

    /// Gets an audio stream's master playlist listing its variants.
    pub fn master_audio_playlist(
        &self,
        item_id: Uuid,
        media_source_id: &str,
        params: &TranscodeParams,
    ) -> Result<Vec<u8>, ClientError> {
        get_master_hls_audio_playlist(&self.configuration, item_id, media_source_id, params)
            .map_err(boxed)
    }

    /// Gets a video stream's master playlist listing its variants.
    pub fn master_video_playlist(
        &self,
        item_id: Uuid,
        media_source_id: &str,
        params: &TranscodeParams,
    ) -> Result<Vec<u8>, ClientError> {
        get_master_hls_video_playlist(&self.configuration, item_id, media_source_id, params)
            .map_err(boxed)
    }

    /// Gets an audio stream's variant playlist enumerating its segments.
    pub fn variant_audio_playlist(
        &self,
        item_id: Uuid,
        params: &TranscodeParams,
    ) -> Result<Vec<u8>, ClientError> {
        get_variant_hls_audio_playlist(&self.configuration, item_id, params).map_err(boxed)
    }

    /// Gets a video stream's variant playlist enumerating its segments.
    pub fn variant_video_playlist(
        &self,
        item_id: Uuid,
        params: &TranscodeParams,
    ) -> Result<Vec<u8>, ClientError> {
        get_variant_hls_video_playlist(&self.configuration, item_id, params).map_err(boxed)
    }
}

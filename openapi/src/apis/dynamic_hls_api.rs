use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{configuration, urlencode, Error};
use crate::models;

/// Typed errors of [`get_hls_audio_segment`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetHlsAudioSegmentError {
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`get_hls_video_segment`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetHlsVideoSegmentError {
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`get_live_hls_stream`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetLiveHlsStreamError {
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`get_master_hls_audio_playlist`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetMasterHlsAudioPlaylistError {
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`get_master_hls_video_playlist`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetMasterHlsVideoPlaylistError {
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`get_variant_hls_audio_playlist`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetVariantHlsAudioPlaylistError {
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`get_variant_hls_video_playlist`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetVariantHlsVideoPlaylistError {
    UnknownValue(serde_json::Value),
}

/// The transcoding parameter set shared by every dynamic HLS operation.
/// All fields are optional; `None` fields are omitted from the query string
/// entirely. Path variables and the few per-operation required parameters
/// are separate function arguments.
#[derive(Debug, Clone, Default)]
pub struct TranscodeParams {
    /// Serve a statically remuxed file instead of a live transcode.
    pub r#static: Option<bool>,
    pub device_profile_id: Option<String>,
    pub play_session_id: Option<String>,
    pub segment_container: Option<String>,
    pub segment_length: Option<i32>,
    pub min_segments: Option<i32>,
    pub media_source_id: Option<String>,
    pub device_id: Option<String>,
    pub audio_codec: Option<String>,
    pub enable_auto_stream_copy: Option<bool>,
    pub allow_video_stream_copy: Option<bool>,
    pub allow_audio_stream_copy: Option<bool>,
    pub break_on_non_key_frames: Option<bool>,
    pub audio_sample_rate: Option<i32>,
    pub max_audio_bit_depth: Option<i32>,
    pub audio_bit_rate: Option<i32>,
    pub audio_channels: Option<i32>,
    pub max_audio_channels: Option<i32>,
    pub profile: Option<String>,
    pub level: Option<String>,
    pub framerate: Option<f32>,
    pub max_framerate: Option<f32>,
    pub copy_timestamps: Option<bool>,
    pub start_time_ticks: Option<i64>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub max_width: Option<i32>,
    pub max_height: Option<i32>,
    pub video_bit_rate: Option<i32>,
    pub subtitle_stream_index: Option<i32>,
    pub subtitle_method: Option<models::SubtitleDeliveryMethod>,
    pub max_ref_frames: Option<i32>,
    pub max_video_bit_depth: Option<i32>,
    pub require_avc: Option<bool>,
    pub de_interlace: Option<bool>,
    pub require_non_anamorphic: Option<bool>,
    pub transcoding_max_audio_channels: Option<i32>,
    pub cpu_core_limit: Option<i32>,
    pub live_stream_id: Option<String>,
    pub enable_mpegts_m2_ts_mode: Option<bool>,
    pub video_codec: Option<String>,
    pub subtitle_codec: Option<String>,
    pub transcode_reasons: Option<String>,
    pub audio_stream_index: Option<i32>,
    pub video_stream_index: Option<i32>,
    pub context: Option<models::EncodingContext>,
    /// Provider-specific options, sent as `streamOptions[name]=value`.
    pub stream_options: Option<HashMap<String, String>>,
    pub enable_audio_vbr_encoding: Option<bool>,
    pub always_burn_in_subtitle_when_transcoding: Option<bool>,
    /// Master playlists only.
    pub enable_adaptive_bitrate_streaming: Option<bool>,
    /// Master video playlist only.
    pub enable_trickplay: Option<bool>,
    /// Live streams only: the target container.
    pub container: Option<String>,
    /// Live streams only.
    pub enable_subtitles_in_manifest: Option<bool>,
}

macro_rules! push_opt {
    ($pairs:ident, $name:literal, $field:expr) => {
        if let Some(ref v) = $field {
            $pairs.push(($name.to_owned(), v.to_string()));
        }
    };
}

impl TranscodeParams {
    /// Renders the set parameters with their wire names, in a stable order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_opt!(pairs, "static", self.r#static);
        push_opt!(pairs, "deviceProfileId", self.device_profile_id);
        push_opt!(pairs, "playSessionId", self.play_session_id);
        push_opt!(pairs, "segmentContainer", self.segment_container);
        push_opt!(pairs, "segmentLength", self.segment_length);
        push_opt!(pairs, "minSegments", self.min_segments);
        push_opt!(pairs, "mediaSourceId", self.media_source_id);
        push_opt!(pairs, "deviceId", self.device_id);
        push_opt!(pairs, "audioCodec", self.audio_codec);
        push_opt!(pairs, "enableAutoStreamCopy", self.enable_auto_stream_copy);
        push_opt!(pairs, "allowVideoStreamCopy", self.allow_video_stream_copy);
        push_opt!(pairs, "allowAudioStreamCopy", self.allow_audio_stream_copy);
        push_opt!(pairs, "breakOnNonKeyFrames", self.break_on_non_key_frames);
        push_opt!(pairs, "audioSampleRate", self.audio_sample_rate);
        push_opt!(pairs, "maxAudioBitDepth", self.max_audio_bit_depth);
        push_opt!(pairs, "audioBitRate", self.audio_bit_rate);
        push_opt!(pairs, "audioChannels", self.audio_channels);
        push_opt!(pairs, "maxAudioChannels", self.max_audio_channels);
        push_opt!(pairs, "profile", self.profile);
        push_opt!(pairs, "level", self.level);
        push_opt!(pairs, "framerate", self.framerate);
        push_opt!(pairs, "maxFramerate", self.max_framerate);
        push_opt!(pairs, "copyTimestamps", self.copy_timestamps);
        push_opt!(pairs, "startTimeTicks", self.start_time_ticks);
        push_opt!(pairs, "width", self.width);
        push_opt!(pairs, "height", self.height);
        push_opt!(pairs, "maxWidth", self.max_width);
        push_opt!(pairs, "maxHeight", self.max_height);
        push_opt!(pairs, "videoBitRate", self.video_bit_rate);
        push_opt!(pairs, "subtitleStreamIndex", self.subtitle_stream_index);
        push_opt!(pairs, "subtitleMethod", self.subtitle_method);
        push_opt!(pairs, "maxRefFrames", self.max_ref_frames);
        push_opt!(pairs, "maxVideoBitDepth", self.max_video_bit_depth);
        push_opt!(pairs, "requireAvc", self.require_avc);
        push_opt!(pairs, "deInterlace", self.de_interlace);
        push_opt!(pairs, "requireNonAnamorphic", self.require_non_anamorphic);
        push_opt!(
            pairs,
            "transcodingMaxAudioChannels",
            self.transcoding_max_audio_channels
        );
        push_opt!(pairs, "cpuCoreLimit", self.cpu_core_limit);
        push_opt!(pairs, "liveStreamId", self.live_stream_id);
        push_opt!(pairs, "enableMpegtsM2TsMode", self.enable_mpegts_m2_ts_mode);
        push_opt!(pairs, "videoCodec", self.video_codec);
        push_opt!(pairs, "subtitleCodec", self.subtitle_codec);
        push_opt!(pairs, "transcodeReasons", self.transcode_reasons);
        push_opt!(pairs, "audioStreamIndex", self.audio_stream_index);
        push_opt!(pairs, "videoStreamIndex", self.video_stream_index);
        push_opt!(pairs, "context", self.context);
        if let Some(ref options) = self.stream_options {
            for (name, value) in options {
                pairs.push((format!("streamOptions[{}]", name), value.clone()));
            }
        }
        push_opt!(
            pairs,
            "enableAudioVbrEncoding",
            self.enable_audio_vbr_encoding
        );
        push_opt!(
            pairs,
            "alwaysBurnInSubtitleWhenTranscoding",
            self.always_burn_in_subtitle_when_transcoding
        );
        push_opt!(
            pairs,
            "enableAdaptiveBitrateStreaming",
            self.enable_adaptive_bitrate_streaming
        );
        push_opt!(pairs, "enableTrickplay", self.enable_trickplay);
        push_opt!(pairs, "container", self.container);
        push_opt!(
            pairs,
            "enableSubtitlesInManifest",
            self.enable_subtitles_in_manifest
        );
        pairs
    }
}

fn hls_segment_request(
    configuration: &configuration::Configuration,
    media: &str,
    item_id: uuid::Uuid,
    playlist_id: &str,
    segment_id: i32,
    container: &str,
    runtime_ticks: i64,
    actual_segment_length_ticks: i64,
    params: &TranscodeParams,
) -> reqwest::blocking::RequestBuilder {
    let uri_str = format!(
        "{}/{media}/{itemId}/hls1/{playlistId}/{segmentId}.{container}",
        configuration.base_path,
        media = media,
        itemId = urlencode(item_id.to_string()),
        playlistId = urlencode(playlist_id),
        segmentId = segment_id,
        container = urlencode(container)
    );
    let req_builder = configuration
        .client
        .get(&uri_str)
        .query(&[
            ("runtimeTicks", runtime_ticks.to_string()),
            (
                "actualSegmentLengthTicks",
                actual_segment_length_ticks.to_string(),
            ),
        ])
        .query(&params.query_pairs());
    super::apply_common_headers(req_builder, configuration)
}

/// Gets a transcoded audio segment of an HLS stream.
#[allow(clippy::too_many_arguments)]
pub fn get_hls_audio_segment(
    configuration: &configuration::Configuration,
    item_id: uuid::Uuid,
    playlist_id: &str,
    segment_id: i32,
    container: &str,
    runtime_ticks: i64,
    actual_segment_length_ticks: i64,
    params: &TranscodeParams,
) -> Result<Vec<u8>, Error<GetHlsAudioSegmentError>> {
    super::execute_bytes(hls_segment_request(
        configuration,
        "Audio",
        item_id,
        playlist_id,
        segment_id,
        container,
        runtime_ticks,
        actual_segment_length_ticks,
        params,
    ))
}

/// Gets a transcoded video segment of an HLS stream.
#[allow(clippy::too_many_arguments)]
pub fn get_hls_video_segment(
    configuration: &configuration::Configuration,
    item_id: uuid::Uuid,
    playlist_id: &str,
    segment_id: i32,
    container: &str,
    runtime_ticks: i64,
    actual_segment_length_ticks: i64,
    params: &TranscodeParams,
) -> Result<Vec<u8>, Error<GetHlsVideoSegmentError>> {
    super::execute_bytes(hls_segment_request(
        configuration,
        "Videos",
        item_id,
        playlist_id,
        segment_id,
        container,
        runtime_ticks,
        actual_segment_length_ticks,
        params,
    ))
}

/// Gets a live HLS playlist for an in-progress recording or channel.
pub fn get_live_hls_stream(
    configuration: &configuration::Configuration,
    item_id: uuid::Uuid,
    params: &TranscodeParams,
) -> Result<Vec<u8>, Error<GetLiveHlsStreamError>> {
    let uri_str = format!(
        "{}/Videos/{itemId}/live.m3u8",
        configuration.base_path,
        itemId = urlencode(item_id.to_string())
    );
    let req_builder = configuration
        .client
        .get(&uri_str)
        .query(&params.query_pairs());
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_bytes(req_builder)
}

fn master_playlist_request(
    configuration: &configuration::Configuration,
    media: &str,
    item_id: uuid::Uuid,
    media_source_id: &str,
    params: &TranscodeParams,
) -> reqwest::blocking::RequestBuilder {
    let uri_str = format!(
        "{}/{media}/{itemId}/master.m3u8",
        configuration.base_path,
        media = media,
        itemId = urlencode(item_id.to_string())
    );
    // mediaSourceId is required here; the positional argument wins over
    // anything left in params.
    let mut params = params.clone();
    params.media_source_id = None;
    let req_builder = configuration
        .client
        .get(&uri_str)
        .query(&[("mediaSourceId", media_source_id)])
        .query(&params.query_pairs());
    super::apply_common_headers(req_builder, configuration)
}

/// Gets an audio stream's HLS master playlist listing its variants.
pub fn get_master_hls_audio_playlist(
    configuration: &configuration::Configuration,
    item_id: uuid::Uuid,
    media_source_id: &str,
    params: &TranscodeParams,
) -> Result<Vec<u8>, Error<GetMasterHlsAudioPlaylistError>> {
    super::execute_bytes(master_playlist_request(
        configuration,
        "Audio",
        item_id,
        media_source_id,
        params,
    ))
}

/// Gets a video stream's HLS master playlist listing its variants.
pub fn get_master_hls_video_playlist(
    configuration: &configuration::Configuration,
    item_id: uuid::Uuid,
    media_source_id: &str,
    params: &TranscodeParams,
) -> Result<Vec<u8>, Error<GetMasterHlsVideoPlaylistError>> {
    super::execute_bytes(master_playlist_request(
        configuration,
        "Videos",
        item_id,
        media_source_id,
        params,
    ))
}

fn variant_playlist_request(
    configuration: &configuration::Configuration,
    media: &str,
    item_id: uuid::Uuid,
    params: &TranscodeParams,
) -> reqwest::blocking::RequestBuilder {
    let uri_str = format!(
        "{}/{media}/{itemId}/main.m3u8",
        configuration.base_path,
        media = media,
        itemId = urlencode(item_id.to_string())
    );
    let req_builder = configuration
        .client
        .get(&uri_str)
        .query(&params.query_pairs());
    super::apply_common_headers(req_builder, configuration)
}

/// Gets an audio stream's variant playlist enumerating its segments.
pub fn get_variant_hls_audio_playlist(
    configuration: &configuration::Configuration,
    item_id: uuid::Uuid,
    params: &TranscodeParams,
) -> Result<Vec<u8>, Error<GetVariantHlsAudioPlaylistError>> {
    super::execute_bytes(variant_playlist_request(
        configuration,
        "Audio",
        item_id,
        params,
    ))
}

/// Gets a video stream's variant playlist enumerating its segments.
pub fn get_variant_hls_video_playlist(
    configuration: &configuration::Configuration,
    item_id: uuid::Uuid,
    params: &TranscodeParams,
) -> Result<Vec<u8>, Error<GetVariantHlsVideoPlaylistError>> {
    super::execute_bytes(variant_playlist_request(
        configuration,
        "Videos",
        item_id,
        params,
    ))
}

use serde::{Deserialize, Serialize};

use super::{configuration, Error};
use crate::models;

/// Typed errors of [`get_quick_connect_enabled`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetQuickConnectEnabledError {
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`initiate_quick_connect`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InitiateQuickConnectError {
    /// Quick connect is not active on this server.
    Status401(models::ProblemDetails),
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`get_quick_connect_state`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetQuickConnectStateError {
    /// Unknown quick connect secret.
    Status404(models::ProblemDetails),
    UnknownValue(serde_json::Value),
}

/// Typed errors of [`authorize_quick_connect`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorizeQuickConnectError {
    /// Unknown user id, or authorizing for another user without permission.
    Status403(models::ProblemDetails),
    UnknownValue(serde_json::Value),
}

/// Gets the current quick connect state.
pub fn get_quick_connect_enabled(
    configuration: &configuration::Configuration,
) -> Result<bool, Error<GetQuickConnectEnabledError>> {
    let uri_str = format!("{}/QuickConnect/Enabled", configuration.base_path);
    let req_builder = configuration.client.get(&uri_str);
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_json(req_builder)
}

/// Initiates a new quick connect request and returns its secret and code.
pub fn initiate_quick_connect(
    configuration: &configuration::Configuration,
) -> Result<models::QuickConnectResult, Error<InitiateQuickConnectError>> {
    let uri_str = format!("{}/QuickConnect/Initiate", configuration.base_path);
    let req_builder = configuration.client.post(&uri_str);
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_json(req_builder)
}

/// Attempts to retrieve authentication information for a pending request.
pub fn get_quick_connect_state(
    configuration: &configuration::Configuration,
    secret: &str,
) -> Result<models::QuickConnectResult, Error<GetQuickConnectStateError>> {
    let uri_str = format!("{}/QuickConnect/Connect", configuration.base_path);
    let req_builder = configuration
        .client
        .get(&uri_str)
        .query(&[("secret", secret)]);
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_json(req_builder)
}

/// Authorizes a pending quick connect request for the given user.
pub fn authorize_quick_connect(
    configuration: &configuration::Configuration,
    code: &str,
    user_id: Option<uuid::Uuid>,
) -> Result<bool, Error<AuthorizeQuickConnectError>> {
    let uri_str = format!("{}/QuickConnect/Authorize", configuration.base_path);
    let mut req_builder = configuration
        .client
        .post(&uri_str)
        .query(&[("code", code)]);
    if let Some(ref user_id) = user_id {
        req_builder = req_builder.query(&[("userId", &user_id.to_string())]);
    }
    let req_builder = super::apply_common_headers(req_builder, configuration);
    super::execute_json(req_builder)
}

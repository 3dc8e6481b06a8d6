use std::error;
use std::fmt;

pub mod configuration;
pub mod dynamic_hls_api;
pub mod library_api;
pub mod quick_connect_api;

/// Everything the server said about a failed call: status, raw body, and the
/// typed error entity when the body parsed as one.
#[derive(Debug, Clone)]
pub struct ResponseContent<T> {
    pub status: reqwest::StatusCode,
    pub content: String,
    pub entity: Option<T>,
}

#[derive(Debug)]
pub enum Error<T> {
    Reqwest(reqwest::Error),
    Serde(serde_json::Error),
    Io(std::io::Error),
    ResponseError(ResponseContent<T>),
}

impl<T> fmt::Display for Error<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (module, e) = match self {
            Error::Reqwest(e) => ("reqwest", e.to_string()),
            Error::Serde(e) => ("serde", e.to_string()),
            Error::Io(e) => ("IO", e.to_string()),
            Error::ResponseError(e) => ("response", format!("status code {}", e.status)),
        };
        write!(f, "error in {}: {}", module, e)
    }
}

impl<T: fmt::Debug> error::Error for Error<T> {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(match self {
            Error::Reqwest(e) => e,
            Error::Serde(e) => e,
            Error::Io(e) => e,
            Error::ResponseError(_) => return None,
        })
    }
}

impl<T> From<reqwest::Error> for Error<T> {
    fn from(e: reqwest::Error) -> Self {
        Error::Reqwest(e)
    }
}

impl<T> From<serde_json::Error> for Error<T> {
    fn from(e: serde_json::Error) -> Self {
        Error::Serde(e)
    }
}

impl<T> From<std::io::Error> for Error<T> {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

/// Percent-encodes a path segment before template substitution.
pub fn urlencode<T: AsRef<str>>(s: T) -> String {
    ::url::form_urlencoded::byte_serialize(s.as_ref().as_bytes()).collect()
}

/// Renders a multi-valued query parameter the way the server parses it:
/// comma delimited, one `name=a,b,c` pair.
pub(crate) fn csv<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Attaches the user agent and the `MediaBrowser` authorization header the
/// server expects. Falls back to a plain bearer token if only that is set.
pub(crate) fn apply_common_headers(
    mut req_builder: reqwest::blocking::RequestBuilder,
    configuration: &configuration::Configuration,
) -> reqwest::blocking::RequestBuilder {
    if let Some(ref user_agent) = configuration.user_agent {
        req_builder = req_builder.header(reqwest::header::USER_AGENT, user_agent.clone());
    }
    if let Some(ref api_key) = configuration.api_key {
        let prefix = api_key.prefix.as_deref().unwrap_or("MediaBrowser");
        req_builder = req_builder.header(
            reqwest::header::AUTHORIZATION,
            format!("{} Token=\"{}\"", prefix, api_key.key),
        );
    } else if let Some(ref token) = configuration.bearer_access_token {
        req_builder = req_builder.bearer_auth(token);
    }
    req_builder
}

/// Sends the request and deserializes a JSON body on 2xx; any error status
/// is surfaced as [`Error::ResponseError`] with the raw body preserved.
pub(crate) fn execute_json<T, E>(
    req_builder: reqwest::blocking::RequestBuilder,
) -> Result<T, Error<E>>
where
    T: serde::de::DeserializeOwned,
    E: serde::de::DeserializeOwned,
{
    let resp = req_builder.send()?;
    let status = resp.status();
    let content = resp.text()?;
    if !status.is_client_error() && !status.is_server_error() {
        serde_json::from_str(&content).map_err(Error::from)
    } else {
        let entity: Option<E> = serde_json::from_str(&content).ok();
        Err(Error::ResponseError(ResponseContent {
            status,
            content,
            entity,
        }))
    }
}

/// Sends the request and discards the body on 2xx (operations returning
/// 204 No Content).
pub(crate) fn execute_empty<E>(
    req_builder: reqwest::blocking::RequestBuilder,
) -> Result<(), Error<E>>
where
    E: serde::de::DeserializeOwned,
{
    let resp = req_builder.send()?;
    let status = resp.status();
    if !status.is_client_error() && !status.is_server_error() {
        Ok(())
    } else {
        let content = resp.text()?;
        let entity: Option<E> = serde_json::from_str(&content).ok();
        Err(Error::ResponseError(ResponseContent {
            status,
            content,
            entity,
        }))
    }
}

/// Sends the request and returns the raw body on 2xx. Used by the file and
/// HLS endpoints, whose responses are not JSON.
pub(crate) fn execute_bytes<E>(
    req_builder: reqwest::blocking::RequestBuilder,
) -> Result<Vec<u8>, Error<E>>
where
    E: serde::de::DeserializeOwned,
{
    let resp = req_builder.send()?;
    let status = resp.status();
    if !status.is_client_error() && !status.is_server_error() {
        Ok(resp.bytes()?.to_vec())
    } else {
        let content = resp.text()?;
        let entity: Option<E> = serde_json::from_str(&content).ok();
        Err(Error::ResponseError(ResponseContent {
            status,
            content,
            entity,
        }))
    }
}

use std::sync::Arc;

use openapi::apis::configuration::Configuration;
use openapi::apis::quick_connect_api::{
    authorize_quick_connect, get_quick_connect_enabled, get_quick_connect_state,
    initiate_quick_connect,
};
use openapi::models::QuickConnectResult;

use crate::error::{boxed, ClientError};

/// Pairing-code authentication: a device initiates a request, the user
/// authorizes its code from a logged-in session, and the device polls the
/// state until `authenticated` flips.
#[derive(Default, Debug)]
pub struct QuickConnectApi {
    configuration: Arc<Configuration>,
}

impl QuickConnectApi {
    pub(crate) fn new(configuration: Arc<Configuration>) -> Self {
        Self { configuration }
    }

    pub fn enabled(&self) -> Result<bool, ClientError> {
        get_quick_connect_enabled(&self.configuration).map_err(boxed)
    }

    pub fn initiate(&self) -> Result<QuickConnectResult, ClientError> {
        initiate_quick_connect(&self.configuration).map_err(boxed)
    }

    /// Polls a pending request by its secret.
    pub fn state(&self, secret: &str) -> Result<QuickConnectResult, ClientError> {
        get_quick_connect_state(&self.configuration, secret).map_err(boxed)
    }

    /// Authorizes a pending request by its code, optionally for another
    /// user than the one the token belongs to.
    pub fn authorize(&self, code: &str, user_id: Option<uuid::Uuid>) -> Result<bool, ClientError> {
        authorize_quick_connect(&self.configuration, code, user_id).map_err(boxed)
    }
}

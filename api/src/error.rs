use std::error::Error as StdError;
use std::fmt::Debug;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API error: {0}")]
    Api(Box<dyn StdError + Send + Sync>),
}

pub(crate) fn boxed<E>(e: openapi::apis::Error<E>) -> ClientError
where
    E: Debug + Send + Sync + 'static,
{
    ClientError::Api(Box::new(e))
}

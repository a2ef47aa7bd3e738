use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts, Path as AxumPath},
    http::request::Parts,
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::error::{ApiError, ErrorVerbosityProvider, InternalServerError, PathError};

use super::Extractor;

/// A Wrapper around [`axum::extract::Path`] that rejects with an [`ApiError`].
///
/// Path segments that do not match `T` are the caller's fault and reject with a [`PathError`].
/// A route that declares no parameters for `T` is ours and rejects with an [`InternalServerError`].
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + JsonSchema + Debug + Send,
    S: Send + Sync + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "path_extractor", skip_all, fields(uri = %parts.uri))]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let verbosity = state.error_verbosity();

        match AxumPath::<T>::from_request_parts(parts, state).await {
            Ok(AxumPath(path)) => {
                tracing::trace!(?path, "Extracted");

                Ok(ApiPath(path))
            }
            Err(PathRejection::FailedToDeserializePathParams(rejection)) => {
                tracing::warn!(reason = %rejection.body_text(), "Rejection");

                let path_expected_schema = super::expected_schema::<T>(verbosity)?;

                Err(PathError::new(verbosity, rejection.body_text(), path_expected_schema).into())
            }
            Err(rejection) => {
                Err(InternalServerError::from_generic_error(verbosity, rejection).into())
            }
        }
    }
}

impl<T> Extractor for ApiPath<T> {
    type Extracted = T;

    fn extracted(&self) -> &Self::Extracted {
        &self.0
    }
}

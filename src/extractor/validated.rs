use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use validator::Validate;

use crate::error::{ApiError, ErrorVerbosity, ErrorVerbosityProvider, ValidationError};

use super::Extractor;

/// An extractor that validates the data extracted by another extractor.
///
/// Works with parts extractors ([`super::path::ApiPath`], [`super::query::ApiQuery`])
/// and with body extractors ([`super::json::ApiJson`]).
pub struct Validated<X>(pub X);

impl<X> Validated<X>
where
    X: Extractor,
    X::Extracted: Validate,
{
    fn from_inner(inner: X, verbosity: ErrorVerbosity) -> Result<Self, ApiError> {
        match inner.extracted().validate() {
            Ok(_) => {
                tracing::trace!("Validated");

                Ok(Validated(inner))
            }
            Err(errors) => {
                tracing::warn!(?errors, "Validation errors");

                Err(ValidationError::from_validation_errors(verbosity, errors).into())
            }
        }
    }
}

#[async_trait]
impl<X, S> FromRequestParts<S> for Validated<X>
where
    X: FromRequestParts<S, Rejection = ApiError> + Extractor,
    X::Extracted: Validate,
    S: Send + Sync + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "validated_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let inner = X::from_request_parts(parts, state).await?;

        Self::from_inner(inner, state.error_verbosity())
    }
}

#[async_trait]
impl<X, S> FromRequest<S> for Validated<X>
where
    X: FromRequest<S, Rejection = ApiError> + Extractor,
    X::Extracted: Validate,
    S: Send + Sync + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "validated_extractor", skip_all)]
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let inner = X::from_request(req, state).await?;

        Self::from_inner(inner, state.error_verbosity())
    }
}

impl<X: Extractor> Extractor for Validated<X> {
    type Extracted = X::Extracted;

    fn extracted(&self) -> &Self::Extracted {
        self.0.extracted()
    }
}

//! Query-string extractor with field validation via the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Deserializes the query string into `T` and runs `T::validate()` before the
/// handler sees it.
///
/// Both failure modes reject with 400 and a `{"detail": ...}` body.
///
/// # Example
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct Page {
///     #[validate(range(min = 1))]
///     limit: i64,
/// }
///
/// async fn list(ValidatedQuery(page): ValidatedQuery<Page>) -> String {
///     format!("limit={}", page.limit)
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}

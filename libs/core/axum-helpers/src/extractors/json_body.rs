//! JSON body extractor that routes rejections through the error mapping.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON extractor whose rejection renders as an [`crate::ErrorResponse`]
/// instead of axum's plain-text default.
///
/// A body that fails to deserialize counts as an unexpected failure, so it
/// goes through [`AppError`] like every other one.
///
/// # Example
/// ```ignore
/// use axum_helpers::JsonBody;
///
/// async fn create_widget(JsonBody(input): JsonBody<WidgetInput>) { /* ... */ }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(JsonBody(data))
    }
}

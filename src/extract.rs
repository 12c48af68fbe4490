//! Extractors whose rejections are the service's own plain-text errors
//! rather than axum's defaults.

use crate::error::ApiError;
use crate::item::{ItemPath, NameFilter};
use aide::generate::GenContext;
use aide::openapi::Operation;
use aide::OperationInput;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// A JSON object request body. Anything that is not an object or fails to
/// deserialize into `T`, including an empty body, is rejected with
/// "Invalid JSON.".
///
/// The content type is not checked.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            debug!(%err, "failed to read request body");
            ApiError::INVALID_JSON
        })?;
        // serde would otherwise match a JSON array to struct fields by position
        let object = match serde_json::from_slice(&bytes) {
            Ok(object @ Value::Object(_)) => object,
            Ok(_) => {
                debug!("rejected non-object request body");
                return Err(ApiError::INVALID_JSON);
            }
            Err(err) => {
                debug!(%err, "rejected request body");
                return Err(ApiError::INVALID_JSON);
            }
        };
        serde_json::from_value(object).map(JsonBody).map_err(|err| {
            debug!(%err, "rejected request body");
            ApiError::INVALID_JSON
        })
    }
}

impl<T> OperationInput for JsonBody<T>
where
    T: JsonSchema,
{
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Json::<T>::operation_input(ctx, operation);
    }
}

/// The `{item_id}` path segment. A segment that is not an integer is treated
/// as an unmatched route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(pub i64);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(ItemPath { item_id }) = Path::<ItemPath>::from_request_parts(parts, state)
            .await
            .map_err(|err| {
                debug!(%err, path = %parts.uri.path(), "rejected item id");
                ApiError::NO_ROUTE
            })?;
        Ok(Self(item_id))
    }
}

impl OperationInput for ItemId {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Path::<ItemPath>::operation_input(ctx, operation);
    }
}

/// The optional `name` query parameter. The first `name` pair wins and the
/// query string never causes a rejection.
#[derive(Debug, Default)]
pub struct NameQuery(pub NameFilter);

impl<S> FromRequestParts<S> for NameQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => pairs,
            Err(err) => {
                debug!(%err, "ignoring unreadable query string");
                Vec::new()
            }
        };
        let name = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "name").then_some(value));
        Ok(Self(NameFilter { name }))
    }
}

impl OperationInput for NameQuery {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Query::<NameFilter>::operation_input(ctx, operation);
    }
}

use aide::axum::routing::ApiMethodRouter;
use aide::axum::ApiRouter;
use aide::openapi::OpenApi;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::Extension;
use tracing::error;

/// An axum router that records every documented route in an OpenAPI
/// document and can serve that document alongside the API.
///
/// # Example
/// ```ignore
/// let app = Router::new()
///     .route("/get-item/{item_id}", get_with(get_item, get_item_docs))
///     .with_api_docs("/api.json", "/api.yaml")
///     .with_state(state)
///     .finish_api_with_extension(api);
/// ```
pub struct Router<S = ()> {
    inner: ApiRouter<S>,
}

impl<S> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            inner: ApiRouter::new(),
        }
    }

    /// Add a documented route
    pub fn route(mut self, path: &str, method_router: ApiMethodRouter<S>) -> Self {
        self.inner = self.inner.api_route(path, method_router);
        self
    }

    /// Serve the finished OpenAPI document as JSON and as YAML
    pub fn with_api_docs(mut self, json_path: &str, yaml_path: &str) -> Self {
        self.inner = self
            .inner
            .route(json_path, ::axum::routing::get(serve_api_json))
            .route(yaml_path, ::axum::routing::get(serve_api_yaml));
        self
    }

    /// Add Swagger UI route at the specified path
    #[cfg(feature = "swagger")]
    pub fn with_swagger(mut self, swagger_path: &str, api_json_path: &str) -> Self {
        self.inner = self.inner.route(
            swagger_path,
            aide::swagger::Swagger::new(api_json_path).axum_route(),
        );
        self
    }

    pub fn with_state<S2>(self, state: S) -> Router<S2>
    where
        S2: Clone + Send + Sync + 'static,
    {
        Router {
            inner: self.inner.with_state(state),
        }
    }

    /// Finish the API with the OpenAPI document embedded via an Extension layer
    pub fn finish_api_with_extension(self, mut api: OpenApi) -> ::axum::Router<S> {
        self.inner.finish_api(&mut api).layer(Extension(api))
    }
}

impl<S> Default for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

async fn serve_api_json(Extension(api): Extension<OpenApi>) -> Json<OpenApi> {
    Json(api)
}

async fn serve_api_yaml(Extension(api): Extension<OpenApi>) -> Response {
    match serde_yaml::to_string(&api) {
        Ok(yaml) => ([(header::CONTENT_TYPE, "application/yaml")], yaml).into_response(),
        Err(err) => {
            error!(%err, "failed to render OpenAPI document as YAML");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

//! An in-memory item registry served over HTTP.
//!
//! Items are addressed by an integer id chosen by the caller:
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/get-item/{item_id}?name=` | the stored item |
//! | POST | `/create-item/{item_id}` | the stored item |
//! | PUT | `/update-item/{item_id}` | the updated item |
//! | DELETE | `/delete-item/{item_id}` | `Success: Item deleted!` |
//!
//! Failures are plain-text 400 or 404 responses. The OpenAPI document for
//! these routes is served at [`API_JSON_PATH`] and [`API_YAML_PATH`].

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod inventory;
pub mod item;
pub mod router;

// Re-export aide for convenience
pub use aide;

pub use config::ServerConfig;
pub use error::ApiError;
pub use inventory::Inventory;
pub use item::{Item, ItemPatch};

use aide::axum::routing::{delete_with, get_with, post_with, put_with};
use aide::openapi::OpenApi;
use handlers::{
    create_item, create_item_docs, delete_item, delete_item_docs, get_item, get_item_docs,
    update_item, update_item_docs,
};
use router::Router;

pub const API_JSON_PATH: &str = "/api.json";
pub const API_YAML_PATH: &str = "/api.yaml";
#[cfg(feature = "swagger")]
pub const SWAGGER_PATH: &str = "/docs";

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub inventory: Inventory,
}

/// The item routes, without state or API docs attached.
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/get-item/{item_id}", get_with(get_item, get_item_docs))
        .route(
            "/create-item/{item_id}",
            post_with(create_item, create_item_docs),
        )
        .route(
            "/update-item/{item_id}",
            put_with(update_item, update_item_docs),
        )
        .route(
            "/delete-item/{item_id}",
            delete_with(delete_item, delete_item_docs),
        )
}

pub fn openapi() -> OpenApi {
    let mut api = OpenApi::default();
    api.info.title = "Item Registry".to_string();
    api.info.description = Some("Create, read, update and delete items by id".to_string());
    api.info.version = env!("CARGO_PKG_VERSION").to_string();
    api
}

/// Build the complete application around `state`.
pub fn app(state: AppState) -> axum::Router {
    let router = item_routes().with_api_docs(API_JSON_PATH, API_YAML_PATH);

    #[cfg(feature = "swagger")]
    let router = router.with_swagger(SWAGGER_PATH, API_JSON_PATH);

    router
        .with_state::<()>(state)
        .finish_api_with_extension(openapi())
}

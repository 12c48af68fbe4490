use crate::error::ApiError;
use crate::extract::{ItemId, JsonBody, NameQuery};
use crate::item::{Item, ItemPatch};
use crate::AppState;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};

pub const DELETED: &str = "Success: Item deleted!";

const TAG: &str = "items";

/// Get a single item by id, optionally checking its name.
pub async fn get_item(
    State(app): State<AppState>,
    ItemId(id): ItemId,
    NameQuery(filter): NameQuery,
) -> Result<Json<Item>, ApiError> {
    app.inventory.get(id, filter.as_deref()).map(Json)
}

pub fn get_item_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get an item")
        .description("Retrieve an item by its id. When `name` is given it must equal the stored name exactly.")
        .tag(TAG)
        .response_with::<200, Json<Item>, _>(|res| {
            res.description("The stored item.").example(Item::default())
        })
        .response_with::<404, (), _>(|res| {
            res.description("Item ID not found. / Item name not found.")
        })
}

/// Create an item under a caller-chosen id.
pub async fn create_item(
    State(app): State<AppState>,
    ItemId(id): ItemId,
    JsonBody(item): JsonBody<Item>,
) -> Result<Json<Item>, ApiError> {
    app.inventory.create(id, item).map(Json)
}

pub fn create_item_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create an item")
        .description(
            "Store a new item under the given id. Fails if the id is already taken. \
             Only `name`, `price` and `description` are stored; other keys are dropped.",
        )
        .tag(TAG)
        .response_with::<200, Json<Item>, _>(|res| {
            res.description("The stored item.").example(Item::default())
        })
        .response_with::<400, (), _>(|res| {
            res.description("Invalid JSON. / Item ID already exists.")
        })
}

/// Overwrite the provided fields of an existing item.
pub async fn update_item(
    State(app): State<AppState>,
    ItemId(id): ItemId,
    JsonBody(patch): JsonBody<ItemPatch>,
) -> Result<Json<Item>, ApiError> {
    app.inventory.update(id, patch).map(Json)
}

pub fn update_item_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update an item")
        .description(
            "Overwrite `name`, `price` and `description` where present. \
             Omitted, null or empty fields are left unchanged.",
        )
        .tag(TAG)
        .response_with::<200, Json<Item>, _>(|res| {
            res.description("The updated item.").example(Item::default())
        })
        .response_with::<400, (), _>(|res| res.description("Invalid JSON."))
        .response_with::<404, (), _>(|res| res.description("Item ID does not exist."))
}

/// Remove an item by id.
pub async fn delete_item(
    State(app): State<AppState>,
    ItemId(id): ItemId,
) -> Result<Response, ApiError> {
    app.inventory.delete(id)?;
    Ok(DELETED.into_response())
}

pub fn delete_item_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete an item")
        .description("Permanently remove an item by its id.")
        .tag(TAG)
        .response_with::<200, (), _>(|res| res.description(DELETED))
        .response_with::<404, (), _>(|res| res.description("Item ID does not exist."))
}

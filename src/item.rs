use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One inventory record.
///
/// Only these three fields are kept. Any other keys in a request body are
/// ignored and never echoed back.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Item {
    /// Display name of the item.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            name: "Widget".into(),
            price: 9.99,
            description: None,
        }
    }
}

/// Fields to overwrite on an existing item.
///
/// Empty strings for `name` and `description` count as not provided, so a
/// field cannot be cleared through an update.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq)]
pub struct ItemPatch {
    /// New name, if non-empty.
    #[serde(default)]
    pub name: Option<String>,
    /// New price.
    #[serde(default)]
    pub price: Option<f64>,
    /// New description, if non-empty.
    #[serde(default)]
    pub description: Option<String>,
}

impl ItemPatch {
    pub fn apply(self, item: &mut Item) {
        if let Some(name) = self.name.filter(|name| !name.is_empty()) {
            item.name = name;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(description) = self.description.filter(|d| !d.is_empty()) {
            item.description = Some(description);
        }
    }
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NameFilter {
    /// Only return the item if its name matches exactly.
    pub name: Option<String>,
}

impl NameFilter {
    /// The filter value, treating `?name=` the same as no filter.
    pub fn as_deref(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ItemPath {
    /// The integer id of the item.
    pub item_id: i64,
}

use serde::{Deserialize, Serialize};

/// A persisted catalog record. Every field is populated; `id` and the
/// timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: i64,
    pub name: String,
    pub origin: String,
    pub price: f64,
    pub image_url: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Write-side draft of a [`CatalogEntry`].
///
/// Required fields are optional here so that a missing or `null` value can
/// reach the store and be rejected there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCatalogEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewCatalogEntry {
    pub fn new(
        name: &str,
        origin: &str,
        price: f64,
        image_url: &str,
        description: &str,
        category: &str,
    ) -> Self {
        Self {
            name: Some(name.to_string()),
            origin: Some(origin.to_string()),
            price: Some(price),
            image_url: Some(image_url.to_string()),
            description: Some(description.to_string()),
            category: Some(category.to_string()),
        }
    }

    /// Name of the first required field that is absent, in column order.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.is_none() {
            return Some("name");
        }
        if self.origin.is_none() {
            return Some("origin");
        }
        if self.price.is_none() {
            return Some("price");
        }
        if self.image_url.is_none() {
            return Some("imageUrl");
        }
        if self.description.is_none() {
            return Some("description");
        }
        if self.category.is_none() {
            return Some("category");
        }
        None
    }
}

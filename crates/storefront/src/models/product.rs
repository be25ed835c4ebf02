//! Catalog product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use velvet_fig_core::{Price, ProductId};

/// A static product record in the fixed in-memory catalog.
///
/// Products are immutable once the catalog is built. Ratings are carried
/// as decimals in [0, 5]; variant axes (colors, sizes) are non-empty in
/// the sample data but not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-unique numeric ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Brand tag.
    pub brand: String,
    /// Category tag (e.g., "jackets", "accessories").
    pub category: String,
    /// Marketing description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Average rating in [0, 5].
    pub rating: Decimal,
    /// Primary image URL.
    pub image: String,
    /// Ordered thumbnail image URLs (possibly empty).
    #[serde(default)]
    pub thumbnails: Vec<String>,
    /// Available colors.
    pub colors: Vec<String>,
    /// Available sizes.
    pub sizes: Vec<String>,
}

impl Product {
    /// The first available color, used as the default variant selection.
    #[must_use]
    pub fn first_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }

    /// The first available size, used as the default variant selection.
    #[must_use]
    pub fn first_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }
}

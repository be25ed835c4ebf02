//! Cart line item record.

use serde::{Deserialize, Serialize};

use velvet_fig_core::{Price, ProductId};

use super::Product;

/// A catalog item held in the cart with a quantity and chosen variant.
///
/// The cart holds at most one line per product id; a repeat add folds
/// into the existing line's quantity and leaves its selections untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The underlying catalog item.
    pub product: Product,
    /// Units of the product in the cart. Positive through the store's own
    /// mutation path.
    pub quantity: u32,
    /// Chosen color, defaulted to the product's first color at creation.
    pub selected_color: Option<String>,
    /// Chosen size, defaulted to the product's first size at creation.
    pub selected_size: Option<String>,
}

impl CartLine {
    /// Create a line for `product`, defaulting unset selections to the
    /// product's first available color and size.
    #[must_use]
    pub fn new(
        product: Product,
        quantity: u32,
        color: Option<&str>,
        size: Option<&str>,
    ) -> Self {
        let selected_color = color
            .map(ToOwned::to_owned)
            .or_else(|| product.first_color().map(ToOwned::to_owned));
        let selected_size = size
            .map(ToOwned::to_owned)
            .or_else(|| product.first_size().map(ToOwned::to_owned));

        Self {
            product,
            quantity,
            selected_color,
            selected_size,
        }
    }

    /// The product id this line refers to.
    #[must_use]
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

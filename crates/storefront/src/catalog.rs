//! The fixed in-memory product catalog.
//!
//! The catalog is loaded once at startup from a hardcoded list - there is
//! no network fetch, pagination, or search backend. It is injectable so
//! tests can run against a catalog they control.

use rust_decimal::Decimal;

use velvet_fig_core::{Price, ProductId};

use crate::models::Product;

/// An immutable snapshot of the store's products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Build the catalog with the built-in sample products.
    #[must_use]
    pub fn with_sample_products() -> Self {
        Self::new(sample_products())
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_sample_products()
    }
}

fn product(
    id: i32,
    name: &str,
    price_cents: i64,
    description: &str,
    image: &str,
    thumbnails: &[&str],
    category: &str,
    rating_tenths: i64,
    colors: &[&str],
    sizes: &[&str],
    brand: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        brand: brand.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        price: Price::from_cents(price_cents),
        rating: Decimal::new(rating_tenths, 1),
        image: image.to_string(),
        thumbnails: thumbnails.iter().map(ToString::to_string).collect(),
        colors: colors.iter().map(ToString::to_string).collect(),
        sizes: sizes.iter().map(ToString::to_string).collect(),
    }
}

/// The built-in sample product data.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Premium Denim Jacket",
            8999,
            "Classic denim jacket with a modern fit. Made from high-quality denim that's both durable and comfortable.",
            "https://images.unsplash.com/photo-1544642899-f0d6e5f6ed6f?q=80&w=1887&auto=format&fit=crop",
            &[
                "https://images.unsplash.com/photo-1544642899-f0d6e5f6ed6f?q=80&w=1887&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1576871337622-98d48d1cf531?q=80&w=1887&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1600502281976-e0e31b326509?q=80&w=1887&auto=format&fit=crop",
            ],
            "jackets",
            48,
            &["blue", "black", "gray"],
            &["XS", "S", "M", "L", "XL"],
            "StyleWorks",
        ),
        product(
            2,
            "Slim-Fit Chino Pants",
            4999,
            "Versatile chino pants with a slim fit. Perfect for both casual and semi-formal occasions.",
            "https://images.unsplash.com/photo-1624378439575-d8705ad7ae80?q=80&w=1897&auto=format&fit=crop",
            &[
                "https://images.unsplash.com/photo-1624378439575-d8705ad7ae80?q=80&w=1897&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1584865288793-449d2b2a42c8?q=80&w=1887&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1541099649105-f69ad21f3246?q=80&w=1887&auto=format&fit=crop",
            ],
            "pants",
            45,
            &["beige", "navy", "olive"],
            &["S", "M", "L", "XL", "XXL"],
            "UrbanComfort",
        ),
        product(
            3,
            "Cotton V-Neck T-Shirt",
            2499,
            "Soft and breathable cotton t-shirt with a flattering V-neck cut. Essential for any wardrobe.",
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?q=80&w=1780&auto=format&fit=crop",
            &[
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?q=80&w=1780&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1622470953794-aa9c70b0fb9d?q=80&w=1887&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1583743814966-8936f5b7be1a?q=80&w=1887&auto=format&fit=crop",
            ],
            "t-shirts",
            43,
            &["white", "black", "gray", "blue", "red"],
            &["XS", "S", "M", "L", "XL", "XXL"],
            "BasicLuxe",
        ),
        product(
            4,
            "Leather Chelsea Boots",
            12999,
            "Classic Chelsea boots crafted from premium leather. Timeless style with modern comfort.",
            "https://images.unsplash.com/photo-1638247025967-b4e38f787b76?q=80&w=1935&auto=format&fit=crop",
            &[
                "https://images.unsplash.com/photo-1638247025967-b4e38f787b76?q=80&w=1935&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1542838132-92c53300491e?q=80&w=1887&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1621996659490-3275307652ea?q=80&w=1887&auto=format&fit=crop",
            ],
            "shoes",
            47,
            &["brown", "black"],
            &["7", "8", "9", "10", "11", "12"],
            "UrbanWalk",
        ),
        product(
            5,
            "Wool Blend Overcoat",
            18999,
            "Elegant wool blend overcoat, perfect for colder months. Features a classic cut with modern detailing.",
            "https://images.unsplash.com/photo-1539533018447-63fcce2678e3?q=80&w=1887&auto=format&fit=crop",
            &[
                "https://images.unsplash.com/photo-1539533018447-63fcce2678e3?q=80&w=1887&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1591047139829-d91aecb6caea?q=80&w=1936&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1608063615781-e2ef8c73d114?q=80&w=1887&auto=format&fit=crop",
            ],
            "coats",
            49,
            &["camel", "gray", "navy"],
            &["S", "M", "L", "XL"],
            "LuxeWear",
        ),
        product(
            6,
            "Cashmere Scarf",
            5999,
            "Luxuriously soft cashmere scarf. Adds elegance and warmth to any winter outfit.",
            "https://images.unsplash.com/photo-1520903920243-32211SetaN73DX.jpg?q=80&w=1887&auto=format&fit=crop",
            &[
                "https://images.unsplash.com/photo-1520903920243-32211SetaN73DX.jpg?q=80&w=1887&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1601925260368-ae2f83cf8b7f?q=80&w=1980&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1520903074185-9aa21c1d1a42?q=80&w=1887&auto=format&fit=crop",
            ],
            "accessories",
            46,
            &["red", "beige", "black", "gray"],
            &["One Size"],
            "CozyLuxe",
        ),
        product(
            7,
            "Aviator Sunglasses",
            7999,
            "Classic aviator sunglasses with UV protection. Metal frames with comfortable nose pads.",
            "https://images.unsplash.com/photo-1511499767150-a48a237f0083?q=80&w=1880&auto=format&fit=crop",
            &[
                "https://images.unsplash.com/photo-1511499767150-a48a237f0083?q=80&w=1880&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1473496169904-658ba7c44d8a?q=80&w=1880&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1577803645773-f96470509666?q=80&w=1870&auto=format&fit=crop",
            ],
            "accessories",
            44,
            &["gold", "silver", "black"],
            &["One Size"],
            "SunStyle",
        ),
        product(
            8,
            "Leather Crossbody Bag",
            9999,
            "Compact yet spacious leather crossbody bag. Perfect for everyday use with multiple compartments.",
            "https://images.unsplash.com/photo-1590874103328-eac8a90f5120?q=80&w=1876&auto=format&fit=crop",
            &[
                "https://images.unsplash.com/photo-1590874103328-eac8a90f5120?q=80&w=1876&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1608731267464-c0c889c2ff92?q=80&w=1887&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1622560480654-d96214fdc887?q=80&w=1887&auto=format&fit=crop",
            ],
            "bags",
            47,
            &["brown", "black", "tan"],
            &["One Size"],
            "LeatherCraft",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = Catalog::with_sample_products();
        assert_eq!(catalog.len(), 8);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_ids_unique() {
        let catalog = Catalog::with_sample_products();
        let mut ids: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::with_sample_products();
        let boots = catalog.get(ProductId::new(4)).expect("product 4 exists");
        assert_eq!(boots.name, "Leather Chelsea Boots");
        assert_eq!(boots.price, Price::from_cents(12999));
        assert!(catalog.get(ProductId::new(999)).is_none());
    }

    #[test]
    fn test_variant_axes_populated() {
        let catalog = Catalog::with_sample_products();
        for p in catalog.products() {
            assert!(!p.colors.is_empty(), "{} has no colors", p.name);
            assert!(!p.sizes.is_empty(), "{} has no sizes", p.name);
            assert_eq!(p.thumbnails.len(), 3);
        }
    }

    #[test]
    fn test_injectable_catalog() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.get(ProductId::new(1)).is_none());
    }
}

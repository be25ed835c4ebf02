//! Product filtering and sorting for the browsing surface.
//!
//! Filter values are matched case-insensitively against a product's
//! variant axes and brand. An empty list for an axis means that axis is
//! not applied. Sorting happens after filtering and is stable, so the
//! `Default` ordering is the catalog's own.

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Sort orders offered by the products page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Featured: keep catalog order.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    /// No real dates in the sample data; newest approximated by id.
    Newest,
}

/// An active set of browse filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Lowercase size values to match (any-of).
    pub sizes: Vec<String>,
    /// Lowercase color values to match (any-of).
    pub colors: Vec<String>,
    /// Lowercase brand values to match (any-of).
    pub brands: Vec<String>,
    /// Applied after filtering.
    pub sort_by: SortBy,
}

impl ProductFilter {
    /// An empty filter: every product passes, catalog order kept.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active filter values across all axes (sort not counted).
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.sizes.len() + self.colors.len() + self.brands.len()
    }

    /// Reset every axis and the sort order.
    pub fn clear(&mut self) {
        self.sizes.clear();
        self.colors.clear();
        self.brands.clear();
        self.sort_by = SortBy::Default;
    }

    /// Whether `product` passes every active axis.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if !self.sizes.is_empty()
            && !product
                .sizes
                .iter()
                .any(|size| self.sizes.contains(&size.to_lowercase()))
        {
            return false;
        }
        if !self.colors.is_empty()
            && !product
                .colors
                .iter()
                .any(|color| self.colors.contains(&color.to_lowercase()))
        {
            return false;
        }
        if !self.brands.is_empty() && !self.brands.contains(&product.brand.to_lowercase()) {
            return false;
        }
        true
    }

    /// Filter and sort `products` into a new list.
    #[must_use]
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut result: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();

        match self.sort_by {
            SortBy::Default => {}
            SortBy::PriceAsc => result.sort_by_key(|p| p.price),
            SortBy::PriceDesc => result.sort_by(|a, b| b.price.cmp(&a.price)),
            SortBy::RatingDesc => result.sort_by(|a, b| b.rating.cmp(&a.rating)),
            SortBy::Newest => result.sort_by(|a, b| b.id.cmp(&a.id)),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn products() -> Vec<Product> {
        Catalog::with_sample_products().products().to_vec()
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_catalog_order() {
        let all = products();
        let filtered = ProductFilter::new().apply(&all);
        assert_eq!(filtered, all);
    }

    #[test]
    fn test_size_filter_matches_any_variant() {
        let filter = ProductFilter {
            sizes: vec!["xxl".to_string()],
            ..ProductFilter::default()
        };
        let filtered = filter.apply(&products());
        // Chinos and the v-neck tee carry XXL.
        assert_eq!(
            names(&filtered),
            vec!["Slim-Fit Chino Pants", "Cotton V-Neck T-Shirt"]
        );
    }

    #[test]
    fn test_color_filter_is_case_insensitive() {
        let filter = ProductFilter {
            colors: vec!["camel".to_string()],
            ..ProductFilter::default()
        };
        let filtered = filter.apply(&products());
        assert_eq!(names(&filtered), vec!["Wool Blend Overcoat"]);
    }

    #[test]
    fn test_brand_filter() {
        let filter = ProductFilter {
            brands: vec!["styleworks".to_string()],
            ..ProductFilter::default()
        };
        let filtered = filter.apply(&products());
        assert_eq!(names(&filtered), vec!["Premium Denim Jacket"]);
    }

    #[test]
    fn test_axes_compose_conjunctively() {
        let filter = ProductFilter {
            colors: vec!["black".to_string()],
            brands: vec!["urbanwalk".to_string()],
            ..ProductFilter::default()
        };
        let filtered = filter.apply(&products());
        assert_eq!(names(&filtered), vec!["Leather Chelsea Boots"]);
    }

    #[test]
    fn test_sort_price_asc() {
        let filter = ProductFilter {
            sort_by: SortBy::PriceAsc,
            ..ProductFilter::default()
        };
        let filtered = filter.apply(&products());
        let first = filtered.first().expect("nonempty");
        let last = filtered.last().expect("nonempty");
        assert_eq!(first.name, "Cotton V-Neck T-Shirt");
        assert_eq!(last.name, "Wool Blend Overcoat");
    }

    #[test]
    fn test_sort_rating_desc() {
        let filter = ProductFilter {
            sort_by: SortBy::RatingDesc,
            ..ProductFilter::default()
        };
        let filtered = filter.apply(&products());
        assert_eq!(
            filtered.first().expect("nonempty").name,
            "Wool Blend Overcoat"
        );
    }

    #[test]
    fn test_sort_newest_by_descending_id() {
        let filter = ProductFilter {
            sort_by: SortBy::Newest,
            ..ProductFilter::default()
        };
        let filtered = filter.apply(&products());
        assert_eq!(
            filtered.first().expect("nonempty").name,
            "Leather Crossbody Bag"
        );
    }

    #[test]
    fn test_active_count_and_clear() {
        let mut filter = ProductFilter {
            sizes: vec!["s".to_string(), "m".to_string()],
            colors: vec!["black".to_string()],
            brands: Vec::new(),
            sort_by: SortBy::PriceDesc,
        };
        assert_eq!(filter.active_count(), 3);

        filter.clear();
        assert_eq!(filter.active_count(), 0);
        assert_eq!(filter.sort_by, SortBy::Default);
    }
}

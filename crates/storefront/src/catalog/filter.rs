//! Browse filters over the product catalog.
//!
//! The filter is accumulated UI state: brand/category toggles, a price
//! range, a gender tab, a search box, and a sort order. `apply` runs the
//! whole pipeline over a product list and returns the view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stride_core::{Gender, Product};

/// Gender tab: everything, or one target group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenderFilter {
    #[default]
    All,
    Only(Gender),
}

/// Sort order for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Catalog order, unsorted.
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    Newest,
    BestSelling,
}

/// Default upper bound of the price slider.
const DEFAULT_PRICE_CEILING: Decimal = Decimal::from_parts(2000, 0, 0, false, 0);

/// Accumulated browse-filter state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub brands: Vec<String>,
    pub categories: Vec<String>,
    pub price_range: (Decimal, Decimal),
    pub gender: GenderFilter,
    pub sort: SortOption,
    pub search: String,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            brands: Vec::new(),
            categories: Vec::new(),
            price_range: (Decimal::ZERO, DEFAULT_PRICE_CEILING),
            gender: GenderFilter::All,
            sort: SortOption::Featured,
            search: String::new(),
        }
    }
}

impl ProductFilter {
    /// Fresh filter with every control at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a brand in or out of the selection.
    pub fn toggle_brand(&mut self, brand: &str) {
        toggle(&mut self.brands, brand);
    }

    /// Toggle a category in or out of the selection.
    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.categories, category);
    }

    /// Set the inclusive price range.
    pub fn set_price_range(&mut self, min: Decimal, max: Decimal) {
        self.price_range = (min, max);
    }

    /// Reset every control to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Run the filter pipeline and sort over a product list.
    #[must_use]
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let query = self.search.trim().to_lowercase();

        let mut filtered: Vec<Product> = products
            .iter()
            .filter(|product| self.brands.is_empty() || self.brands.contains(&product.brand))
            .filter(|product| query.is_empty() || product.name.to_lowercase().contains(&query))
            .filter(|product| {
                self.categories.is_empty()
                    || product
                        .categories
                        .iter()
                        .any(|category| self.categories.contains(category))
            })
            .filter(|product| {
                product.discount_price >= self.price_range.0
                    && product.discount_price <= self.price_range.1
            })
            .filter(|product| match self.gender {
                GenderFilter::All => true,
                GenderFilter::Only(gender) => product.gender == gender,
            })
            .cloned()
            .collect();

        match self.sort {
            SortOption::Featured => {}
            SortOption::PriceLowToHigh => {
                filtered.sort_by(|a, b| a.discount_price.cmp(&b.discount_price));
            }
            SortOption::PriceHighToLow => {
                filtered.sort_by(|a, b| b.discount_price.cmp(&a.discount_price));
            }
            SortOption::Newest => filtered.sort_by(|a, b| b.date_added.cmp(&a.date_added)),
            SortOption::BestSelling => filtered.sort_by(|a, b| b.sales.cmp(&a.sales)),
        }

        filtered
    }
}

fn toggle(selection: &mut Vec<String>, value: &str) {
    if let Some(position) = selection.iter().position(|item| item == value) {
        selection.remove(position);
    } else {
        selection.push(value.to_string());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use stride_core::ProductId;

    fn product(id: i64, name: &str, brand: &str, price: i64, gender: Gender) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            brand: brand.to_string(),
            categories: vec!["running".to_string()],
            gender,
            original_price: Decimal::new(price, 0),
            discount_price: Decimal::new(price, 0),
            sizes: vec!["M".to_string()],
            date_added: Utc::now() - Duration::days(id),
            sales: u64::try_from(id).unwrap() * 10,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Air Zoom", "Nike", 1200, Gender::Men),
            product(2, "Ultraboost", "Adidas", 1800, Gender::Women),
            product(3, "Gel Kayano", "Asics", 900, Gender::Unisex),
            product(4, "Pegasus Trail", "Nike", 2500, Gender::Men),
        ]
    }

    #[test]
    fn default_passes_everything_within_price_ceiling() {
        let filter = ProductFilter::new();
        let result = filter.apply(&catalog());
        // The 2500 shoe sits above the default 0..=2000 range.
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn brand_toggle_filters_and_untoggles() {
        let mut filter = ProductFilter::new();
        filter.toggle_brand("Nike");
        filter.set_price_range(Decimal::ZERO, Decimal::new(5000, 0));

        let result = filter.apply(&catalog());
        assert!(result.iter().all(|product| product.brand == "Nike"));
        assert_eq!(result.len(), 2);

        filter.toggle_brand("Nike");
        assert_eq!(filter.apply(&catalog()).len(), 4);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut filter = ProductFilter::new();
        filter.search = "  zoom ".to_string();

        let result = filter.apply(&catalog());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Air Zoom");
    }

    #[test]
    fn gender_tab_narrows() {
        let mut filter = ProductFilter::new();
        filter.gender = GenderFilter::Only(Gender::Women);

        let result = filter.apply(&catalog());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Ultraboost");
    }

    #[test]
    fn price_sorts_run_both_directions() {
        let mut filter = ProductFilter::new();
        filter.set_price_range(Decimal::ZERO, Decimal::new(5000, 0));

        filter.sort = SortOption::PriceLowToHigh;
        let ascending = filter.apply(&catalog());
        assert_eq!(ascending[0].name, "Gel Kayano");
        assert_eq!(ascending.last().unwrap().name, "Pegasus Trail");

        filter.sort = SortOption::PriceHighToLow;
        let descending = filter.apply(&catalog());
        assert_eq!(descending[0].name, "Pegasus Trail");
    }

    #[test]
    fn newest_and_bestselling_sorts() {
        let mut filter = ProductFilter::new();
        filter.set_price_range(Decimal::ZERO, Decimal::new(5000, 0));

        filter.sort = SortOption::Newest;
        assert_eq!(filter.apply(&catalog())[0].name, "Air Zoom");

        filter.sort = SortOption::BestSelling;
        assert_eq!(filter.apply(&catalog())[0].name, "Pegasus Trail");
    }

    #[test]
    fn clear_restores_defaults() {
        let mut filter = ProductFilter::new();
        filter.toggle_brand("Nike");
        filter.search = "zoom".to_string();
        filter.sort = SortOption::Newest;

        filter.clear();
        assert_eq!(filter, ProductFilter::default());
    }
}

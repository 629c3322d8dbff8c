//! Filter dimensions, selection state, and client-side filtering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::product::Product;

/// One independently toggleable filter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterDimension {
    Category,
    Brand,
    Price,
    Rating,
}

impl FilterDimension {
    /// All dimensions, in panel order.
    pub const ALL: [FilterDimension; 4] = [
        FilterDimension::Category,
        FilterDimension::Brand,
        FilterDimension::Price,
        FilterDimension::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterDimension::Category => "category",
            FilterDimension::Brand => "brand",
            FilterDimension::Price => "price",
            FilterDimension::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FilterDimension::Category => "Category",
            FilterDimension::Brand => "Brand",
            FilterDimension::Price => "Price",
            FilterDimension::Rating => "Rating",
        }
    }

    /// The token options the storefront offers for this dimension.
    pub fn standard_options(&self) -> &'static [&'static str] {
        match self {
            FilterDimension::Category => &["smartphones", "audio", "laptops"],
            FilterDimension::Brand => &[
                "Sony", "Samsung", "Apple", "OnePlus", "Google", "JBL", "Bose", "Dell",
            ],
            FilterDimension::Price => &["0-500", "500-2000", "2000-5000", "5000-10000"],
            FilterDimension::Rating => &["4", "3", "2", "1"],
        }
    }
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A closed price range encoded as a `"<min>-<max>"` token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Parse a range token by splitting on the first `-`.
    pub fn parse(token: &str) -> Result<Self, SearchError> {
        let (min, max) = token
            .split_once('-')
            .ok_or_else(|| SearchError::InvalidPriceRange(token.to_string()))?;
        let min: f64 = min
            .trim()
            .parse()
            .map_err(|_| SearchError::InvalidPriceRange(token.to_string()))?;
        let max: f64 = max
            .trim()
            .parse()
            .map_err(|_| SearchError::InvalidPriceRange(token.to_string()))?;
        Ok(Self { min, max })
    }

    /// Inclusive at both ends.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// The active filter selection: one token list per dimension.
///
/// Token lists are insertion-ordered and duplicate-free; insertion order is
/// observable because server-side filter application sends the *first*
/// selected token of a dimension. An empty list places no constraint on its
/// dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    category: Vec<String>,
    brand: Vec<String>,
    price: Vec<String>,
    rating: Vec<String>,
}

impl FilterSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a token: remove it if selected, append it otherwise.
    ///
    /// Other dimensions are never affected.
    pub fn toggle(&mut self, dimension: FilterDimension, token: impl Into<String>) {
        let token = token.into();
        let tokens = self.tokens_mut(dimension);
        if let Some(pos) = tokens.iter().position(|t| *t == token) {
            tokens.remove(pos);
        } else {
            tokens.push(token);
        }
    }

    /// Reset all four dimensions to empty.
    pub fn clear(&mut self) {
        self.category.clear();
        self.brand.clear();
        self.price.clear();
        self.rating.clear();
    }

    /// Whether no dimension has any token selected.
    pub fn is_empty(&self) -> bool {
        self.category.is_empty()
            && self.brand.is_empty()
            && self.price.is_empty()
            && self.rating.is_empty()
    }

    /// The selected tokens of a dimension, in selection order.
    pub fn tokens(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::Category => &self.category,
            FilterDimension::Brand => &self.brand,
            FilterDimension::Price => &self.price,
            FilterDimension::Rating => &self.rating,
        }
    }

    /// The first-selected token of a dimension, if any.
    pub fn first(&self, dimension: FilterDimension) -> Option<&str> {
        self.tokens(dimension).first().map(|s| s.as_str())
    }

    /// Whether a token is currently selected.
    pub fn is_selected(&self, dimension: FilterDimension, token: &str) -> bool {
        self.tokens(dimension).iter().any(|t| t == token)
    }

    /// Whether a product passes the selection.
    ///
    /// AND across dimensions, OR within a dimension's tokens.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product)
            && self.matches_brand(product)
            && self.matches_rating(product)
            && self.matches_price(product)
    }

    /// Filter a product list, preserving its order.
    ///
    /// The result is always a subset of the input.
    pub fn filter_products(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.category.is_empty() || self.category.iter().any(|c| *c == product.category)
    }

    fn matches_brand(&self, product: &Product) -> bool {
        self.brand.is_empty() || self.brand.iter().any(|b| *b == product.brand)
    }

    fn matches_rating(&self, product: &Product) -> bool {
        self.rating.is_empty() || self.rating.iter().any(|r| *r == product.rating_token())
    }

    fn matches_price(&self, product: &Product) -> bool {
        // A malformed range token matches nothing.
        self.price.is_empty()
            || self.price.iter().any(|token| {
                PriceRange::parse(token)
                    .map(|range| range.contains(product.price))
                    .unwrap_or(false)
            })
    }

    fn tokens_mut(&mut self, dimension: FilterDimension) -> &mut Vec<String> {
        match dimension {
            FilterDimension::Category => &mut self.category,
            FilterDimension::Brand => &mut self.brand,
            FilterDimension::Price => &mut self.price,
            FilterDimension::Rating => &mut self.rating,
        }
    }
}

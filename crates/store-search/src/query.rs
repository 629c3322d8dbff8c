//! Remote search query plan.

use serde::{Deserialize, Serialize};

use crate::filter::{FilterDimension, FilterSelection, PriceRange};

/// Sort options for server-side search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Sort by relevance (default for text search).
    #[default]
    Relevance,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by highest rated.
    Rating,
    /// Sort by newest first.
    Newest,
}

impl SortOption {
    /// Wire key sent as the `sort` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::Rating => "rating",
            SortOption::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Relevance => "Relevance",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Rating => "Customer Rating",
            SortOption::Newest => "Newest Arrivals",
        }
    }
}

/// Parameters for one Search API request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Text query.
    pub q: String,
    /// Category filter.
    pub category: Option<String>,
    /// Brand filter.
    pub brand: Option<String>,
    /// Lower price bound.
    pub min_price: Option<f64>,
    /// Upper price bound.
    pub max_price: Option<f64>,
    /// Sort order; plain text searches send none.
    pub sort: Option<SortOption>,
}

impl SearchQuery {
    /// A plain text search carrying only the query string.
    pub fn for_text(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }

    /// Server-side filter application for a selection.
    ///
    /// The upstream contract honors a single value per dimension, so only the
    /// *first* selected category and brand token is sent even though the
    /// selection is multi-select. The first selected price token supplies the
    /// min/max pair; a malformed token sends no price bounds. The sort key is
    /// fixed to relevance.
    pub fn from_selection(q: impl Into<String>, selection: &FilterSelection) -> Self {
        let (min_price, max_price) = match selection
            .first(FilterDimension::Price)
            .map(PriceRange::parse)
        {
            Some(Ok(range)) => (Some(range.min), Some(range.max)),
            _ => (None, None),
        };

        Self {
            q: q.into(),
            category: selection.first(FilterDimension::Category).map(String::from),
            brand: selection.first(FilterDimension::Brand).map(String::from),
            min_price,
            max_price,
            sort: Some(SortOption::Relevance),
        }
    }

    /// Query-string pairs in their stable wire order:
    /// `q`, `category`, `brand`, `minPrice`, `maxPrice`, `sort`.
    ///
    /// A parameter whose source value is empty or zero is not appended.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("q", self.q.clone())];

        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("category", category.to_string()));
        }
        if let Some(brand) = self.brand.as_deref().filter(|b| !b.is_empty()) {
            pairs.push(("brand", brand.to_string()));
        }
        if let Some(min) = self.min_price.filter(|m| *m != 0.0) {
            pairs.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price.filter(|m| *m != 0.0) {
            pairs.push(("maxPrice", max.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_text_sends_only_query() {
        let query = SearchQuery::for_text("phone");
        assert_eq!(query.query_pairs(), vec![("q", "phone".to_string())]);
    }

    #[test]
    fn test_from_selection_sends_first_tokens_only() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterDimension::Category, "smartphones");
        selection.toggle(FilterDimension::Brand, "Sony");
        selection.toggle(FilterDimension::Brand, "Apple");
        selection.toggle(FilterDimension::Price, "500-2000");
        selection.toggle(FilterDimension::Price, "2000-5000");

        let query = SearchQuery::from_selection("phone", &selection);
        assert_eq!(query.category.as_deref(), Some("smartphones"));
        assert_eq!(query.brand.as_deref(), Some("Sony"));
        assert_eq!(query.min_price, Some(500.0));
        assert_eq!(query.max_price, Some(2000.0));
        assert_eq!(query.sort, Some(SortOption::Relevance));
    }

    #[test]
    fn test_query_pairs_stable_order() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterDimension::Category, "smartphones");
        selection.toggle(FilterDimension::Brand, "Sony");
        selection.toggle(FilterDimension::Price, "500-2000");

        let query = SearchQuery::from_selection("phone", &selection);
        let keys: Vec<&str> = query.query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["q", "category", "brand", "minPrice", "maxPrice", "sort"]);
    }

    #[test]
    fn test_zero_price_bound_is_skipped() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterDimension::Price, "0-500");

        let query = SearchQuery::from_selection("phone", &selection);
        let keys: Vec<&str> = query.query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["q", "maxPrice", "sort"]);
    }

    #[test]
    fn test_malformed_price_token_sends_no_bounds() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterDimension::Price, "affordable");

        let query = SearchQuery::from_selection("phone", &selection);
        assert_eq!(query.min_price, None);
        assert_eq!(query.max_price, None);
    }

    #[test]
    fn test_empty_selection_sends_sort_only() {
        let selection = FilterSelection::new();
        let query = SearchQuery::from_selection("phone", &selection);
        let keys: Vec<&str> = query.query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["q", "sort"]);
    }

    #[test]
    fn test_price_bound_rendering() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterDimension::Price, "500-2000");

        let query = SearchQuery::from_selection("phone", &selection);
        let pairs = query.query_pairs();
        assert!(pairs.contains(&("minPrice", "500".to_string())));
        assert!(pairs.contains(&("maxPrice", "2000".to_string())));
    }
}

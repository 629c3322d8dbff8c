//! Product data model.

use serde::{Deserialize, Serialize};

/// A product returned by the Search API.
///
/// The view owns a list of these for the duration of one search session and
/// replaces it wholesale on every successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub brand: String,
    pub price: f64,
    pub rating: f64,
}

impl Product {
    /// The rating rendered the way rating filter tokens encode it.
    ///
    /// Whole ratings drop the fraction (`4.0` renders as `"4"`, `4.5` as
    /// `"4.5"`), matching the tokens offered by the filter panel.
    pub fn rating_token(&self) -> String {
        self.rating.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_token_whole() {
        let p = product(4.0);
        assert_eq!(p.rating_token(), "4");
    }

    #[test]
    fn test_rating_token_fractional() {
        let p = product(4.5);
        assert_eq!(p.rating_token(), "4.5");
    }

    #[test]
    fn test_missing_brand_defaults_empty() {
        let json = r#"{"id":7,"title":"Earbuds","category":"audio","price":49.0,"rating":4.2}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.brand, "");
    }

    fn product(rating: f64) -> Product {
        Product {
            id: 1,
            title: "Phone".to_string(),
            category: "smartphones".to_string(),
            brand: "Apple".to_string(),
            price: 999.0,
            rating,
        }
    }
}

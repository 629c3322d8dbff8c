//! Search endpoint URL building.

use store_search::SearchQuery;

/// Path of the product search endpoint.
pub const SEARCH_PATH: &str = "/api/products/search";

/// Build the full request URL for a search query.
///
/// Query parameters keep their stable wire order (`q`, `category`, `brand`,
/// `minPrice`, `maxPrice`, `sort`) and values are percent-encoded.
pub fn search_url(base_url: &str, query: &SearchQuery) -> String {
    let mut url = format!("{}{}", base_url.trim_end_matches('/'), SEARCH_PATH);
    for (i, (key, value)) in query.query_pairs().iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_search::{FilterDimension, FilterSelection};

    #[test]
    fn test_plain_search_url() {
        let query = SearchQuery::for_text("phone");
        assert_eq!(
            search_url("https://localhost:7151", &query),
            "https://localhost:7151/api/products/search?q=phone"
        );
    }

    #[test]
    fn test_filtered_search_url_stable_order() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterDimension::Category, "smartphones");
        selection.toggle(FilterDimension::Brand, "Sony");
        selection.toggle(FilterDimension::Price, "500-2000");

        let query = SearchQuery::from_selection("phone", &selection);
        assert_eq!(
            search_url("https://localhost:7151", &query),
            "https://localhost:7151/api/products/search\
             ?q=phone&category=smartphones&brand=Sony&minPrice=500&maxPrice=2000&sort=relevance"
        );
    }

    #[test]
    fn test_query_value_is_percent_encoded() {
        let query = SearchQuery::for_text("wireless headphones & more");
        let url = search_url("https://localhost:7151", &query);
        assert_eq!(
            url,
            "https://localhost:7151/api/products/search?q=wireless%20headphones%20%26%20more"
        );
    }

    #[test]
    fn test_trailing_slash_on_base_url() {
        let query = SearchQuery::for_text("phone");
        assert_eq!(
            search_url("https://localhost:7151/", &query),
            "https://localhost:7151/api/products/search?q=phone"
        );
    }
}

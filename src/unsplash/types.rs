//! Unsplash search response types and mapping to `ImageResult`

use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_ALT_TEXT: &str = "Unsplash Image";
pub const UNKNOWN_PHOTOGRAPHER: &str = "Unknown photographer";

/// Envelope of `GET /search/photos`
///
/// Entries stay as raw JSON here so each one goes through `ImageResult::from_value`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    pub results: Vec<Value>,
}

/// A decoded page of search results, in API order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchPage {
    pub total: Option<u64>,
    pub total_pages: Option<u64>,
    pub results: Vec<ImageResult>,
}

impl SearchPage {
    /// Decode a response body
    pub fn from_body(body: &str) -> Result<Self, FetchError> {
        let response: SearchResponse = serde_json::from_str(body)?;
        let results = response
            .results
            .into_iter()
            .map(ImageResult::from_value)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            total: response.total,
            total_pages: response.total_pages,
            results,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PhotoEntry {
    id: Option<String>,
    alt_description: Option<String>,
    description: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    urls: Option<PhotoUrls>,
    user: Option<PhotoUser>,
    links: Option<PhotoLinks>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PhotoUrls {
    regular: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PhotoUser {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PhotoLinks {
    html: Option<String>,
}

/// One photo from a search response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageResult {
    pub id: String,
    pub display_url: String,
    pub width: u32,
    pub height: u32,
    pub alt_text: Option<String>,
    pub description: Option<String>,
    pub photographer_name: String,
    pub source_page_url: String,
}

impl ImageResult {
    /// Map one `results[]` entry
    ///
    /// Missing fields get defaults; a field of the wrong type fails the entry.
    pub fn from_value(value: Value) -> Result<Self, FetchError> {
        if !value.is_object() {
            return Err(FetchError::Decode(format!(
                "result entry is not an object: {}",
                value
            )));
        }
        let entry: PhotoEntry = serde_json::from_value(value)?;

        Ok(Self {
            id: entry.id.unwrap_or_default(),
            display_url: entry.urls.and_then(|u| u.regular).unwrap_or_default(),
            width: entry.width.unwrap_or_default(),
            height: entry.height.unwrap_or_default(),
            alt_text: non_empty(entry.alt_description),
            description: non_empty(entry.description),
            photographer_name: entry
                .user
                .and_then(|u| non_empty(u.name))
                .unwrap_or_else(|| UNKNOWN_PHOTOGRAPHER.to_string()),
            source_page_url: entry.links.and_then(|l| l.html).unwrap_or_default(),
        })
    }

    /// Alt text for display, falling back to a generic label
    pub fn alt_or_default(&self) -> &str {
        self.alt_text.as_deref().unwrap_or(DEFAULT_ALT_TEXT)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_entry() -> Value {
        json!({
            "id": "abc_123",
            "slug": "sample-photo-xyz",
            "alt_description": "A stunning landscape with mountains and a lake.",
            "description": null,
            "width": 4000,
            "height": 3000,
            "urls": { "regular": "https://images.unsplash.com/photo-1", "thumb": "https://t" },
            "user": { "name": "Jane Doe", "username": "jane" },
            "links": { "html": "https://unsplash.com/photos/abc_123" }
        })
    }

    #[test]
    fn test_full_entry_mapping() {
        let image = ImageResult::from_value(full_entry()).unwrap();
        assert_eq!(image.id, "abc_123");
        assert_eq!(image.display_url, "https://images.unsplash.com/photo-1");
        assert_eq!(image.width, 4000);
        assert_eq!(image.height, 3000);
        assert_eq!(
            image.alt_text.as_deref(),
            Some("A stunning landscape with mountains and a lake.")
        );
        assert_eq!(image.description, None);
        assert_eq!(image.photographer_name, "Jane Doe");
        assert_eq!(image.source_page_url, "https://unsplash.com/photos/abc_123");
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let image = ImageResult::from_value(json!({ "id": "only-id" })).unwrap();
        assert_eq!(image.id, "only-id");
        assert_eq!(image.display_url, "");
        assert_eq!(image.width, 0);
        assert_eq!(image.photographer_name, UNKNOWN_PHOTOGRAPHER);
        assert_eq!(image.alt_or_default(), DEFAULT_ALT_TEXT);

        let image = ImageResult::from_value(json!({ "user": { "name": null }, "urls": {} })).unwrap();
        assert_eq!(image.photographer_name, UNKNOWN_PHOTOGRAPHER);
        assert_eq!(image.display_url, "");
    }

    #[test]
    fn test_wrong_types_are_decode_errors() {
        let err = ImageResult::from_value(json!({ "id": "x", "width": "wide" })).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));

        let err = ImageResult::from_value(json!("just a string")).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_page_preserves_order() {
        let body = json!({
            "total": 2,
            "total_pages": 1,
            "results": [
                { "id": "first", "urls": { "regular": "https://img/1" } },
                { "id": "second", "urls": { "regular": "https://img/2" } }
            ]
        })
        .to_string();

        let page = SearchPage::from_body(&body).unwrap();
        assert_eq!(page.total, Some(2));
        assert_eq!(page.total_pages, Some(1));
        let ids: Vec<&str> = page.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
        assert_eq!(page.results[1].display_url, "https://img/2");
    }

    #[test]
    fn test_empty_results_is_not_an_error() {
        let page = SearchPage::from_body(r#"{"total":0,"total_pages":0,"results":[]}"#).unwrap();
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_malformed_bodies() {
        assert!(matches!(SearchPage::from_body("<html>"), Err(FetchError::Decode(_))));
        assert!(matches!(SearchPage::from_body(r#"{"total":3}"#), Err(FetchError::Decode(_))));
        assert!(matches!(
            SearchPage::from_body(r#"{"results":null}"#),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(
            SearchPage::from_body(r#"{"results":{"id":"x"}}"#),
            Err(FetchError::Decode(_))
        ));
    }
}

//! Markdown output for the terminal
//!
//! Renders a `SessionState` the way the search page shows it, plus the static
//! API documentation panel.

use crate::session::{Phase, SessionState};
use crate::unsplash::ImageResult;

/// Render one session snapshot
pub fn session_markdown(state: &SessionState) -> String {
    match state.phase {
        Phase::Idle => "### Start exploring!\n\n\
             Enter any keyword to discover stunning, high-resolution photography.\n"
            .to_string(),
        Phase::Validating | Phase::Loading => "Loading amazing images...\n".to_string(),
        Phase::Empty => format!(
            "No images found for \"{}\". Try a different keyword!\n",
            state.term
        ),
        Phase::ValidationError | Phase::FetchError => format!(
            "**Error:** {}\n",
            state.error_message.as_deref().unwrap_or_default()
        ),
        Phase::Success => results_markdown(state),
    }
}

fn results_markdown(state: &SessionState) -> String {
    let mut markdown = format!("# Results for \"{}\"", state.term);
    match state.total {
        Some(total) => markdown.push_str(&format!(" ({} of {})\n", state.results.len(), total)),
        None => markdown.push_str(&format!(" ({})\n", state.results.len())),
    }
    if let Some(pages) = state.total_pages.filter(|&pages| pages > 1) {
        markdown.push_str(&format!("Page 1 of {}\n", pages));
    }
    markdown.push('\n');

    for (i, image) in state.results.iter().enumerate() {
        markdown.push_str(&format!("## {}. {}\n", i + 1, image.alt_or_default()));
        markdown.push_str(&image_markdown(image));
        markdown.push('\n');
    }
    markdown
}

/// Card for one image, with photographer attribution and source link
pub fn image_markdown(image: &ImageResult) -> String {
    let mut markdown = format!("![{}]({})\n", image.alt_or_default(), image.display_url);
    markdown.push_str(&format!("- Size: {}x{}\n", image.width, image.height));
    markdown.push_str(&format!("- **Photographer:** {}\n", image.photographer_name));

    if let Some(description) = &image.description {
        markdown.push_str(&format!("- {}\n", description));
    }
    if let Some(alt) = &image.alt_text {
        if image.description.as_ref() != Some(alt) {
            markdown.push_str(&format!("- *Alt: {}*\n", alt));
        }
    }
    if !image.source_page_url.is_empty() {
        markdown.push_str(&format!("- [View on Unsplash]({})\n", image.source_page_url));
    }
    markdown
}

/// Static documentation for the search endpoint
pub fn api_documentation() -> &'static str {
    API_DOCUMENTATION
}

const API_DOCUMENTATION: &str = r#"# Unsplash API Documentation

This tool uses the Unsplash API (https://unsplash.com/documentation) to fetch
and display high-resolution images. Unsplash offers a vast library of freely
usable photos.

## Endpoint Overview

- `GET https://api.unsplash.com/search/photos`
- Query structure: `?query=term&client_id=YOUR_ACCESS_KEY`

## Key Parameters

- `query`: the primary search keyword (e.g. `nature`, `cityscape`, `abstract`).
- `client_id`: your Unsplash API access key, required for authentication.
- `page`: page number of results to retrieve (default: 1).
- `per_page`: number of results per page (default: 10, max: 30 for search).

## Authentication

Access requires a valid `client_id`, obtained by registering an application on
the Unsplash developer dashboard. It must be included with every request.
Set it with `UNSPLASH_ACCESS_KEY` or `--access-key`.

## Rate Limits

- Standard plan: typically 50 requests per hour.
- Elevated access: apps can be upgraded to 5000 requests per hour.
- Usage is reported in the `X-Ratelimit-Limit` and `X-Ratelimit-Remaining`
  response headers (logged with `--verbose`).

## Usage Guidelines

- Attribution: always credit the photographer when displaying Unsplash images.
- Caching: avoid storing or caching large sets of Unsplash images locally.
- Links: where possible, link back to the image's page on Unsplash.

## Sample Response (Truncated)

```json
{
  "total": 1234,
  "total_pages": 124,
  "results": [
    {
      "id": "abc_123",
      "alt_description": "A stunning landscape with mountains and a lake.",
      "urls": { "regular": "https://images.unsplash.com/photo-..." },
      "user": { "name": "Jane Doe" }
    }
  ]
}
```

## Further Resources

- Unsplash API official documentation: https://unsplash.com/documentation
- Register your application: https://unsplash.com/oauth/applications
"#;

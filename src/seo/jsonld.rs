//! JSON-LD structured-data builders.
//!
//! Inverse of schema.org page-type detection: given resolved page data, emit
//! the `BreadcrumbList`, `ItemList`, and `Article` objects search engines
//! read. Field coverage is deliberately minimal; this is routing plumbing,
//! not a rendering layer.

use crate::content::{ContentItem, ListingPage, Scope};
use crate::route::label::humanize;
use crate::route::PageIntent;
use serde_json::{json, Value};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Breadcrumb trail for an intent, one crumb per populated path field.
///
/// Positions are 1-based per the schema.org contract. Returns `None` for
/// `Invalid` intents, which never render.
pub fn breadcrumbs(intent: &PageIntent, country: &str, base_url: &str) -> Option<Value> {
    let path = intent.canonical_path(country)?;
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    let mut elements = Vec::with_capacity(segments.len());
    let mut crumb_path = String::new();
    for (i, segment) in segments.iter().enumerate() {
        crumb_path.push('/');
        crumb_path.push_str(segment);
        elements.push(json!({
            "@type": "ListItem",
            "position": i + 1,
            "name": humanize(segment),
            "item": format!("{}{}", base_url.trim_end_matches('/'), crumb_path),
        }));
    }

    Some(json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    }))
}

/// `ItemList` for one page of a scoped listing.
pub fn item_list(scope: &Scope, listing: &ListingPage, base_url: &str) -> Value {
    let name = scope
        .category
        .as_deref()
        .or(scope.city.as_deref())
        .or(scope.state.as_deref())
        .map(humanize)
        .unwrap_or_else(|| humanize(&scope.country));

    let elements: Vec<Value> = listing
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": item.title,
                "url": item_url(item, &scope.country, base_url),
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "ItemList",
        "name": name,
        "numberOfItems": listing.total,
        "itemListElement": elements,
    })
}

/// `Article` for a resolved content item.
pub fn article(item: &ContentItem, country: &str, base_url: &str) -> Value {
    let mut doc = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Article",
        "headline": item.title,
        "url": item_url(item, country, base_url),
        "articleSection": humanize(&item.category),
    });
    if let Some(summary) = &item.summary {
        doc["description"] = json!(summary);
    }
    if let Some(published) = &item.published_at {
        doc["datePublished"] = json!(published.to_rfc3339());
    }
    if let Some(updated) = &item.updated_at {
        doc["dateModified"] = json!(updated.to_rfc3339());
    }
    doc
}

/// Canonical URL of an item: country, then whichever of state/city are set,
/// then category and slug.
fn item_url(item: &ContentItem, country: &str, base_url: &str) -> String {
    let mut url = format!("{}/{country}", base_url.trim_end_matches('/'));
    if let Some(state) = &item.state {
        url.push('/');
        url.push_str(state);
    }
    if let Some(city) = &item.city {
        url.push('/');
        url.push_str(city);
    }
    url.push('/');
    url.push_str(&item.category);
    url.push('/');
    url.push_str(&item.slug);
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_include;
    use serde_json::json;

    #[test]
    fn test_breadcrumbs_positions_and_urls() {
        let intent = PageIntent::Category {
            state: "texas".into(),
            city: "austin".into(),
            category: "web-design".into(),
        };
        let crumbs = breadcrumbs(&intent, "us", "https://example.com").unwrap();
        let elements = crumbs["itemListElement"].as_array().unwrap();
        assert_eq!(elements.len(), 4); // country + three fields
        assert_json_include!(
            actual: elements[3].clone(),
            expected: json!({
                "position": 4,
                "name": "Web Design",
                "item": "https://example.com/us/texas/austin/web-design",
            })
        );
    }

    #[test]
    fn test_breadcrumbs_invalid_is_none() {
        assert!(breadcrumbs(&PageIntent::Invalid, "us", "https://example.com").is_none());
    }

    #[test]
    fn test_article_optional_fields() {
        let item = ContentItem {
            slug: "best-studios-2024".into(),
            title: "Best Studios 2024".into(),
            category: "web-design".into(),
            state: Some("texas".into()),
            city: None,
            summary: Some("A ranked list.".into()),
            body_html: None,
            published_at: None,
            updated_at: None,
        };
        let doc = article(&item, "us", "https://example.com/");
        assert_eq!(doc["headline"], "Best Studios 2024");
        assert_eq!(doc["description"], "A ranked list.");
        assert_eq!(
            doc["url"],
            "https://example.com/us/texas/web-design/best-studios-2024"
        );
        assert!(doc.get("datePublished").is_none());
    }

    #[test]
    fn test_item_list_name_prefers_category() {
        let scope = Scope::country("us")
            .with_state("texas")
            .with_category("web-design");
        let listing = ListingPage {
            items: vec![],
            page: 1,
            per_page: 20,
            total: 0,
        };
        let doc = item_list(&scope, &listing, "https://example.com");
        assert_eq!(doc["name"], "Web Design");
        assert_eq!(doc["numberOfItems"], 0);
    }
}

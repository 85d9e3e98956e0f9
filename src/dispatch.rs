//! Map a classified intent onto a content fetch and execute it.
//!
//! Each [`PageIntent`] tag maps 1:1 to a fetch plan: listings for the scoped
//! variants, an exact-location item lookup for the `Detail*` variants, and
//! not-found for `Invalid`. Resolution runs at most one upstream call per
//! request; an upstream 404 on an item plan resolves to
//! [`ResolvedPage::NotFound`] rather than an error.

use crate::content::{ContentItem, ContentSource, ListingPage, Scope};
use crate::error::Error;
use crate::route::PageIntent;
use serde::Serialize;
use tracing::debug;

/// The upstream call selected for an intent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "plan", rename_all = "snake_case")]
pub enum FetchPlan {
    /// Fetch one page of the listing for a scope.
    Listing { scope: Scope },
    /// Fetch a single item by exact location.
    Item { scope: Scope, slug: String },
    /// Nothing to fetch; answer not-found.
    NotFound,
}

/// Resolved page data, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum ResolvedPage {
    Listing { scope: Scope, listing: ListingPage },
    Detail { scope: Scope, item: ContentItem },
    NotFound,
}

/// Select the fetch plan for an intent under a country prefix.
pub fn plan(intent: &PageIntent, country: &str) -> FetchPlan {
    match intent {
        PageIntent::State { state } => FetchPlan::Listing {
            scope: Scope::country(country).with_state(state),
        },
        PageIntent::City { state, city } => FetchPlan::Listing {
            scope: Scope::country(country).with_state(state).with_city(city),
        },
        PageIntent::Category {
            state,
            city,
            category,
        } => FetchPlan::Listing {
            scope: Scope::country(country)
                .with_state(state)
                .with_city(city)
                .with_category(category),
        },
        PageIntent::DetailWithCity {
            state,
            city,
            category,
            slug,
        } => FetchPlan::Item {
            scope: Scope::country(country)
                .with_state(state)
                .with_city(city)
                .with_category(category),
            slug: slug.clone(),
        },
        PageIntent::DetailNoCity {
            state,
            category,
            slug,
        } => FetchPlan::Item {
            scope: Scope::country(country)
                .with_state(state)
                .with_category(category),
            slug: slug.clone(),
        },
        PageIntent::DetailCountryOnly { category, slug } => FetchPlan::Item {
            scope: Scope::country(country).with_category(category),
            slug: slug.clone(),
        },
        PageIntent::Invalid => FetchPlan::NotFound,
    }
}

/// Execute a fetch plan against a content source.
pub async fn resolve(
    source: &dyn ContentSource,
    plan: &FetchPlan,
    page: u32,
) -> Result<ResolvedPage, Error> {
    match plan {
        FetchPlan::Listing { scope } => {
            let listing = source.list(scope, page).await?;
            debug!(total = listing.total, "resolved listing");
            Ok(ResolvedPage::Listing {
                scope: scope.clone(),
                listing,
            })
        }
        FetchPlan::Item { scope, slug } => match source.item(scope, slug).await? {
            Some(item) => Ok(ResolvedPage::Detail {
                scope: scope.clone(),
                item,
            }),
            None => {
                debug!(slug, "item not found upstream");
                Ok(ResolvedPage::NotFound)
            }
        },
        FetchPlan::NotFound => Ok(ResolvedPage::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Stub source that serves a fixed item and an empty listing.
    struct StubSource {
        item: Option<ContentItem>,
    }

    #[async_trait]
    impl ContentSource for StubSource {
        async fn list(&self, _scope: &Scope, page: u32) -> Result<ListingPage, Error> {
            Ok(ListingPage {
                items: vec![],
                page,
                per_page: 20,
                total: 0,
            })
        }

        async fn item(&self, _scope: &Scope, slug: &str) -> Result<Option<ContentItem>, Error> {
            Ok(self.item.clone().filter(|i| i.slug == slug))
        }
    }

    fn sample_item(slug: &str) -> ContentItem {
        ContentItem {
            slug: slug.to_string(),
            title: "Sample".into(),
            category: "web-design".into(),
            state: Some("texas".into()),
            city: Some("austin".into()),
            summary: None,
            body_html: None,
            published_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_every_tag_maps_to_one_plan() {
        let intents = [
            PageIntent::State {
                state: "texas".into(),
            },
            PageIntent::City {
                state: "texas".into(),
                city: "austin".into(),
            },
            PageIntent::Category {
                state: "texas".into(),
                city: "austin".into(),
                category: "web-design".into(),
            },
        ];
        for intent in &intents {
            assert!(matches!(plan(intent, "us"), FetchPlan::Listing { .. }));
        }

        let detail = PageIntent::DetailNoCity {
            state: "texas".into(),
            category: "web-design".into(),
            slug: "guide-to-hiring".into(),
        };
        match plan(&detail, "us") {
            FetchPlan::Item { scope, slug } => {
                assert_eq!(scope.state.as_deref(), Some("texas"));
                assert_eq!(scope.city, None);
                assert_eq!(scope.category.as_deref(), Some("web-design"));
                assert_eq!(slug, "guide-to-hiring");
            }
            other => panic!("unexpected plan: {other:?}"),
        }

        assert_eq!(plan(&PageIntent::Invalid, "us"), FetchPlan::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_listing() {
        let source = StubSource { item: None };
        let fetch = plan(
            &PageIntent::State {
                state: "texas".into(),
            },
            "us",
        );
        let page = resolve(&source, &fetch, 1).await.unwrap();
        assert!(matches!(page, ResolvedPage::Listing { .. }));
    }

    #[tokio::test]
    async fn test_resolve_missing_item_is_not_found() {
        let source = StubSource { item: None };
        let fetch = plan(
            &PageIntent::DetailCountryOnly {
                category: "web-design".into(),
                slug: "nope".into(),
            },
            "us",
        );
        let page = resolve(&source, &fetch, 1).await.unwrap();
        assert_eq!(page, ResolvedPage::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_item_hit() {
        let source = StubSource {
            item: Some(sample_item("best-studios-2024")),
        };
        let fetch = plan(
            &PageIntent::DetailWithCity {
                state: "texas".into(),
                city: "austin".into(),
                category: "web-design".into(),
                slug: "best-studios-2024".into(),
            },
            "us",
        );
        match resolve(&source, &fetch, 1).await.unwrap() {
            ResolvedPage::Detail { item, .. } => assert_eq!(item.slug, "best-studios-2024"),
            other => panic!("unexpected page: {other:?}"),
        }
    }
}

//! Data models for the upstream content API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic/category narrowing applied to a listing fetch.
///
/// Narrowing is ordered: country, then state, then city, then category. A
/// city without a state does not occur; the classifier only produces scopes
/// along that chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Scope {
    /// Country-wide scope with no narrowing.
    pub fn country(country: &str) -> Self {
        Self {
            country: country.to_string(),
            state: None,
            city: None,
            category: None,
        }
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_string());
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Query-parameter pairs for this scope, in narrowing order.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![("country", self.country.as_str())];
        if let Some(state) = &self.state {
            pairs.push(("state", state));
        }
        if let Some(city) = &self.city {
            pairs.push(("city", city));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category));
        }
        pairs
    }
}

/// A single content item as served by the upstream API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub slug: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub body_html: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPage {
    pub items: Vec<ContentItem>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl ListingPage {
    /// Whether more pages follow this one.
    pub fn has_more(&self) -> bool {
        let seen = u64::from(self.page) * u64::from(self.per_page);
        seen < self.total
    }
}

//! The classified meaning of a URL segment sequence.

use serde::{Deserialize, Serialize};

/// What a sequence of path segments (after the `{country}` prefix) means.
///
/// Every variant other than [`PageIntent::Invalid`] carries the slugs needed
/// to scope a content fetch. A `Detail*` intent always carries exactly one
/// category and one slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageIntent {
    /// Listing page scoped to a state/region.
    State { state: String },
    /// Listing page scoped to a city.
    City { state: String, city: String },
    /// Listing page scoped to a category within a city.
    Category {
        state: String,
        city: String,
        category: String,
    },
    /// Single content item, city-scoped.
    DetailWithCity {
        state: String,
        city: String,
        category: String,
        slug: String,
    },
    /// Single content item, state-scoped only.
    DetailNoCity {
        state: String,
        category: String,
        slug: String,
    },
    /// Single content item with no state or city.
    DetailCountryOnly { category: String, slug: String },
    /// Unrecognized segment count. The caller answers with a not-found page.
    Invalid,
}

impl PageIntent {
    /// Short tag name, matching the serialized `type` field.
    pub fn tag(&self) -> &'static str {
        match self {
            PageIntent::State { .. } => "state",
            PageIntent::City { .. } => "city",
            PageIntent::Category { .. } => "category",
            PageIntent::DetailWithCity { .. } => "detail_with_city",
            PageIntent::DetailNoCity { .. } => "detail_no_city",
            PageIntent::DetailCountryOnly { .. } => "detail_country_only",
            PageIntent::Invalid => "invalid",
        }
    }

    /// Whether this intent names a single content item rather than a listing.
    pub fn is_detail(&self) -> bool {
        matches!(
            self,
            PageIntent::DetailWithCity { .. }
                | PageIntent::DetailNoCity { .. }
                | PageIntent::DetailCountryOnly { .. }
        )
    }

    /// The state slug, for intents that carry one.
    pub fn state(&self) -> Option<&str> {
        match self {
            PageIntent::State { state }
            | PageIntent::City { state, .. }
            | PageIntent::Category { state, .. }
            | PageIntent::DetailWithCity { state, .. }
            | PageIntent::DetailNoCity { state, .. } => Some(state),
            _ => None,
        }
    }

    /// The city slug, for intents that carry one.
    pub fn city(&self) -> Option<&str> {
        match self {
            PageIntent::City { city, .. }
            | PageIntent::Category { city, .. }
            | PageIntent::DetailWithCity { city, .. } => Some(city),
            _ => None,
        }
    }

    /// The category slug, for intents that carry one.
    pub fn category(&self) -> Option<&str> {
        match self {
            PageIntent::Category { category, .. }
            | PageIntent::DetailWithCity { category, .. }
            | PageIntent::DetailNoCity { category, .. }
            | PageIntent::DetailCountryOnly { category, .. } => Some(category),
            _ => None,
        }
    }

    /// The content slug, for detail intents.
    pub fn slug(&self) -> Option<&str> {
        match self {
            PageIntent::DetailWithCity { slug, .. }
            | PageIntent::DetailNoCity { slug, .. }
            | PageIntent::DetailCountryOnly { slug, .. } => Some(slug),
            _ => None,
        }
    }

    /// Populated path fields in canonical order (state, city, category, slug).
    pub fn fields(&self) -> Vec<&str> {
        match self {
            PageIntent::State { state } => vec![state.as_str()],
            PageIntent::City { state, city } => vec![state.as_str(), city.as_str()],
            PageIntent::Category {
                state,
                city,
                category,
            } => vec![state.as_str(), city.as_str(), category.as_str()],
            PageIntent::DetailWithCity {
                state,
                city,
                category,
                slug,
            } => vec![
                state.as_str(),
                city.as_str(),
                category.as_str(),
                slug.as_str(),
            ],
            PageIntent::DetailNoCity {
                state,
                category,
                slug,
            } => vec![state.as_str(), category.as_str(), slug.as_str()],
            PageIntent::DetailCountryOnly { category, slug } => {
                vec![category.as_str(), slug.as_str()]
            }
            PageIntent::Invalid => vec![],
        }
    }

    /// Reconstruct the canonical URL path for this intent under a country
    /// prefix, e.g. `/us/texas/austin/web-design-agency`.
    ///
    /// Returns `None` for [`PageIntent::Invalid`]. Re-splitting the result and
    /// re-classifying reproduces an intent of the same tag, except for the two
    /// documented ambiguous shapes (equal two-segment paths and equal trailing
    /// pairs at length four).
    pub fn canonical_path(&self, country: &str) -> Option<String> {
        if matches!(self, PageIntent::Invalid) {
            return None;
        }
        let mut path = format!("/{country}");
        for field in self.fields() {
            path.push('/');
            path.push_str(field);
        }
        Some(path)
    }
}

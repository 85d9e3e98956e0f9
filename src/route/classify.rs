//! Classify URL path segments into a [`PageIntent`].
//!
//! The grammar is ambiguous by construction: a three-segment path can be a
//! category listing (`/texas/austin/web-design-agency`) or a state-scoped
//! article (`/texas/web-design/best-agencies-for-startups-in-2024`), and only
//! the shape of the last slug tells them apart. Classification is therefore a
//! best-effort heuristic biased toward listings at length 3 and detail pages
//! at length 4. It is pure, total, and never panics: every input maps to
//! exactly one intent, with out-of-range segment counts falling through to
//! `Invalid`.

use crate::route::intent::PageIntent;
use crate::route::profile::RouteProfile;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Suffixes that mark a slug as a category rather than a content item.
const CATEGORY_SUFFIXES: &[&str] = &[
    "-agency",
    "-services",
    "-development",
    "-automation",
    "-marketing",
    "-design",
    "-seo",
    "-consulting",
    "-solutions",
    "-platform",
    "-software",
    "-tools",
    "-systems",
];

/// Leading words that mark a slug as editorial content, shared by every
/// family. Families append their own words via [`RouteProfile`].
const CONTENT_PREFIXES: &[&str] = &[
    "best",
    "top",
    "how-to",
    "guide",
    "complete",
    "ultimate",
    "step-by-step",
    "comprehensive",
];

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{4}\b").unwrap());

/// Long multi-word slugs read as article titles, not category names.
const LONG_SLUG_CHARS: usize = 30;
const LONG_SLUG_WORDS: usize = 5;

/// Whether a slug is shaped like a category name.
///
/// Matches a fixed suffix allow-list; category-shaped slugs never
/// simultaneously qualify as post slugs.
pub fn looks_like_category_slug(slug: &str) -> bool {
    CATEGORY_SUFFIXES.iter().any(|s| slug.ends_with(s))
}

/// Whether a slug is shaped like a content-item (post) slug for the given
/// route family.
///
/// True when the slug contains a 4-digit year, starts with a content-style
/// word, or is long and multi-word without being category-shaped.
pub fn looks_like_post_slug(slug: &str, profile: &RouteProfile) -> bool {
    if YEAR_RE.is_match(slug) {
        return true;
    }
    if has_content_prefix(slug, CONTENT_PREFIXES) || has_content_prefix(slug, profile.extra_prefixes)
    {
        return true;
    }
    slug.len() > LONG_SLUG_CHARS
        && slug.split('-').count() > LONG_SLUG_WORDS
        && !looks_like_category_slug(slug)
}

/// Whether `slug` starts with one of `prefixes` on a hyphen boundary.
fn has_content_prefix(slug: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| {
        slug == *p || (slug.starts_with(p) && slug.as_bytes().get(p.len()) == Some(&b'-'))
    })
}

/// Classify the path segments following the `{country}` prefix.
///
/// Deterministic, no side effects, no I/O. Decisions are surfaced as
/// `tracing::debug!` events for troubleshooting misrouted URLs.
pub fn classify(segments: &[&str], profile: &RouteProfile) -> PageIntent {
    let intent = match segments {
        [] => PageIntent::Invalid,
        [state] => PageIntent::State {
            state: (*state).to_string(),
        },
        [a, b] => classify_pair(a, b),
        [state, mid, last] => classify_triple(state, mid, last, profile),
        [a, b, c, d] => classify_quad(a, b, c, d, profile),
        _ => PageIntent::Invalid,
    };
    debug!(
        family = profile.family.path_prefix(),
        count = segments.len(),
        intent = intent.tag(),
        "classified segments"
    );
    intent
}

fn classify_pair(a: &str, b: &str) -> PageIntent {
    if collapse_duplicate_country_pair(a, b) {
        // Upstream link generation occasionally emits `/x/x` where category
        // and slug collide. Treated as a country-scoped detail page.
        return PageIntent::DetailCountryOnly {
            category: a.to_string(),
            slug: b.to_string(),
        };
    }
    PageIntent::City {
        state: a.to_string(),
        city: b.to_string(),
    }
}

fn classify_triple(state: &str, mid: &str, last: &str, profile: &RouteProfile) -> PageIntent {
    // near-me: a duplicated tail is always a detail page, before any
    // slug-shape heuristic runs.
    if profile.equal_tail_forces_detail && mid == last {
        debug!(family = profile.family.path_prefix(), "equal tail forces detail");
        return PageIntent::DetailNoCity {
            state: state.to_string(),
            category: mid.to_string(),
            slug: last.to_string(),
        };
    }

    let category_shaped = looks_like_category_slug(last);
    let post_shaped = looks_like_post_slug(last, profile);
    debug!(last, category_shaped, post_shaped, "length-3 disambiguation");

    if post_shaped && !category_shaped {
        PageIntent::DetailNoCity {
            state: state.to_string(),
            category: mid.to_string(),
            slug: last.to_string(),
        }
    } else {
        // Ambiguous shapes default to the listing interpretation.
        PageIntent::Category {
            state: state.to_string(),
            city: mid.to_string(),
            category: last.to_string(),
        }
    }
}

fn classify_quad(a: &str, b: &str, c: &str, d: &str, profile: &RouteProfile) -> PageIntent {
    if collapse_duplicate_state(a, b) {
        // `/texas/texas/austin/web-design` — the state segment was emitted
        // twice upstream. Collapses to a category listing regardless of the
        // shape of the last segment.
        debug!(state = a, "duplicate state collapse");
        return PageIntent::Category {
            state: a.to_string(),
            city: c.to_string(),
            category: d.to_string(),
        };
    }

    if profile.keep_equal_tail_detail && c == d {
        // near-me keeps `/state/city/x/x` as a detail page, asymmetric with
        // the duplicate-state collapse above.
        debug!(family = profile.family.path_prefix(), "equal tail kept as detail");
        return PageIntent::DetailWithCity {
            state: a.to_string(),
            city: b.to_string(),
            category: c.to_string(),
            slug: d.to_string(),
        };
    }

    let category_shaped = looks_like_category_slug(d);
    let post_shaped = looks_like_post_slug(d, profile);
    debug!(last = d, category_shaped, post_shaped, "length-4 disambiguation");

    if category_shaped && !post_shaped && c == d {
        // Duplicate category tail with a category-shaped slug collapses to
        // the listing interpretation.
        return PageIntent::Category {
            state: a.to_string(),
            city: b.to_string(),
            category: d.to_string(),
        };
    }

    // Full-length paths default to the detail interpretation.
    PageIntent::DetailWithCity {
        state: a.to_string(),
        city: b.to_string(),
        category: c.to_string(),
        slug: d.to_string(),
    }
}

/// `/x/x` at length 2: category and slug collide. An artifact of upstream
/// link generation, not deliberate URL design.
fn collapse_duplicate_country_pair(a: &str, b: &str) -> bool {
    a == b
}

/// `/x/x/...` at length 4: the state segment was duplicated upstream.
fn collapse_duplicate_state(a: &str, b: &str) -> bool {
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::profile::RouteFamily;

    fn best() -> RouteProfile {
        RouteProfile::for_family(RouteFamily::Best)
    }

    fn compare() -> RouteProfile {
        RouteProfile::for_family(RouteFamily::Compare)
    }

    fn near_me() -> RouteProfile {
        RouteProfile::for_family(RouteFamily::NearMe)
    }

    #[test]
    fn test_empty_and_overlong_are_invalid() {
        assert_eq!(classify(&[], &best()), PageIntent::Invalid);
        assert_eq!(
            classify(&["a", "b", "c", "d", "e"], &best()),
            PageIntent::Invalid
        );
        assert_eq!(
            classify(&["a", "b", "c", "d", "e", "f"], &compare()),
            PageIntent::Invalid
        );
    }

    #[test]
    fn test_single_segment_is_state() {
        assert_eq!(
            classify(&["texas"], &best()),
            PageIntent::State {
                state: "texas".into()
            }
        );
    }

    #[test]
    fn test_two_distinct_segments_are_city() {
        assert_eq!(
            classify(&["texas", "austin"], &best()),
            PageIntent::City {
                state: "texas".into(),
                city: "austin".into()
            }
        );
    }

    #[test]
    fn test_two_equal_segments_are_country_detail() {
        assert_eq!(
            classify(&["us-west", "us-west"], &best()),
            PageIntent::DetailCountryOnly {
                category: "us-west".into(),
                slug: "us-west".into()
            }
        );
    }

    #[test]
    fn test_category_suffix_wins_at_length_three() {
        assert_eq!(
            classify(&["texas", "austin", "web-design-agency"], &best()),
            PageIntent::Category {
                state: "texas".into(),
                city: "austin".into(),
                category: "web-design-agency".into()
            }
        );
    }

    #[test]
    fn test_year_slug_is_detail_at_length_three() {
        assert_eq!(
            classify(
                &["texas", "web-design", "best-agencies-for-startups-in-2024"],
                &best()
            ),
            PageIntent::DetailNoCity {
                state: "texas".into(),
                category: "web-design".into(),
                slug: "best-agencies-for-startups-in-2024".into()
            }
        );
    }

    #[test]
    fn test_content_prefix_is_detail_at_length_three() {
        assert_eq!(
            classify(&["texas", "web-design", "how-to-pick-a-vendor"], &best()),
            PageIntent::DetailNoCity {
                state: "texas".into(),
                category: "web-design".into(),
                slug: "how-to-pick-a-vendor".into()
            }
        );
    }

    #[test]
    fn test_prefix_requires_hyphen_boundary() {
        // "topaz" must not match the "top" prefix.
        assert!(!looks_like_post_slug("topaz-jewelers", &best()));
        assert!(looks_like_post_slug("top-agencies", &best()));
        assert!(looks_like_post_slug("guide", &best()));
    }

    #[test]
    fn test_ambiguous_length_three_defaults_to_category() {
        assert_eq!(
            classify(&["texas", "austin", "plumbers"], &best()),
            PageIntent::Category {
                state: "texas".into(),
                city: "austin".into(),
                category: "plumbers".into()
            }
        );
    }

    #[test]
    fn test_category_shape_beats_post_shape() {
        // Long, multi-word, but ends with a category suffix: the category
        // interpretation wins.
        let slug = "enterprise-cloud-data-migration-consulting";
        assert!(looks_like_category_slug(slug));
        assert!(!looks_like_post_slug(slug, &best()));
        assert_eq!(
            classify(&["texas", "austin", slug], &best()),
            PageIntent::Category {
                state: "texas".into(),
                city: "austin".into(),
                category: slug.into()
            }
        );
    }

    #[test]
    fn test_long_multiword_slug_is_detail() {
        let slug = "what-every-founder-should-know-before-hiring";
        assert!(slug.len() > 30 && slug.split('-').count() > 5);
        assert_eq!(
            classify(&["texas", "web-design", slug], &best()),
            PageIntent::DetailNoCity {
                state: "texas".into(),
                category: "web-design".into(),
                slug: slug.into()
            }
        );
    }

    #[test]
    fn test_compare_prefixes_only_apply_to_compare() {
        let slug = "vs-wordpress";
        assert_eq!(
            classify(&["texas", "cms", slug], &compare()),
            PageIntent::DetailNoCity {
                state: "texas".into(),
                category: "cms".into(),
                slug: slug.into()
            }
        );
        // Under `best` the same slug has no qualifying shape.
        assert_eq!(
            classify(&["texas", "cms", slug], &best()),
            PageIntent::Category {
                state: "texas".into(),
                city: "cms".into(),
                category: slug.into()
            }
        );
    }

    #[test]
    fn test_near_me_equal_tail_forces_detail_at_length_three() {
        assert_eq!(
            classify(&["texas", "plumbers", "plumbers"], &near_me()),
            PageIntent::DetailNoCity {
                state: "texas".into(),
                category: "plumbers".into(),
                slug: "plumbers".into()
            }
        );
        // best/compare run the normal heuristics instead.
        assert_eq!(
            classify(&["texas", "plumbers", "plumbers"], &best()),
            PageIntent::Category {
                state: "texas".into(),
                city: "plumbers".into(),
                category: "plumbers".into()
            }
        );
    }

    #[test]
    fn test_duplicate_state_collapses_at_length_four() {
        // Regardless of the shape of the fourth segment.
        for last in ["web-design", "web-design-agency", "best-agencies-2024"] {
            assert_eq!(
                classify(&["texas", "texas", "austin", last], &best()),
                PageIntent::Category {
                    state: "texas".into(),
                    city: "austin".into(),
                    category: last.into()
                }
            );
        }
    }

    #[test]
    fn test_length_four_defaults_to_detail() {
        assert_eq!(
            classify(
                &["texas", "austin", "web-design", "best-studios-2024"],
                &best()
            ),
            PageIntent::DetailWithCity {
                state: "texas".into(),
                city: "austin".into(),
                category: "web-design".into(),
                slug: "best-studios-2024".into()
            }
        );
        // Even a shapeless slug defaults to detail at full length.
        assert_eq!(
            classify(&["texas", "austin", "web-design", "acme"], &best()),
            PageIntent::DetailWithCity {
                state: "texas".into(),
                city: "austin".into(),
                category: "web-design".into(),
                slug: "acme".into()
            }
        );
    }

    #[test]
    fn test_duplicate_category_tail_collapses_for_best() {
        assert_eq!(
            classify(
                &["texas", "austin", "web-design-agency", "web-design-agency"],
                &best()
            ),
            PageIntent::Category {
                state: "texas".into(),
                city: "austin".into(),
                category: "web-design-agency".into()
            }
        );
        // A non-category-shaped duplicate tail stays a detail page.
        assert_eq!(
            classify(&["texas", "austin", "plumbers", "plumbers"], &best()),
            PageIntent::DetailWithCity {
                state: "texas".into(),
                city: "austin".into(),
                category: "plumbers".into(),
                slug: "plumbers".into()
            }
        );
    }

    #[test]
    fn test_near_me_keeps_equal_tail_detail_at_length_four() {
        // Asymmetric with the duplicate-state collapse: near-me keeps the
        // detail interpretation even for category-shaped duplicate tails.
        assert_eq!(
            classify(
                &["texas", "austin", "web-design-agency", "web-design-agency"],
                &near_me()
            ),
            PageIntent::DetailWithCity {
                state: "texas".into(),
                city: "austin".into(),
                category: "web-design-agency".into(),
                slug: "web-design-agency".into()
            }
        );
    }

    #[test]
    fn test_classification_is_pure() {
        let segments = ["texas", "austin", "web-design", "best-studios-2024"];
        let first = classify(&segments, &best());
        let second = classify(&segments, &best());
        assert_eq!(first, second);
    }

    #[test]
    fn test_round_trip_preserves_tag() {
        let profile = best();
        let cases: Vec<Vec<&str>> = vec![
            vec!["texas"],
            vec!["texas", "austin"],
            vec!["texas", "austin", "web-design-agency"],
            vec!["texas", "web-design", "best-agencies-for-startups-in-2024"],
            vec!["texas", "austin", "web-design", "best-studios-2024"],
        ];
        for segments in cases {
            let intent = classify(&segments, &profile);
            let path = intent.canonical_path("us").unwrap();
            let parts: Vec<&str> = path.trim_start_matches('/').split('/').collect();
            // Drop the country prefix before re-classifying.
            let reclassified = classify(&parts[1..], &profile);
            assert_eq!(intent.tag(), reclassified.tag(), "path {path}");
        }
    }
}

//! Per-family classifier configuration.
//!
//! The upstream site renders the same geographic URL grammar under several
//! route families (`/best/...`, `/compare/...`, `/near-me/...`, and the
//! blog/top/faq/services families that follow the `best` pattern). The
//! families differ only in which content-style prefixes mark a detail slug
//! and in how duplicated trailing segments are treated, so one parameterized
//! classifier plus a small profile per family replaces what would otherwise
//! be near-duplicate classifiers.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The route families served by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RouteFamily {
    Best,
    Compare,
    NearMe,
    Blog,
    Top,
    Faq,
    Services,
}

impl RouteFamily {
    /// URL prefix of this family, e.g. `best` in `/us/best/texas/...`.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            RouteFamily::Best => "best",
            RouteFamily::Compare => "compare",
            RouteFamily::NearMe => "near-me",
            RouteFamily::Blog => "blog",
            RouteFamily::Top => "top",
            RouteFamily::Faq => "faq",
            RouteFamily::Services => "services",
        }
    }
}

/// Comparison words the `compare` family adds to the content-prefix list.
const COMPARE_PREFIXES: &[&str] = &["vs", "alternatives", "comparison", "compare"];

/// Action words the `near-me` family adds to the content-prefix list.
const NEAR_ME_PREFIXES: &[&str] = &["build", "create", "make"];

/// How a single route family tunes the shared classifier.
#[derive(Debug, Clone)]
pub struct RouteProfile {
    pub family: RouteFamily,
    /// Family-specific additions to the base content-prefix list.
    pub extra_prefixes: &'static [&'static str],
    /// Length-3 paths with equal last two segments classify as a detail page
    /// before any slug-shape heuristic runs (`near-me` only).
    pub equal_tail_forces_detail: bool,
    /// Length-4 paths with equal last two segments stay a detail page instead
    /// of collapsing to a category listing (`near-me` only).
    pub keep_equal_tail_detail: bool,
}

impl RouteProfile {
    /// The profile for a route family.
    pub fn for_family(family: RouteFamily) -> Self {
        match family {
            RouteFamily::Compare => Self {
                family,
                extra_prefixes: COMPARE_PREFIXES,
                equal_tail_forces_detail: false,
                keep_equal_tail_detail: false,
            },
            RouteFamily::NearMe => Self {
                family,
                extra_prefixes: NEAR_ME_PREFIXES,
                equal_tail_forces_detail: true,
                keep_equal_tail_detail: true,
            },
            // best, blog, top, faq, services share the base behavior.
            _ => Self {
                family,
                extra_prefixes: &[],
                equal_tail_forces_detail: false,
                keep_equal_tail_detail: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_adds_comparison_words() {
        let profile = RouteProfile::for_family(RouteFamily::Compare);
        assert!(profile.extra_prefixes.contains(&"vs"));
        assert!(!profile.equal_tail_forces_detail);
    }

    #[test]
    fn test_near_me_duplicate_handling() {
        let profile = RouteProfile::for_family(RouteFamily::NearMe);
        assert!(profile.equal_tail_forces_detail);
        assert!(profile.keep_equal_tail_detail);
        assert!(profile.extra_prefixes.contains(&"build"));
    }

    #[test]
    fn test_base_families_share_behavior() {
        for family in [
            RouteFamily::Best,
            RouteFamily::Blog,
            RouteFamily::Top,
            RouteFamily::Faq,
            RouteFamily::Services,
        ] {
            let profile = RouteProfile::for_family(family);
            assert!(profile.extra_prefixes.is_empty());
            assert!(!profile.equal_tail_forces_detail);
            assert!(!profile.keep_equal_tail_detail);
        }
    }

    #[test]
    fn test_family_parses_kebab_case() {
        let family: RouteFamily = serde_json::from_str("\"near-me\"").unwrap();
        assert_eq!(family, RouteFamily::NearMe);
        assert_eq!(family.path_prefix(), "near-me");
    }
}

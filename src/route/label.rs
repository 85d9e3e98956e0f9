//! Slug to human-readable label formatting.

/// Format a slug as a title: split on hyphens, capitalize each word.
///
/// `web-design-agency` becomes `Web Design Agency`. Short connective words
/// are not special-cased; the upstream site capitalizes every word.
pub fn humanize(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_basic() {
        assert_eq!(humanize("web-design-agency"), "Web Design Agency");
        assert_eq!(humanize("austin"), "Austin");
    }

    #[test]
    fn test_humanize_collapses_empty_words() {
        assert_eq!(humanize("web--design"), "Web Design");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_humanize_keeps_digits() {
        assert_eq!(humanize("best-agencies-2024"), "Best Agencies 2024");
    }
}

//! Classify a URL path without fetching anything.

use crate::cli::output::Styled;
use anyhow::{bail, Result};
use pagesense::route::{classify, label, PageIntent, RouteFamily, RouteProfile};

/// Split a CLI path argument into country + segments.
///
/// Accepts `us/texas/austin` or `/us/texas/austin`; the first segment is the
/// country prefix.
pub fn split_path(path: &str) -> Result<(String, Vec<String>)> {
    let mut parts = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect::<Vec<_>>();
    if parts.is_empty() {
        bail!("path must start with a country segment, e.g. us/texas/austin");
    }
    let country = parts.remove(0);
    Ok((country, parts))
}

/// Run `pagesense classify PATH`.
pub fn run(path: &str, family: RouteFamily, json: bool) -> Result<()> {
    let (country, segments) = split_path(path)?;
    let refs: Vec<&str> = segments.iter().map(String::as_str).collect();
    let profile = RouteProfile::for_family(family);
    let intent = classify(&refs, &profile);

    if json {
        let doc = serde_json::json!({
            "country": country,
            "family": family.path_prefix(),
            "segments": segments,
            "intent": intent,
            "canonical_path": intent.canonical_path(&country),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let s = Styled::new();
    if intent == PageIntent::Invalid {
        println!(
            "  {} {} is not a recognized route shape",
            s.fail_sym(),
            s.bold(path)
        );
        return Ok(());
    }

    println!("  {} {}", s.ok_sym(), s.bold(intent.tag()));
    for (name, value) in [
        ("state", intent.state()),
        ("city", intent.city()),
        ("category", intent.category()),
        ("slug", intent.slug()),
    ] {
        if let Some(value) = value {
            println!(
                "    {name:<9} {}  {}",
                s.cyan(value),
                s.dim(&label::humanize(value))
            );
        }
    }
    if let Some(canonical) = intent.canonical_path(&country) {
        println!("    {} {}", s.dim("canonical"), canonical);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path() {
        let (country, segments) = split_path("us/texas/austin").unwrap();
        assert_eq!(country, "us");
        assert_eq!(segments, vec!["texas", "austin"]);

        let (country, segments) = split_path("/uk/london").unwrap();
        assert_eq!(country, "uk");
        assert_eq!(segments, vec!["london"]);
    }

    #[test]
    fn test_split_path_rejects_empty() {
        assert!(split_path("").is_err());
        assert!(split_path("///").is_err());
    }
}

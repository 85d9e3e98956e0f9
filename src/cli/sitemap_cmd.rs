//! Emit sitemap XML for a list of route paths.
//!
//! Paths are read one per line from stdin (e.g. `us/texas/austin`), classified
//! to confirm they are routable, and written as a `<urlset>` document on
//! stdout. Paths that classify as `Invalid` are skipped with a warning.

use crate::cli::classify_cmd::split_path;
use crate::cli::output::Styled;
use anyhow::Result;
use chrono::Utc;
use pagesense::route::{classify, PageIntent, RouteFamily, RouteProfile};
use pagesense::seo::sitemap::{write_sitemap, ChangeFreq, SitemapEntry};
use std::io::{BufRead, Write};

/// Run `pagesense sitemap --base-url URL`.
pub fn run(family: RouteFamily, base_url: &str) -> Result<()> {
    let stdin = std::io::stdin();
    let paths: Vec<String> = stdin
        .lock()
        .lines()
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();

    let (entries, skipped) = build_entries(&paths, family, base_url);

    let s = Styled::new();
    for path in &skipped {
        eprintln!("  {} skipped unroutable path: {path}", s.warn_sym());
    }
    eprintln!("  {} {} urls", s.ok_sym(), entries.len());

    let xml = write_sitemap(&entries)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(xml.as_bytes())?;
    writeln!(stdout)?;
    Ok(())
}

/// Classify each path; routable ones become sitemap entries, the rest are
/// returned as skipped.
pub fn build_entries(
    paths: &[String],
    family: RouteFamily,
    base_url: &str,
) -> (Vec<SitemapEntry>, Vec<String>) {
    let profile = RouteProfile::for_family(family);
    let today = Utc::now().date_naive();
    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for path in paths {
        let Ok((country, segments)) = split_path(path) else {
            skipped.push(path.clone());
            continue;
        };
        let refs: Vec<&str> = segments.iter().map(String::as_str).collect();
        let intent = classify(&refs, &profile);
        let Some(canonical) = intent.canonical_path(&country) else {
            skipped.push(path.clone());
            continue;
        };

        let mut entry = SitemapEntry::new(&format!(
            "{}{}",
            base_url.trim_end_matches('/'),
            canonical
        ));
        entry.lastmod = Some(today);
        // Listings churn with inventory; detail pages are edited rarely.
        entry.changefreq = Some(if intent.is_detail() {
            ChangeFreq::Monthly
        } else {
            ChangeFreq::Daily
        });
        entry.priority = Some(priority_for(&intent));
        entries.push(entry);
    }
    (entries, skipped)
}

fn priority_for(intent: &PageIntent) -> f32 {
    match intent {
        PageIntent::State { .. } => 0.8,
        PageIntent::City { .. } => 0.7,
        PageIntent::Category { .. } => 0.6,
        _ => 0.5,
    }
}

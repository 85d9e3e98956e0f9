//! Classify a path and resolve it against the content API.

use crate::cli::classify_cmd::split_path;
use crate::cli::output::Styled;
use anyhow::{Context, Result};
use pagesense::content::ContentClient;
use pagesense::dispatch::{self, ResolvedPage};
use pagesense::route::{classify, RouteFamily, RouteProfile};

/// Run `pagesense resolve PATH --api URL`.
pub async fn run(path: &str, family: RouteFamily, api: &str, page: u32, json: bool) -> Result<()> {
    let (country, segments) = split_path(path)?;
    let refs: Vec<&str> = segments.iter().map(String::as_str).collect();
    let profile = RouteProfile::for_family(family);
    let intent = classify(&refs, &profile);

    let client = ContentClient::new(api).context("invalid content API base url")?;
    let plan = dispatch::plan(&intent, &country);
    let resolved = dispatch::resolve(&client, &plan, page)
        .await
        .context("content API request failed")?;

    if json {
        let doc = serde_json::json!({
            "intent": intent,
            "plan": plan,
            "data": resolved,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let s = Styled::new();
    match &resolved {
        ResolvedPage::Listing { scope, listing } => {
            println!(
                "  {} listing for {} ({} items, page {}/{})",
                s.ok_sym(),
                s.bold(&scope_label(scope)),
                listing.total,
                listing.page,
                total_pages(listing.total, listing.per_page),
            );
            for item in &listing.items {
                println!("    {} {}", s.dim("-"), item.title);
            }
        }
        ResolvedPage::Detail { item, .. } => {
            println!("  {} {}", s.ok_sym(), s.bold(&item.title));
            if let Some(summary) = &item.summary {
                println!("    {}", s.dim(summary));
            }
        }
        ResolvedPage::NotFound => {
            println!("  {} no content for {}", s.fail_sym(), s.bold(path));
        }
    }
    Ok(())
}

fn scope_label(scope: &pagesense::content::Scope) -> String {
    let mut parts = vec![scope.country.as_str()];
    parts.extend(scope.state.as_deref());
    parts.extend(scope.city.as_deref());
    parts.extend(scope.category.as_deref());
    parts.join("/")
}

fn total_pages(total: u64, per_page: u32) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(u64::from(per_page))
}

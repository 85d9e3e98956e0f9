//! Pagesense binary: classify, resolve, serve, sitemap.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pagesense::route::RouteFamily;

#[derive(Parser)]
#[command(
    name = "pagesense",
    version,
    about = "Route intent engine for programmatic-SEO sites"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a URL path without fetching anything.
    Classify {
        /// Path including the country prefix, e.g. us/texas/austin.
        path: String,
        #[arg(long, value_enum, default_value_t = RouteFamily::Best)]
        family: RouteFamily,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Classify a path and resolve it against the content API.
    Resolve {
        /// Path including the country prefix, e.g. us/texas/austin.
        path: String,
        #[arg(long, value_enum, default_value_t = RouteFamily::Best)]
        family: RouteFamily,
        /// Content API base URL.
        #[arg(long, env = "PAGESENSE_API")]
        api: String,
        /// Listing page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Run the HTTP gateway.
    Serve {
        /// Content API base URL.
        #[arg(long, env = "PAGESENSE_API")]
        api: String,
        #[arg(long, env = "PAGESENSE_PORT", default_value_t = 8080)]
        port: u16,
        /// Public site origin used for canonical URLs in JSON-LD.
        #[arg(long, env = "PAGESENSE_BASE_URL", default_value = "https://example.com")]
        base_url: String,
    },
    /// Read route paths from stdin and emit sitemap XML on stdout.
    Sitemap {
        #[arg(long, value_enum, default_value_t = RouteFamily::Best)]
        family: RouteFamily,
        /// Public site origin prepended to each canonical path.
        #[arg(long, env = "PAGESENSE_BASE_URL", default_value = "https://example.com")]
        base_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pagesense=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    match args.command {
        Command::Classify { path, family, json } => cli::classify_cmd::run(&path, family, json),
        Command::Resolve {
            path,
            family,
            api,
            page,
            json,
        } => cli::resolve_cmd::run(&path, family, &api, page, json).await,
        Command::Serve {
            api,
            port,
            base_url,
        } => cli::serve_cmd::run(&api, port, &base_url).await,
        Command::Sitemap { family, base_url } => cli::sitemap_cmd::run(family, &base_url),
    }
}

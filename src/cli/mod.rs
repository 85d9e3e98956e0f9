//! CLI subcommand implementations for the pagesense binary.

pub mod classify_cmd;
pub mod output;
pub mod resolve_cmd;
pub mod serve_cmd;
pub mod sitemap_cmd;

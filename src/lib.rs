//! Pagesense — route intent engine for programmatic-SEO sites.
//!
//! Given the path segments of an incoming URL (after the `{country}` prefix),
//! Pagesense classifies the request into a [`route::PageIntent`], maps the
//! intent onto a fetch plan against an upstream content API, resolves the plan
//! into renderable page data, and emits the SEO surfaces (JSON-LD structured
//! data, sitemap XML) such a site serves.

pub mod content;
pub mod dispatch;
pub mod error;
pub mod route;
pub mod seo;
pub mod server;

pub use error::Error;

//! Upstream content API: client, source trait, and data models.

pub mod client;
pub mod types;

pub use client::{ContentClient, ContentSource};
pub use types::{ContentItem, ListingPage, Scope};

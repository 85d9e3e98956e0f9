//! Route engine: segment classification, per-family profiles, label formatting.

pub mod classify;
pub mod intent;
pub mod label;
pub mod profile;

pub use classify::{classify, looks_like_category_slug, looks_like_post_slug};
pub use intent::PageIntent;
pub use profile::{RouteFamily, RouteProfile};

//! Link engine.
//!
//! Pure functions for path relativization and reference tag synthesis.
//! No side effects, no shared state.
//!
//! - [`relative`]: minimal relative path between absolute slash paths
//! - [`tag`]: compatibility rules and reference tag rendering
//! - [`batch`]: fold over a batch of link requests
//! - [`strip`]: removal of stale link constructs from document text

pub mod batch;
pub mod relative;
pub mod strip;
pub mod tag;

pub use batch::{LinkRequest, synthesize_tags, tags_from_urls};
pub use relative::relative_path;
pub use strip::strip_links;
pub use tag::render_tag;

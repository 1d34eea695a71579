//! Resource abstraction for the Heroku API.
//!
//! This module defines what the generic client needs to know about an API
//! entity, and how paths are derived from it:
//!
//! - **[`Resource`] trait**: reports the canonical path of an instance
//! - **[`collection_path`]**: strips an instance path down to its collection
//! - **[`list_path`]**: derives the collection path from a type alone
//! - **[`join_path`]**: builds an escaped path from raw segments
//!
//! Concrete entities (apps, dynos, releases) implement [`Resource`] and are
//! then driven through [`RestClient`](crate::RestClient).

mod path;
mod resource;

pub use path::{collection_path, join_path, list_path};
pub use resource::Resource;

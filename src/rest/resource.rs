//! The [`Resource`] trait implemented by every API entity.
//!
//! A resource is any value that can report the URL path of its canonical
//! instance. Everything else the client needs (the collection path for
//! creation and listing) is derived from that one path.
//!
//! # Implementing a Resource
//!
//! ```rust
//! use heroku_api::Resource;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct App {
//!     #[serde(default, skip_serializing_if = "String::is_empty")]
//!     id: String,
//!     #[serde(default, skip_serializing_if = "String::is_empty")]
//!     name: String,
//! }
//!
//! impl Resource for App {
//!     fn path(&self) -> String {
//!         let key = if self.id.is_empty() { &self.name } else { &self.id };
//!         heroku_api::rest::join_path(&["apps", key.as_str()])
//!     }
//! }
//!
//! let app = App { id: String::new(), name: "myapp".to_string() };
//! assert_eq!(app.path(), "/apps/myapp");
//! ```

/// An API entity addressable by a URL path.
///
/// The contract for `path`:
///
/// - It is rooted at `/`.
/// - Its final segment is the identity of this instance (id, or a name when
///   no id is known yet).
/// - Everything up to and including the last `/` is the collection path.
/// - It may be called on a default value with no identity set. That call
///   must still return a path whose collection part is correct, because
///   listing relies on it.
///
/// `path` must be pure: it is called before every operation and its result
/// is not cached.
pub trait Resource {
    /// Returns the canonical path of this instance, e.g. `/apps/<id>`.
    fn path(&self) -> String;
}

impl<R: Resource + ?Sized> Resource for &R {
    fn path(&self) -> String {
        (**self).path()
    }
}

impl<R: Resource + ?Sized> Resource for &mut R {
    fn path(&self) -> String {
        (**self).path()
    }
}

impl<R: Resource + ?Sized> Resource for Box<R> {
    fn path(&self) -> String {
        (**self).path()
    }
}

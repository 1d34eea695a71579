//! Path derivation for resources.
//!
//! A resource only knows its own path. The collection a resource belongs to
//! is found by dropping the final segment of that path:
//!
//! | Resource path      | Collection path |
//! |--------------------|-----------------|
//! | `/apps/42`         | `/apps/`        |
//! | `/apps/42/dynos/7` | `/apps/42/dynos/` |
//! | `/account`         | `/`             |
//!
//! The trailing `/` is kept, so the collection path can be sent as-is for
//! creation and listing.
//!
//! # Example
//!
//! ```rust
//! use heroku_api::rest::{collection_path, join_path};
//!
//! let path = join_path(&["apps", "my app"]);
//! assert_eq!(path, "/apps/my%20app");
//! assert_eq!(collection_path(&path).unwrap(), "/apps/");
//! ```

use std::any::type_name;

use crate::clients::rest::RestError;
use crate::rest::Resource;

/// Returns everything up to and including the last `/` of `path`.
///
/// # Errors
///
/// Returns [`RestError::InvalidPath`] if `path` contains no `/`.
pub fn collection_path(path: &str) -> Result<String, RestError> {
    path.rfind('/')
        .map(|index| path[..=index].to_string())
        .ok_or_else(|| RestError::InvalidPath {
            path: path.to_string(),
        })
}

/// Derives the collection path for resources of type `R`.
///
/// There is no instance to ask, so a default value of `R` is built and its
/// path truncated with [`collection_path`].
///
/// # Errors
///
/// Returns [`RestError::TypeContract`] if the default instance reports a
/// path that is not rooted at `/`.
pub fn list_path<R: Resource + Default>() -> Result<String, RestError> {
    let path = R::default().path();
    if !path.starts_with('/') {
        return Err(RestError::TypeContract {
            type_name: type_name::<R>().to_string(),
            path,
        });
    }
    collection_path(&path)
}

/// Builds a rooted path from raw segments, percent-escaping each one.
///
/// Identities such as app names are user-supplied, so they are escaped
/// before being placed in the path. An empty segment yields an empty path
/// component, which makes `join_path(&["apps", ""])` equal `/apps/`.
#[must_use]
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment.as_ref()));
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}

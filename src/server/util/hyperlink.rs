//! Absolute resource URLs and parsing of hyperlinked references.

use url::Url;

use crate::server::model::resource::Resource;

/// Builds absolute URLs for resources relative to a base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceUrls {
    base: String,
}

impl ResourceUrls {
    /// Creates a URL builder; a trailing slash on `base` is ignored.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the collection, e.g. `http://host/drones/`.
    pub fn collection(&self, resource: Resource) -> String {
        format!("{}/{}/", self.base, resource.path())
    }

    /// URL of a single record, e.g. `http://host/drones/3/`.
    pub fn detail(&self, resource: Resource, id: i32) -> String {
        format!("{}/{}/{}/", self.base, resource.path(), id)
    }
}

/// Extracts the record id from a hyperlink to `resource`.
///
/// Accepts absolute URLs and relative paths. Only the path matters: it must end in
/// `/<resource>/<id>/`, trailing slash optional. Scheme, host and any prefix before the
/// resource segment are ignored.
///
/// # Returns
/// - `Some(id)` - The link points at a record of `resource`
/// - `None` - The link does not match the resource's URL pattern
pub fn parse_hyperlink(value: &str, resource: Resource) -> Option<i32> {
    let path = match Url::parse(value) {
        Ok(url) => url.path().to_string(),
        Err(url::ParseError::RelativeUrlWithoutBase) => value.to_string(),
        Err(_) => return None,
    };

    let mut segments = path.trim_end_matches('/').rsplit('/');
    let id = segments.next()?.parse::<i32>().ok()?;

    (segments.next()? == resource.path()).then_some(id)
}

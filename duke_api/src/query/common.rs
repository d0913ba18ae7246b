//! Shared query infrastructure: the [`Query`] trait.

use url::Url;

/// Trait implemented by request builders that contribute to the request URL.
pub trait Query {
    /// Path segments appended to the base URL, in order.
    fn path_segments(&self) -> Vec<String>;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        url.clone()
    }
}

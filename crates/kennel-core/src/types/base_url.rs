//! Collection base URL type.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::Error;

/// Join a resource id onto a base URL.
///
/// All `base/{id}` item URLs are built here so the concatenation rule lives
/// in one place.
pub fn join_id(base: &str, id: i64) -> String {
    format!("{}/{}", base.trim_end_matches('/'), id)
}

/// A validated collection base URL for a dog service.
///
/// Points at the collection endpoint (e.g. `http://localhost:8001/dog`);
/// item endpoints are derived from it with [`BaseUrl::item_url`]. Must be an
/// absolute `http` or `https` URL with a host. Parse failures surface as
/// [`Error::BadUrl`].
///
/// # Example
///
/// ```
/// use kennel_core::BaseUrl;
///
/// let base = BaseUrl::new("http://localhost:8001/dog").unwrap();
/// assert_eq!(base.item_url(3), "http://localhost:8001/dog/3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadUrl`] if the string is not an absolute http(s)
    /// URL with a host.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let url = Url::parse(s.as_ref()).map_err(|_| Error::BadUrl)?;

        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(Error::BadUrl);
        }

        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(Error::BadUrl);
        }

        Ok(Self(url))
    }

    /// Returns the collection endpoint URL.
    pub fn as_str(&self) -> &str {
        // The url crate keeps a trailing slash on root paths.
        self.0.as_str().trim_end_matches('/')
    }

    /// Returns the item endpoint URL for a given id.
    pub fn item_url(&self, id: i64) -> String {
        join_id(self.as_str(), id)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_http_url() {
        let base = BaseUrl::new("http://localhost:8001/dog").unwrap();
        assert_eq!(base.as_str(), "http://localhost:8001/dog");
    }

    #[test]
    fn valid_https_url() {
        let base = BaseUrl::new("https://dogs.example.com/api/dog").unwrap();
        assert_eq!(base.as_str(), "https://dogs.example.com/api/dog");
    }

    #[test]
    fn item_url_construction() {
        let base = BaseUrl::new("http://localhost:8001/dog").unwrap();
        assert_eq!(base.item_url(1), "http://localhost:8001/dog/1");
    }

    #[test]
    fn normalizes_trailing_slash() {
        let base = BaseUrl::new("http://localhost:8001/dog/").unwrap();
        assert_eq!(base.item_url(2), "http://localhost:8001/dog/2");
    }

    #[test]
    fn root_url_has_no_trailing_slash() {
        let base = BaseUrl::new("http://localhost:8001").unwrap();
        assert_eq!(base.as_str(), "http://localhost:8001");
        assert_eq!(base.item_url(5), "http://localhost:8001/5");
    }

    #[test]
    fn invalid_relative_url() {
        assert!(matches!(BaseUrl::new("/dog"), Err(Error::BadUrl)));
    }

    #[test]
    fn invalid_scheme() {
        assert!(matches!(
            BaseUrl::new("ftp://example.com/dog"),
            Err(Error::BadUrl)
        ));
    }

    #[test]
    fn invalid_garbage() {
        assert!(matches!(BaseUrl::new("not a url"), Err(Error::BadUrl)));
    }

    #[test]
    fn join_id_trims_trailing_slash() {
        assert_eq!(join_id("http://x/dog/", 7), "http://x/dog/7");
        assert_eq!(join_id("http://x/dog", 7), "http://x/dog/7");
    }
}

//! The latch client: a base URL, a default Accept media type and a transport.

use url::Url;

use crate::{Error, HyperTransport, Method, RequestBuilder, Result};

/// Fluent HTTP client bound to a base URL.
///
/// The client is a factory for [`RequestBuilder`]s. Its configuration is
/// read-only once requests are being built, so a single client can be shared
/// between tasks.
///
/// # Example
///
/// ```ignore
/// use latch::Client;
///
/// let client = Client::new("https://api.example.com")?.accept("text/plain");
///
/// let mut text = String::new();
/// client.get("/motd").into_text(&mut text).run().await?;
/// ```
#[derive(Debug, Clone)]
pub struct Client<T = HyperTransport> {
    transport: T,
    base_url: Url,
    default_accept: Option<String>,
}

impl Client {
    /// Create a client for `base_url` using the default [`HyperTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `base_url` is not an absolute URL
    /// that can serve as a base.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_transport(HyperTransport::new(), base_url)
    }
}

impl<T> Client<T> {
    /// Create a client for `base_url` sending requests through `transport`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `base_url` is not an absolute URL
    /// that can serve as a base.
    pub fn with_transport(transport: T, base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            transport,
            base_url: parse_base_url(base_url.as_ref())?,
            default_accept: None,
        })
    }

    /// Set the Accept media type sent by every request of this client.
    ///
    /// An empty media type removes the preference.
    #[must_use]
    pub fn accept(mut self, media_type: impl Into<String>) -> Self {
        let media_type = media_type.into();
        self.default_accept = (!media_type.is_empty()).then_some(media_type);
        self
    }

    /// Start a request for `path`, resolved against the base URL.
    ///
    /// A path starting with `/` replaces the base path, any other path is
    /// appended to it. `method` is a [`Method`] or an [`http::Method`], so
    /// extension verbs such as `PROPFIND` can be sent too.
    pub fn request(
        &self,
        method: impl Into<Method>,
        path: impl Into<String>,
    ) -> RequestBuilder<'_, T> {
        RequestBuilder::new(self, method.into(), path.into())
    }

    /// Start a GET request.
    pub fn get(&self, path: impl Into<String>) -> RequestBuilder<'_, T> {
        self.request(Method::Get, path)
    }

    /// Start a HEAD request.
    pub fn head(&self, path: impl Into<String>) -> RequestBuilder<'_, T> {
        self.request(Method::Head, path)
    }

    /// Start a DELETE request.
    pub fn delete(&self, path: impl Into<String>) -> RequestBuilder<'_, T> {
        self.request(Method::Delete, path)
    }

    /// The base URL, normalized to end with `/`.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The default Accept media type, if any.
    #[must_use]
    pub fn default_accept(&self) -> Option<&str> {
        self.default_accept.as_deref()
    }

    /// The transport requests are sent through.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) fn resolve(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidUrl(
            url::ParseError::RelativeUrlWithCannotBeABaseBase,
        ));
    }

    // Relative paths join below the base path, not next to its last segment
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

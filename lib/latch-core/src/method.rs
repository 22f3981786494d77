//! HTTP method types.

use std::str::FromStr;

use derive_more::Display;

/// HTTP request method.
///
/// The common verbs have their own variant; any other token, such as
/// `PROPFIND` or `PURGE`, is carried by [`Method::Extension`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// GET method - retrieve a resource.
    #[display("GET")]
    Get,
    /// POST method - create a resource.
    #[display("POST")]
    Post,
    /// PUT method - replace a resource.
    #[display("PUT")]
    Put,
    /// DELETE method - remove a resource.
    #[display("DELETE")]
    Delete,
    /// PATCH method - partially update a resource.
    #[display("PATCH")]
    Patch,
    /// HEAD method - retrieve headers only.
    #[display("HEAD")]
    Head,
    /// OPTIONS method - retrieve allowed methods.
    #[display("OPTIONS")]
    Options,
    /// Any other method token, sent as is.
    #[display("{_0}")]
    Extension(http::Method),
}

impl FromStr for Method {
    type Err = crate::Error;

    /// Parse a method name.
    ///
    /// The common verbs are matched ignoring ASCII case. Other tokens become
    /// [`Method::Extension`] unchanged, since extension methods are case
    /// sensitive.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        const METHODS: [Method; 7] = [
            Method::Get,
            Method::Post,
            Method::Put,
            Method::Delete,
            Method::Patch,
            Method::Head,
            Method::Options,
        ];

        if let Some(method) = METHODS
            .into_iter()
            .find(|method| method.to_string().eq_ignore_ascii_case(value))
        {
            return Ok(method);
        }

        http::Method::from_bytes(value.as_bytes())
            .map(Self::from)
            .map_err(|_| crate::Error::invalid_request(format!("invalid HTTP method: {value:?}")))
    }
}

impl From<http::Method> for Method {
    fn from(method: http::Method) -> Self {
        match method {
            http::Method::GET => Self::Get,
            http::Method::POST => Self::Post,
            http::Method::PUT => Self::Put,
            http::Method::DELETE => Self::Delete,
            http::Method::PATCH => Self::Patch,
            http::Method::HEAD => Self::Head,
            http::Method::OPTIONS => Self::Options,
            other => Self::Extension(other),
        }
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
            Method::Patch => Self::PATCH,
            Method::Head => Self::HEAD,
            Method::Options => Self::OPTIONS,
            Method::Extension(method) => method,
        }
    }
}

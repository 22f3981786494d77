//! Fluent request building and execution.
//!
//! A [`RequestBuilder`] is created by [`Client::request`], configured with
//! chained calls in any order, and consumed by [`RequestBuilder::run`].
//!
//! # Example
//!
//! ```ignore
//! let mut greeting = Greeting::default();
//! let mut request_id = String::new();
//!
//! client
//!     .get("/greetings/1")
//!     .accept("application/json")
//!     .into_json(&mut greeting)
//!     .header_into("X-Request-Id", &mut request_id)
//!     .expected_status(200)
//!     .run()
//!     .await?;
//! ```

use latch_core::{Error, Method, Request, Result, StatusExpectation, Transport, header};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::Client;
use crate::bind::BodySlot;

/// Per-request configuration, consumed by [`RequestBuilder::run`].
///
/// Destinations registered with [`into_text`](Self::into_text),
/// [`into_json`](Self::into_json) and [`header_into`](Self::header_into) are
/// borrowed until the request has run.
#[derive(Debug)]
#[must_use = "a request does nothing until `run` is awaited"]
pub struct RequestBuilder<'a, T> {
    client: &'a Client<T>,
    method: Method,
    path: String,
    accept: Option<String>,
    body: Option<BodySlot<'a>>,
    headers: Vec<(String, &'a mut String)>,
    expected: StatusExpectation,
}

impl<'a, T> RequestBuilder<'a, T> {
    pub(crate) fn new(client: &'a Client<T>, method: Method, path: String) -> Self {
        Self {
            client,
            method,
            path,
            accept: client.default_accept().map(str::to_string),
            body: None,
            headers: Vec::new(),
            expected: StatusExpectation::default(),
        }
    }

    /// Override the Accept media type for this request.
    ///
    /// An empty media type sends no Accept header.
    pub fn accept(mut self, media_type: impl Into<String>) -> Self {
        self.accept = Some(media_type.into());
        self
    }

    /// Decode the response body into a string.
    ///
    /// A `text/plain` body is copied with one trailing newline stripped; a
    /// JSON body must hold a JSON string. Replaces any earlier body destination.
    pub fn into_text(mut self, destination: &'a mut String) -> Self {
        self.set_body(BodySlot::text(destination));
        self
    }

    /// Decode a JSON response body into a structured value.
    ///
    /// Any other content type fails to decode. Replaces any earlier body
    /// destination.
    pub fn into_json<D>(mut self, destination: &'a mut D) -> Self
    where
        D: DeserializeOwned + Send + 'a,
    {
        self.set_body(BodySlot::json(destination));
        self
    }

    /// Copy the value of a response header into `destination`.
    ///
    /// The name is matched ignoring ASCII case. If the response lacks the
    /// header, `destination` is left as is.
    pub fn header_into(mut self, name: impl Into<String>, destination: &'a mut String) -> Self {
        self.headers.push((name.into(), destination));
        self
    }

    /// Accept only this status code instead of any 2xx.
    pub fn expected_status(mut self, status: u16) -> Self {
        self.expected = StatusExpectation::Exactly(status);
        self
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Path, relative to the client base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The Accept value that will be sent, if any.
    #[must_use]
    pub fn effective_accept(&self) -> Option<&str> {
        self.accept.as_deref().filter(|accept| !accept.is_empty())
    }

    /// The status rule applied to the response.
    #[must_use]
    pub const fn expectation(&self) -> StatusExpectation {
        self.expected
    }

    fn set_body(&mut self, slot: BodySlot<'a>) {
        if let Some(previous) = self.body.replace(slot) {
            debug!(?previous, "body destination replaced");
        }
    }

    fn build_request(&self) -> Result<Request> {
        let url = self.client.resolve(&self.path)?;
        let mut request = Request::new(self.method.clone(), url);

        if let Some(accept) = self.effective_accept() {
            http::HeaderValue::from_str(accept).map_err(|err| {
                Error::invalid_request(format!("invalid Accept value {accept:?}: {err}"))
            })?;
            request = request.header(header::ACCEPT.as_str(), accept);
        }

        Ok(request)
    }
}

impl<T: Transport> RequestBuilder<'_, T> {
    /// Send the request and bind the response into the registered destinations.
    ///
    /// Steps, in order:
    /// 1. dispatch through the client transport
    /// 2. validate the status (any 2xx, or the [`expected_status`](Self::expected_status))
    /// 3. copy every bound header, whatever the status
    /// 4. decode the body into its destination, chosen by the response
    ///    `Content-Type`, only if the status was accepted
    ///
    /// A destination is written only if its own step succeeds.
    ///
    /// # Errors
    ///
    /// The first blocking failure, by priority:
    /// - [`Error::Transport`] if no response was received (nothing is bound)
    /// - [`Error::UnexpectedStatus`] if the status is rejected (headers are
    ///   still bound, the body is not decoded)
    /// - [`Error::Decode`] if the content type has no decoder for the
    ///   destination or the body does not parse
    ///
    /// [`Error::InvalidUrl`] and [`Error::InvalidRequest`] are returned
    /// before dispatch when the request cannot be built.
    pub async fn run(self) -> Result<()> {
        let request = self.build_request()?;
        let Self {
            client,
            body,
            headers,
            expected,
            ..
        } = self;

        debug!(
            method = %request.method(),
            url = %request.url(),
            accept = request.get_header(header::ACCEPT.as_str()),
            "dispatching request"
        );
        let response = client.transport().execute(request).await?;
        debug!(
            status = response.status(),
            content_type = response.content_type(),
            body_len = response.body().len(),
            "response received"
        );

        let status = expected.check(response.status(), response.body());

        for (name, destination) in headers {
            if let Some(value) = response.header(&name) {
                value.clone_into(destination);
            }
        }

        status?;

        if let Some(slot) = body {
            slot.decode(&response)?;
        }

        Ok(())
    }
}

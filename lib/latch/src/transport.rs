//! Default HTTP transport using hyper-util.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tower::Layer;
use tower::util::BoxCloneService;
use tower_service::Service;

use crate::{Request, Response, TransportError, connector::https_connector};

#[cfg(feature = "middleware-logging")]
use crate::middleware::LoggingLayer;

// ============================================================================
// Configuration
// ============================================================================

/// Timeouts and pool sizing of a [`HyperTransport`].
///
/// Set through [`HyperTransportBuilder`], or passed whole to
/// [`HyperTransport::with_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportConfig {
    /// Deadline for a whole exchange, from dispatch to the last body byte.
    pub timeout: Duration,
    /// TCP connection timeout.
    pub connect_timeout: Duration,
    /// Maximum idle connections kept per host.
    pub pool_idle_per_host: usize,
    /// How long an idle connection stays in the pool.
    pub pool_idle_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

// ============================================================================
// Type-Erased Service for Middleware Composition
// ============================================================================

/// Type-erased service for middleware composition.
///
/// This type allows storing and composing arbitrary Tower layers without
/// exposing complex generic types to users.
pub type BoxedService = BoxCloneService<Request, Response, TransportError>;

/// Future type for Tower Service implementation.
pub type ServiceFuture =
    Pin<Box<dyn Future<Output = Result<Response, TransportError>> + Send + 'static>>;

/// Thread-safe wrapper for `BoxedService`.
///
/// `BoxCloneService` is not `Sync`, which the `Transport` trait requires.
#[derive(Clone)]
struct SyncService {
    inner: Arc<Mutex<BoxedService>>,
}

impl SyncService {
    fn new(service: BoxedService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    fn call(&self, request: Request) -> ServiceFuture {
        // Lock, clone the service, and release the lock immediately
        let mut service = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();

        Box::pin(async move { service.call(request).await })
    }
}

// ============================================================================
// Raw Transport (internal, direct hyper access)
// ============================================================================

/// Raw HTTP transport using hyper-util (internal implementation).
#[derive(Clone)]
struct RawHyperTransport {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    timeout: Duration,
}

impl RawHyperTransport {
    fn new(config: &TransportConfig) -> Self {
        let connector = https_connector(config.connect_timeout);

        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(connector);

        Self {
            inner,
            timeout: config.timeout,
        }
    }

    /// Build a hyper request from a latch request.
    fn build_hyper_request(
        request: Request,
    ) -> Result<http::Request<Full<Bytes>>, TransportError> {
        let (method, url, headers) = request.into_parts();

        let mut builder = http::Request::builder()
            .method(http::Method::from(method))
            .uri(url.as_str());

        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder.body(Full::default()).map_err(TransportError::other)
    }

    /// Extract response headers, keeping the first value of repeated names.
    ///
    /// Bytes that are not UTF-8 (obs-text) are replaced, the header is kept.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        let mut extracted = HashMap::with_capacity(headers.keys_len());
        for (name, value) in headers {
            extracted
                .entry(name.to_string())
                .or_insert_with(|| String::from_utf8_lossy(value.as_bytes()).into_owned());
        }
        extracted
    }

    async fn execute(&self, request: Request) -> Result<Response, TransportError> {
        let hyper_request = Self::build_hyper_request(request)?;

        // The deadline covers the body too: the connection goes back to the
        // pool only once the body is fully read.
        let exchange = async {
            let response = self
                .inner
                .request(hyper_request)
                .await
                .map_err(Self::map_hyper_error)?;

            let status = response.status().as_u16();
            let response_headers = Self::extract_headers(response.headers());

            let body = response
                .into_body()
                .collect()
                .await
                .map_err(TransportError::body)?
                .to_bytes();

            Ok::<_, TransportError>(Response::new(status, response_headers, body))
        };

        tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(TransportError::timeout)?
    }

    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> TransportError {
        // The top-level message is generic, the cause chain names the failure
        let mut msg = err.to_string();
        let mut cause = std::error::Error::source(&err);
        while let Some(inner) = cause {
            msg.push_str(": ");
            msg.push_str(&inner.to_string());
            cause = inner.source();
        }
        let msg = msg.to_ascii_lowercase();

        if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
            return TransportError::tls(err);
        }

        if err.is_connect() {
            return TransportError::connect(err);
        }

        TransportError::other(err)
    }
}

impl Service<Request> for RawHyperTransport {
    type Response = Response;
    type Error = TransportError;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), TransportError>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let transport = self.clone();
        Box::pin(async move { transport.execute(request).await })
    }
}

// ============================================================================
// Public Transport
// ============================================================================

/// HTTP transport using hyper-util with connection pooling, TLS, and middleware support.
///
/// This is the transport behind [`crate::Client::new`].
///
/// # Example
///
/// ```ignore
/// use latch::{Client, HyperTransport};
/// use std::time::Duration;
///
/// let transport = HyperTransport::builder()
///     .timeout(Duration::from_secs(5))
///     .with_logging()
///     .build();
///
/// let client = Client::with_transport(transport, "https://api.example.com")?;
/// ```
#[derive(Clone)]
pub struct HyperTransport {
    service: SyncService,
    config: TransportConfig,
}

impl std::fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperTransport {
    /// Create a new transport with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TransportConfig::default())
    }

    /// Create a new transport with custom configuration (no middleware).
    #[must_use]
    pub fn with_config(config: TransportConfig) -> Self {
        let raw = RawHyperTransport::new(&config);
        Self::with_service(BoxCloneService::new(raw), config)
    }

    /// Create a transport with a pre-configured service (used by builder).
    fn with_service(service: BoxedService, config: TransportConfig) -> Self {
        Self {
            service: SyncService::new(service),
            config,
        }
    }

    /// Create a new transport builder.
    #[must_use]
    pub fn builder() -> HyperTransportBuilder {
        HyperTransportBuilder::default()
    }

    /// Get the transport configuration.
    #[must_use]
    pub const fn config(&self) -> &TransportConfig {
        &self.config
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl latch_core::Transport for HyperTransport {
    async fn execute(&self, request: Request) -> Result<Response, TransportError> {
        self.service.call(request).await
    }
}

// ============================================================================
// Tower Service Implementation
// ============================================================================

impl Service<Request> for HyperTransport {
    type Response = Response;
    type Error = TransportError;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), TransportError>> {
        // SyncService is always ready (the underlying service is polled when called)
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        self.service.call(request)
    }
}

/// Builder for [`HyperTransport`].
///
/// # Example
///
/// ```ignore
/// use latch::HyperTransport;
/// use latch::middleware::LoggingLayer;
/// use std::time::Duration;
///
/// let transport = HyperTransport::builder()
///     .timeout(Duration::from_secs(30))
///     .layer(LoggingLayer::debug())
///     .build();
/// ```
#[derive(Default)]
pub struct HyperTransportBuilder {
    config: TransportConfig,
    layers: Vec<Arc<dyn Fn(BoxedService) -> BoxedService + Send + Sync>>,
}

impl std::fmt::Debug for HyperTransportBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperTransportBuilder")
            .field("config", &self.config)
            .field("layers_count", &self.layers.len())
            .finish()
    }
}

impl HyperTransportBuilder {
    // ========================================================================
    // Core Configuration
    // ========================================================================

    /// Set the exchange timeout (applied around the raw transport, not as middleware).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.config.pool_idle_per_host = count;
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    // ========================================================================
    // Generic Middleware API
    // ========================================================================

    /// Add a Tower layer to the transport.
    ///
    /// Layers are applied in order: first added = innermost, last added =
    /// outermost (processes requests first).
    #[must_use]
    pub fn layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<BoxedService> + Send + Sync + 'static,
        L::Service: Service<Request, Response = Response, Error = TransportError>
            + Clone
            + Send
            + 'static,
        <L::Service as Service<Request>>::Future: Send,
    {
        self.layers.push(Arc::new(move |service| {
            BoxCloneService::new(layer.layer(service))
        }));
        self
    }

    /// Alias for [`Self::layer`].
    #[must_use]
    pub fn with<L>(self, layer: L) -> Self
    where
        L: Layer<BoxedService> + Send + Sync + 'static,
        L::Service: Service<Request, Response = Response, Error = TransportError>
            + Clone
            + Send
            + 'static,
        <L::Service as Service<Request>>::Future: Send,
    {
        self.layer(layer)
    }

    // ========================================================================
    // Feature-Gated Helper Methods
    // ========================================================================

    /// Add request/response logging.
    #[cfg(feature = "middleware-logging")]
    #[must_use]
    pub fn with_logging(self) -> Self {
        self.layer(LoggingLayer::new())
    }

    /// Add debug-level logging (includes headers).
    #[cfg(feature = "middleware-logging")]
    #[must_use]
    pub fn with_debug_logging(self) -> Self {
        self.layer(LoggingLayer::debug())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the transport with all configured middleware.
    #[must_use]
    pub fn build(self) -> HyperTransport {
        let config = self.config;
        let mut service: BoxedService = BoxCloneService::new(RawHyperTransport::new(&config));

        for layer_fn in self.layers {
            service = layer_fn(service);
        }

        HyperTransport::with_service(service, config)
    }
}

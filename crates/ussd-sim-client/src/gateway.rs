//! Gateway trait and HTTP implementation.

use async_trait::async_trait;
use tracing::{debug, warn};

use ussd_sim_core::{Error, GatewaySettings, Result, TurnRequest, TurnResponse};

/// The engine's view of the remote USSD gateway.
///
/// One call performs one full turn: serialize the request, wait for the
/// gateway, and produce either a parsed [`TurnResponse`] or an error. Every
/// failure mode (bad status, malformed body, timeout, unreachable host)
/// surfaces as a transport-class [`Error`]; no partial states leak upward
/// and no retries are performed.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Perform one turn against the gateway.
    async fn send_turn(&self, request: &TurnRequest) -> Result<TurnResponse>;
}

#[async_trait]
impl<G: Gateway + ?Sized> Gateway for std::sync::Arc<G> {
    async fn send_turn(&self, request: &TurnRequest) -> Result<TurnResponse> {
        (**self).send_turn(request).await
    }
}

/// HTTP gateway client posting JSON turn requests to a configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    timeout_ms: u64,
}

impl HttpGateway {
    /// Build a client from gateway settings.
    ///
    /// Fails if the endpoint is not a valid URL or the underlying HTTP
    /// client cannot be constructed.
    pub fn new(settings: &GatewaySettings) -> Result<Self> {
        let endpoint = reqwest::Url::parse(&settings.endpoint).map_err(|e| {
            Error::Config(format!(
                "invalid gateway endpoint '{}': {e}",
                settings.endpoint
            ))
        })?;

        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            timeout_ms: settings.timeout_ms,
        })
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    fn classify(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.timeout_ms)
        } else {
            Error::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn send_turn(&self, request: &TurnRequest) -> Result<TurnResponse> {
        debug!(
            "Dispatching turn: session={}, code={}, opening={}",
            request.session_id,
            request.ussd_code,
            request.is_opening()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Gateway returned non-success status: {status}");
            return Err(Error::Transport(format!(
                "gateway returned status {status}"
            )));
        }

        let turn = response
            .json::<TurnResponse>()
            .await
            .map_err(|e| Error::Transport(format!("malformed gateway response: {e}")))?;

        debug!(
            "Turn resolved: session={}, continue={}",
            request.session_id, turn.continue_session
        );
        Ok(turn)
    }
}

use std::io::Write;

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, error, info};

use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::signing::{now_secs, signature_header, STRIPE_SIGNATURE_HEADER};
use crate::types::EventPayload;

/// What the receiver answered.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Sends a single synthetic webhook and reports the outcome.
///
/// One request per run: no retries, no state kept between runs.
pub struct Prober {
    config: ProbeConfig,
    http_client: reqwest::Client,
}

impl Prober {
    pub fn new(config: ProbeConfig) -> Result<Self, ProbeError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self { config, http_client })
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// POST `payload` to the target and parse the JSON reply.
    ///
    /// Non-2xx statuses are returned like any other response; only
    /// transport failures and unparseable bodies are errors.
    pub async fn send(&self, payload: &EventPayload) -> Result<ProbeResponse, ProbeError> {
        let body = payload.to_json_bytes()?;

        let mut request = self
            .http_client
            .post(&self.config.target_url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(secret) = self.config.signing_secret.as_ref() {
            request = request.header(
                STRIPE_SIGNATURE_HEADER,
                signature_header(secret, now_secs(), &body),
            );
        }

        debug!(url = %self.config.target_url, bytes = body.len(), "sending webhook probe");
        let response = request.body(body).send().await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice(&bytes)?;

        info!(status, "webhook probe answered");
        Ok(ProbeResponse { status, body })
    }

    /// Print the request, send it, and print the reply or the failure.
    ///
    /// Failures are written to `err` and swallowed; the caller only sees
    /// `None`.
    pub async fn run_with<O, E>(
        &self,
        payload: &EventPayload,
        out: &mut O,
        err: &mut E,
    ) -> Option<ProbeResponse>
    where
        O: Write,
        E: Write,
    {
        let pretty = match payload.to_pretty_json() {
            Ok(pretty) => pretty,
            Err(e) => {
                report_failure(err, &ProbeError::from(e));
                return None;
            }
        };

        let _ = writeln!(out, "Sending request to webhook...");
        let _ = writeln!(out, "URL: {}", self.config.target_url);
        let _ = writeln!(out, "Payload: {}", pretty);

        match self.send(payload).await {
            Ok(response) => {
                let _ = writeln!(out, "Server response:");
                let _ = writeln!(out, "Status: {}", response.status);
                let _ = writeln!(out, "Body: {}", response.body);
                Some(response)
            }
            Err(e) => {
                report_failure(err, &e);
                None
            }
        }
    }

    /// Run the fixed scenario against process stdout and stderr.
    pub async fn run(&self) -> Option<ProbeResponse> {
        let payload = EventPayload::checkout_session_completed();
        let mut stdout = std::io::stdout();
        let mut stderr = std::io::stderr();
        self.run_with(&payload, &mut stdout, &mut stderr).await
    }
}

fn report_failure<E: Write>(err: &mut E, failure: &ProbeError) {
    error!(error = %failure, "webhook probe failed");
    let _ = writeln!(err, "Request failed:");
    let _ = writeln!(err, "{}", failure.message());
}

//! Retry middleware for the Semantic Scholar client.
//!
//! Rate-limited responses back off exponentially; network failures, other
//! failing statuses and successful responses whose body is not JSON wait a
//! fixed delay. Every attempt, whatever the cause, counts toward the same
//! budget. The last outcome is handed back so the client can turn it into a
//! `ClientError`.

use http::Extensions;
use reqwest::header::{CONTENT_ENCODING, CONTENT_LENGTH};
use reqwest::{Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next};
use serde::de::IgnoredAny;

use crate::config::RetryPolicy;

/// Retries requests according to a [`RetryPolicy`].
#[derive(Debug, Clone, Copy)]
pub struct RetryMiddleware {
    policy: RetryPolicy,
}

impl RetryMiddleware {
    /// Create a retry middleware with the given policy.
    #[must_use]
    pub const fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }
}

#[async_trait::async_trait]
impl Middleware for RetryMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let mut attempt = 0;

        loop {
            let request = req.try_clone().ok_or_else(|| {
                reqwest_middleware::Error::Middleware(anyhow::anyhow!(
                    "request body cannot be cloned for retry"
                ))
            })?;

            let (outcome, delay) = match next.clone().run(request, extensions).await {
                Ok(response) if response.status().is_success() => {
                    match buffer_body(response).await {
                        Ok((response, true)) => return Ok(response),
                        Ok((response, false)) => (Ok(response), self.policy.error_delay),
                        Err(e) => (Err(e.into()), self.policy.error_delay),
                    }
                }
                Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
                    (Ok(response), self.policy.rate_limit_delay(attempt))
                }
                other => (other, self.policy.error_delay),
            };

            if !self.policy.has_attempts_after(attempt) {
                return outcome;
            }

            match &outcome {
                Ok(response) if response.status().is_success() => tracing::warn!(
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    url = %req.url(),
                    "Response body is not JSON, retrying"
                ),
                Ok(response) => tracing::warn!(
                    attempt = attempt + 1,
                    status = response.status().as_u16(),
                    delay_ms = delay.as_millis() as u64,
                    url = %req.url(),
                    "Request failed, retrying"
                ),
                Err(e) => tracing::warn!(
                    attempt = attempt + 1,
                    error = %e,
                    delay_ms = delay.as_millis() as u64,
                    url = %req.url(),
                    "Request error, retrying"
                ),
            }

            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

/// Read the whole body and rebuild the response around it.
///
/// Returns the rebuilt response and whether the body is usable JSON. An
/// empty or all-whitespace body counts as usable.
async fn buffer_body(response: Response) -> Result<(Response, bool), reqwest::Error> {
    let status = response.status();
    let version = response.version();
    let mut headers = response.headers().clone();
    let bytes = response.bytes().await?;

    // The body is already decoded.
    headers.remove(CONTENT_ENCODING);
    headers.remove(CONTENT_LENGTH);

    let is_json = is_json_payload(&bytes);

    let mut rebuilt = http::Response::new(bytes);
    *rebuilt.status_mut() = status;
    *rebuilt.version_mut() = version;
    *rebuilt.headers_mut() = headers;

    Ok((Response::from(rebuilt), is_json))
}

fn is_json_payload(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace) || serde_json::from_slice::<IgnoredAny>(bytes).is_ok()
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Transport abstraction for the gateway connection.
//!
//! This module defines the abstract interface the client facade submits wire
//! strings through. The SDK does not ship a production TLS transport; callers
//! plug in their own implementation, and tests use [`MockTransport`].

use crate::request_id::RequestId;
use async_trait::async_trait;
use nvpay_core::error::TransportError;
use std::sync::Mutex;

/// Abstract interface for submitting one wire string to the gateway.
///
/// Implementations own connection establishment, TLS, proxy negotiation, and
/// the timeout. The client facade treats any `Err` as opaque: it becomes a
/// FATAL context entry plus the synthetic unknown-state response, never a
/// propagated failure.
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    /// Submits the wire string under the given request id and returns the raw
    /// response body.
    ///
    /// # Arguments
    /// * `wire` - The composed request parameter list
    /// * `request_id` - Unique id the gateway uses to deduplicate retries
    ///
    /// # Errors
    /// Returns `TransportError` if the gateway could not be reached or did not
    /// answer in time.
    async fn submit(&self, wire: &str, request_id: &RequestId) -> Result<String, TransportError>;
}

/// Scripted transport for tests: returns canned responses in order.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<Vec<Result<String, TransportError>>>,
    submitted: Mutex<Vec<String>>,
}

impl MockTransport {
    /// Creates a transport with no scripted responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that always answers with the given body.
    #[must_use]
    pub fn with_response(body: impl Into<String>) -> Self {
        let transport = Self::new();
        transport.push_response(Ok(body.into()));
        transport
    }

    /// Creates a transport that always fails with the given error.
    #[must_use]
    pub fn with_failure(error: TransportError) -> Self {
        let transport = Self::new();
        transport.push_response(Err(error));
        transport
    }

    /// Queues one scripted response.
    pub fn push_response(&self, response: Result<String, TransportError>) {
        self.responses.lock().unwrap().push(response);
    }

    /// Returns the wire strings submitted so far.
    #[must_use]
    pub fn submissions(&self) -> Vec<String> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl GatewayTransport for MockTransport {
    async fn submit(&self, wire: &str, _request_id: &RequestId) -> Result<String, TransportError> {
        self.submitted.lock().unwrap().push(wire.to_string());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(TransportError::ConnectionFailed(
                "no scripted response".to_string(),
            ));
        }
        // Last scripted response repeats.
        if responses.len() == 1 {
            responses[0].clone()
        } else {
            responses.remove(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request_id::RequestIdSource;

    #[tokio::test]
    async fn test_mock_transport_replays_in_order() {
        let transport = MockTransport::new();
        transport.push_response(Ok("RESULT=0".to_string()));
        transport.push_response(Ok("RESULT=12".to_string()));

        let id = RequestIdSource::new().next_id();
        assert_eq!(transport.submit("A=1", &id).await.unwrap(), "RESULT=0");
        assert_eq!(transport.submit("A=2", &id).await.unwrap(), "RESULT=12");
        // Last response repeats for subsequent calls.
        assert_eq!(transport.submit("A=3", &id).await.unwrap(), "RESULT=12");
        assert_eq!(transport.submissions(), vec!["A=1", "A=2", "A=3"]);
    }

    #[tokio::test]
    async fn test_mock_transport_failure() {
        let transport = MockTransport::with_failure(TransportError::Timeout { elapsed_ms: 45000 });
        let id = RequestIdSource::new().next_id();
        assert!(matches!(
            transport.submit("A=1", &id).await,
            Err(TransportError::Timeout { elapsed_ms: 45000 })
        ));
    }
}

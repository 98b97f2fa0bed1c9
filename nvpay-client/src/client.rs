/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! The gateway client facade.
//!
//! One call to [`GatewayClient::submit`] composes the request, sends it
//! through the transport, decodes the response, and runs the claim pipeline.
//! The call never returns `Err`: a transport failure degrades to the
//! synthetic unknown-state response with a FATAL context entry, so every
//! caller can read RESULT/RESPMSG unconditionally.

use crate::config::GatewayConfig;
use crate::request_id::{RequestId, RequestIdSource};
use crate::transport::GatewayTransport;
use nvpay_core::context::{E_TRANSPORT_ERROR, ErrorContext};
use nvpay_core::types::GatewayRequest;
use nvpay_nvp::{NvpDecoder, RequestComposer, ResponseFieldPool};
use nvpay_response::{GatewayResponse, ResponsePipeline};
use tracing::{debug, warn};

/// Outcome of one submitted transaction.
#[derive(Debug, Clone)]
pub struct TransactionResult {
    /// Fully distributed response fields.
    pub response: GatewayResponse,
    /// The id this transaction was submitted under; reuse it to retry safely.
    pub request_id: RequestId,
    /// Everything that degraded along the way, in occurrence order.
    pub errors: ErrorContext,
}

impl TransactionResult {
    /// Returns true if the gateway approved the transaction.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.response.transaction.is_approved()
    }
}

/// Async client facade over a [`GatewayTransport`].
#[derive(Debug)]
pub struct GatewayClient<T> {
    config: GatewayConfig,
    transport: T,
    ids: RequestIdSource,
}

impl<T: GatewayTransport> GatewayClient<T> {
    /// Creates a client over the given transport.
    #[must_use]
    pub fn new(config: GatewayConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            ids: RequestIdSource::new(),
        }
    }

    /// Returns the connection configuration.
    #[must_use]
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Submits a typed request under a freshly generated request id.
    pub async fn submit<R: GatewayRequest + Sync>(&self, request: &R) -> TransactionResult {
        self.submit_with_id(request, self.ids.next_id()).await
    }

    /// Submits a typed request under the caller's request id.
    ///
    /// Resubmitting under a previously used id asks the gateway to return the
    /// original result instead of processing the transaction again.
    pub async fn submit_with_id<R: GatewayRequest + Sync>(
        &self,
        request: &R,
        request_id: RequestId,
    ) -> TransactionResult {
        let mut errors = ErrorContext::new();
        let wire = RequestComposer::compose(&request.contribute_fields(), &mut errors);
        debug!(
            host = %self.config.host,
            request_id = %request_id,
            bytes = wire.len(),
            "submitting gateway request"
        );

        let pool = match self.transport.submit(wire.as_str(), &request_id).await {
            Ok(body) => {
                let (pool, decode_errors) = NvpDecoder::new(&body).decode();
                errors.append(decode_errors);
                pool
            }
            Err(err) => {
                warn!(request_id = %request_id, error = %err, "transport failed");
                errors.add_fatal(E_TRANSPORT_ERROR, err.to_string());
                ResponseFieldPool::unknown_state()
            }
        };

        let response = ResponsePipeline::run(pool, request.family());
        debug!(
            request_id = %request_id,
            result = ?response.transaction.result,
            error_count = errors.count(),
            "gateway response distributed"
        );

        TransactionResult {
            response,
            request_id,
            errors,
        }
    }
}

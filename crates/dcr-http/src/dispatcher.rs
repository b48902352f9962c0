//! The injectable request dispatcher.

use http::{Request, Response};

use crate::error::{TransportError, TransportResult};

/// Dispatches a single HTTP request and returns the full response.
///
/// All calls block the calling thread; the only timeout control is
/// whatever the implementation was configured with. There is no retry
/// policy at this layer or above it.
pub trait HttpDispatcher: Send + Sync {
    /// Executes the request and reads the response body to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the response body
    /// cannot be read.
    fn dispatch(&self, request: Request<Vec<u8>>) -> TransportResult<Response<Vec<u8>>>;
}

impl HttpDispatcher for reqwest::blocking::Client {
    fn dispatch(&self, request: Request<Vec<u8>>) -> TransportResult<Response<Vec<u8>>> {
        let (parts, body) = request.into_parts();
        let endpoint = parts.uri.to_string();

        tracing::debug!(method = %parts.method, endpoint = %endpoint, "dispatching request");

        let mut builder = self.request(parts.method, &endpoint).headers(parts.headers);
        if !body.is_empty() {
            builder = builder.body(body);
        }

        let response = builder.send().map_err(|source| TransportError::Request {
            endpoint: endpoint.clone(),
            source,
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .bytes()
            .map_err(|source| TransportError::Body {
                endpoint: endpoint.clone(),
                source,
            })?
            .to_vec();

        tracing::debug!(status = %status, bytes = bytes.len(), "received response");

        let mut snapshot = Response::builder()
            .status(status)
            .body(bytes)
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
        *snapshot.headers_mut() = headers;

        Ok(snapshot)
    }
}

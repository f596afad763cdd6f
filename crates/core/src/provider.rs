//! Provider abstraction for the completion endpoint.

use crate::request::{CompletionRequest, CompletionResponse};
use anyhow::Result;

/// A collaborator that can execute one completion request.
///
/// The API key is passed per call, not held by the provider — key
/// resolution stays with the settings context and a key change is
/// visible on the very next request.
pub trait Completions: Clone {
    /// Issue a single completion request.
    fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse>> + Send;
}

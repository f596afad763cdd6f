//! No-op completion provider for tests.
//!
//! Implements [`Completions`] but panics on `complete`. Intended for
//! tests that exercise settings and presentation logic without making
//! real completion calls.

use crate::provider::Completions;
use crate::request::{CompletionRequest, CompletionResponse};
use anyhow::Result;

/// A completion provider that panics on any actual call.
///
/// # Panics
///
/// `complete` panics if called. Only use this provider in tests that
/// never reach the completion endpoint.
#[derive(Clone, Copy)]
pub struct NoopCompletions;

impl Completions for NoopCompletions {
    async fn complete(
        &self,
        _api_key: &str,
        _request: &CompletionRequest,
    ) -> Result<CompletionResponse> {
        panic!("NoopCompletions::complete called — not intended for real completion calls");
    }
}

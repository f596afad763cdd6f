//! Lantern assistant core.
//!
//! Persisted settings resolution with lazy interactive fallback, the
//! completion-request orchestrator with its two-stage markup wrap, and
//! the presentation router that picks between an inline message, a
//! rich view, and a materialized file. Host surfaces (prompting,
//! notifications, rich panes, file writing) are injected through the
//! collaborator traits defined here.

pub use client::{Client, Reply};
pub use config::{
    API_KEY, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, MAX_TOKEN, MODEL, Prompter, Settings, Store,
};
#[cfg(feature = "http")]
pub use http::{DEFAULT_ENDPOINT, HttpCompletions};
pub use noop::NoopCompletions;
pub use path::{FileName, split_file_name};
pub use present::{
    FileSink, FileTarget, Materialize, Notifier, Presentation, Presenter, RICH_VIEW_THRESHOLD,
    RichView,
};
pub use provider::Completions;
pub use request::{Choice, CompletionRequest, CompletionResponse};
#[cfg(feature = "http")]
pub use reqwest;

mod client;
mod config;
#[cfg(feature = "http")]
mod http;
mod noop;
mod path;
mod present;
pub mod prompt;
mod provider;
mod request;

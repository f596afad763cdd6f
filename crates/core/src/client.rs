//! Completion request orchestration.

use crate::config::{Prompter, Settings, Store};
use crate::provider::Completions;
use crate::request::CompletionRequest;

/// Outcome of one orchestrated completion call.
///
/// Failures are data, not errors: every variant renders to a
/// displayable message via [`Reply::into_message`], and the
/// presentation layer treats them all the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text of the first completion choice.
    Text(String),

    /// The caller passed an empty prompt.
    EmptyPrompt,

    /// No API key is stored and none was supplied at the prompt.
    MissingKey,

    /// The first choice's text field was missing or not a string.
    NotText,

    /// The transport failed before a response body was decoded.
    Transport(String),
}

impl Reply {
    /// Render the reply as the message shown to the user.
    pub fn into_message(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::EmptyPrompt => "typeof prompt === 'undefined'".to_owned(),
            Self::MissingKey => "no API key was provided, request aborted".to_owned(),
            Self::NotText => "returned response from Open AI's API was not a string".to_owned(),
            Self::Transport(message) => message,
        }
    }
}

/// Orchestrates completion calls against an injected provider.
///
/// Owns the settings context; key, model, and token limit are resolved
/// from the store at call time, so configuration changes made while
/// the client is alive apply to the next request.
pub struct Client<L, S, P> {
    provider: L,
    settings: Settings<S, P>,
}

impl<L: Completions, S: Store, P: Prompter> Client<L, S, P> {
    /// Create a client over a provider and settings context.
    pub fn new(provider: L, settings: Settings<S, P>) -> Self {
        Self { provider, settings }
    }

    /// The settings context this client resolves from.
    pub fn settings(&self) -> &Settings<S, P> {
        &self.settings
    }

    /// Issue one completion request with the configured model.
    pub async fn request(&self, prompt: &str) -> Reply {
        self.request_with(prompt, None).await
    }

    /// Issue one completion request, overriding the configured model.
    pub async fn request_with(&self, prompt: &str, model: Option<&str>) -> Reply {
        if prompt.is_empty() {
            return Reply::EmptyPrompt;
        }
        // Effective model is computed up front, never inline in the
        // request constructor.
        let model = match model {
            Some(model) => model.to_owned(),
            None => self.settings.model(),
        };
        let api_key = self.settings.api_key();
        if api_key.is_empty() {
            return Reply::MissingKey;
        }

        let request = CompletionRequest::new(model, prompt, self.settings.max_tokens());
        match self.provider.complete(&api_key, &request).await {
            Ok(response) => match response.first_text() {
                Some(text) => Reply::Text(text.to_owned()),
                None => Reply::NotText,
            },
            Err(err) => {
                tracing::warn!("completion transport failed: {err:#}");
                Reply::Transport(format!("completion request failed: {err:#}"))
            }
        }
    }

    /// Wrap `text` in chat-style markup followed by a style block.
    ///
    /// Two completion calls, strictly sequential: the style prompt
    /// embeds the markup produced by the first call. The style stage
    /// requires the fixed black background in its prompt text.
    pub async fn wrap_in_markup(&self, text: &str) -> String {
        let markup = self
            .request(&format!(
                "Wrap this text in HTML the way a chat assistant formats its responses, \
                 here is the text: \n{text}"
            ))
            .await
            .into_message();
        let style = self
            .request(&format!(
                "Write a style tag for this HTML, styling it the way a chat assistant \
                 styles its responses, and make sure the background color is set to \
                 'background-color: #000000;' within the style tag, here is the HTML: \n{markup}"
            ))
            .await
            .into_message();

        format!("{markup}{style}")
    }
}

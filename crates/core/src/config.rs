//! Persisted settings with lazy interactive fallback.
//!
//! `Settings` is an explicit context over two injected collaborators:
//! a persisted key-value [`Store`] and a [`Prompter`] for interactive
//! input. There is no in-memory caching — every read goes back to the
//! store, so a change made by a concurrent invocation is visible on
//! the next access. None of these operations fail: a cancelled prompt
//! or an unusable stored value falls back to a default.

/// Store key for the API key.
pub const API_KEY: &str = "apikey";

/// Store key for the max token count.
pub const MAX_TOKEN: &str = "maxToken";

/// Store key for the model name.
pub const MODEL: &str = "model";

/// Token limit used when no usable value is stored.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Model used when none is stored.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// A persisted key-value store.
///
/// `update` never fails from the caller's point of view; a file-backed
/// implementation logs and drops a write it cannot perform.
pub trait Store {
    /// Read the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`, replacing any previous value.
    fn update(&self, key: &str, value: &str);
}

/// Interactive text-prompt collaborator.
pub trait Prompter {
    /// Ask the user for a line of text; `None` when the prompt is
    /// cancelled.
    fn prompt_text(&self, message: &str) -> Option<String>;
}

/// Typed settings context over a store and a prompter.
pub struct Settings<S, P> {
    store: S,
    prompter: P,
}

impl<S: Store, P: Prompter> Settings<S, P> {
    /// Create a settings context over the given collaborators.
    pub fn new(store: S, prompter: P) -> Self {
        Self { store, prompter }
    }

    /// Read a raw stored value. Pure read, no fallback.
    pub fn get(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }

    /// The stored API key, prompting for one on first use.
    ///
    /// A non-empty answer is persisted and returned; a cancelled or
    /// empty answer returns `""` without persisting anything. Callers
    /// treat `""` as "no key available" and fail their own operation.
    pub fn api_key(&self) -> String {
        if let Some(key) = self.store.get(API_KEY) {
            return key;
        }
        match self
            .prompter
            .prompt_text("Enter your API key for the completion service")
        {
            Some(input) if !input.is_empty() => {
                self.store.update(API_KEY, &input);
                input
            }
            _ => String::new(),
        }
    }

    /// The stored token limit, or 1000 when the stored value is
    /// absent, non-numeric, or zero.
    pub fn max_tokens(&self) -> u32 {
        self.store
            .get(MAX_TOKEN)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|tokens| *tokens != 0)
            .unwrap_or(DEFAULT_MAX_TOKENS)
    }

    /// The stored model name, or the default when absent or empty.
    pub fn model(&self) -> String {
        self.store
            .get(MODEL)
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_owned())
    }

    /// Prompt for and store a new API key.
    pub fn change_api_key(&self) {
        self.change(API_KEY, "Enter your new API key");
    }

    /// Prompt for and store a new max token count.
    pub fn change_max_tokens(&self) {
        self.change(MAX_TOKEN, "Enter the new max token count");
    }

    /// Prompt for and store a new model name.
    pub fn change_model(&self) {
        self.change(MODEL, "Enter the new model name");
    }

    /// A cancelled prompt leaves the stored value untouched.
    fn change(&self, key: &str, message: &str) {
        if let Some(input) = self.prompter.prompt_text(message) {
            self.store.update(key, &input);
        }
    }
}

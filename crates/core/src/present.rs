//! Presentation routing for completion replies.
//!
//! Short replies fit in a transient inline notification; long ones get
//! a persistent rich view, which is the only path that spends the two
//! extra completion calls of the markup wrap. An explicit
//! materialization request bypasses both and writes a new file.

use crate::client::{Client, Reply};
use crate::config::{Prompter, Store};
use crate::path::{self, FileName};
use crate::provider::Completions;
use anyhow::Result;

/// Responses longer than this move from the inline notification to
/// the rich view. Empirical, not derived from any layout computation.
pub const RICH_VIEW_THRESHOLD: usize = 750;

/// How a reply is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Transient inline notification.
    Inline,

    /// Persistent, scrollable markup surface.
    Rich,

    /// Written out as a new file.
    Materialize,
}

impl Presentation {
    /// Routing rule: an explicit materialization request wins, then
    /// response length decides between rich and inline. The boundary
    /// is exclusive: a response of exactly the threshold length stays
    /// inline.
    pub fn decide(len: usize, materialize: bool) -> Self {
        if materialize {
            Self::Materialize
        } else if len > RICH_VIEW_THRESHOLD {
            Self::Rich
        } else {
            Self::Inline
        }
    }
}

/// Inline notification surface.
pub trait Notifier {
    /// Show a transient message.
    fn notify(&self, message: &str);

    /// Ask a yes/no question; `false` on decline or cancel.
    fn confirm(&self, message: &str) -> bool;
}

/// Persistent, scrollable markup surface.
pub trait RichView {
    /// Show `body` markup under `title`.
    fn show(&self, title: &str, body: &str);
}

/// Destination for materialized files.
pub trait FileSink {
    /// Write `content` as a new file named from `stem` and
    /// `extension`; returns the created file's name.
    fn write_new(&self, content: &str, extension: &str, stem: &str) -> Result<String>;
}

/// A request to materialize the response as a new file.
#[derive(Debug, Clone, Copy)]
pub struct Materialize<'a> {
    /// Path of the source file the response was generated from.
    pub source: &'a str,

    /// Per-command label appended to the new file's base name.
    pub suffix: &'static str,
}

/// Where a materialized response lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    /// Base name of the source file.
    pub base_name: String,

    /// Extension of the source file, reused for the new file.
    pub extension: String,

    /// Per-command label appended to the base name.
    pub suffix: &'static str,
}

impl FileTarget {
    /// Derive a target from a materialization request. `None` when the
    /// base name or extension cannot be obtained from the source path.
    pub fn from_source(materialize: Materialize<'_>) -> Option<Self> {
        let FileName {
            base_name,
            extension,
        } = path::split_file_name(materialize.source);
        if base_name.is_empty() || extension.is_empty() {
            return None;
        }
        Some(Self {
            base_name,
            extension,
            suffix: materialize.suffix,
        })
    }

    /// Name stem of the new file: base name plus the command suffix.
    pub fn stem(&self) -> String {
        format!("{}{}", self.base_name, self.suffix)
    }
}

/// Routes replies to the right surface.
pub struct Presenter<N, R, F> {
    notifier: N,
    rich: R,
    files: F,
}

impl<N: Notifier, R: RichView, F: FileSink> Presenter<N, R, F> {
    /// Create a presenter over the three surface collaborators.
    pub fn new(notifier: N, rich: R, files: F) -> Self {
        Self {
            notifier,
            rich,
            files,
        }
    }

    /// The inline notification surface, for handlers that report their
    /// own absence conditions.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Surface `reply` under `label`.
    ///
    /// Materialization short-circuits length routing entirely: the
    /// response is written out and nothing is displayed beyond the
    /// outcome notification. When the target cannot be derived from
    /// the source path, the operation is reported as failed and
    /// nothing further happens.
    pub async fn present<L, S, P>(
        &self,
        client: &Client<L, S, P>,
        label: &str,
        reply: Reply,
        materialize: Option<Materialize<'_>>,
    ) where
        L: Completions,
        S: Store,
        P: Prompter,
    {
        let response = reply.into_message();
        match Presentation::decide(response.len(), materialize.is_some()) {
            Presentation::Materialize => {
                // decide() only picks this branch when the request is present.
                let Some(materialize) = materialize else { return };
                match FileTarget::from_source(materialize) {
                    Some(target) => self.write(&response, &target),
                    None => self
                        .notifier
                        .notify("unable to name the new file from the source path"),
                }
            }
            Presentation::Rich => self.rich_view(client, label, &response).await,
            Presentation::Inline => self.notifier.notify(&format!("{label}: {response}")),
        }
    }

    /// Wrap `response` in markup and show it in the rich view,
    /// regardless of length.
    pub async fn rich_view<L, S, P>(&self, client: &Client<L, S, P>, title: &str, response: &str)
    where
        L: Completions,
        S: Store,
        P: Prompter,
    {
        let body = client.wrap_in_markup(response).await;
        self.rich.show(title, &body);
    }

    /// Write the response through the sink and notify the outcome; a
    /// write error is surfaced verbatim and not retried.
    fn write(&self, response: &str, target: &FileTarget) {
        match self
            .files
            .write_new(response, &target.extension, &target.stem())
        {
            Ok(name) => self.notifier.notify(&format!("file created: {name}")),
            Err(err) => self
                .notifier
                .notify(&format!("error creating file: {err:#}")),
        }
    }
}

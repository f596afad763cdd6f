//! Assistant command handlers: explain, diagnose, test, optimize,
//! document.
//!
//! Each handler collects the user or file text, asks the orchestrator
//! for a reply, and hands it to the presenter. Absence conditions
//! (unreadable file, cancelled prompt) end the command with a
//! notification, never an error.

use crate::files::Workspace;
use crate::prefs::TomlStore;
use crate::terminal::{Console, HtmlPane};
use anyhow::Result;
use lantern::{
    Client, HttpCompletions, Materialize, Notifier, Presenter, Prompter, Settings, prompt,
};
use std::path::Path;

/// Suffix for files materialized by the optimize command.
const OPTIMIZED_SUFFIX: &str = "-OptimizedCode";

struct Session {
    client: Client<HttpCompletions, TomlStore, Console>,
    presenter: Presenter<Console, HtmlPane, Workspace>,
}

fn session() -> Session {
    let settings = Settings::new(TomlStore::open_default(), Console);
    Session {
        client: Client::new(
            HttpCompletions::new(lantern::reqwest::Client::new()),
            settings,
        ),
        presenter: Presenter::new(Console, HtmlPane, Workspace::current()),
    }
}

/// Read the file a command operates on; `None` (with a notification)
/// when it is unreadable or empty.
fn read_source(session: &Session, file: &Path) -> Option<String> {
    match std::fs::read_to_string(file) {
        Ok(code) if !code.is_empty() => Some(code),
        Ok(_) => {
            session.presenter.notifier().notify("unable to read file");
            None
        }
        Err(err) => {
            tracing::debug!("reading {}: {err}", file.display());
            session.presenter.notifier().notify("unable to read file");
            None
        }
    }
}

/// Explain a pasted error message.
pub async fn explain(error: Option<String>, model: Option<&str>) -> Result<()> {
    let session = session();
    let error = match error {
        Some(error) => Some(error),
        None => Console.prompt_text("Enter your error"),
    };
    let Some(error) = error.filter(|error| !error.is_empty()) else {
        return Ok(());
    };

    let reply = session
        .client
        .request_with(&prompt::explain_error(&error), model)
        .await;
    session
        .presenter
        .present(&session.client, "Explanation", reply, None)
        .await;
    Ok(())
}

/// Scan a file for errors and explain how to fix them.
pub async fn diagnose(file: &Path, model: Option<&str>) -> Result<()> {
    let session = session();
    let Some(code) = read_source(&session, file) else {
        return Ok(());
    };

    let reply = session
        .client
        .request_with(&prompt::diagnose(&code), model)
        .await;
    session
        .presenter
        .present(&session.client, "Error Diagnostic", reply, None)
        .await;
    Ok(())
}

/// Exercise a file's code with hypothetical inputs.
pub async fn test(file: &Path, model: Option<&str>) -> Result<()> {
    let session = session();
    let Some(code) = read_source(&session, file) else {
        return Ok(());
    };

    let reply = session
        .client
        .request_with(&prompt::run_test(&code), model)
        .await;
    session
        .presenter
        .present(&session.client, "Test", reply, None)
        .await;
    Ok(())
}

/// Optimize a file's code, offering to write the result to a new file.
pub async fn optimize(file: &Path, model: Option<&str>) -> Result<()> {
    let session = session();
    let Some(code) = read_source(&session, file) else {
        return Ok(());
    };

    // Asked before the request so the round-trip is never wasted on a
    // cancelled command.
    let wants_new_file = session
        .presenter
        .notifier()
        .confirm("Write the optimized code to a new file?");

    let reply = session
        .client
        .request_with(&prompt::optimize(&code), model)
        .await;

    let source = file.to_string_lossy();
    let materialize = wants_new_file.then_some(Materialize {
        source: source.as_ref(),
        suffix: OPTIMIZED_SUFFIX,
    });
    session
        .presenter
        .present(&session.client, "Optimized Code", reply, materialize)
        .await;
    Ok(())
}

/// Produce a documented rendition of a file's code. Always shown in
/// the rich view, whatever the length.
pub async fn document(file: &Path, model: Option<&str>) -> Result<()> {
    let session = session();
    let Some(code) = read_source(&session, file) else {
        return Ok(());
    };

    let reply = session
        .client
        .request_with(&prompt::document(&code), model)
        .await;
    let response = reply.into_message();
    session
        .presenter
        .rich_view(&session.client, "Documentation", &response)
        .await;
    Ok(())
}

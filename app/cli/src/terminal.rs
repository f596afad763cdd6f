//! Console collaborators: prompts, notifications, and the rich pane.

use dialoguer::{Confirm, Input};
use lantern::{Notifier, Prompter, RichView};
use std::path::PathBuf;

/// Interactive terminal front end.
#[derive(Debug, Clone, Copy)]
pub struct Console;

impl Prompter for Console {
    fn prompt_text(&self, message: &str) -> Option<String> {
        Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .ok()
    }
}

impl Notifier for Console {
    fn notify(&self, message: &str) {
        println!("{message}");
    }

    fn confirm(&self, message: &str) -> bool {
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Rich view that renders markup into a browsable HTML file.
///
/// A terminal has no webview, so the wrapped markup is written to a
/// temp file and its location printed; falls back to plain output
/// when even that fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPane;

impl HtmlPane {
    fn page_path(title: &str) -> PathBuf {
        let slug: String = title
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        std::env::temp_dir().join(format!("lantern-{slug}.html"))
    }
}

impl RichView for HtmlPane {
    fn show(&self, title: &str, body: &str) {
        let page = format!("<h2>{title}</h2>\n{body}\n");
        let path = Self::page_path(title);
        match std::fs::write(&path, page) {
            Ok(()) => println!("{title}: open {}", path.display()),
            Err(err) => {
                tracing::warn!("writing rich view {}: {err}", path.display());
                println!("{title}:\n{body}");
            }
        }
    }
}

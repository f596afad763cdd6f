//! Config management commands: show and interactive changes.

use crate::cmd::ConfigCommand;
use crate::prefs::TomlStore;
use crate::terminal::Console;
use anyhow::Result;
use lantern::{API_KEY, Settings};

/// Dispatch config management subcommands.
pub fn run(action: &ConfigCommand) -> Result<()> {
    let settings = Settings::new(TomlStore::open_default(), Console);
    match action {
        ConfigCommand::Show => show(&settings),
        ConfigCommand::ApiKey => settings.change_api_key(),
        ConfigCommand::Model => settings.change_model(),
        ConfigCommand::MaxTokens => settings.change_max_tokens(),
    }
    Ok(())
}

fn show(settings: &Settings<TomlStore, Console>) {
    let key = match settings.get(API_KEY) {
        Some(key) if !key.is_empty() => "(set)",
        _ => "(not set)",
    };
    println!("api key:    {key}");
    println!("model:      {}", settings.model());
    println!("max tokens: {}", settings.max_tokens());
    println!("stored at:  {}", TomlStore::default_path().display());
}

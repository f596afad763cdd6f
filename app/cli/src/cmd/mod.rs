//! CLI argument parsing and command dispatch.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod assist;
pub mod config;

/// Lantern AI error-diagnostic assistant.
#[derive(Parser, Debug)]
#[command(name = "lantern", about = "AI error diagnostics for your terminal")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Model name override for this invocation.
    #[arg(long, global = true)]
    pub model: Option<String>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Explain an error message and suggest a fix.
    Explain {
        /// The error text; prompted for interactively when omitted.
        error: Option<String>,
    },
    /// Scan a file for errors and explain how to fix them.
    Diagnose {
        /// File to scan.
        file: PathBuf,
    },
    /// Exercise a file's code with hypothetical inputs and report findings.
    Test {
        /// File to test.
        file: PathBuf,
    },
    /// Rewrite a file's code for better complexity, optionally into a new file.
    Optimize {
        /// File to optimize.
        file: PathBuf,
    },
    /// Produce a documented rendition of a file's code.
    Document {
        /// File to document.
        file: PathBuf,
    },
    /// Manage stored configuration.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

/// Config management subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration values.
    Show,
    /// Change the stored API key.
    ApiKey,
    /// Change the stored model name.
    Model,
    /// Change the stored max token count.
    MaxTokens,
}

impl Cli {
    /// Dispatch the parsed command.
    pub async fn run(self) -> Result<()> {
        let Cli { command, model } = self;
        let model = model.as_deref();
        match command {
            Command::Explain { error } => assist::explain(error, model).await,
            Command::Diagnose { file } => assist::diagnose(&file, model).await,
            Command::Test { file } => assist::test(&file, model).await,
            Command::Optimize { file } => assist::optimize(&file, model).await,
            Command::Document { file } => assist::document(&file, model).await,
            Command::Config { action } => config::run(&action),
        }
    }
}

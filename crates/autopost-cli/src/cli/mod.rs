//! CLI for autopost.

mod commands;

use anyhow::Result;
use autopost_core::config::{self, AutopostConfig};
use autopost_core::settings::Overrides;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_completions, run_generate, run_man, run_prompt};

/// Top-level CLI for autopost.
#[derive(Debug, Parser)]
#[command(name = "autopost")]
#[command(
    about = "autopost: generate a social-media post and image prompt with Gemini",
    long_about = None
)]
pub struct Cli {
    /// Config file to use instead of ~/.config/autopost/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append logs to ~/.local/state/autopost/autopost.log instead of stderr.
    #[arg(long, global = true)]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Request one post from Gemini and print it (needs GEMINI_API_KEY).
    Generate {
        /// Model to use (overrides GEMINI_MODEL and the config file).
        #[arg(long, value_name = "MODEL")]
        model: Option<String>,

        /// Retries after the first attempt on 429/503 responses.
        #[arg(long, value_name = "N")]
        max_retries: Option<u32>,

        /// Parse the output as {post_text, image_prompt} and print it normalized.
        #[arg(long)]
        validate: bool,
    },

    /// Print the request body that `generate` would send.
    Prompt,

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page.
    Man,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            CliCommand::Generate {
                model,
                max_retries,
                validate,
            } => {
                let cfg = load_config(self.config.as_deref())?;
                let overrides = Overrides { model, max_retries };
                run_generate(&cfg, &overrides, validate).await?;
            }
            CliCommand::Prompt => {
                let cfg = load_config(self.config.as_deref())?;
                run_prompt(&cfg)?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<AutopostConfig> {
    let cfg = match path {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;

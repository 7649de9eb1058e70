//! `autopost generate` – one request, printed to stdout.

use anyhow::Result;
use autopost_core::config::AutopostConfig;
use autopost_core::generate;
use autopost_core::post::GeneratedPost;
use autopost_core::settings::{Overrides, RunSettings};

/// Resolve settings (fails before any network activity when the key is
/// missing), generate, and print the raw text or the validated post.
pub async fn run_generate(cfg: &AutopostConfig, overrides: &Overrides, validate: bool) -> Result<()> {
    let settings = RunSettings::from_env(cfg, overrides)?;
    let text = generate::generate_post(&settings).await?;

    if validate {
        let post = GeneratedPost::parse(&text)?;
        tracing::info!("generated post about: {}", post.topic(60));
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}

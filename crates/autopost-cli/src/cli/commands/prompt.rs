use anyhow::Result;
use autopost_core::config::AutopostConfig;
use autopost_core::prompt;

pub fn run_prompt(cfg: &AutopostConfig) -> Result<()> {
    let request = prompt::build_request(&cfg.generation_config());
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

pub mod config;
pub mod gemini;
pub mod generate;
pub mod logging;
pub mod post;
pub mod prompt;
pub mod retry;
pub mod settings;

//! CLI command handlers. Each command is in its own file.

mod completions;
mod generate;
mod man;
mod prompt;

pub use completions::run_completions;
pub use generate::run_generate;
pub use man::run_man;
pub use prompt::run_prompt;

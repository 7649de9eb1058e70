//! Google Gemini `generateContent` client.
//!
//! Only the non-streaming, text-in/text-out subset of the API is modeled.

mod client;
mod error;
mod types;

pub use client::{GeminiClient, TextModel, DEFAULT_BASE_URL};
pub use error::GeminiError;
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    PromptFeedback,
};

//! The fixed instruction sent to the model.

use crate::gemini::{GenerateContentRequest, GenerationConfig};

pub const POST_INSTRUCTION: &str = "\
Return ONLY a valid JSON object with exactly these keys:
- \"post_text\": a short, professional and educational post (2-4 paragraphs) about technology or business, starting with a short title.
- \"image_prompt\": an English prompt for Stable Diffusion describing a minimalist illustration related to the post, with no text in the image.

No markdown and no extra text.";

/// Build the request for one post: the instruction as a single user turn
/// plus the sampling parameters.
pub fn build_request(generation: &GenerationConfig) -> GenerateContentRequest {
    GenerateContentRequest::user_text(POST_INSTRUCTION).with_generation_config(generation.clone())
}

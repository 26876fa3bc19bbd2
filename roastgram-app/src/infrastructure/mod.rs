pub mod gemini;
pub mod instagram;
pub mod security;

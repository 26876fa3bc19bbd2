mod client;
pub mod prompt;
mod types;

pub use client::GeminiClient;
pub use types::{HarmBlockThreshold, HarmCategory, SafetySetting};

//! Text generation backed by the Google Gemini API.

pub mod common;
pub mod config;
pub mod gemini;
pub mod prompts;

pub use gemini::{GeminiClient, TextGenerator};

//! Gemini completion client for the Google Generative Language API.

mod client;
mod types;

pub use client::GeminiClient;

//! Gemini `generateContent` gateway.

pub mod client;

pub use client::{GeminiClient, GeminiTransport, ReqwestTransport, DEFAULT_MODEL};

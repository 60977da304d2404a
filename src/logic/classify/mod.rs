//! Classification Module
//!
//! Boundary to the external intent/impact classifier (a local LLM behind an
//! OpenAI-compatible API). The model is a black box: this module only owns
//! the request template, the output schema, and the unknown/0.0 fallback
//! that keeps downstream fusion total when the model is down or returns
//! garbage.
//!
//! ## Structure
//! - `types`: Output schema (Intent, Impact, ClassificationResult)
//! - `prompt`: Instruction template and response parsing
//! - `client`: Async HTTP client

pub mod client;
pub mod prompt;
pub mod types;

// Re-export main types for convenience
pub use client::{ClassifyError, ScreenerClient};
pub use types::{ClassificationResult, Impact, Intent};

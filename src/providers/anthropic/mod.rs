//! Anthropic Claude adapter
//!
//! Uses the native Messages API: system prompt as a top-level field, one user
//! message, `x-api-key` and `anthropic-version` headers.
//!
//! ## Module Organization
//!
//! - `types`: request/response structures for the Messages API
//! - `adapter`: the [`AnthropicAdapter`] itself

mod adapter;
mod types;


pub use adapter::AnthropicAdapter;

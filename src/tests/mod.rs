// Test modules for the fineprint crate
//
// Each source module has a matching test file focused on business behavior.
// Adapter request/response shapes are tested next to the adapters in
// src/providers/*/tests.rs; HTTP behavior lives in the tests/ directory.

// Shared fixtures: mock adapter factory, canned provider responses
pub mod helpers;

pub mod config;
pub mod error;

//! Integration Tests Module
//!
//! End-to-end tests of the fallback chain driving the Gemini executor against
//! a mock Generative Language API.

// Fallback chain over HTTP
mod fallback_chain_test;

// Session and configuration wiring
mod session_test;

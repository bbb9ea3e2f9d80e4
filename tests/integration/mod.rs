//! Integration tests for the hello service.
//!
//! Every test spawns the real server on an ephemeral port and talks to it
//! over TCP. Run with: cargo test --test integration

mod hello_api;
mod probe;
mod support;

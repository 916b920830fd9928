//! immai-web: HTTP server for the ImmAI immigration assistant.
//! Provides:
//!   - the chat relay endpoint
//!   - read-only pathway, form, lawyer and resource data
//!   - a stateless navigator reducer
//!   - the client application shell

pub mod config;
pub mod handlers;
pub mod resources;
pub mod router;
pub mod state;

//! HTTP handlers for all web routes.

pub mod chat;
pub mod lawyers;
pub mod navigator;
pub mod pathways;
pub mod resources;
pub mod system;

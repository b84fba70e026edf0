//! Networking modules for the suggestion service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the shared wire schema that
//! the server also deserializes.

pub mod api;
pub mod types;

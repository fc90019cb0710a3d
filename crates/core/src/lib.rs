//! Market Records Core - Shared types library.
//!
//! This crate provides common types used across all Market Records
//! components:
//! - `server` - The record service binary (HTTP CRUD over the store)
//! - `integration-tests` - End-to-end tests against the service router
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! handling. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and validated prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

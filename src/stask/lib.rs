//! # Stask Architecture
//!
//! Stask is a little stateful task runner. Tasks are shell command templates with
//! `{placeholders}`; state is a persistent set of name/value pairs used to fill
//! them; profiles are named snapshots of state. All three live in one JSON file,
//! the *staskfile*.
//!
//! Like most of our tools, stask is a library that happens to have a CLI client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints output, runs the shell          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Read-modify-write over the staskfile                     │
//! │  - Templates (template.rs) and the model (model.rs)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code takes plain Rust values, returns
//! `Result<CmdResult>`, never prints, never exits and never reads the
//! environment. Environment variables are gathered once by [`config`] in the
//! binary and handed in.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Logic for each command
//! - [`template`]: `{placeholder}` parsing and substitution
//! - [`model`]: The staskfile document and profile merge rules
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Environment-derived configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod template;

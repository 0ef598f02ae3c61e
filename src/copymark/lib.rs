//! # Copymark Architecture
//!
//! Copymark is a copyright-header annotator: it walks a directory tree,
//! finds source files with no copyright notice, and prepends one. The crate
//! is a library with a thin CLI client, layered so that nothing below the
//! binary knows about terminals or exit codes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, renders messages, owns exit codes      │
//! │  - The ONLY place that touches stdout/stderr                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - check: scan + detect, report candidates                  │
//! │  - annotate: rewrite candidates, fail-fast                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Filesystem Layer (scanner.rs, marker.rs, notice.rs)        │
//! │  - Tree walk, marker detection, atomic prepend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, never writes to stdout/stderr, and never calls
//! `std::process::exit`. The same core could back a pre-commit hook or a CI
//! check without change.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for check (dry run) and annotate
//! - [`scanner`]: Recursive file discovery with ignore and suffix filters
//! - [`marker`]: Line-by-line copyright-marker detection
//! - [`notice`]: Atomic temp-file-and-rename notice insertion
//! - [`config`]: Configuration struct and hardcoded defaults
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod marker;
pub mod notice;
pub mod scanner;

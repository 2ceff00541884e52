//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic address book library**. The interactive menu is
//! just one client of it; everything from the API facade inward knows
//! nothing about terminals.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell Layer (shell/, wired by main.rs)                     │
//! │  - Renders menus and prompts, validates raw input           │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Session facade: one notebook plus its snapshot store     │
//! │  - Dispatches to commands, returns structured results       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic for each menu action                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract SnapshotStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions, Not IDs
//!
//! Records carry no identity field. The user addresses them by 1-based
//! position in the current listing, and that position is resolved against
//! insertion order at the moment the action runs. See `notebook.rs`.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, notebook, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`CmdResult`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! Storage failures follow the same rule: they come back as warning
//! messages in the `CmdResult`, never as panics or process exits.
//!
//! ## Testing Strategy
//!
//! 1. **Notebook and commands**: Thorough unit tests of the business
//!    logic. This is where the lion's share of testing lives.
//! 2. **API** (`api.rs`): Tests that the facade dispatches correctly and
//!    persists through its store.
//! 3. **Shell** (`shell/`): Scripted dialogues over in-memory buffers,
//!    asserting on the transcript.
//! 4. **End to end** (`tests/`): The real binary driven over stdin in a
//!    temporary directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The `Session` facade, entry point for all operations
//! - [`commands`]: Business logic for each menu action
//! - [`notebook`]: The in-memory record collection and its queries
//! - [`store`]: Snapshot storage abstraction and implementations
//! - [`model`]: The `Record` type
//! - [`config`]: Configuration management
//! - [`logging`]: File logger bootstrap
//! - [`error`]: Error types
//! - [`shell`]: Menu loop, prompts, and rendering for the binary

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod notebook;
pub mod shell;
pub mod store;
